//! League engine: seeding, tiers, scoring, and ranking for a multi-round
//! doubles round-robin night.
//!
//! The engine is a set of pure functions over an explicit court/score
//! snapshot:
//! - **Layout**: deterministic seed partition per court for a round
//! - **Tiers**: human-readable division labels per court
//! - **Scoring**: match scores into per-seed win/loss/differential totals
//! - **Rankings**: court places, the global round ranking, and the
//!   tier-grouped display order
//! - **Assignment**: mapping the ranking onto the next round's courts
//!
//! Every entry point takes a complete snapshot and returns a complete
//! result; there is no internal state, no I/O, and no retry policy.
//! Layering runs strictly downward: rankings depend on layout and tiers,
//! never the reverse.

pub mod assignment;
pub mod constants;
pub mod entities;
pub mod errors;
pub mod layout;
pub mod rankings;
pub mod scoring;
pub mod tiers;

pub use assignment::assign_next_round;
pub use constants::{COURT_SIZE, FINAL_ROUND, FIRST_ROUND, MATCHES_PER_COURT, NO_PLAYER, PAIRINGS};
pub use entities::{Court, CourtDetail, MatchScore, MatchTotals, PlayerStats, Round, Seed};
pub use errors::{LeagueError, LeagueResult};
pub use layout::{group_count, group_sizes, initial_layout, legacy_layout, seed_layout};
pub use rankings::{court_details, player_rankings};
pub use scoring::aggregate;
pub use tiers::tier_label;
