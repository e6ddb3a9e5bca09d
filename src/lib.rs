//! # League Night
//!
//! A seeding, tier, and ranking engine for pickleball league nights:
//! multi-round doubles round-robin events where players are split across
//! courts of four, play three fixed pairings per court per round, and are
//! re-seeded onto new courts by performance.
//!
//! The core engine is purely functional: every entry point takes a
//! complete snapshot of court/score state and returns a complete result,
//! with no internal state and no I/O. That makes it safe to recompute on
//! every score edit and safe to call from any number of readers.
//!
//! ## Round structure
//!
//! - **Round 1**: one tier spanning the whole field, seeded by the
//!   balanced snake partition (historical 12/16-player tables preserved)
//! - **Round 2**: fields of four or more courts split into two tiers
//! - **Round 3**: every court is its own tier; final placements
//!
//! ## Core Modules
//!
//! - [`league`]: layout, tier labels, score aggregation, rankings, and
//!   next-round assignment
//! - [`event`]: configuration, roster shuffling, and the in-memory event
//!   lifecycle
//!
//! ## Example
//!
//! ```
//! use league_night::{EventConfig, EventManager};
//!
//! let roster: Vec<String> = (1..=16).map(|i| format!("player{i}")).collect();
//! let mut event = EventManager::new(EventConfig::new("Monday Night", roster)).unwrap();
//! event.start().unwrap();
//! event.record_score(1, 1, 11, 7).unwrap();
//! let standings = event.standings().unwrap();
//! assert_eq!(standings.len(), 16);
//! ```

/// Core seeding, tier, scoring, and ranking engine.
pub mod league;
pub use league::{
    COURT_SIZE, Court, CourtDetail, FINAL_ROUND, FIRST_ROUND, LeagueError, LeagueResult,
    MATCHES_PER_COURT, MatchScore, MatchTotals, NO_PLAYER, PlayerStats, Round, Seed,
    assign_next_round, court_details, group_count, initial_layout, legacy_layout,
    player_rankings, seed_layout, tier_label,
};

/// Event configuration and in-memory lifecycle management.
pub mod event;
pub use event::{EventConfig, EventError, EventManager, EventResult, EventState, RosterShuffler};
