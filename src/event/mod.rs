//! Event management: configuration, initial seeding, and the in-memory
//! lifecycle wrapped around the league engine.
//!
//! This layer owns the court/score snapshot between calls and feeds it to
//! the pure engine in [`crate::league`]. It adds no computation of its own:
//! - [`EventConfig`]: roster and round-count configuration with validation
//! - [`RosterShuffler`]: optional pre-seeding shuffle for unrated fields
//! - [`EventManager`]: start, score entry, standings, round advancement
//!
//! Persistence, realtime sync, and any user interface stay with the
//! caller.

pub mod manager;
pub mod models;
pub mod seeding;

pub use manager::{EventError, EventManager, EventResult};
pub use models::{EventConfig, EventState};
pub use seeding::RosterShuffler;
