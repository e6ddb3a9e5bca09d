//! Event configuration models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::league::{COURT_SIZE, FINAL_ROUND, Round};

/// Event lifecycle state
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum EventState {
    /// Collecting the roster
    Registering,
    /// Rounds in progress
    Running,
    /// All rounds played
    Finished,
    /// Called off before completion
    Cancelled,
}

/// League night configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventConfig {
    /// Event name
    pub name: String,
    /// Roster in incoming seed order: the first name is seed 1. Shuffle
    /// first (see [`RosterShuffler`](crate::event::RosterShuffler)) when
    /// the field has no incoming ratings.
    pub roster: Vec<String>,
    /// Rounds to play (default 3)
    pub rounds: Round,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl EventConfig {
    /// Create a standard three-round configuration.
    pub fn new(name: impl Into<String>, roster: Vec<String>) -> Self {
        Self {
            name: name.into(),
            roster,
            rounds: FINAL_ROUND,
            created_at: Utc::now(),
        }
    }

    /// Number of courts the roster fills. The legacy 12-player night plays
    /// on three courts even though its layout table carries four rows.
    pub fn court_count(&self) -> usize {
        self.roster.len() / COURT_SIZE
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name must not be empty".to_string());
        }

        if self.rounds == 0 || self.rounds > FINAL_ROUND {
            return Err(format!(
                "Rounds must be between 1 and {FINAL_ROUND}, got {}",
                self.rounds
            ));
        }

        let players = self.roster.len();
        if players < COURT_SIZE {
            return Err(format!(
                "Need at least {COURT_SIZE} players, got {players}"
            ));
        }
        if players % COURT_SIZE != 0 {
            return Err(format!(
                "Roster must fill courts of {COURT_SIZE}, got {players} players"
            ));
        }

        let mut names: Vec<&str> = self.roster.iter().map(String::as_str).collect();
        names.sort();
        names.dedup();
        if names.len() != players {
            return Err("Roster contains duplicate player names".to_string());
        }

        Ok(())
    }
}
