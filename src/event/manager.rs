//! Event manager for running a league night in memory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::models::{EventConfig, EventState};
use crate::league::{
    self, COURT_SIZE, Court, CourtDetail, FIRST_ROUND, LeagueError, MatchScore, NO_PLAYER,
    PlayerStats, Round, Seed,
};

/// Event errors
#[derive(Debug, Error)]
pub enum EventError {
    /// Configuration rejected by [`EventConfig::validate`]
    #[error("Invalid event configuration: {0}")]
    Config(String),

    /// Operation not allowed in the current lifecycle state
    #[error("Event not in correct state: expected {expected:?}, got {actual:?}")]
    InvalidState {
        expected: EventState,
        actual: EventState,
    },

    /// Court number outside 1..=court_count
    #[error("Court {0} is out of range")]
    CourtOutOfRange(usize),

    /// Match number outside 1..=3
    #[error("Match {0} is out of range (courts play matches 1 through 3)")]
    MatchOutOfRange(usize),

    /// Engine error surfaced through the snapshot
    #[error("League engine error: {0}")]
    League(#[from] LeagueError),
}

pub type EventResult<T> = Result<T, EventError>;

/// In-memory league night lifecycle: roster in, courts out, scores in,
/// standings and next-round placement out.
///
/// The manager owns the court/score snapshot between calls and hands the
/// whole snapshot to the pure engine for every computation. It performs no
/// I/O; persistence and multi-writer coordination belong to the caller.
#[derive(Clone, Debug)]
pub struct EventManager {
    config: EventConfig,
    state: EventState,
    /// Current round, 0 until the event starts.
    round: Round,
    courts: Vec<Court>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl EventManager {
    /// Create a manager for a validated configuration.
    pub fn new(config: EventConfig) -> EventResult<Self> {
        config.validate().map_err(EventError::Config)?;
        Ok(Self {
            config,
            state: EventState::Registering,
            round: 0,
            courts: Vec::new(),
            started_at: None,
            finished_at: None,
        })
    }

    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    pub fn state(&self) -> EventState {
        self.state
    }

    /// Current round, 0 before the event starts.
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Start the event: seed the roster onto round-1 courts.
    ///
    /// Seeds follow roster order (first name is seed 1) through the
    /// initial layout, which prefers the historical 12/16-player tables.
    /// The 12-player table's phantom court is dropped here, so a 12-player
    /// night plays on three real courts.
    pub fn start(&mut self) -> EventResult<()> {
        self.expect_state(EventState::Registering)?;

        let layout =
            league::initial_layout(self.config.roster.len(), self.config.court_count())?;
        let roster = &self.config.roster;
        self.courts = build_courts(&layout, |seed| roster.get(seed - 1).cloned());

        self.round = FIRST_ROUND;
        self.state = EventState::Running;
        self.started_at = Some(Utc::now());
        log::info!(
            "Event '{}' started: {} players on {} courts",
            self.config.name,
            self.config.roster.len(),
            self.courts.len()
        );
        Ok(())
    }

    /// Record the score of one court's match. Numbers are 1-based; match 1
    /// is the (0,1) vs (2,3) pairing. Recording over an existing score
    /// replaces it, and the next standings call reflects the edit in full.
    pub fn record_score(
        &mut self,
        court_number: usize,
        match_number: usize,
        team_a: u32,
        team_b: u32,
    ) -> EventResult<()> {
        self.expect_state(EventState::Running)?;
        let match_idx = match_index(match_number)?;
        let court = self.court_mut(court_number)?;
        court.matches[match_idx] = MatchScore::new(team_a, team_b);
        log::debug!("Court {court_number} match {match_number}: {team_a}-{team_b}");
        Ok(())
    }

    /// Clear a recorded score back to unplayed.
    pub fn clear_score(&mut self, court_number: usize, match_number: usize) -> EventResult<()> {
        self.expect_state(EventState::Running)?;
        let match_idx = match_index(match_number)?;
        let court = self.court_mut(court_number)?;
        court.matches[match_idx] = MatchScore::unset();
        log::debug!("Court {court_number} match {match_number} cleared");
        Ok(())
    }

    /// Seeds, tiers, and occupants of the current round's courts.
    pub fn court_details(&self) -> EventResult<Vec<CourtDetail>> {
        self.expect_started()?;
        Ok(league::court_details(&self.courts, self.round)?)
    }

    /// Current standings in display order, recomputed from the full
    /// snapshot. Safe to call as often as scores change.
    pub fn standings(&self) -> EventResult<Vec<PlayerStats>> {
        self.expect_started()?;
        Ok(league::player_rankings(&self.courts, self.round)?)
    }

    /// Close out the current round.
    ///
    /// Before the last round this re-seats every player onto their
    /// next-round court (round place becomes the new seed; slot order
    /// follows the layout row) and returns the new round number. After the
    /// last round it marks the event finished and returns the final round
    /// number unchanged.
    pub fn advance_round(&mut self) -> EventResult<Round> {
        self.expect_state(EventState::Running)?;

        if self.round >= self.config.rounds {
            self.state = EventState::Finished;
            self.finished_at = Some(Utc::now());
            log::info!(
                "Event '{}' finished after round {}",
                self.config.name,
                self.round
            );
            return Ok(self.round);
        }

        let standings = league::player_rankings(&self.courts, self.round)?;
        let next_round = self.round + 1;
        let layout = league::seed_layout(self.courts.len(), next_round)?;

        // Round place becomes the seed feeding the next round's layout,
        // except that a fully unscored round 1 keeps the incoming seeds.
        let seed_fallback =
            self.round == FIRST_ROUND && !self.courts.iter().any(Court::has_any_score);
        let mut name_by_seed: HashMap<Seed, String> = standings
            .into_iter()
            .map(|player| {
                let key = if seed_fallback {
                    player.seed
                } else {
                    player.round_place
                };
                (key, player.name)
            })
            .collect();

        self.courts = build_courts(&layout, |seed| name_by_seed.remove(&seed));
        self.round = next_round;
        log::info!("Event '{}' advanced to round {next_round}", self.config.name);
        Ok(next_round)
    }

    /// Cancel the event. Allowed from any state except finished.
    pub fn cancel(&mut self) -> EventResult<()> {
        if self.state == EventState::Finished {
            return Err(EventError::InvalidState {
                expected: EventState::Running,
                actual: EventState::Finished,
            });
        }
        self.state = EventState::Cancelled;
        self.finished_at = Some(Utc::now());
        log::info!("Event '{}' cancelled", self.config.name);
        Ok(())
    }

    fn expect_state(&self, expected: EventState) -> EventResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EventError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    fn expect_started(&self) -> EventResult<()> {
        match self.state {
            EventState::Running | EventState::Finished => Ok(()),
            _ => Err(EventError::InvalidState {
                expected: EventState::Running,
                actual: self.state,
            }),
        }
    }

    fn court_mut(&mut self, court_number: usize) -> EventResult<&mut Court> {
        if court_number == 0 || court_number > self.courts.len() {
            return Err(EventError::CourtOutOfRange(court_number));
        }
        Ok(&mut self.courts[court_number - 1])
    }
}

fn match_index(match_number: usize) -> EventResult<usize> {
    if match_number == 0 || match_number > league::MATCHES_PER_COURT {
        return Err(EventError::MatchOutOfRange(match_number));
    }
    Ok(match_number - 1)
}

/// Materialize courts from a layout, resolving each seed to a player name.
/// All-sentinel rows (the legacy 12-player phantom court) are dropped; a
/// seed with no player resolves to an empty slot with a warning.
fn build_courts(
    layout: &[[Seed; COURT_SIZE]],
    mut name_of: impl FnMut(Seed) -> Option<String>,
) -> Vec<Court> {
    layout
        .iter()
        .filter(|row| row.iter().any(|&seed| seed != NO_PLAYER))
        .map(|row| {
            Court::new(row.map(|seed| {
                if seed == NO_PLAYER {
                    return String::new();
                }
                name_of(seed).unwrap_or_else(|| {
                    log::warn!("No player for seed {seed}, leaving slot empty");
                    String::new()
                })
            }))
        })
        .collect()
}
