use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{COURT_SIZE, FINAL_ROUND, FIRST_ROUND, MATCHES_PER_COURT};
use super::errors::{LeagueError, LeagueResult};

/// Type alias for round numbers. League nights run rounds 1 through 3;
/// anything outside that range is rejected with
/// [`LeagueError::InvalidRound`](super::errors::LeagueError).
pub type Round = u8;

/// Type alias for seed numbers. Seeds are 1-based and unique across the
/// field for a round; seed 1 is the top performer. Seed 0 is the
/// "no player" sentinel of the legacy 12-player layout.
pub type Seed = usize;

pub(crate) fn validate_round(round: Round) -> LeagueResult<()> {
    if (FIRST_ROUND..=FINAL_ROUND).contains(&round) {
        Ok(())
    } else {
        Err(LeagueError::InvalidRound(round))
    }
}

/// The canonical score of one fixed-pairing match: team A is the pairing's
/// first listed pair of slots, team B the second. Either side being unset
/// means the match has not been played yet.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchScore {
    pub team_a: Option<u32>,
    pub team_b: Option<u32>,
}

impl MatchScore {
    /// A recorded score with both sides present.
    pub fn new(team_a: u32, team_b: u32) -> Self {
        Self {
            team_a: Some(team_a),
            team_b: Some(team_b),
        }
    }

    /// An unplayed match.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Both sides present. Incomplete scores never contribute to
    /// aggregation.
    pub fn is_complete(&self) -> bool {
        self.team_a.is_some() && self.team_b.is_some()
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.team_a, self.team_b) {
            (Some(a), Some(b)) => write!(f, "{a}-{b}"),
            _ => write!(f, "--"),
        }
    }
}

/// A court for one round: four fixed player slots and the scores of the
/// three fixed pairings. A court's identity is its 1-based position in the
/// event's court list; slots are fixed once the round starts and only the
/// score entries change.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Court {
    /// Player names by slot (0-3).
    pub players: [String; COURT_SIZE],
    /// Scores of the three fixed pairings, in pairing order.
    pub matches: [MatchScore; MATCHES_PER_COURT],
}

impl Court {
    /// A court with all matches unplayed.
    pub fn new(players: [String; COURT_SIZE]) -> Self {
        Self {
            players,
            matches: [MatchScore::unset(); MATCHES_PER_COURT],
        }
    }

    /// True if any of the court's matches has a complete score.
    pub fn has_any_score(&self) -> bool {
        self.matches.iter().any(MatchScore::is_complete)
    }
}

/// Per-seed totals produced by the match aggregator.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchTotals {
    pub points_for: u32,
    pub points_against: u32,
    pub wins: u32,
    pub losses: u32,
    /// Completed matches this seed took part in. Ties count as played but
    /// as neither a win nor a loss.
    pub played: u32,
}

/// Derived, ephemeral per-player statistics. Recomputed in full from the
/// court/score snapshot every time a ranking is requested; never partially
/// mutated between calls.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerStats {
    pub name: String,
    /// Seed entering the current round.
    pub seed: Seed,
    /// 1-based court number this round.
    pub court: usize,
    /// Division letter of this player's court ('A', 'B', ...), the first
    /// letter of the court's tier label.
    pub tier: char,
    /// 1-based rank among the four players on the same court.
    pub court_place: usize,
    pub wins: u32,
    pub losses: u32,
    /// Points for minus points against.
    pub point_diff: i32,
    /// 1-based rank across the entire field; seeds the next round.
    pub round_place: usize,
    /// Court number for the next round, or 0 after the final round.
    pub next_court: usize,
    /// Tier label for the next round, or empty after the final round.
    pub next_tier: String,
}

/// One court's layout for a round, combining seeds, tier label, and the
/// players occupying the slots.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CourtDetail {
    pub round: Round,
    /// 1-based court number.
    pub court_number: usize,
    /// Ideal seeds by slot. Seed 0 means an unoccupied legacy slot.
    pub seeds: [Seed; COURT_SIZE],
    /// Tier label: a single letter ("C") or an en-dash span ("A–C").
    pub tier: String,
    pub players: [String; COURT_SIZE],
}

impl fmt::Display for CourtDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "court {} [{}]: {}",
            self.court_number,
            self.tier,
            self.players.join(", ")
        )
    }
}
