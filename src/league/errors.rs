//! Error types for the league engine.

use thiserror::Error;

use super::entities::Round;

/// Result type for league engine operations
pub type LeagueResult<T> = Result<T, LeagueError>;

/// League engine errors
///
/// All of these are contract violations raised synchronously at the point of
/// the bad call. The computation is deterministic, so a repeated call with
/// the same input fails the same way; there is nothing to retry.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum LeagueError {
    /// Round outside the event's 1..=3 range
    #[error("Invalid round: {0} (league nights run rounds 1 through 3)")]
    InvalidRound(Round),

    /// Zero courts, or a court number outside 1..=court_count
    #[error("Invalid court count or court number: {0}")]
    InvalidCourtCount(usize),

    /// An empty court list was passed where player data is required
    #[error("No courts provided")]
    EmptyInput,
}
