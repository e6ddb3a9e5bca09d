//! Tier labels: rendering a court's tier-group span as division letters.

use super::entities::Round;
use super::errors::{LeagueError, LeagueResult};
use super::layout::group_sizes;

/// Division letter for a 1-based court number: court 1 is 'A', court 2 'B'.
pub(crate) fn tier_letter(court_number: usize) -> char {
    char::from_u32('A' as u32 + (court_number as u32 - 1)).unwrap_or('?')
}

/// Tier label for a court in a round.
///
/// The label covers the court's whole tier group: a single-court group is
/// its letter alone ("C"), a multi-court group is the span of its first and
/// last courts joined by an en dash ("A\u{2013}C").
pub fn tier_label(court_count: usize, round: Round, court_number: usize) -> LeagueResult<String> {
    let sizes = group_sizes(court_count, round)?;
    if court_number == 0 || court_number > court_count {
        return Err(LeagueError::InvalidCourtCount(court_number));
    }

    let mut first = 1;
    for size in sizes {
        let last = first + size - 1;
        if (first..=last).contains(&court_number) {
            return Ok(if first == last {
                tier_letter(first).to_string()
            } else {
                format!("{}\u{2013}{}", tier_letter(first), tier_letter(last))
            });
        }
        first = last + 1;
    }

    // group_sizes always covers 1..=court_count, so the loop returns.
    Err(LeagueError::InvalidCourtCount(court_number))
}
