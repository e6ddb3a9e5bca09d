//! Match aggregation: court scores into per-seed totals.

use std::collections::HashMap;

use super::constants::PAIRINGS;
use super::entities::{Court, MatchTotals, Seed};
use super::layout::is_player_seed;

/// Totals for every seed on a court, keyed by seed number.
///
/// Walks the three fixed pairings; a pairing with a complete score credits
/// each side's points to its members' `points_for` and to the opponents'
/// `points_against`, marks all four slots played, and gives the strictly
/// higher-scoring side a win (ties resolve to neither side at this layer).
/// Incomplete pairings contribute nothing at all.
///
/// The map is built fresh from the full court state on every call, so
/// edited or cleared scores are always reflected; nothing is carried
/// between calls. Zero-sentinel seeds are never keyed.
pub fn aggregate(court: &Court, seeds: &[Seed; 4]) -> HashMap<Seed, MatchTotals> {
    let mut totals: HashMap<Seed, MatchTotals> = HashMap::with_capacity(seeds.len());
    for &seed in seeds {
        if is_player_seed(seed) {
            totals.insert(seed, MatchTotals::default());
        }
    }

    for (pairing, score) in PAIRINGS.iter().zip(court.matches.iter()) {
        let (Some(a_points), Some(b_points)) = (score.team_a, score.team_b) else {
            continue;
        };
        let (team_a, team_b) = pairing;

        credit_side(&mut totals, seeds, team_a, a_points, b_points);
        credit_side(&mut totals, seeds, team_b, b_points, a_points);
    }

    totals
}

fn credit_side(
    totals: &mut HashMap<Seed, MatchTotals>,
    seeds: &[Seed; 4],
    slots: &[usize; 2],
    points_for: u32,
    points_against: u32,
) {
    for &slot in slots {
        let seed = seeds[slot];
        let Some(entry) = totals.get_mut(&seed) else {
            continue;
        };
        entry.points_for += points_for;
        entry.points_against += points_against;
        entry.played += 1;
        if points_for > points_against {
            entry.wins += 1;
        } else if points_for < points_against {
            entry.losses += 1;
        }
    }
}
