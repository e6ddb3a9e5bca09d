//! Next-round assignment: mapping the round ranking onto the following
//! round's courts and tiers.

use std::collections::HashMap;

use super::constants::FINAL_ROUND;
use super::entities::{PlayerStats, Round, Seed, validate_round};
use super::errors::LeagueResult;
use super::layout::{is_player_seed, seed_layout};
use super::tiers::tier_label;

/// Populates each player's `next_court` and `next_tier` for the round that
/// follows `round`.
///
/// A player's round place becomes their seed for the next round's layout;
/// with `seed_fallback` (the unscored round-1 case) the original seed is
/// used instead. After the final round there is nothing to assign: every
/// player gets court 0 and an empty tier label.
pub fn assign_next_round(
    players: &mut [PlayerStats],
    court_count: usize,
    round: Round,
    seed_fallback: bool,
) -> LeagueResult<()> {
    validate_round(round)?;

    if round == FINAL_ROUND {
        for player in players.iter_mut() {
            player.next_court = 0;
            player.next_tier.clear();
        }
        return Ok(());
    }

    let next_round = round + 1;
    let layout = seed_layout(court_count, next_round)?;

    let mut court_by_seed: HashMap<Seed, usize> = HashMap::with_capacity(players.len());
    for (idx, seeds) in layout.iter().enumerate() {
        for &seed in seeds {
            if is_player_seed(seed) {
                court_by_seed.insert(seed, idx + 1);
            }
        }
    }

    for player in players.iter_mut() {
        let key = if seed_fallback {
            player.seed
        } else {
            player.round_place
        };
        match court_by_seed.get(&key) {
            Some(&court) => {
                player.next_court = court;
                player.next_tier = tier_label(court_count, next_round, court)?;
            }
            None => {
                log::warn!(
                    "no round-{next_round} court for seed {key} ({}), leaving unassigned",
                    player.name
                );
                player.next_court = 0;
                player.next_tier.clear();
            }
        }
    }

    Ok(())
}
