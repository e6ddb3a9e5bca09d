//! Ranking: court places, the global round ranking, and display order.

use std::cmp::Ordering;

use super::assignment::assign_next_round;
use super::constants::{COURT_SIZE, FIRST_ROUND};
use super::entities::{Court, CourtDetail, PlayerStats, Round, validate_round};
use super::errors::{LeagueError, LeagueResult};
use super::layout::{is_player_seed, seed_layout};
use super::scoring::aggregate;
use super::tiers::tier_label;

/// The tie-break cascade shared by court places and the round ranking:
/// wins descending, then point differential descending, then seed
/// ascending. Seeds are unique, so the order is total.
pub(crate) fn by_record(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then(b.point_diff.cmp(&a.point_diff))
        .then(a.seed.cmp(&b.seed))
}

/// Layout and tier details for every court in a round.
///
/// Fails with [`LeagueError::EmptyInput`] on an empty court list; an empty
/// result is never used to signal an error.
pub fn court_details(courts: &[Court], round: Round) -> LeagueResult<Vec<CourtDetail>> {
    validate_round(round)?;
    if courts.is_empty() {
        return Err(LeagueError::EmptyInput);
    }

    let court_count = courts.len();
    let layout = seed_layout(court_count, round)?;
    courts
        .iter()
        .zip(layout)
        .enumerate()
        .map(|(idx, (court, seeds))| {
            let court_number = idx + 1;
            Ok(CourtDetail {
                round,
                court_number,
                seeds,
                tier: tier_label(court_count, round, court_number)?,
                players: court.players.clone(),
            })
        })
        .collect()
}

/// Full player ranking for a round, computed from scratch on every call.
///
/// Aggregates each court's scores, ranks the four players per court (court
/// place), ranks the whole field (round place), assigns next-round courts
/// and tiers, and returns players in display order: tier, then court place,
/// then the record cascade. Display order is deliberately not round-place
/// order; `round_place` is the metric that seeds the next round, while the
/// returned order groups players for a per-tier scoreboard.
///
/// When no match anywhere has a recorded score and this is round 1, the
/// next-round assignment falls back to mapping players by their incoming
/// seed, so an unscored event never reshuffles its initial placement.
pub fn player_rankings(courts: &[Court], round: Round) -> LeagueResult<Vec<PlayerStats>> {
    validate_round(round)?;
    if courts.is_empty() {
        return Err(LeagueError::EmptyInput);
    }

    let court_count = courts.len();
    let layout = seed_layout(court_count, round)?;
    log::debug!("ranking {court_count} courts for round {round}");

    let mut players: Vec<PlayerStats> = Vec::with_capacity(court_count * COURT_SIZE);
    for (idx, (court, seeds)) in courts.iter().zip(layout.iter()).enumerate() {
        let court_number = idx + 1;
        let totals = aggregate(court, seeds);
        let label = tier_label(court_count, round, court_number)?;
        let tier = label.chars().next().unwrap_or('?');

        let mut on_court: Vec<PlayerStats> = Vec::with_capacity(COURT_SIZE);
        for (slot, &seed) in seeds.iter().enumerate() {
            if !is_player_seed(seed) {
                continue;
            }
            let record = totals.get(&seed).copied().unwrap_or_default();
            on_court.push(PlayerStats {
                name: court.players[slot].clone(),
                seed,
                court: court_number,
                tier,
                court_place: 0,
                wins: record.wins,
                losses: record.losses,
                point_diff: record.points_for as i32 - record.points_against as i32,
                round_place: 0,
                next_court: 0,
                next_tier: String::new(),
            });
        }

        on_court.sort_by(by_record);
        for (place, player) in on_court.iter_mut().enumerate() {
            player.court_place = place + 1;
        }
        players.extend(on_court);
    }

    // Global round ranking over the whole field.
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by(|&x, &y| by_record(&players[x], &players[y]));
    for (rank, &idx) in order.iter().enumerate() {
        players[idx].round_place = rank + 1;
    }

    let seed_fallback = round == FIRST_ROUND && !courts.iter().any(Court::has_any_score);
    assign_next_round(&mut players, court_count, round, seed_fallback)?;

    players.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then(a.court_place.cmp(&b.court_place))
            .then_with(|| by_record(a, b))
    });
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::entities::MatchScore;

    fn named_court(prefix: &str, scores: [MatchScore; 3]) -> Court {
        let mut court = Court::new([
            format!("{prefix}1"),
            format!("{prefix}2"),
            format!("{prefix}3"),
            format!("{prefix}4"),
        ]);
        court.matches = scores;
        court
    }

    #[test]
    fn test_single_court_ranking_cascade() {
        let courts = vec![named_court(
            "p",
            [
                MatchScore::new(11, 5),
                MatchScore::new(9, 11),
                MatchScore::new(12, 10),
            ],
        )];
        let ranked = player_rankings(&courts, 1).unwrap();

        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["p1", "p2", "p4", "p3"]);
        let places: Vec<usize> = ranked.iter().map(|p| p.round_place).collect();
        assert_eq!(places, [1, 2, 3, 4]);
        assert!(ranked.iter().all(|p| p.next_court == 1));
        assert!(ranked.iter().all(|p| p.next_tier == "A"));
    }

    #[test]
    fn test_unscored_round_degenerates_to_seed_order() {
        let courts = vec![
            named_court("a", [MatchScore::unset(); 3]),
            named_court("b", [MatchScore::unset(); 3]),
        ];
        let ranked = player_rankings(&courts, 1).unwrap();

        for player in &ranked {
            assert_eq!(player.wins, 0);
            assert_eq!(player.point_diff, 0);
            assert_eq!(player.round_place, player.seed);
            // The unscored round-1 fallback keeps everyone in place.
            assert_eq!(player.next_court, player.court);
        }
    }

    #[test]
    fn test_court_place_stays_within_court() {
        let courts = vec![
            named_court("a", [MatchScore::unset(); 3]),
            named_court(
                "b",
                [
                    MatchScore::new(11, 0),
                    MatchScore::new(11, 0),
                    MatchScore::new(0, 11),
                ],
            ),
        ];
        let ranked = player_rankings(&courts, 1).unwrap();

        for court in 1..=2 {
            let mut places: Vec<usize> = ranked
                .iter()
                .filter(|p| p.court == court)
                .map(|p| p.court_place)
                .collect();
            places.sort();
            assert_eq!(places, [1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_display_order_groups_by_tier_then_court_place() {
        // Round 3: every court is its own tier, so with no scores the
        // display order is court 1 in seed order, then court 2.
        let courts = vec![
            named_court("a", [MatchScore::unset(); 3]),
            named_court("b", [MatchScore::unset(); 3]),
        ];
        let ranked = player_rankings(&courts, 3).unwrap();

        let seeds: Vec<usize> = ranked.iter().map(|p| p.seed).collect();
        assert_eq!(seeds, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(ranked[..4].iter().all(|p| p.tier == 'A'));
        assert!(ranked[4..].iter().all(|p| p.tier == 'B'));
    }

    #[test]
    fn test_final_round_has_no_next_assignment() {
        let courts = vec![
            named_court("a", [MatchScore::unset(); 3]),
            named_court("b", [MatchScore::unset(); 3]),
        ];
        let ranked = player_rankings(&courts, 3).unwrap();

        assert!(ranked.iter().all(|p| p.next_court == 0));
        assert!(ranked.iter().all(|p| p.next_tier.is_empty()));
    }

    #[test]
    fn test_rejects_bad_input() {
        let courts = vec![named_court("p", [MatchScore::unset(); 3])];
        assert_eq!(player_rankings(&[], 1), Err(LeagueError::EmptyInput));
        assert_eq!(court_details(&[], 1), Err(LeagueError::EmptyInput));
        assert_eq!(
            player_rankings(&courts, 0),
            Err(LeagueError::InvalidRound(0))
        );
        assert_eq!(
            player_rankings(&courts, 4),
            Err(LeagueError::InvalidRound(4))
        );
    }

    #[test]
    fn test_court_details_round_two() {
        let courts: Vec<Court> = (0..4)
            .map(|i| named_court(&format!("c{i}"), [MatchScore::unset(); 3]))
            .collect();
        let details = court_details(&courts, 2).unwrap();

        let tiers: Vec<&str> = details.iter().map(|d| d.tier.as_str()).collect();
        assert_eq!(
            tiers,
            ["A\u{2013}B", "A\u{2013}B", "C\u{2013}D", "C\u{2013}D"]
        );
        assert_eq!(details[0].seeds, [1, 4, 5, 8]);
        assert_eq!(details[3].seeds, [10, 11, 14, 15]);
    }

    #[test]
    fn test_rankings_are_idempotent() {
        let courts = vec![named_court(
            "p",
            [
                MatchScore::new(11, 5),
                MatchScore::new(9, 11),
                MatchScore::new(12, 10),
            ],
        )];
        let first = player_rankings(&courts, 2).unwrap();
        let second = player_rankings(&courts, 2).unwrap();
        assert_eq!(first, second);
    }
}
