//! Deterministic display ordering for aggregates

use std::collections::HashMap;

use super::aggregator::PlayerWeeklyAggregate;

/// Order aggregates for display: total matches descending, ties broken by
/// nickname compared case-insensitively, ascending.
///
/// The final tie-break on player id keeps the order fully deterministic
/// even when two players share a nickname.
pub fn rank(aggregates: &HashMap<String, PlayerWeeklyAggregate>) -> Vec<&PlayerWeeklyAggregate> {
    let mut ranked: Vec<&PlayerWeeklyAggregate> = aggregates.values().collect();
    ranked.sort_by(|a, b| {
        b.matches
            .cmp(&a.matches)
            .then_with(|| a.nickname.to_lowercase().cmp(&b.nickname.to_lowercase()))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(player_id: &str, nickname: &str, matches: u32) -> PlayerWeeklyAggregate {
        PlayerWeeklyAggregate {
            player_id: player_id.to_string(),
            nickname: nickname.to_string(),
            team: String::new(),
            matches,
            wins: 0,
            losses: 0,
            kd_ratio: 0.0,
            hs_pct: 0.0,
        }
    }

    fn into_map(entries: Vec<PlayerWeeklyAggregate>) -> HashMap<String, PlayerWeeklyAggregate> {
        entries
            .into_iter()
            .map(|a| (a.player_id.clone(), a))
            .collect()
    }

    #[test]
    fn test_matches_descending() {
        let map = into_map(vec![
            aggregate("p1", "alpha", 2),
            aggregate("p2", "bravo", 5),
            aggregate("p3", "charlie", 0),
        ]);

        let ranked = rank(&map);
        let order: Vec<&str> = ranked.iter().map(|a| a.nickname.as_str()).collect();
        assert_eq!(order, vec!["bravo", "alpha", "charlie"]);
    }

    #[test]
    fn test_ties_break_case_insensitively_on_nickname() {
        let map = into_map(vec![
            aggregate("p1", "Zeta", 3),
            aggregate("p2", "alpha", 3),
            aggregate("p3", "Beta", 3),
        ]);

        let ranked = rank(&map);
        let order: Vec<&str> = ranked.iter().map(|a| a.nickname.as_str()).collect();
        assert_eq!(order, vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_order_is_stable_across_runs() {
        let map = into_map(vec![
            aggregate("p2", "same", 1),
            aggregate("p1", "same", 1),
        ]);

        let first: Vec<String> = rank(&map).iter().map(|a| a.player_id.clone()).collect();
        for _ in 0..10 {
            let again: Vec<String> = rank(&map).iter().map(|a| a.player_id.clone()).collect();
            assert_eq!(first, again);
        }
        assert_eq!(first, vec!["p1", "p2"]);
    }
}
