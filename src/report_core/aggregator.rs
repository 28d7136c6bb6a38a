//! Per-player weekly aggregation over raw match records

use std::collections::HashMap;

use super::provider::MatchRecordProvider;
use super::ratio::{headshot_pct, kd_ratio};
use super::record::{MatchRecord, Player};
use super::window::WeekWindow;

/// A player's rolled-up statistics for one report window.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWeeklyAggregate {
    pub player_id: String,
    pub nickname: String,
    pub team: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub kd_ratio: f64,
    pub hs_pct: f64,
}

impl PlayerWeeklyAggregate {
    fn new(player_id: &str, nickname: &str, team: &str) -> Self {
        Self {
            player_id: player_id.to_string(),
            nickname: nickname.to_string(),
            team: team.to_string(),
            matches: 0,
            wins: 0,
            losses: 0,
            kd_ratio: 0.0,
            hs_pct: 0.0,
        }
    }
}

/// Cumulative sums kept apart from the aggregate so ratios are computed
/// once, after every record has been folded in.
#[derive(Debug, Default)]
struct RunningTotals {
    kills: u32,
    deaths: u32,
    headshots: u32,
}

/// Folds raw stat-lines into per-player aggregates for a single report run.
///
/// Roster players are seeded up front so a player with zero matches still
/// appears in the output. Records for identifiers the roster did not seed
/// (late-bound provider data) create an aggregate on first encounter.
pub struct WeeklyAggregator {
    excluded_team: Option<String>,
    aggregates: HashMap<String, PlayerWeeklyAggregate>,
    sums: HashMap<String, RunningTotals>,
}

impl WeeklyAggregator {
    pub fn new(excluded_team: Option<&str>) -> Self {
        Self {
            excluded_team: excluded_team
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            aggregates: HashMap::new(),
            sums: HashMap::new(),
        }
    }

    /// Ensure an aggregate exists for a roster player before any records
    /// arrive.
    pub fn seed_player(&mut self, player: &Player) {
        self.aggregates
            .entry(player.player_id.clone())
            .or_insert_with(|| PlayerWeeklyAggregate::new(&player.player_id, &player.nickname, ""));
        self.sums.entry(player.player_id.clone()).or_default();
    }

    /// Fold one stat-line into the totals. Records whose team matches the
    /// configured exclusion team are discarded entirely, which filters
    /// organized-league games out of the pickup-game report.
    pub fn fold_record(&mut self, record: &MatchRecord) {
        if let Some(ref excluded) = self.excluded_team {
            if record.team == *excluded {
                return;
            }
        }

        let aggregate = self
            .aggregates
            .entry(record.player_id.clone())
            .or_insert_with(|| {
                PlayerWeeklyAggregate::new(&record.player_id, &record.nickname, &record.team)
            });
        let totals = self.sums.entry(record.player_id.clone()).or_default();

        aggregate.matches += 1;
        if record.is_win() {
            aggregate.wins += 1;
        } else {
            aggregate.losses += 1;
        }

        totals.kills += record.kills;
        totals.deaths += record.deaths;
        totals.headshots += record.headshots;
    }

    /// Compute the derived ratios and hand the aggregates over, consuming
    /// the accumulator.
    pub fn finalize(mut self) -> HashMap<String, PlayerWeeklyAggregate> {
        for (player_id, aggregate) in self.aggregates.iter_mut() {
            if let Some(totals) = self.sums.get(player_id) {
                aggregate.kd_ratio = kd_ratio(totals.kills, totals.deaths);
                aggregate.hs_pct = headshot_pct(totals.headshots, totals.kills);
            }
        }
        self.aggregates
    }

    /// Run the full aggregation for a roster: one sequential fetch per
    /// player, fold everything, finalize.
    ///
    /// A fetch or parse failure for one player is logged and degrades to
    /// zero matches for that player; the remaining roster is still
    /// processed.
    pub async fn collect(
        roster: &[Player],
        provider: &dyn MatchRecordProvider,
        window: &WeekWindow,
        excluded_team: Option<&str>,
    ) -> HashMap<String, PlayerWeeklyAggregate> {
        let mut aggregator = WeeklyAggregator::new(excluded_team);
        log::info!("Aggregating match history for {} players", roster.len());

        for player in roster {
            aggregator.seed_player(player);

            match provider.fetch_records(&player.player_id, window).await {
                Ok(records) => {
                    log::debug!("{}: {} records in window", player.nickname, records.len());
                    for record in &records {
                        aggregator.fold_record(record);
                    }
                }
                Err(e) => {
                    log::warn!(
                        "Failed to fetch records for {} ({}): {}",
                        player.nickname,
                        player.player_id,
                        e
                    );
                }
            }
        }

        aggregator.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player_id: &str, team: &str, result: u32, kills: u32, deaths: u32, hs: u32) -> MatchRecord {
        MatchRecord {
            player_id: player_id.to_string(),
            nickname: format!("nick_{}", player_id),
            team: team.to_string(),
            kills,
            deaths,
            headshots: hs,
            result,
        }
    }

    fn player(nickname: &str, player_id: &str) -> Player {
        Player {
            nickname: nickname.to_string(),
            player_id: player_id.to_string(),
        }
    }

    #[test]
    fn test_zero_match_player_still_has_aggregate() {
        let mut aggregator = WeeklyAggregator::new(None);
        aggregator.seed_player(&player("idle", "p1"));

        let aggregates = aggregator.finalize();
        let idle = &aggregates["p1"];
        assert_eq!(idle.matches, 0);
        assert_eq!(idle.wins, 0);
        assert_eq!(idle.losses, 0);
        assert_eq!(idle.kd_ratio, 0.0);
        assert_eq!(idle.hs_pct, 0.0);
    }

    #[test]
    fn test_fold_counts_and_ratios() {
        let mut aggregator = WeeklyAggregator::new(None);
        aggregator.seed_player(&player("a", "p1"));
        aggregator.fold_record(&record("p1", "mix", 1, 10, 5, 3));
        aggregator.fold_record(&record("p1", "mix", 0, 4, 8, 1));

        let aggregates = aggregator.finalize();
        let a = &aggregates["p1"];
        assert_eq!(a.matches, 2);
        assert_eq!(a.wins, 1);
        assert_eq!(a.losses, 1);
        assert!((a.kd_ratio - 14.0 / 13.0).abs() < 1e-9);
        assert!((a.hs_pct - (4.0 / 14.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_excluded_team_contributes_nothing() {
        let mut aggregator = WeeklyAggregator::new(Some("team_league"));
        aggregator.seed_player(&player("a", "p1"));
        aggregator.fold_record(&record("p1", "team_league", 1, 25, 10, 12));
        aggregator.fold_record(&record("p1", "mix", 1, 10, 5, 3));

        let aggregates = aggregator.finalize();
        let a = &aggregates["p1"];
        assert_eq!(a.matches, 1);
        assert_eq!(a.wins, 1);
        assert!((a.kd_ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_exclusion_team_disables_filter() {
        let mut aggregator = WeeklyAggregator::new(Some(""));
        aggregator.seed_player(&player("a", "p1"));
        aggregator.fold_record(&record("p1", "anything", 1, 1, 1, 0));

        let aggregates = aggregator.finalize();
        assert_eq!(aggregates["p1"].matches, 1);
    }

    #[test]
    fn test_unrostered_record_creates_aggregate_on_the_fly() {
        let mut aggregator = WeeklyAggregator::new(None);
        aggregator.fold_record(&record("stranger", "mix", 0, 7, 9, 2));

        let aggregates = aggregator.finalize();
        let s = &aggregates["stranger"];
        assert_eq!(s.nickname, "nick_stranger");
        assert_eq!(s.team, "mix");
        assert_eq!(s.matches, 1);
        assert_eq!(s.losses, 1);
    }
}
