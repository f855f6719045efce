use std::cmp::Ordering;

use core_types::{StandingRecord, Store, TournamentError};

/// Ranks players by their win records.
///
/// The order is wins descending, then player id ascending. Ids are handed out
/// in registration order, so players level on wins keep the order in which
/// they registered.
pub struct StandingsComputer<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> StandingsComputer<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fetches the current standings from the store.
    ///
    /// A store is expected to return its rows already ranked. If it does not,
    /// the rows are re-ranked here so that callers always see the documented
    /// order; records are never added or dropped.
    #[tracing::instrument(name = "player_standings", skip(self))]
    pub async fn standings(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let mut records = self.store.query_standings().await?;

        if !is_ranked(&records) {
            tracing::warn!(
                players = records.len(),
                "Store returned standings out of order; re-ranking."
            );
            rank(&mut records);
        }

        for record in records.iter().filter(|r| !r.is_consistent()) {
            tracing::warn!(
                player_id = record.id,
                wins = record.wins,
                matches_played = record.matches_played,
                "Standing record has more wins than matches played."
            );
        }

        tracing::debug!(players = records.len(), "Computed standings.");
        Ok(records)
    }
}

/// The standings order: more wins first, then earlier registration first.
pub fn ranking_order(a: &StandingRecord, b: &StandingRecord) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

/// Sorts records into standings order.
pub fn rank(records: &mut [StandingRecord]) {
    records.sort_by(ranking_order);
}

fn is_ranked(records: &[StandingRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| ranking_order(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use async_trait::async_trait;
    use core_types::{MatchResult, PlayerId};

    fn record(id: PlayerId, wins: i64, matches_played: i64) -> StandingRecord {
        StandingRecord {
            id,
            name: format!("Player {id}"),
            wins,
            matches_played,
        }
    }

    /// Returns a fixed, deliberately unsorted set of rows.
    struct UnsortedStore(Vec<StandingRecord>);

    #[async_trait]
    impl Store for UnsortedStore {
        async fn insert_player(&self, _name: &str) -> Result<PlayerId, TournamentError> {
            unimplemented!()
        }
        async fn delete_all_players(&self) -> Result<(), TournamentError> {
            unimplemented!()
        }
        async fn delete_all_matches(&self) -> Result<(), TournamentError> {
            unimplemented!()
        }
        async fn count_players(&self) -> Result<i64, TournamentError> {
            Ok(self.0.len() as i64)
        }
        async fn insert_match(&self, _result: &MatchResult) -> Result<(), TournamentError> {
            unimplemented!()
        }
        async fn query_standings(&self) -> Result<Vec<StandingRecord>, TournamentError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_rank_orders_by_wins_then_id() {
        let mut records = vec![
            record(3, 1, 1),
            record(1, 0, 1),
            record(2, 1, 1),
            record(4, 2, 2),
        ];
        rank(&mut records);
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[tokio::test]
    async fn test_standings_reranks_unsorted_store_output() {
        let store = UnsortedStore(vec![record(2, 0, 1), record(1, 1, 1)]);
        let standings = StandingsComputer::new(&store).standings().await.unwrap();
        assert_eq!(standings[0].id, 1);
        assert_eq!(standings[1].id, 2);
    }

    #[tokio::test]
    async fn test_inconsistent_record_is_kept_as_reported() {
        let inconsistent = record(2, 3, 1);
        let store = UnsortedStore(vec![
            record(1, 4, 4),
            inconsistent.clone(),
            record(3, 0, 2),
        ]);

        let standings = StandingsComputer::new(&store).standings().await.unwrap();
        assert_eq!(standings.len(), 3);
        assert_eq!(standings[1], inconsistent);
        assert!(!standings[1].is_consistent());
    }

    #[tokio::test]
    async fn test_standings_lists_new_players_in_registration_order() {
        let store = InMemoryStore::new();
        for name in ["Melpomene Murray", "Randy Schwartz", "Lee Arnold"] {
            store.insert_player(name).await.unwrap();
        }

        let standings = StandingsComputer::new(&store).standings().await.unwrap();
        let names: Vec<_> = standings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Melpomene Murray", "Randy Schwartz", "Lee Arnold"]);
        assert!(standings.iter().all(|r| r.wins == 0 && r.matches_played == 0));
    }
}
