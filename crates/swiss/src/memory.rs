//! InMemoryStore - process-local tournament store for testing and development.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use core_types::{MatchResult, Player, PlayerId, StandingRecord, Store, TournamentError};

use crate::standings::rank;

#[derive(Default)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<MatchResult>,
    last_id: PlayerId,
}

/// A `Store` held in memory.
///
/// Behaves like the relational schema: ids are never reused, a match must
/// reference registered players, and removing the players removes their
/// matches. Clone-friendly via Arc; clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, TournamentError> {
        self.tables
            .read()
            .map_err(|_| TournamentError::store("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, TournamentError> {
        self.tables
            .write()
            .map_err(|_| TournamentError::store("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn insert_player(&self, name: &str) -> Result<PlayerId, TournamentError> {
        let mut tables = self.write()?;
        tables.last_id += 1;
        let id = tables.last_id;
        tables.players.push(Player {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn delete_all_players(&self) -> Result<(), TournamentError> {
        let mut tables = self.write()?;
        tables.players.clear();
        tables.matches.clear();
        Ok(())
    }

    async fn delete_all_matches(&self) -> Result<(), TournamentError> {
        self.write()?.matches.clear();
        Ok(())
    }

    async fn count_players(&self) -> Result<i64, TournamentError> {
        Ok(self.read()?.players.len() as i64)
    }

    async fn insert_match(&self, result: &MatchResult) -> Result<(), TournamentError> {
        let mut tables = self.write()?;
        for id in [result.player1_id(), result.player2_id()] {
            if !tables.players.iter().any(|p| p.id == id) {
                return Err(TournamentError::store(format!(
                    "match references unregistered player {id}"
                )));
            }
        }
        tables.matches.push(*result);
        Ok(())
    }

    async fn query_standings(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let tables = self.read()?;
        let mut records: Vec<StandingRecord> = tables
            .players
            .iter()
            .map(|player| {
                let played = tables.matches.iter().filter(|m| m.involves(player.id));
                let (mut wins, mut matches_played) = (0, 0);
                for m in played {
                    matches_played += 1;
                    if m.winner_id() == player.id {
                        wins += 1;
                    }
                }
                StandingRecord {
                    id: player.id,
                    name: player.name.clone(),
                    wins,
                    matches_played,
                }
            })
            .collect();
        rank(&mut records);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_not_reused_after_reset() {
        let store = InMemoryStore::new();
        let first = store.insert_player("Chandra Nalaar").await.unwrap();
        store.delete_all_players().await.unwrap();
        let second = store.insert_player("Jace Beleren").await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_match_with_unknown_player_is_a_store_failure() {
        let store = InMemoryStore::new();
        let id = store.insert_player("Markov Chaney").await.unwrap();
        let result = MatchResult::decisive(id, id + 10).unwrap();

        let err = store.insert_match(&result).await.unwrap_err();
        assert!(err.is_store_unavailable());
        assert_eq!(store.query_standings().await.unwrap()[0].matches_played, 0);
    }

    #[tokio::test]
    async fn test_deleting_players_removes_their_matches() {
        let store = InMemoryStore::new();
        let a = store.insert_player("Diane Grant").await.unwrap();
        let b = store.insert_player("Joe Malik").await.unwrap();
        store
            .insert_match(&MatchResult::decisive(a, b).unwrap())
            .await
            .unwrap();

        store.delete_all_players().await.unwrap();
        let c = store.insert_player("Mao Tsu-hsi").await.unwrap();

        let standings = store.query_standings().await.unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].id, c);
        assert_eq!(standings[0].matches_played, 0);
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        clone.insert_player("Ender Wiggin").await.unwrap();
        assert_eq!(store.count_players().await.unwrap(), 1);
    }
}
