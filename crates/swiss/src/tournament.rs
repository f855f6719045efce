use core_types::{MatchResult, Pairing, PlayerId, StandingRecord, Store, TournamentError};

use crate::pairing::PairingGenerator;
use crate::rounds::required_rounds;
use crate::standings::StandingsComputer;

/// The top-level tournament operations over an injected store.
///
/// `Tournament` holds no state of its own. Every call is one independent unit
/// of work against the store, and any error aborts that call without a retry.
#[derive(Debug, Clone)]
pub struct Tournament<S: Store> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a player to the tournament. The store assigns the id.
    ///
    /// Surrounding whitespace is trimmed. Names need not be unique, but must
    /// not be blank.
    pub async fn register_player(&self, name: &str) -> Result<PlayerId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidPlayerName);
        }
        let id = self.store.insert_player(name).await?;
        tracing::info!(player_id = id, name, "Registered player.");
        Ok(id)
    }

    /// Records that `winner` beat `loser`.
    pub async fn report_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<(), TournamentError> {
        self.record_match(MatchResult::decisive(winner, loser)?).await
    }

    /// Records a validated match outcome.
    pub async fn record_match(&self, result: MatchResult) -> Result<(), TournamentError> {
        self.store.insert_match(&result).await?;
        tracing::info!(
            player1_id = result.player1_id(),
            player2_id = result.player2_id(),
            winner_id = result.winner_id(),
            "Recorded match result."
        );
        Ok(())
    }

    /// Removes all match records.
    pub async fn delete_matches(&self) -> Result<(), TournamentError> {
        self.store.delete_all_matches().await?;
        tracing::info!("Deleted all matches.");
        Ok(())
    }

    /// Removes all player records.
    pub async fn delete_players(&self) -> Result<(), TournamentError> {
        self.store.delete_all_players().await?;
        tracing::info!("Deleted all players.");
        Ok(())
    }

    /// Clears the tournament: matches first, then players.
    pub async fn reset(&self) -> Result<(), TournamentError> {
        self.delete_matches().await?;
        self.delete_players().await
    }

    pub async fn count_players(&self) -> Result<i64, TournamentError> {
        let count = self.store.count_players().await?;
        tracing::debug!(count, "Counted registered players.");
        Ok(count)
    }

    /// The players and their win records, first place first.
    pub async fn player_standings(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        StandingsComputer::new(&self.store).standings().await
    }

    /// Pairings for the next round. Fails on an odd number of players.
    pub async fn swiss_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        PairingGenerator::new(&self.store).pairings().await
    }

    /// Minimum rounds for the currently registered field.
    pub async fn rounds_required(&self) -> Result<u32, TournamentError> {
        let count = self.count_players().await?;
        required_rounds(count)
    }
}
