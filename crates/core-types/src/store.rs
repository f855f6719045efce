use async_trait::async_trait;

use crate::error::TournamentError;
use crate::structs::{MatchResult, PlayerId, StandingRecord};

/// The persistence contract of a tournament.
///
/// Implementations own the player and match tables. Each method is a single
/// all-or-nothing unit against the store; none of them retries on failure.
/// Any failure to reach or query the store is reported as
/// `TournamentError::StoreUnavailable`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Registers a player and returns the id the store assigned.
    async fn insert_player(&self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Removes every player record.
    async fn delete_all_players(&self) -> Result<(), TournamentError>;

    /// Removes every match record.
    async fn delete_all_matches(&self) -> Result<(), TournamentError>;

    /// Returns the number of registered players.
    async fn count_players(&self) -> Result<i64, TournamentError>;

    /// Records one match outcome.
    async fn insert_match(&self, result: &MatchResult) -> Result<(), TournamentError>;

    /// Returns one record per registered player, sorted by wins descending and
    /// then by player id ascending. Players without matches appear with zero
    /// wins and zero matches.
    async fn query_standings(&self) -> Result<Vec<StandingRecord>, TournamentError>;
}
