use crate::structs::PlayerId;
use thiserror::Error;

/// Boxed source error carried by `StoreUnavailable`.
pub type StoreSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("The tournament store is unavailable: {0}")]
    StoreUnavailable(#[source] StoreSource),

    #[error("Invalid player count {count}: {reason}")]
    InvalidPlayerCount { count: i64, reason: String },

    #[error(
        "Invalid match result: winner {winner_id} must be one of two distinct players ({player1_id}, {player2_id})"
    )]
    InvalidMatchResult {
        player1_id: PlayerId,
        player2_id: PlayerId,
        winner_id: PlayerId,
    },

    #[error("Player name must not be blank.")]
    InvalidPlayerName,
}

impl TournamentError {
    /// Wraps any adapter error as `StoreUnavailable`.
    pub fn store<E>(err: E) -> Self
    where
        E: Into<StoreSource>,
    {
        TournamentError::StoreUnavailable(err.into())
    }

    /// True when the error came from the backing store rather than from input validation.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, TournamentError::StoreUnavailable(_))
    }
}
