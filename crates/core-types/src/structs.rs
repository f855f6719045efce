use crate::error::TournamentError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identifier assigned by the store at registration. Ids grow monotonically,
/// so ascending id order is registration order.
pub type PlayerId = i64;

/// A registered tournament player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// The player's full name, as registered. Need not be unique.
    pub name: String,
}

/// The recorded outcome of a single match.
///
/// Construct through `new` or `decisive` so that the winner is always one of
/// the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchResult")]
pub struct MatchResult {
    player1_id: PlayerId,
    player2_id: PlayerId,
    winner_id: PlayerId,
}

impl MatchResult {
    /// Validates and builds a match result.
    pub fn new(
        player1_id: PlayerId,
        player2_id: PlayerId,
        winner_id: PlayerId,
    ) -> Result<Self, TournamentError> {
        let winner_played = winner_id == player1_id || winner_id == player2_id;
        if player1_id == player2_id || !winner_played {
            return Err(TournamentError::InvalidMatchResult {
                player1_id,
                player2_id,
                winner_id,
            });
        }
        Ok(Self {
            player1_id,
            player2_id,
            winner_id,
        })
    }

    /// A result reported as "winner beat loser". The winner is stored as player 1.
    pub fn decisive(winner_id: PlayerId, loser_id: PlayerId) -> Result<Self, TournamentError> {
        Self::new(winner_id, loser_id, winner_id)
    }

    pub fn player1_id(&self) -> PlayerId {
        self.player1_id
    }

    pub fn player2_id(&self) -> PlayerId {
        self.player2_id
    }

    pub fn winner_id(&self) -> PlayerId {
        self.winner_id
    }

    /// Returns the participant who did not win.
    pub fn loser_id(&self) -> PlayerId {
        if self.winner_id == self.player1_id {
            self.player2_id
        } else {
            self.player1_id
        }
    }

    /// True if `player_id` took part in this match.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

// Deserialization goes through `MatchResult::new` so the winner invariant holds.
#[derive(Deserialize)]
struct RawMatchResult {
    player1_id: PlayerId,
    player2_id: PlayerId,
    winner_id: PlayerId,
}

impl TryFrom<RawMatchResult> for MatchResult {
    type Error = TournamentError;

    fn try_from(raw: RawMatchResult) -> Result<Self, Self::Error> {
        MatchResult::new(raw.player1_id, raw.player2_id, raw.winner_id)
    }
}

/// A player's win record, computed fresh from the players and matches tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StandingRecord {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
}

impl StandingRecord {
    /// Checks the record invariant `0 <= wins <= matches_played`.
    pub fn is_consistent(&self) -> bool {
        self.wins >= 0 && self.wins <= self.matches_played
    }
}

/// Two players drawn to meet in the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    /// Builds a pairing from two adjacent standings entries.
    pub fn from_standings(first: &StandingRecord, second: &StandingRecord) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn ids(&self) -> [PlayerId; 2] {
        [self.id1, self.id2]
    }
}
