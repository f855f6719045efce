use core_types::{Pairing, StandingRecord, Store, TournamentError};

use crate::standings::StandingsComputer;

/// Draws the next round from the current standings.
///
/// Players are paired with their neighbour in the standings: first with
/// second, third with fourth, and so on. Each player appears in exactly one
/// pairing. There is no bye, so an odd field is rejected.
pub struct PairingGenerator<'a, S: Store + ?Sized> {
    standings: StandingsComputer<'a, S>,
}

impl<'a, S: Store + ?Sized> PairingGenerator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            standings: StandingsComputer::new(store),
        }
    }

    #[tracing::instrument(name = "swiss_pairings", skip(self))]
    pub async fn pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self.standings.standings().await?;
        let pairings = pair_adjacent(&standings)?;
        tracing::info!(pairings = pairings.len(), "Generated next-round pairings.");
        Ok(pairings)
    }
}

/// Pairs ranked records two by two, in the order given. The records are not re-sorted.
pub fn pair_adjacent(standings: &[StandingRecord]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::InvalidPlayerCount {
            count: standings.len() as i64,
            reason: "pairing requires an even number of players".to_string(),
        });
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_standings(&pair[0], &pair[1]))
        .collect())
}
