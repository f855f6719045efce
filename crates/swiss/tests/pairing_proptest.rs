//! Property tests for standings and pairings over random match histories.

use std::collections::BTreeSet;

use proptest::prelude::*;
use swiss::{InMemoryStore, PlayerId, Tournament};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

/// Registers `players` and reports `results`, given as index pairs (winner, loser).
async fn build(
    players: usize,
    results: &[(usize, usize)],
) -> (Tournament<InMemoryStore>, Vec<PlayerId>) {
    let tournament = Tournament::new(InMemoryStore::new());
    let mut ids = Vec::with_capacity(players);
    for i in 0..players {
        ids.push(tournament.register_player(&format!("Player {i}")).await.unwrap());
    }
    for &(winner, loser) in results {
        let (winner, loser) = (winner % players, loser % players);
        if winner != loser {
            tournament.report_match(ids[winner], ids[loser]).await.unwrap();
        }
    }
    (tournament, ids)
}

proptest! {
    #[test]
    fn pairings_cover_every_player_once(
        half in 1usize..12,
        results in prop::collection::vec((0usize..24, 0usize..24), 0..40),
    ) {
        let players = half * 2;
        let (pairings, ids) = runtime().block_on(async {
            let (tournament, ids) = build(players, &results).await;
            (tournament.swiss_pairings().await.unwrap(), ids)
        });

        prop_assert_eq!(pairings.len(), players / 2);
        let mut seen: Vec<PlayerId> = pairings.iter().flat_map(|p| p.ids()).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, ids);
    }

    #[test]
    fn standings_are_consistent_and_ranked(
        players in 1usize..16,
        results in prop::collection::vec((0usize..16, 0usize..16), 0..40),
    ) {
        let standings = runtime().block_on(async {
            let (tournament, _) = build(players, &results).await;
            tournament.player_standings().await.unwrap()
        });

        prop_assert_eq!(standings.len(), players);
        let unique: BTreeSet<_> = standings.iter().map(|r| r.id).collect();
        prop_assert_eq!(unique.len(), players);

        for record in &standings {
            prop_assert!(record.wins >= 0);
            prop_assert!(record.wins <= record.matches_played);
        }
        for pair in standings.windows(2) {
            let ordered = pair[0].wins > pair[1].wins
                || (pair[0].wins == pair[1].wins && pair[0].id < pair[1].id);
            prop_assert!(ordered);
        }
    }
}
