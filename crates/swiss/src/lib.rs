//! # Swiss Pairing Library
//!
//! The tournament logic of the workspace: ranking players by their win
//! records, drawing the next round by adjacent pairing, and sizing the
//! tournament.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of SQL
//!   or connection handling. Every component is handed a `Store` and talks to
//!   it only through that trait.
//! - **Stateless:** No component caches anything. Standings and pairings are
//!   recomputed from the store on every call, so two calls with no match
//!   reported in between return identical results.
//!
//! ## Public API
//!
//! - `StandingsComputer`: ranked win records.
//! - `PairingGenerator` and `pair_adjacent`: next-round pairings.
//! - `required_rounds`: minimum number of rounds for a player count.
//! - `Tournament`: the top-level operations over an injected store.
//! - `InMemoryStore`: a `Store` backed by process memory.

pub mod memory;
pub mod pairing;
pub mod rounds;
pub mod standings;
pub mod tournament;

pub use memory::InMemoryStore;
pub use pairing::{PairingGenerator, pair_adjacent};
pub use rounds::required_rounds;
pub use standings::StandingsComputer;
pub use tournament::Tournament;

// Re-export the core vocabulary so callers need a single dependency.
pub use core_types::{
    MatchResult, Pairing, Player, PlayerId, StandingRecord, Store, TournamentError,
};
