//! # Swiss Tournament Core Types
//!
//! The shared vocabulary of the workspace: the persisted records, the values
//! derived from them, the `Store` contract that every persistence adapter
//! implements, and the error type every layer returns.

pub mod error;
pub mod store;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::TournamentError;
pub use store::Store;
pub use structs::{MatchResult, Pairing, Player, PlayerId, StandingRecord};
