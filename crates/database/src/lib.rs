//! # Swiss Tournament Database Crate
//!
//! This crate is the PostgreSQL implementation of the tournament `Store`.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** This crate encapsulates all database-specific logic.
//!   The rest of the workspace sees only the `Store` trait; the SQL, the
//!   schema and the pool stay in here.
//! - **One Transaction per Operation:** Every write runs in its own transaction,
//!   so an operation either fully happens or leaves the tables untouched.
//! - **Asynchronous & Pooled:** Connections are taken from a `PgPool` for the
//!   duration of one operation and returned right after.
//!
//! ## Public API
//!
//! - `connect`: establishes the connection pool from `DatabaseSettings`.
//! - `run_migrations`: applies the embedded schema migrations.
//! - `PgStore`: the `Store` implementation.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::PgStore;
