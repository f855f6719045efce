//! # Swiss Tournament
//!
//! Wires the workspace together: settings, logging, the PostgreSQL store and
//! the tournament operations on top of it.
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = swiss_tournament::bootstrap().await?;
//!     let alice = app.tournament.register_player("Alice").await?;
//!     let bob = app.tournament.register_player("Bob").await?;
//!     app.tournament.report_match(alice, bob).await?;
//!     for pairing in app.tournament.swiss_pairings().await? {
//!         println!("{} vs {}", pairing.name1, pairing.name2);
//!     }
//!     app.shutdown().await;
//!     Ok(())
//! }
//! ```

use anyhow::Context;
use configuration::Settings;
use database::{PgStore, connect, run_migrations};
use swiss::Tournament;
use tracing_appender::non_blocking::WorkerGuard;

pub use core_types::{MatchResult, Pairing, Player, PlayerId, StandingRecord, TournamentError};

/// A running application: its settings and a tournament backed by PostgreSQL.
pub struct App {
    pub settings: Settings,
    pub tournament: Tournament<PgStore>,
    _log_guard: Option<WorkerGuard>,
}

impl App {
    /// Closes the connection pool. Pending log lines are flushed when the app is dropped.
    pub async fn shutdown(self) {
        self.tournament.store().close().await;
        tracing::info!("Tournament store closed.");
    }
}

/// Loads settings, installs logging, connects to the database and applies
/// migrations.
pub async fn bootstrap() -> anyhow::Result<App> {
    let settings = configuration::load_settings().context("Failed to load settings")?;
    let log_guard =
        configuration::init_logging(&settings.logging).context("Failed to initialise logging")?;

    let pool = connect(&settings.database)
        .await
        .context("Failed to connect to the database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Tournament store ready.");
    Ok(App {
        settings,
        tournament: Tournament::new(PgStore::new(pool)),
        _log_guard: log_guard,
    })
}
