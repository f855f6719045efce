use core_types::TournamentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Every database failure means the store could not serve the request.
impl From<DbError> for TournamentError {
    fn from(err: DbError) -> Self {
        TournamentError::store(err)
    }
}
