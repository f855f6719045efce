use crate::DbError;
use async_trait::async_trait;
use core_types::{MatchResult, PlayerId, StandingRecord, Store, TournamentError};
use sqlx::postgres::PgPool;

/// The `PgStore` is the PostgreSQL-backed tournament `Store`. It encapsulates
/// all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new `PgStore` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Checks that a connection can be acquired and used.
    pub async fn health_check(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the database connection pool
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Runs a single statement inside its own transaction.
    async fn execute_in_transaction(&self, statement: &str) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(statement).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_player(&self, name: &str) -> Result<PlayerId, TournamentError> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let id: PlayerId =
            sqlx::query_scalar("INSERT INTO players (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *tx)
                .await
                .map_err(DbError::from)?;
        tx.commit().await.map_err(DbError::from)?;
        Ok(id)
    }

    async fn delete_all_players(&self) -> Result<(), TournamentError> {
        let removed = self.execute_in_transaction("DELETE FROM players").await?;
        tracing::debug!(removed, "Deleted player rows.");
        Ok(())
    }

    async fn delete_all_matches(&self) -> Result<(), TournamentError> {
        let removed = self.execute_in_transaction("DELETE FROM matches").await?;
        tracing::debug!(removed, "Deleted match rows.");
        Ok(())
    }

    async fn count_players(&self) -> Result<i64, TournamentError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::from)?;
        Ok(count)
    }

    async fn insert_match(&self, result: &MatchResult) -> Result<(), TournamentError> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        sqlx::query("INSERT INTO matches (player1, player2, winner) VALUES ($1, $2, $3)")
            .bind(result.player1_id())
            .bind(result.player2_id())
            .bind(result.winner_id())
            .execute(&mut *tx)
            .await
            .map_err(DbError::from)?;
        tx.commit().await.map_err(DbError::from)?;
        Ok(())
    }

    async fn query_standings(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let standings = sqlx::query_as::<_, StandingRecord>(
            r#"
            SELECT id, name, wins, matches_played
            FROM standings
            ORDER BY wins DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;
        Ok(standings)
    }
}
