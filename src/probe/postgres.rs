//! Postgres reachability probe over a shared connection pool.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::{DatabaseProbe, ProbeError};

impl From<sqlx::Error> for ProbeError {
    fn from(err: sqlx::Error) -> Self {
        ProbeError(err.to_string())
    }
}

/// Probe backed by a shared `PgPool`.
///
/// Each query checks a connection out of the pool and returns it implicitly.
/// The pool is created once at startup and lives for the process.
#[derive(Clone)]
pub struct PgProbe {
    pool: PgPool,
}

impl PgProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for PgProbe {
    async fn select_one(&self) -> Result<i32, ProbeError> {
        let row = sqlx::query("SELECT 1 AS db_ok")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("db_ok")?)
    }
}
