//! Dependency probes and the health orchestration that aggregates them.
//!
//! The orchestrator runs three steps in strict order: query Postgres, ensure
//! the Redis connection is open, ping Redis. The first failure short-circuits
//! the sequence. Both collaborators sit behind traits so handlers can be
//! tested with substitutable fakes.

pub mod connect;
pub mod postgres;
pub mod redis;

use async_trait::async_trait;

/// Failure of any probe step.
///
/// There is deliberately only one kind: the raw message text of whatever
/// went wrong. The caller cannot tell a database failure from a cache
/// failure except by reading the text.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ProbeError(pub String);

/// Outcome of one full health check.
///
/// Ephemeral: produced per request, serialized once, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    /// Value of the `db_ok` column from the literal probe query
    pub db_ok: i32,
    /// Literal reply from the cache liveness probe, e.g. "PONG"
    pub cache_reply: String,
}

/// Capability to execute the literal probe query against the relational store.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Runs `SELECT 1 AS db_ok` and returns the single column value.
    ///
    /// No parameters, no transaction, no timeout beyond the pool default.
    async fn select_one(&self) -> Result<i32, ProbeError>;
}

/// Capabilities of the key-value cache handle.
#[async_trait]
pub trait CacheProbe: Send + Sync {
    /// Opens the underlying connection if it is not open yet.
    ///
    /// Safe to call on every request; only the first successful call
    /// establishes a transport connection.
    async fn ensure_open(&self) -> Result<(), ProbeError>;

    /// Issues a liveness probe and returns the server's literal reply.
    async fn ping(&self) -> Result<String, ProbeError>;
}

/// Runs the dependency checks in strict order, stopping at the first failure.
///
/// A database failure means the cache is never touched in that request, and
/// a failed check carries no partial results.
pub async fn check(
    db: &dyn DatabaseProbe,
    cache: &dyn CacheProbe,
) -> Result<HealthReport, ProbeError> {
    let db_ok = db.select_one().await?;
    cache.ensure_open().await?;
    let cache_reply = cache.ping().await?;

    Ok(HealthReport { db_ok, cache_reply })
}
