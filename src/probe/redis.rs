//! Redis reachability probe with a lazy, connect-once transport.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::Client;

use super::connect::ConnectOnce;
use super::{CacheProbe, ProbeError};

impl From<redis::RedisError> for ProbeError {
    fn from(err: redis::RedisError) -> Self {
        ProbeError(err.to_string())
    }
}

/// Cache handle created unconnected at startup.
///
/// The first request to need it establishes a multiplexed connection, which
/// is then shared for the rest of the process. The guard keeps concurrent
/// first requests from opening more than one transport connection.
pub struct RedisCache {
    client: Client,
    conn: ConnectOnce<MultiplexedConnection>,
}

impl RedisCache {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            conn: ConnectOnce::new(),
        }
    }

    async fn connection(&self) -> Result<MultiplexedConnection, ProbeError> {
        self.conn
            .get_or_connect(|| async {
                tracing::info!("Establishing Redis connection");
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|err| {
                        tracing::error!(error = %err, "Redis error");
                        ProbeError::from(err)
                    })
            })
            .await
    }
}

#[async_trait]
impl CacheProbe for RedisCache {
    async fn ensure_open(&self) -> Result<(), ProbeError> {
        self.connection().await.map(|_| ())
    }

    async fn ping(&self) -> Result<String, ProbeError> {
        let mut conn = self.connection().await?;
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(reply)
    }
}
