//! Store client with per-call tracing.
//!
//! # Responsibilities
//! - Connect to the key-value store and verify liveness
//! - Perform single-key lookups, each wrapped in a child span
//! - Distinguish "key absent" from transport failures
//! - Release the connection at shutdown

use opentelemetry::trace::{Span, Status, Tracer};
use opentelemetry::{Context, KeyValue};
use opentelemetry_sdk::trace;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store holds no record under the requested key.
    #[error("key not found")]
    NotFound,

    /// Transport, protocol, or server-side failure.
    #[error("store backend error: {0}")]
    Backend(#[from] redis::RedisError),
}

/// Client owning the key-value store connection.
///
/// Cloning is cheap and shares the underlying connection; lookups from
/// concurrent request tasks multiplex over it.
#[derive(Clone, Debug)]
pub struct StoreClient {
    conn: MultiplexedConnection,
    tracer: trace::Tracer,
}

impl StoreClient {
    /// Connect to the store at `address` and verify connectivity with a
    /// PING probe.
    ///
    /// Fails fast: no retry or backoff. An unreachable store at startup
    /// is fatal to the process.
    pub async fn connect(address: &str, tracer: trace::Tracer) -> Result<Self, StoreError> {
        let client = redis::Client::open(format!("redis://{address}"))?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;

        tracing::info!(address = %address, "Store connection established");
        Ok(Self { conn, tracer })
    }

    /// Fetch the value stored under `id`.
    ///
    /// The caller guarantees `id` is non-empty; it is not re-validated
    /// here. The lookup runs inside a child span parented on `cx`, tagged
    /// with the key. A nil reply maps to [`StoreError::NotFound`]; any
    /// other failure maps to [`StoreError::Backend`].
    pub async fn get(&self, cx: &Context, id: &str) -> Result<String, StoreError> {
        let mut span = self.tracer.start_with_context("store.get", cx);
        span.set_attribute(KeyValue::new("store.key", id.to_string()));

        let mut conn = self.conn.clone();
        let reply: Result<Option<String>, redis::RedisError> = conn.get(id).await;

        let result = match reply {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                span.set_status(Status::error("key not found"));
                Err(StoreError::NotFound)
            }
            Err(err) => {
                span.set_status(Status::error(err.to_string()));
                Err(StoreError::Backend(err))
            }
        };
        span.end();
        result
    }

    /// Release the store connection by sending QUIT.
    ///
    /// Consumes the client, so a second close is unrepresentable. Call
    /// during shutdown, after the HTTP listener has drained.
    pub async fn close(mut self) -> Result<(), StoreError> {
        redis::cmd("QUIT").query_async::<_, ()>(&mut self.conn).await?;
        Ok(())
    }
}
