//! Event-stream operations: read back the running total, append one row.
//!
//! The `game_events` table is append-only; `id BIGSERIAL` is the insertion
//! order and the only notion of "most recent".

use playforge_core::GameEvent;

use crate::client::{StoreClient, StoreConfig, StoreError};

/// Append-only event persistence as seen by the driver loop.
///
/// One implementor talks to Postgres; tests substitute an in-memory fake.
pub trait EventStore {
    /// Cheap liveness probe against the live session.
    fn ping(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// `karma_total` of the most recently appended event, or 0 if the
    /// stream is empty.
    fn last_karma_total(&self) -> impl std::future::Future<Output = Result<i64, StoreError>> + Send;

    /// Durably append exactly one event.
    fn append(
        &self,
        event: &GameEvent,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Best-effort session teardown; never fails.
    fn close(&self) -> impl std::future::Future<Output = ()> + Send;
}

/// Factory for store sessions, used on initial connect and on reconnect.
///
/// `connect` makes a single attempt; the driver loop owns the retry policy.
pub trait EventStoreConnector {
    type Store: EventStore;

    fn connect(&self)
        -> impl std::future::Future<Output = Result<Self::Store, StoreError>> + Send;
}

impl EventStore for StoreClient {
    async fn ping(&self) -> Result<(), StoreError> {
        StoreClient::ping(self).await
    }

    async fn last_karma_total(&self) -> Result<i64, StoreError> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT karma_total FROM game_events ORDER BY id DESC LIMIT 1")
                .fetch_optional(self.inner())
                .await?;
        Ok(row.map(|(total,)| total).unwrap_or(0))
    }

    async fn append(&self, event: &GameEvent) -> Result<(), StoreError> {
        // A single INSERT statement: either the whole row lands or nothing does.
        sqlx::query(
            "INSERT INTO game_events \
             (ts, player, action, xp_delta, karma_delta, karma_total, rank, energy_source) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(event.ts)
        .bind(&event.player)
        .bind(event.action.as_str())
        .bind(event.xp_delta)
        .bind(event.karma_delta)
        .bind(event.karma_total)
        .bind(event.rank.as_str())
        .bind(event.energy_source.map(|s| s.as_str()))
        .execute(self.inner())
        .await?;
        Ok(())
    }

    async fn close(&self) {
        StoreClient::close(self).await;
    }
}

impl EventStoreConnector for StoreConfig {
    type Store = StoreClient;

    async fn connect(&self) -> Result<StoreClient, StoreError> {
        StoreClient::connect(self).await
    }
}
