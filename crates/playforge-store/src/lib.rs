//! playforge-store: Postgres persistence gateway for the playforge event stream.
//!
//! The store is append-only: one `game_events` row per tick, ordered by a
//! `BIGSERIAL` surrogate key. The driver loop talks to it exclusively
//! through the [`EventStore`] and [`EventStoreConnector`] traits so retry
//! policy stays in the loop and tests can substitute an in-memory fake.

pub mod client;
pub mod events;

pub use client::{StoreClient, StoreConfig, StoreError};
pub use events::{EventStore, EventStoreConnector};
