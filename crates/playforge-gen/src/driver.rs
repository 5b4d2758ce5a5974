//! The resilient generation loop.
//!
//! Three logical states: connecting (retry until a session is accepted,
//! then probe until the store actually serves queries), running (one event
//! per tick), recovering (drop the dead session, pause, reconnect). Every
//! store failure funnels back into recovery; nothing escapes the loop.
//!
//! The failed tick's event is never replayed. The next tick re-reads the
//! stored total, so the karma chain continues from whatever actually
//! landed (at-most-once).

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;

use playforge_core::{accumulate, classify, GameEvent};
use playforge_store::{EventStore, EventStoreConnector, StoreError};

use crate::config::GenConfig;
use crate::sampler::EventSampler;

/// Pause between connection attempts and before a reconnect.
const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Drives the sample-accumulate-classify-append sequence against a store.
pub struct Driver<C: EventStoreConnector> {
    connector: C,
    config: GenConfig,
    sampler: EventSampler,
}

impl<C: EventStoreConnector> Driver<C> {
    pub fn new(connector: C, config: GenConfig) -> Self {
        Self {
            connector,
            config,
            sampler: EventSampler::new(),
        }
    }

    /// Run the generation loop forever.
    pub async fn run(mut self) {
        let mut store = self.connect_with_retry().await;
        self.probe_with_retry(&store).await;

        tracing::info!(player = %self.config.player, "Entering generation loop");

        loop {
            match self.tick(&store).await {
                Ok(event) => {
                    tracing::info!(
                        action = %event.action,
                        xp = event.xp_delta,
                        karma = event.karma_delta,
                        total = event.karma_total,
                        rank = %event.rank,
                        "Event recorded"
                    );
                    sleep(self.config.period()).await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Store failure, reconnecting");
                    store.close().await;
                    sleep(RETRY_INTERVAL).await;
                    store = self.connect_with_retry().await;
                }
            }
        }
    }

    /// One-shot mode: connect, probe, produce a single event, tear down.
    /// Errors propagate instead of entering the retry loop.
    pub async fn run_once(&mut self) -> Result<GameEvent, StoreError> {
        let store = self.connector.connect().await?;
        store.ping().await?;
        let event = self.tick(&store).await?;
        store.close().await;
        Ok(event)
    }

    /// One tick: read back the last total, sample, accumulate, classify,
    /// append. The total is re-derived from the store every tick so crashes
    /// and reconnects resume from persisted state.
    async fn tick(&mut self, store: &C::Store) -> Result<GameEvent, StoreError> {
        let last_total = store.last_karma_total().await?;
        let sample = self.sampler.sample();

        let karma_total = accumulate(last_total, sample.karma_delta);
        let event = GameEvent {
            ts: Utc::now(),
            player: self.config.player.clone(),
            action: sample.action,
            xp_delta: sample.xp_delta,
            karma_delta: sample.karma_delta,
            karma_total,
            rank: classify(karma_total),
            energy_source: sample.energy_source,
        };

        store.append(&event).await?;
        Ok(event)
    }

    async fn connect_with_retry(&self) -> C::Store {
        loop {
            match self.connector.connect().await {
                Ok(store) => return store,
                Err(e) => {
                    tracing::warn!(error = %e, "Store connection failed, retrying");
                    sleep(RETRY_INTERVAL).await;
                }
            }
        }
    }

    /// A session can be accepted before the store is ready to serve
    /// queries; hold here until a trivial probe succeeds.
    async fn probe_with_retry(&self, store: &C::Store) {
        loop {
            match store.ping().await {
                Ok(()) => return,
                Err(e) => {
                    tracing::info!(error = %e, "Waiting for store to become ready");
                    sleep(RETRY_INTERVAL).await;
                }
            }
        }
    }
}
