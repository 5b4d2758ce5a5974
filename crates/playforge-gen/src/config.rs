//! Configuration for the playforge generator daemon.

use std::time::Duration;

use serde::Deserialize;

/// Top-level generator configuration.
///
/// Loaded from `playforge.toml` `[gen]` section or
/// `PLAYFORGE_GEN__` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GenConfig {
    /// Name of the simulated player; a single value for the process lifetime.
    #[serde(default = "default_player")]
    pub player: String,

    /// Seconds between ticks in the generation loop.
    #[serde(default = "default_period_secs")]
    pub period_secs: f64,
}

impl GenConfig {
    /// The tick period as a [`Duration`].
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.period_secs)
    }
}

fn default_player() -> String {
    "Cole_MacGrath".to_string()
}

fn default_period_secs() -> f64 {
    1.0
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            period_secs: default_period_secs(),
        }
    }
}
