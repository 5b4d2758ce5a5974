//! Core domain types for the playforge event stream.
//!
//! These types describe the single unit of external contract: one gameplay
//! event record per tick, appended to the analytics store and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Vocabularies ──────────────────────────────────────────────────

/// The category of a simulated gameplay event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    KillEnemy,
    KillCivilian,
    MoralChoice,
    Recharge,
    MissionComplete,
    AbilityUpgrade,
}

impl Action {
    /// The wire/store form of the action label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KillEnemy => "kill_enemy",
            Self::KillCivilian => "kill_civilian",
            Self::MoralChoice => "moral_choice",
            Self::Recharge => "recharge",
            Self::MissionComplete => "mission_complete",
            Self::AbilityUpgrade => "ability_upgrade",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a `recharge` event drew its energy from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Generator,
    Car,
    PowerStation,
    TransformerBox,
}

impl EnergySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Car => "car",
            Self::PowerStation => "power_station",
            Self::TransformerBox => "transformer_box",
        }
    }
}

impl std::fmt::Display for EnergySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moral-alignment rank, derived from the cumulative karma total.
///
/// Stored alongside each event so downstream readers never recompute it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    #[serde(rename = "Hero_3")]
    Hero3,
    #[serde(rename = "Hero_2")]
    Hero2,
    #[serde(rename = "Hero_1")]
    Hero1,
    Neutral,
    #[serde(rename = "Infamous_1")]
    Infamous1,
    #[serde(rename = "Infamous_2")]
    Infamous2,
    #[serde(rename = "Infamous_3")]
    Infamous3,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero3 => "Hero_3",
            Self::Hero2 => "Hero_2",
            Self::Hero1 => "Hero_1",
            Self::Neutral => "Neutral",
            Self::Infamous1 => "Infamous_1",
            Self::Infamous2 => "Infamous_2",
            Self::Infamous3 => "Infamous_3",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Event Record ──────────────────────────────────────────────────

/// One fabricated gameplay event, the unit persisted per tick.
///
/// `karma_total` is the authoritative running total immediately after
/// applying `karma_delta`; it is the only piece of cross-event state.
/// `energy_source` is populated iff `action` is [`Action::Recharge`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub ts: DateTime<Utc>,
    pub player: String,
    pub action: Action,
    pub xp_delta: i32,
    pub karma_delta: i32,
    pub karma_total: i64,
    pub rank: Rank,
    pub energy_source: Option<EnergySource>,
}
