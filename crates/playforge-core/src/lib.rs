//! playforge-core: Shared types and pure logic for the playforge telemetry generator.
//!
//! This crate provides the foundational pieces used across all playforge
//! components:
//! - The `GameEvent` record and its closed vocabularies (actions, ranks,
//!   energy sources)
//! - Karma accumulation and rank classification

pub mod karma;
pub mod types;

pub use karma::{accumulate, classify};
pub use types::{Action, EnergySource, GameEvent, Rank};
