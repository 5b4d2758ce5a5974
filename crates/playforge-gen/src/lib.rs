//! playforge-gen: the synthetic gameplay telemetry generator.
//!
//! Fabricates one plausible gameplay event per tick for a single simulated
//! player, folds each karma delta into the running total read back from the
//! store, and appends the resulting record. Storage outages are absorbed by
//! a reconnect loop; the karma chain resumes from whatever total is
//! actually persisted.

pub mod config;
pub mod driver;
pub mod sampler;
