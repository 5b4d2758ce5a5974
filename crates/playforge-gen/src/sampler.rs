//! Weighted event sampling.
//!
//! Each tick draws one action from a fixed weighted distribution, then
//! derives xp/karma deltas (and, for recharges, an energy source) from
//! independent per-field draws. The independent-draw structure is part of
//! the observable distribution and must not be collapsed into fewer draws.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use playforge_core::{Action, EnergySource};

/// Fixed action weights, summing to 100.
const ACTION_WEIGHTS: [(Action, u32); 6] = [
    (Action::KillEnemy, 55),
    (Action::KillCivilian, 8),
    (Action::MoralChoice, 10),
    (Action::Recharge, 15),
    (Action::MissionComplete, 8),
    (Action::AbilityUpgrade, 4),
];

/// Karma outcomes for an enemy kill: usually nothing, occasionally a nudge.
const KILL_ENEMY_KARMA: [i32; 5] = [0, 0, 0, 1, -1];

const ENERGY_SOURCES: [EnergySource; 4] = [
    EnergySource::Generator,
    EnergySource::Car,
    EnergySource::PowerStation,
    EnergySource::TransformerBox,
];

/// One sampled event, before the running total and rank are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledEvent {
    pub action: Action,
    pub xp_delta: i32,
    pub karma_delta: i32,
    pub energy_source: Option<EnergySource>,
}

/// Draws gameplay events from the fixed action distribution.
pub struct EventSampler {
    rng: StdRng,
    actions: WeightedIndex<u32>,
}

impl EventSampler {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sampler for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let actions = WeightedIndex::new(ACTION_WEIGHTS.iter().map(|(_, w)| *w))
            .expect("action weights are fixed and non-zero");
        Self { rng, actions }
    }

    /// Draw one event. Never fails; each field comes from a fresh draw.
    pub fn sample(&mut self) -> SampledEvent {
        let (action, _) = ACTION_WEIGHTS[self.actions.sample(&mut self.rng)];

        let mut xp_delta = 0;
        let mut karma_delta = 0;
        let mut energy_source = None;

        match action {
            Action::KillEnemy => {
                xp_delta = self.rng.gen_range(10..=40);
                karma_delta = *KILL_ENEMY_KARMA
                    .choose(&mut self.rng)
                    .expect("karma outcomes are non-empty");
            }
            Action::KillCivilian => {
                xp_delta = self.rng.gen_range(0..=8);
                karma_delta = -self.rng.gen_range(20..=50);
            }
            Action::MoralChoice => {
                xp_delta = self.rng.gen_range(5..=20);
                // Magnitude and sign are separate draws.
                let magnitude = self.rng.gen_range(30..=60);
                karma_delta = if self.rng.gen_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                };
            }
            Action::Recharge => {
                energy_source = ENERGY_SOURCES.choose(&mut self.rng).copied();
            }
            Action::MissionComplete => {
                xp_delta = self.rng.gen_range(80..=200);
                karma_delta = match self.rng.gen_range(0..3) {
                    0 => self.rng.gen_range(5..=20),
                    1 => -self.rng.gen_range(5..=20),
                    _ => 0,
                };
            }
            Action::AbilityUpgrade => {}
        }

        SampledEvent {
            action,
            xp_delta,
            karma_delta,
            energy_source,
        }
    }
}

impl Default for EventSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const DRAWS: usize = 100_000;

    #[test]
    fn action_frequencies_match_weights() {
        let mut sampler = EventSampler::seeded(7);
        let mut counts: HashMap<Action, usize> = HashMap::new();
        for _ in 0..DRAWS {
            *counts.entry(sampler.sample().action).or_default() += 1;
        }

        for (action, weight) in ACTION_WEIGHTS {
            let observed = *counts.get(&action).unwrap_or(&0) as f64 / DRAWS as f64;
            let expected = weight as f64 / 100.0;
            // Generous tolerance: ±1.5 percentage points over 100k draws.
            assert!(
                (observed - expected).abs() < 0.015,
                "{action}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn energy_source_present_iff_recharge() {
        let mut sampler = EventSampler::seeded(11);
        for _ in 0..DRAWS {
            let event = sampler.sample();
            assert_eq!(event.energy_source.is_some(), event.action == Action::Recharge);
        }
    }

    #[test]
    fn per_action_ranges_hold() {
        let mut sampler = EventSampler::seeded(13);
        for _ in 0..DRAWS {
            let event = sampler.sample();
            assert!(event.xp_delta >= 0);

            match event.action {
                Action::KillEnemy => {
                    assert!((10..=40).contains(&event.xp_delta));
                    assert!([-1, 0, 1].contains(&event.karma_delta));
                }
                Action::KillCivilian => {
                    assert!((0..=8).contains(&event.xp_delta));
                    assert!((-50..=-20).contains(&event.karma_delta));
                }
                Action::MoralChoice => {
                    assert!((5..=20).contains(&event.xp_delta));
                    assert!((30..=60).contains(&event.karma_delta.abs()));
                }
                Action::Recharge => {
                    assert_eq!(event.xp_delta, 0);
                    assert_eq!(event.karma_delta, 0);
                }
                Action::MissionComplete => {
                    assert!((80..=200).contains(&event.xp_delta));
                    assert!(event.karma_delta == 0 || (5..=20).contains(&event.karma_delta.abs()));
                }
                Action::AbilityUpgrade => {
                    assert_eq!(event.xp_delta, 0);
                    assert_eq!(event.karma_delta, 0);
                }
            }
        }
    }

    #[test]
    fn moral_choice_signs_are_balanced() {
        let mut sampler = EventSampler::seeded(17);
        let (mut pos, mut neg) = (0usize, 0usize);
        for _ in 0..DRAWS {
            let event = sampler.sample();
            if event.action == Action::MoralChoice {
                if event.karma_delta > 0 {
                    pos += 1;
                } else {
                    neg += 1;
                }
            }
        }
        let total = pos + neg;
        assert!(total > 0);
        let ratio = pos as f64 / total as f64;
        assert!((0.45..=0.55).contains(&ratio), "sign ratio {ratio:.3}");
    }

    #[test]
    fn seeded_sampler_is_deterministic() {
        let mut a = EventSampler::seeded(42);
        let mut b = EventSampler::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.sample(), b.sample());
        }
    }
}
