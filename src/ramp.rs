//! Ramp-up scheduling
//!
//! Each activation starts below full speed and climbs to it over a short,
//! fixed wall-clock window. The plan is computed once per activation from
//! the rate in effect at that moment and discarded afterwards; the click
//! loop re-checks eligibility before executing each step.

use std::time::Duration;

use rand::Rng;

use crate::config::Config;
use crate::input_simulator::next_click_delay;

/// One step of a ramp-up: click, then wait `delay`
#[derive(Debug, Clone, Copy)]
pub struct RampStep {
    /// Fraction of full speed this step runs at, in (0, 1]
    pub fraction: f64,
    /// Jittered pause after this step's click
    pub delay: Duration,
}

/// Per-activation ramp plan
#[derive(Debug)]
pub struct RampPlan {
    steps: Vec<RampStep>,
}

/// Speed fraction for 1-indexed `step` of `total`: rises linearly from
/// just above `floor` to exactly 1.0 on the final step.
pub fn speed_fraction(step: u32, total: u32, floor: f64) -> f64 {
    floor + (1.0 - floor) * step as f64 / total as f64
}

impl RampPlan {
    /// Build the plan for one activation at the given base rate
    pub fn new<R: Rng>(base_cps: u32, config: &Config, rng: &mut R) -> Self {
        let total = config.ramp_steps.max(1);
        let steps = (1..=total)
            .map(|i| {
                let fraction = speed_fraction(i, total, config.ramp_floor);
                RampStep {
                    fraction,
                    delay: next_click_delay(base_cps, fraction, config.jitter, rng),
                }
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[RampStep] {
        &self.steps
    }
}
