//! Configuration for rampclick

use std::time::Duration;

/// Configuration for the auto-clicker
#[derive(Debug, Clone)]
pub struct Config {
    /// Button numbers that toggle auto-click mode (CG-style numbering:
    /// left=0, right=1, middle=2, extra buttons 3+)
    pub toggle_buttons: [u8; 2],

    /// Lowest selectable click rate, clicks per second
    pub min_cps: u32,

    /// Highest selectable click rate, clicks per second
    pub max_cps: u32,

    /// Click rate at startup
    pub initial_cps: u32,

    /// How much one scroll notch changes the rate
    pub cps_step: u32,

    /// Uniform jitter applied to every inter-click delay (0.1 = ±10%)
    pub jitter: f64,

    /// Nominal length of the ramp-up window at the start of each
    /// activation. Informational only: step pacing is derived from the
    /// click rate and speed fraction, not from this duration.
    pub ramp_duration: Duration,

    /// Number of clicks in the ramp-up
    pub ramp_steps: u32,

    /// Speed fraction of the first ramp step; later steps rise to 1.0
    pub ramp_floor: f64,

    /// Gap between synthetic press and release. Long enough to register
    /// as a discrete click, short enough not to read as a held button.
    pub click_pulse: Duration,

    /// Sleep between polls while the clicker is dormant
    pub idle_poll: Duration,

    /// Swallow scroll events while the toggle is enabled so rate changes
    /// don't also scroll the application under the pointer
    pub consume_scroll: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toggle_buttons: [2, 3],
            min_cps: 13,
            max_cps: 25,
            initial_cps: 13,
            cps_step: 1,
            jitter: 0.1,
            ramp_duration: Duration::from_millis(50),
            ramp_steps: 4,
            ramp_floor: 0.5,
            click_pulse: Duration::from_millis(10),
            idle_poll: Duration::from_millis(50),
            consume_scroll: true,
        }
    }
}

impl Config {
    /// Override the toggle button numbers
    pub fn with_toggle_buttons(mut self, buttons: [u8; 2]) -> Self {
        self.toggle_buttons = buttons;
        self
    }

    /// Override the click-rate range
    pub fn with_cps_range(mut self, min: u32, max: u32) -> Self {
        self.min_cps = min;
        self.max_cps = max;
        self.initial_cps = self.initial_cps.clamp(min, max);
        self
    }

    /// Override the ramp-up shape (nominal duration and step count)
    pub fn with_ramp(mut self, duration: Duration, steps: u32) -> Self {
        self.ramp_duration = duration;
        self.ramp_steps = steps;
        self
    }

    /// Override the scroll consumption policy
    pub fn with_consume_scroll(mut self, consume: bool) -> Self {
        self.consume_scroll = consume;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_configuration() {
        let config = Config::default();
        assert_eq!(config.toggle_buttons, [2, 3]);
        assert_eq!(config.min_cps, 13);
        assert_eq!(config.max_cps, 25);
        assert_eq!(config.initial_cps, 13);
        assert_eq!(config.cps_step, 1);
        assert_eq!(config.ramp_steps, 4);
        assert!(config.consume_scroll);
    }

    #[test]
    fn cps_range_clamps_initial_rate() {
        let config = Config::default().with_cps_range(20, 30);
        assert_eq!(config.initial_cps, 20);
    }
}
