//! Click synthesis
//!
//! Synthetic events go out through the [`EventSink`] seam so tests can
//! substitute a recording sink; production uses `rdev::simulate`, which
//! posts at the current pointer location.

use std::thread;
use std::time::Duration;

use rand::Rng;
use rdev::{simulate, Button, EventType};
use tracing::debug;

use crate::config::Config;
use crate::RampClickError;

/// Outlet for synthetic input events
pub trait EventSink: Send {
    fn post(&mut self, event_type: &EventType) -> Result<(), RampClickError>;
}

/// Production sink backed by `rdev::simulate`
pub struct RdevEventSink;

impl EventSink for RdevEventSink {
    fn post(&mut self, event_type: &EventType) -> Result<(), RampClickError> {
        simulate(event_type)
            .map_err(|e| RampClickError::SendEvent(format!("{:?} for {:?}", e, event_type)))
    }
}

/// Issues one synthetic left-click (press, short pulse, release) per call
pub struct ClickSynthesizer<S: EventSink> {
    sink: S,
    pulse: Duration,
}

impl<S: EventSink> ClickSynthesizer<S> {
    pub fn new(sink: S, config: &Config) -> Self {
        Self {
            sink,
            pulse: config.click_pulse,
        }
    }

    /// Post exactly one press and one release, press first. The pulse in
    /// between makes the pair read as a discrete click downstream.
    pub fn click(&mut self) -> Result<(), RampClickError> {
        debug!("Synthesizing left click");
        self.sink.post(&EventType::ButtonPress(Button::Left))?;
        thread::sleep(self.pulse);
        self.sink.post(&EventType::ButtonRelease(Button::Left))
    }
}

/// Jittered pause before the next click: the base period for `cps` scaled
/// up by a reduced speed fraction, then scaled by a uniform random factor
/// in `[1 - jitter, 1 + jitter]`.
pub fn next_click_delay<R: Rng>(cps: u32, fraction: f64, jitter: f64, rng: &mut R) -> Duration {
    let base_micros = 1_000_000.0 / (cps.max(1) as f64 * fraction);
    let factor = rng.random_range(1.0 - jitter..=1.0 + jitter);
    Duration::from_micros((base_micros * factor) as u64)
}

/// Sink that records every posted event, for tests
#[cfg(test)]
pub(crate) struct RecordingSink {
    events: std::sync::Arc<std::sync::Mutex<Vec<EventType>>>,
}

#[cfg(test)]
impl RecordingSink {
    pub(crate) fn new() -> (Self, std::sync::Arc<std::sync::Mutex<Vec<EventType>>>) {
        let events = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn post(&mut self, event_type: &EventType) -> Result<(), RampClickError> {
        self.events.lock().unwrap().push(*event_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn click_posts_one_press_then_one_release() {
        let (sink, events) = RecordingSink::new();
        let config = Config {
            click_pulse: Duration::from_millis(1),
            ..Config::default()
        };
        let mut synthesizer = ClickSynthesizer::new(sink, &config);

        synthesizer.click().unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                EventType::ButtonPress(Button::Left),
                EventType::ButtonRelease(Button::Left),
            ]
        );
    }

    #[test]
    fn chained_clicks_alternate_press_and_release() {
        let (sink, events) = RecordingSink::new();
        let config = Config {
            click_pulse: Duration::from_millis(1),
            ..Config::default()
        };
        let mut synthesizer = ClickSynthesizer::new(sink, &config);

        for _ in 0..3 {
            synthesizer.click().unwrap();
        }

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 6);
        for pair in events.chunks(2) {
            assert_eq!(pair[0], EventType::ButtonPress(Button::Left));
            assert_eq!(pair[1], EventType::ButtonRelease(Button::Left));
        }
    }

    #[test]
    fn delay_is_centered_on_the_click_period() {
        let mut rng = SmallRng::seed_from_u64(7);
        // 20 cps at full speed: 50ms base, ±10% jitter
        for _ in 0..100 {
            let delay = next_click_delay(20, 1.0, 0.1, &mut rng);
            let micros = delay.as_micros();
            assert!((45_000..=55_000).contains(&micros), "delay {}", micros);
        }
    }

    #[test]
    fn reduced_fraction_stretches_the_delay() {
        let mut rng = SmallRng::seed_from_u64(7);
        // Half speed doubles the base period: 100ms ±10%
        for _ in 0..100 {
            let delay = next_click_delay(20, 0.5, 0.1, &mut rng);
            let micros = delay.as_micros();
            assert!((90_000..=110_000).contains(&micros), "delay {}", micros);
        }
    }

    #[test]
    fn zero_cps_does_not_divide_by_zero() {
        let mut rng = SmallRng::seed_from_u64(7);
        let delay = next_click_delay(0, 1.0, 0.0, &mut rng);
        assert_eq!(delay, Duration::from_secs(1));
    }
}
