//! Global input interception using rdev's grab API
//!
//! The grab callback runs synchronously on the OS input pipeline for every
//! system-wide event, so it must stay fast: classify, one short-lived state
//! transition, refresh the status line outside the lock, and return.
//! Returning `None` swallows the event; returning it passes it through.

use rdev::{grab, Event};
use std::sync::Arc;
use tracing::{debug, info};

use crate::classifier::{classify, EventKind};
use crate::config::Config;
use crate::state::{ClickerState, ScrollOutcome};
use crate::status::StatusSink;
use crate::RampClickError;

/// Owns the grab callback and its collaborators
pub struct InputListener {
    state: Arc<ClickerState>,
    status: Arc<dyn StatusSink>,
    config: Config,
}

impl InputListener {
    pub fn new(state: Arc<ClickerState>, status: Arc<dyn StatusSink>, config: Config) -> Self {
        Self {
            state,
            status,
            config,
        }
    }

    /// Run the event tap on the current thread. Blocks indefinitely; an
    /// error here means the tap could not be established at all (on macOS
    /// this is almost always a missing accessibility permission).
    pub fn run(self) -> Result<(), RampClickError> {
        let Self {
            state,
            status,
            config,
        } = self;

        info!("Input tap starting");

        grab(move |event: Event| handle_event(event, &state, status.as_ref(), &config))
            .map_err(|e| RampClickError::EventTap(format!("{:?}", e)))
    }
}

/// Per-event handler behind the grab callback. Kept free-standing so the
/// consume/pass decisions are testable without a live tap.
fn handle_event(
    event: Event,
    state: &ClickerState,
    status: &dyn StatusSink,
    config: &Config,
) -> Option<Event> {
    match classify(&event.event_type, config) {
        EventKind::Toggle => {
            let update = state.toggle();
            debug!("Auto-click mode {}", if update.enabled { "enabled" } else { "disabled" });
            status.refresh(update.enabled, update.cps);
            Some(event)
        }
        EventKind::TriggerDown => {
            state.trigger_down();
            Some(event)
        }
        EventKind::TriggerUp => {
            state.trigger_up();
            Some(event)
        }
        kind @ (EventKind::ScrollUp | EventKind::ScrollDown) => {
            // Inverted on purpose: scrolling the wheel down raises the rate
            let delta = if kind == EventKind::ScrollUp {
                -(config.cps_step as i32)
            } else {
                config.cps_step as i32
            };
            match state.scroll_adjust(delta) {
                ScrollOutcome::Disabled => Some(event),
                ScrollOutcome::Saturated => consume_scroll(event, config),
                ScrollOutcome::Adjusted(update) => {
                    status.refresh(update.enabled, update.cps);
                    consume_scroll(event, config)
                }
            }
        }
        EventKind::Ignore => Some(event),
    }
}

fn consume_scroll(event: Event, config: &Config) -> Option<Event> {
    if config.consume_scroll {
        None
    } else {
        Some(event)
    }
}
