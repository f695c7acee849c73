//! Shared clicker state
//!
//! One mutex guards the whole mode/trigger/rate bundle. The event callback
//! and the clicking thread both go through the operations here; neither ever
//! touches a raw field, and every compound read or write happens under a
//! single lock acquisition. Operations return any resulting [`StatusUpdate`]
//! instead of pushing it to the display sink, so callers never hold the lock
//! while rendering.

use std::sync::Mutex;

use crate::config::Config;

/// Point-in-time view of the state, taken under the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Toggle enabled and trigger held
    pub active: bool,
    /// The next click in this activation should run the ramp
    pub activating: bool,
    /// Current click rate
    pub cps: u32,
}

/// Payload for the status line, emitted on mode or rate changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub enabled: bool,
    pub cps: u32,
}

/// Result of a scroll-driven rate adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Toggle is off; scroll means nothing to us
    Disabled,
    /// Already at a rate bound; no change, no refresh
    Saturated,
    /// Rate changed
    Adjusted(StatusUpdate),
}

struct StateInner {
    toggle_enabled: bool,
    trigger_held: bool,
    activating: bool,
    cps: u32,
}

/// The state bundle shared between the event callback and the click loop
pub struct ClickerState {
    inner: Mutex<StateInner>,
    min_cps: u32,
    max_cps: u32,
}

impl ClickerState {
    pub fn new(config: &Config) -> Self {
        Self {
            inner: Mutex::new(StateInner {
                toggle_enabled: false,
                trigger_held: false,
                activating: true,
                cps: config.initial_cps.clamp(config.min_cps, config.max_cps),
            }),
            min_cps: config.min_cps,
            max_cps: config.max_cps,
        }
    }

    /// Flip auto-click mode. Enabling re-arms the ramp so the first
    /// activation starts slow.
    pub fn toggle(&self) -> StatusUpdate {
        let mut inner = self.inner.lock().unwrap();
        inner.toggle_enabled = !inner.toggle_enabled;
        if inner.toggle_enabled {
            inner.activating = true;
        }
        StatusUpdate {
            enabled: inner.toggle_enabled,
            cps: inner.cps,
        }
    }

    /// The trigger button went down. Arms the ramp while the toggle is
    /// enabled so every fresh press starts a new ramp-up.
    pub fn trigger_down(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.trigger_held = true;
        if inner.toggle_enabled {
            inner.activating = true;
        }
    }

    /// The trigger button was released. Re-arms the ramp for the next press.
    pub fn trigger_up(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.trigger_held = false;
        if inner.toggle_enabled {
            inner.activating = true;
        }
    }

    /// Adjust the click rate by `delta`, clamped to the configured range.
    /// Returns `None` when already saturated at a bound (no refresh needed).
    pub fn adjust_rate(&self, delta: i32) -> Option<StatusUpdate> {
        let mut inner = self.inner.lock().unwrap();
        Self::apply_rate_delta(&mut inner, delta, self.min_cps, self.max_cps)
    }

    /// Scroll-driven rate adjustment. A single lock acquisition covers the
    /// enabled check and the rate change, so the scroll can never adjust a
    /// rate the user just toggled away from.
    pub fn scroll_adjust(&self, delta: i32) -> ScrollOutcome {
        let mut inner = self.inner.lock().unwrap();
        if !inner.toggle_enabled {
            return ScrollOutcome::Disabled;
        }
        match Self::apply_rate_delta(&mut inner, delta, self.min_cps, self.max_cps) {
            Some(update) => ScrollOutcome::Adjusted(update),
            None => ScrollOutcome::Saturated,
        }
    }

    fn apply_rate_delta(
        inner: &mut StateInner,
        delta: i32,
        min_cps: u32,
        max_cps: u32,
    ) -> Option<StatusUpdate> {
        let new_cps = inner
            .cps
            .saturating_add_signed(delta)
            .clamp(min_cps, max_cps);
        if new_cps == inner.cps {
            return None;
        }
        inner.cps = new_cps;
        Some(StatusUpdate {
            enabled: inner.toggle_enabled,
            cps: inner.cps,
        })
    }

    /// Whether auto-click mode is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.inner.lock().unwrap().toggle_enabled
    }

    /// Atomic snapshot for the click loop
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().unwrap();
        Snapshot {
            active: inner.toggle_enabled && inner.trigger_held,
            activating: inner.activating,
            cps: inner.cps,
        }
    }

    /// Ramp finished normally; steady-state clicking takes over
    pub fn finish_ramp(&self) {
        self.inner.lock().unwrap().activating = false;
    }

    /// Current status for the initial display
    pub fn status(&self) -> StatusUpdate {
        let inner = self.inner.lock().unwrap();
        StatusUpdate {
            enabled: inner.toggle_enabled,
            cps: inner.cps,
        }
    }
}
