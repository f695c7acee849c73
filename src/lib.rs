//! rampclick - hold-to-click auto-clicker
//!
//! This library provides components for:
//! - Global input interception (toggle buttons, trigger, scroll-wheel rate)
//! - A lock-guarded state machine shared with the clicking thread
//! - Click synthesis with ramp-up and randomized, human-like cadence

pub mod classifier;
pub mod click_loop;
pub mod config;
pub mod input_listener;
pub mod input_simulator;
pub mod ramp;
pub mod state;
pub mod status;

pub use click_loop::start_click_loop;
pub use config::Config;
pub use input_listener::InputListener;
pub use input_simulator::{ClickSynthesizer, EventSink, RdevEventSink};
pub use state::ClickerState;
pub use status::{ConsoleStatus, StatusSink};

use thiserror::Error;

/// Main error type for rampclick
#[derive(Error, Debug)]
pub enum RampClickError {
    #[error("Failed to establish input event tap: {0}")]
    EventTap(String),

    #[error("Failed to send input event: {0}")]
    SendEvent(String),
}
