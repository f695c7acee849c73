//! The background clicking thread
//!
//! The only execution context that synthesizes clicks. It never blocks the
//! event callback: coordination is a shared [`ClickerState`] snapshot taken
//! once per iteration, so a toggle-off or trigger release is observed within
//! one inter-click delay (or one idle tick when dormant).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use rand::Rng;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::input_simulator::{next_click_delay, ClickSynthesizer, EventSink};
use crate::ramp::RampPlan;
use crate::state::ClickerState;

/// Spawn the clicking thread. It runs until `running` is cleared.
pub fn start_click_loop<S: EventSink + 'static>(
    state: Arc<ClickerState>,
    synthesizer: ClickSynthesizer<S>,
    config: Config,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        info!("Click loop started");
        run(&state, synthesizer, &config, &running);
        info!("Click loop stopped");
    })
}

fn run<S: EventSink>(
    state: &ClickerState,
    mut synthesizer: ClickSynthesizer<S>,
    config: &Config,
    running: &AtomicBool,
) {
    let mut rng = rand::rng();

    while running.load(Ordering::SeqCst) {
        let snapshot = state.snapshot();

        if !snapshot.active {
            thread::sleep(config.idle_poll);
            continue;
        }

        if snapshot.activating {
            if ramp_up(state, &mut synthesizer, config, snapshot.cps, &mut rng) {
                state.finish_ramp();
            }
            // Steady state (or dormancy) picks up on the next iteration
            continue;
        }

        if let Err(e) = synthesizer.click() {
            error!("Failed to synthesize click: {}", e);
        }

        // Re-read the rate so a scroll during the click lands on the very
        // next delay, not on the next activation
        let cps = state.snapshot().cps;
        thread::sleep(next_click_delay(cps, 1.0, config.jitter, &mut rng));
    }
}

/// Execute one ramp-up. Returns true when the full plan ran; false when it
/// was abandoned because the activation ended mid-ramp.
fn ramp_up<S: EventSink, R: Rng>(
    state: &ClickerState,
    synthesizer: &mut ClickSynthesizer<S>,
    config: &Config,
    base_cps: u32,
    rng: &mut R,
) -> bool {
    let plan = RampPlan::new(base_cps, config, rng);
    debug!("Ramping up over {} steps at {} cps", plan.steps().len(), base_cps);

    for step in plan.steps() {
        // Fresh snapshot before every step; toggle-off or release aborts
        if !state.snapshot().active {
            debug!("Ramp abandoned");
            return false;
        }
        if let Err(e) = synthesizer.click() {
            error!("Failed to synthesize ramp click: {}", e);
        }
        thread::sleep(step.delay);
    }

    debug!("Ramp complete");
    true
}
