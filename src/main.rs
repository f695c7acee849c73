//! rampclick - hold-to-click auto-clicker
//!
//! Intercepts system-wide mouse events: configured side/middle buttons
//! toggle auto-click mode, and while the mode is on, holding the left
//! button synthesizes clicks at a scroll-adjustable rate.

use rampclick::{
    start_click_loop, status, ClickSynthesizer, ClickerState, Config, ConsoleStatus,
    InputListener, RampClickError, RdevEventSink, StatusSink,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), RampClickError> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("rampclick starting...");

    let config = Config::default();
    info!(
        "Config: toggle buttons {:?}, rate {}-{} cps (step {}), ramp {}ms/{} steps",
        config.toggle_buttons,
        config.min_cps,
        config.max_cps,
        config.cps_step,
        config.ramp_duration.as_millis(),
        config.ramp_steps
    );

    let state = Arc::new(ClickerState::new(&config));
    let console: Arc<dyn StatusSink> = Arc::new(ConsoleStatus);

    // Set up Ctrl+C handler for graceful shutdown. The grab below blocks
    // the main thread with no way to unhook it, so exit directly after
    // stopping the click loop.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        info!("Shutdown signal received");
        running_clone.store(false, Ordering::SeqCst);
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    // Start the clicking thread
    let synthesizer = ClickSynthesizer::new(RdevEventSink, &config);
    let _click_handle = start_click_loop(state.clone(), synthesizer, config.clone(), running);

    status::print_banner(&config);
    let initial = state.status();
    console.refresh(initial.enabled, initial.cps);
    println!();

    // Run the event tap on the main thread; this blocks indefinitely
    let listener = InputListener::new(state, console, config);
    match listener.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Failed to establish the input event tap: {}", e);
            error!("On macOS, grant accessibility permission to your terminal:");
            error!("  System Preferences > Security & Privacy > Privacy > Accessibility");
            error!("On Linux, add your user to the 'input' group and re-login:");
            error!("  sudo usermod -aG input $USER");
            Err(e)
        }
    }
}
