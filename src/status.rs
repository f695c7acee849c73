//! Console status display

use std::io::{self, Write};

use crate::config::Config;

/// Display sink for mode/rate changes
pub trait StatusSink: Send + Sync {
    fn refresh(&self, enabled: bool, cps: u32);
}

/// Renders a single overwritable status line on stdout
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn refresh(&self, enabled: bool, cps: u32) {
        print!(
            "\rStatus: {} | Click rate: {} CPS",
            if enabled { "ENABLED " } else { "DISABLED" },
            cps
        );
        let _ = io::stdout().flush();
    }
}

/// One-time startup banner with usage instructions
pub fn print_banner(config: &Config) {
    println!("=======================================");
    println!("rampclick started");
    println!("=======================================");
    println!(
        "1. Press mouse button {} or {} to toggle auto-clicking mode",
        config.toggle_buttons[0], config.toggle_buttons[1]
    );
    println!("2. When enabled, hold the left mouse button to auto-click");
    println!(
        "3. Use the scroll wheel to adjust the click rate ({}-{} clicks/second)",
        config.min_cps, config.max_cps
    );
    println!("   - Scroll DOWN to INCREASE the rate");
    println!("   - Scroll UP to DECREASE the rate");
    println!("4. Auto-clicking stops when the left button is released");
    println!("5. Clicking speed ramps up gradually on each press");
    println!("6. Press Ctrl+C to exit");
    println!();
}
