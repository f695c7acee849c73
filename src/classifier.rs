//! Classification of raw input events
//!
//! Pure mapping from an rdev event to what it means for the clicker. No
//! shared-state access here; the listener decides consumption from the
//! returned kind plus the current toggle state.

use rdev::{Button, EventType};

use crate::config::Config;

/// What an incoming input event means to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A configured toggle button was pressed
    Toggle,
    /// The trigger (left) button was pressed
    TriggerDown,
    /// The trigger (left) button was released
    TriggerUp,
    /// Scroll wheel moved up (away from the user)
    ScrollUp,
    /// Scroll wheel moved down (toward the user)
    ScrollDown,
    /// Anything else
    Ignore,
}

/// CG-style button numbering: left=0, right=1, middle=2, extras keep
/// their platform code.
fn button_number(button: &Button) -> u8 {
    match button {
        Button::Left => 0,
        Button::Right => 1,
        Button::Middle => 2,
        Button::Unknown(code) => *code,
    }
}

/// Classify a raw input event
pub fn classify(event_type: &EventType, config: &Config) -> EventKind {
    match event_type {
        EventType::ButtonPress(Button::Left) => EventKind::TriggerDown,
        EventType::ButtonRelease(Button::Left) => EventKind::TriggerUp,
        EventType::ButtonPress(button) => {
            if config.toggle_buttons.contains(&button_number(button)) {
                EventKind::Toggle
            } else {
                EventKind::Ignore
            }
        }
        EventType::Wheel { delta_y, .. } => {
            if *delta_y > 0 {
                EventKind::ScrollUp
            } else if *delta_y < 0 {
                EventKind::ScrollDown
            } else {
                EventKind::Ignore
            }
        }
        _ => EventKind::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn left_button_is_the_trigger() {
        let config = config();
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Left), &config),
            EventKind::TriggerDown
        );
        assert_eq!(
            classify(&EventType::ButtonRelease(Button::Left), &config),
            EventKind::TriggerUp
        );
    }

    #[test]
    fn configured_buttons_toggle() {
        let config = config();
        // Middle button is number 2, side button number 3
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Middle), &config),
            EventKind::Toggle
        );
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Unknown(3)), &config),
            EventKind::Toggle
        );
    }

    #[test]
    fn unconfigured_buttons_are_ignored() {
        let config = config();
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Right), &config),
            EventKind::Ignore
        );
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Unknown(7)), &config),
            EventKind::Ignore
        );
        // Releases of non-trigger buttons never matter
        assert_eq!(
            classify(&EventType::ButtonRelease(Button::Middle), &config),
            EventKind::Ignore
        );
    }

    #[test]
    fn scroll_direction_follows_vertical_delta() {
        let config = config();
        let up = EventType::Wheel {
            delta_x: 0,
            delta_y: 1,
        };
        let down = EventType::Wheel {
            delta_x: 0,
            delta_y: -1,
        };
        let flat = EventType::Wheel {
            delta_x: 3,
            delta_y: 0,
        };
        assert_eq!(classify(&up, &config), EventKind::ScrollUp);
        assert_eq!(classify(&down, &config), EventKind::ScrollDown);
        assert_eq!(classify(&flat, &config), EventKind::Ignore);
    }

    #[test]
    fn movement_and_keys_are_ignored() {
        let config = config();
        let moved = EventType::MouseMove { x: 10.0, y: 20.0 };
        assert_eq!(classify(&moved, &config), EventKind::Ignore);
        assert_eq!(
            classify(&EventType::KeyPress(rdev::Key::KeyA), &config),
            EventKind::Ignore
        );
    }

    #[test]
    fn custom_toggle_buttons_are_honored() {
        let config = Config::default().with_toggle_buttons([4, 5]);
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Middle), &config),
            EventKind::Ignore
        );
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Unknown(4)), &config),
            EventKind::Toggle
        );
    }
}
