//! Software debounce
//!
//! Each button keeps its last eight raw samples. A button only changes state
//! when its two most recent samples agree: `00` releases it, `11` presses
//! it, anything else keeps the current state. Histories start at `0xFF`, so
//! a button held at power-up is reported after a single sample.

use crate::button::{Button, ButtonState, BUTTON_COUNT};

/// Per-button sample history
#[derive(Debug, Clone)]
pub struct Debouncer {
    history: [u8; BUTTON_COUNT],
    state: ButtonState,
}

impl Debouncer {
    /// Fresh debouncer, nothing pressed
    pub const fn new() -> Self {
        Self {
            history: [0xFF; BUTTON_COUNT],
            state: ButtonState::EMPTY,
        }
    }

    /// Feed one raw sample and return the debounced state
    pub fn update(&mut self, raw: ButtonState) -> ButtonState {
        for button in Button::ALL {
            let history = &mut self.history[button.index()];
            *history = (*history << 1) | u8::from(raw.is_pressed(button));
            match *history & 0b11 {
                0b00 => self.state.set(button, false),
                0b11 => self.state.set(button, true),
                _ => {}
            }
        }
        self.state
    }

    /// Current debounced state
    pub fn state(&self) -> ButtonState {
        self.state
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
