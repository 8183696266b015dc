//! Buttons wired straight to GPIO

use pocket_hal::InputPin;

use super::RawInput;
use crate::button::{Button, ButtonState, BUTTON_COUNT};

/// One active-low input per button
///
/// Pins are expected to be configured as inputs with pull-ups; a pressed
/// button pulls its line low. Buttons without a pin never report pressed.
pub struct GpioGamepad<P> {
    pins: [Option<P>; BUTTON_COUNT],
}

impl<P: InputPin> GpioGamepad<P> {
    /// Gamepad with no pins assigned
    pub fn new() -> Self {
        Self {
            pins: core::array::from_fn(|_| None),
        }
    }

    /// Assign the pin for a button
    pub fn with_pin(mut self, button: Button, pin: P) -> Self {
        self.pins[button.index()] = Some(pin);
        self
    }

    /// Check if a button has a pin assigned
    pub fn has_pin(&self, button: Button) -> bool {
        self.pins[button.index()].is_some()
    }
}

impl<P: InputPin> Default for GpioGamepad<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin> RawInput for GpioGamepad<P> {
    fn read_raw(&mut self) -> ButtonState {
        let mut state = ButtonState::EMPTY;
        for button in Button::ALL {
            if let Some(pin) = &self.pins[button.index()] {
                state.set(button, pin.is_low());
            }
        }
        state
    }
}
