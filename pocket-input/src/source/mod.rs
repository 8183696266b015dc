//! Raw button sources
//!
//! A source samples the hardware once and reports which buttons are down,
//! without any debouncing. Which source a board uses is fixed by its wiring:
//!
//! - [`GpioGamepad`]: one active-low GPIO per button
//! - [`AnalogJoystick`]: D-pad on two ADC axes, other buttons on GPIO
//! - [`ExpanderGamepad`]: all buttons behind an I2C port expander

mod expander;
mod gpio;
mod joystick;

pub use expander::{ExpanderGamepad, EXPANDER_ADDRESS, EXPANDER_BUS};
pub use gpio::GpioGamepad;
pub use joystick::{AnalogJoystick, AXIS_HIGH, AXIS_LOW};

use crate::button::ButtonState;

/// Undebounced button sampler
pub trait RawInput {
    /// Sample every button once
    ///
    /// Read failures are logged and report the affected buttons released.
    fn read_raw(&mut self) -> ButtonState;
}
