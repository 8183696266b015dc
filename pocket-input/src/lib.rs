//! Gamepad input for Pocket handhelds
//!
//! A background task samples the buttons every 10 ms, debounces them and
//! publishes the result as a bitmask that any task can read.
//!
//! ```text
//! RawInput ──► Debouncer ──► Gamepad (AtomicU32) ──► readers
//!  (GPIO / ADC / I2C)                                 wait_for_button_press
//! ```
//!
//! # Usage
//!
//! ```ignore
//! static GAMEPAD: Gamepad = Gamepad::new();
//!
//! #[embassy_executor::task]
//! async fn input_task(source: ExpanderGamepad<I2c>) {
//!     poll_input(source, &GAMEPAD, PollConfig::default()).await
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod button;
pub mod debounce;
pub mod gamepad;
pub mod source;

#[cfg(test)]
mod mocks;

pub use button::{Button, ButtonState, BUTTON_COUNT};
pub use debounce::Debouncer;
pub use gamepad::{poll_input, wait_for_button_press, Gamepad, InputPoller, PollConfig};
pub use source::{AnalogJoystick, ExpanderGamepad, GpioGamepad, RawInput};
