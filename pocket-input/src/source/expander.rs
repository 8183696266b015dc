//! Buttons behind an I2C port expander

use pocket_hal::i2c::I2cConfig;
use pocket_hal::I2cBus;

use super::RawInput;
use crate::button::{Button, ButtonState};

/// 7-bit bus address of the expander
pub const EXPANDER_ADDRESS: u8 = 0x20;

/// Bus settings the expander is wired for (200 kHz, pull-ups on SDA/SCL)
pub const EXPANDER_BUS: I2cConfig = I2cConfig::EXPANDER;

const REPORT_LEN: usize = 5;

/// Expander line for each button
const LINE_MAP: [(u8, Button); 9] = [
    (2, Button::Up),
    (3, Button::Down),
    (4, Button::Left),
    (5, Button::Right),
    (8, Button::Menu),
    (1, Button::Select),
    (0, Button::Start),
    (6, Button::A),
    (7, Button::B),
];

/// Gamepad read as a 5-byte report from an I2C expander
///
/// Bytes 1 and 2 hold the active-low button lines (byte 2 is the high
/// byte). The volume button is not wired.
pub struct ExpanderGamepad<I> {
    bus: I,
}

impl<I: I2cBus> ExpanderGamepad<I> {
    /// Wrap the bus the expander sits on
    pub fn new(bus: I) -> Self {
        Self { bus }
    }

    /// Decode a raw report
    pub fn decode(report: &[u8; REPORT_LEN]) -> ButtonState {
        let lines = !((u16::from(report[2]) << 8) | u16::from(report[1]));
        let mut state = ButtonState::EMPTY;
        for (line, button) in LINE_MAP {
            if lines & (1 << line) != 0 {
                state.set(button, true);
            }
        }
        state
    }

    /// Underlying bus
    pub fn bus_mut(&mut self) -> &mut I {
        &mut self.bus
    }
}

impl<I: I2cBus> RawInput for ExpanderGamepad<I> {
    fn read_raw(&mut self) -> ButtonState {
        let mut report = [0u8; REPORT_LEN];
        match self.bus.read(EXPANDER_ADDRESS, &mut report) {
            Ok(()) => Self::decode(&report),
            Err(_) => {
                error!("read from expander {=u8:#x} failed", EXPANDER_ADDRESS);
                ButtonState::EMPTY
            }
        }
    }
}
