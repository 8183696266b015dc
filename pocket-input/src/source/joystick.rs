//! Analog D-pad on two ADC axes

use pocket_hal::{AnalogInput, InputPin};

use super::{GpioGamepad, RawInput};
use crate::button::{Button, ButtonState};

/// Axis reading above which the axis is pushed to its high side
pub const AXIS_HIGH: u16 = 2048 + 1024;

/// Axis reading above which the axis is pushed to its low side
///
/// Readings at or below this value are centred.
pub const AXIS_LOW: u16 = 1024;

/// D-pad read from two 12-bit ADC axes, other buttons on GPIO
///
/// X above [`AXIS_HIGH`] is Left, above [`AXIS_LOW`] is Right. Y above
/// [`AXIS_HIGH`] is Up, above [`AXIS_LOW`] is Down.
pub struct AnalogJoystick<X, Y, P> {
    x: X,
    y: Y,
    buttons: GpioGamepad<P>,
}

impl<X, Y, P> AnalogJoystick<X, Y, P>
where
    X: AnalogInput,
    Y: AnalogInput,
    P: InputPin,
{
    /// Combine the two axes with the GPIO buttons
    pub fn new(x: X, y: Y, buttons: GpioGamepad<P>) -> Self {
        Self { x, y, buttons }
    }

    fn axis(
        reading: Result<u16, pocket_hal::AdcError>,
        high: Button,
        low: Button,
    ) -> Option<Button> {
        match reading {
            Ok(value) if value > AXIS_HIGH => Some(high),
            Ok(value) if value > AXIS_LOW => Some(low),
            Ok(_) => None,
            Err(e) => {
                error!("joystick axis read failed: {}", e);
                None
            }
        }
    }
}

impl<X, Y, P> RawInput for AnalogJoystick<X, Y, P>
where
    X: AnalogInput,
    Y: AnalogInput,
    P: InputPin,
{
    fn read_raw(&mut self) -> ButtonState {
        let mut state = self.buttons.read_raw();
        for button in [
            Self::axis(self.x.read_raw(), Button::Left, Button::Right),
            Self::axis(self.y.read_raw(), Button::Up, Button::Down),
        ]
        .into_iter()
        .flatten()
        {
            state.set(button, true);
        }
        state
    }
}
