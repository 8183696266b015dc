//! Buttons and the gamepad bitmask

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of buttons on the gamepad
pub const BUTTON_COUNT: usize = 10;

/// Gamepad button, discriminant is its bit in [`ButtonState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Button {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
    Select = 4,
    Start = 5,
    A = 6,
    B = 7,
    Menu = 8,
    Volume = 9,
}

impl Button {
    /// All buttons in bit order
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Up,
        Button::Right,
        Button::Down,
        Button::Left,
        Button::Select,
        Button::Start,
        Button::A,
        Button::B,
        Button::Menu,
        Button::Volume,
    ];

    /// Bit position in the bitmask
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Button for a bit position
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BUTTON_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    const fn mask(self) -> u32 {
        1 << self as u32
    }
}

/// Pressed buttons as a bitmask, one bit per [`Button`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState(u32);

impl ButtonState {
    /// No button pressed
    pub const EMPTY: Self = Self(0);

    const VALID: u32 = (1 << BUTTON_COUNT) - 1;

    /// Build from raw bits; bits above the last button are dropped
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::VALID)
    }

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if a button is pressed
    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Check if no button is pressed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Mark a button pressed or released
    pub fn set(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.0 |= button.mask();
        } else {
            self.0 &= !button.mask();
        }
    }

    /// Copy with a button marked pressed
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    /// Buttons pressed now that were released in `previous`
    pub const fn pressed_since(self, previous: ButtonState) -> Self {
        Self(self.0 & !previous.0)
    }

    /// Lowest-index pressed button
    pub fn first(self) -> Option<Button> {
        if self.0 == 0 {
            return None;
        }
        Button::from_index(self.0.trailing_zeros() as usize)
    }

    /// Pressed buttons in bit order
    pub fn pressed(self) -> Vec<Button, BUTTON_COUNT> {
        Button::ALL
            .iter()
            .copied()
            .filter(|&b| self.is_pressed(b))
            .collect()
    }
}
