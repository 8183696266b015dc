//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by board support code.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Output pin that can be handed back to the chip's reset configuration
///
/// Panel control lines (data/command select, backlight enable) are returned
/// to this state when the panel is torn down: input mode, no pulls, output
/// driver disabled.
pub trait ControlPin: OutputPin {
    /// Return the pin to its power-on default configuration
    fn reset(&mut self);

    /// Check if the pin is in its power-on default configuration
    fn is_reset(&self) -> bool;
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
