//! I2C bus abstractions
//!
//! Provides traits for I2C master operations. Used by handhelds that sit
//! their buttons behind an I/O expander.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::EXPANDER
    }
}

impl I2cConfig {
    /// Button expander bus clock (200 kHz)
    pub const EXPANDER: Self = Self { frequency: 200_000 };
}
