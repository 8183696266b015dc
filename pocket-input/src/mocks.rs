//! Mock hardware for host tests

use pocket_hal::{AdcError, AnalogInput, I2cBus, InputPin};

/// Input line with a fixed level
pub struct MockInput {
    pub high: bool,
}

impl MockInput {
    /// Line held low by a pressed button
    pub fn pressed() -> Self {
        Self { high: false }
    }

    /// Line pulled up, button released
    pub fn released() -> Self {
        Self { high: true }
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.high
    }
}

/// ADC channel returning a fixed result
pub struct MockAdc {
    pub result: Result<u16, AdcError>,
}

impl MockAdc {
    pub fn reading(value: u16) -> Self {
        Self { result: Ok(value) }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(AdcError::Conversion),
        }
    }
}

impl AnalogInput for MockAdc {
    fn read_raw(&mut self) -> Result<u16, AdcError> {
        self.result
    }
}

/// I2C bus answering every read with a fixed report
pub struct MockI2c {
    pub report: [u8; 5],
    pub fail: bool,
    pub last_address: Option<u8>,
    pub last_len: usize,
}

impl MockI2c {
    pub fn with_report(report: [u8; 5]) -> Self {
        Self {
            report,
            fail: false,
            last_address: None,
            last_len: 0,
        }
    }
}

impl I2cBus for MockI2c {
    type Error = ();

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.last_address = Some(address);
        self.last_len = buf.len();
        if self.fail {
            return Err(());
        }
        let n = buf.len().min(self.report.len());
        buf[..n].copy_from_slice(&self.report[..n]);
        Ok(())
    }
}
