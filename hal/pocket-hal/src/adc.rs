//! One-shot ADC channel abstraction

/// ADC read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    Conversion,
    /// Channel was not configured
    NotConfigured,
}

impl core::fmt::Display for AdcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Conversion => write!(f, "ADC conversion failed"),
            Self::NotConfigured => write!(f, "ADC channel not configured"),
        }
    }
}

/// A single analog input channel
///
/// Readings are raw 12-bit values (0-4095), 12 dB attenuation.
pub trait AnalogInput {
    /// Take one raw sample
    fn read_raw(&mut self) -> Result<u16, AdcError>;
}
