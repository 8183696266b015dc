//! Session and transfer errors

use pocket_hal::{LcdError, ScalerError};

use crate::config::ConfigError;

/// Errors raised while bringing a panel session up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Configuration rejected before any hardware was touched
    InvalidConfig(ConfigError),
    /// Panel bus or controller bring-up failed
    PanelOpen(LcdError),
    /// Scratch or scale buffer allocation failed
    ScratchAlloc {
        /// Requested buffer size in pixels
        pixels: usize,
    },
    /// Scaling accelerator client registration failed
    ScalerRegister(ScalerError),
    /// Completion callback registration failed
    CallbackRegister(LcdError),
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid configuration: {}", e),
            Self::PanelOpen(e) => write!(f, "panel open failed: {}", e),
            Self::ScratchAlloc { pixels } => {
                write!(f, "failed to allocate {} pixel buffer", pixels)
            }
            Self::ScalerRegister(e) => write!(f, "scaler registration failed: {}", e),
            Self::CallbackRegister(e) => write!(f, "callback registration failed: {}", e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Errors raised while transferring a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// Session is not initialized
    NotReady,
    /// Frame buffer length does not match the configured geometry
    BufferSize {
        /// Pixels expected (`width × height`)
        expected: usize,
        /// Pixels supplied
        actual: usize,
    },
    /// The panel rejected a chunk submission
    Submit {
        /// Index of the failing chunk
        chunk: usize,
        /// Driver error
        error: LcdError,
    },
    /// The accelerator failed to scale a chunk
    Scale {
        /// Index of the failing chunk
        chunk: usize,
        /// Accelerator error
        error: ScalerError,
    },
    /// Completion did not arrive within the configured timeout
    Timeout {
        /// Index of the chunk still in flight
        chunk: usize,
    },
}

impl TransferError {
    /// Hardware faults mid-frame; the frame cannot be completed
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Submit { .. } | Self::Scale { .. })
    }
}

impl core::fmt::Display for TransferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotReady => write!(f, "panel session not initialized"),
            Self::BufferSize { expected, actual } => {
                write!(f, "frame buffer holds {} pixels, expected {}", actual, expected)
            }
            Self::Submit { chunk, error } => {
                write!(f, "chunk {} submission failed: {}", chunk, error)
            }
            Self::Scale { chunk, error } => write!(f, "chunk {} scaling failed: {}", chunk, error),
            Self::Timeout { chunk } => write!(f, "chunk {} completion timed out", chunk),
        }
    }
}
