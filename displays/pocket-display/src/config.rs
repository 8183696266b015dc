//! Panel configuration
//!
//! Screen geometry, transfer chunking and scaling for a panel session, plus
//! presets for the supported boards.

use embassy_time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::backend::BackendKind;

/// Rows per transfer chunk used by the board presets
pub const DEFAULT_CHUNK_HEIGHT: u16 = 4;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width or height is zero
    ZeroDimension,
    /// Chunk height is zero
    ZeroChunkHeight,
    /// Scale factor is zero, or the ratio is not a positive finite value
    /// no larger than the factor
    InvalidScaleFactor,
    /// Scaled geometry does not fit panel coordinates
    OutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "width and height must be non-zero"),
            Self::ZeroChunkHeight => write!(f, "chunk height must be non-zero"),
            Self::InvalidScaleFactor => write!(f, "invalid scale factor"),
            Self::OutOfRange => write!(f, "scaled geometry exceeds panel coordinates"),
        }
    }
}

/// Scale applied by the accelerator before a chunk reaches the panel
///
/// `factor` sizes the scale buffer and the panel region, `ratio` is handed to
/// the accelerator. They normally match; a ratio below the factor leaves the
/// remainder of the region untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleFactor {
    /// Integer multiplier on both axes (1 = passthrough)
    pub factor: u8,
    /// Ratio passed to the accelerator
    pub ratio: f32,
}

impl ScaleFactor {
    /// Passthrough, no scaling
    pub const IDENTITY: Self = Self {
        factor: 1,
        ratio: 1.0,
    };

    /// Integer scale with a matching ratio
    pub const fn integer(factor: u8) -> Self {
        Self {
            factor,
            ratio: factor as f32,
        }
    }

    /// Create a scale factor, checking it
    pub fn new(factor: u8, ratio: f32) -> Result<Self, ConfigError> {
        let scale = Self { factor, ratio };
        scale.validate()?;
        Ok(scale)
    }

    /// Check factor and ratio
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factor == 0 {
            return Err(ConfigError::InvalidScaleFactor);
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 || self.ratio > self.factor as f32 {
            return Err(ConfigError::InvalidScaleFactor);
        }
        Ok(())
    }

    /// Check if this is passthrough
    pub const fn is_identity(&self) -> bool {
        self.factor == 1
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Configuration of one panel session
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Frame width in pixels
    pub width: u16,
    /// Frame height in rows
    pub height: u16,
    /// Panel row the first frame row lands on
    pub top: u16,
    /// Rows per transfer chunk
    pub chunk_height: u16,
    /// Accelerator scale
    pub scale: ScaleFactor,
    /// Upper bound on each completion wait, `None` waits forever
    pub completion_timeout: Option<Duration>,
}

impl PanelConfig {
    /// Unscaled configuration with the default chunk height
    pub const fn new(width: u16, height: u16, top: u16) -> Self {
        Self {
            width,
            height,
            top,
            chunk_height: DEFAULT_CHUNK_HEIGHT,
            scale: ScaleFactor::IDENTITY,
            completion_timeout: None,
        }
    }

    /// Set the rows per transfer chunk
    pub const fn with_chunk_height(mut self, chunk_height: u16) -> Self {
        self.chunk_height = chunk_height;
        self
    }

    /// Set the accelerator scale
    pub const fn with_scale(mut self, scale: ScaleFactor) -> Self {
        self.scale = scale;
        self
    }

    /// Bound every completion wait
    pub const fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = Some(timeout);
        self
    }

    /// Check the configuration before any hardware is touched
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.chunk_height == 0 {
            return Err(ConfigError::ZeroChunkHeight);
        }
        self.scale.validate()?;

        let factor = u32::from(self.scale.factor);
        let max = u32::from(u16::MAX);
        let right = u32::from(self.width) * factor;
        let bottom = u32::from(self.top) + u32::from(self.height) * factor;
        let chunk_rows = u32::from(self.chunk_height) * factor;
        if right > max || bottom > max || chunk_rows > max {
            return Err(ConfigError::OutOfRange);
        }
        Ok(())
    }

    /// Pixels in one full frame
    pub const fn frame_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixels in one full chunk
    pub const fn chunk_pixels(&self) -> usize {
        self.width as usize * self.chunk_height as usize
    }

    /// Number of chunks per frame
    pub const fn chunk_count(&self) -> usize {
        if self.chunk_height == 0 {
            return 0;
        }
        self.height.div_ceil(self.chunk_height) as usize
    }
}

/// Supported boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardProfile {
    /// ESP32 handheld with an SPI ILI9341 panel
    OdroidGo,
    /// ESP32-P4 function board with a MIPI-DSI panel and scaling accelerator
    Esp32P4Function,
}

impl BoardProfile {
    /// Source frame width
    pub const fn width(&self) -> u16 {
        match self {
            Self::OdroidGo | Self::Esp32P4Function => 320,
        }
    }

    /// Source frame height
    pub const fn height(&self) -> u16 {
        match self {
            Self::OdroidGo | Self::Esp32P4Function => 240,
        }
    }

    /// Vertical panel offset
    pub const fn top(&self) -> u16 {
        match self {
            Self::OdroidGo | Self::Esp32P4Function => 0,
        }
    }

    /// Transfer backend the board needs
    pub const fn backend_kind(&self) -> BackendKind {
        match self {
            Self::OdroidGo => BackendKind::Direct,
            Self::Esp32P4Function => BackendKind::Accelerated,
        }
    }

    /// Session configuration for this board
    pub const fn panel_config(&self) -> PanelConfig {
        PanelConfig::new(self.width(), self.height(), self.top())
    }
}
