//! LCD panel transfer abstractions
//!
//! Panels accept pixel data through a size-limited transfer channel. A
//! submission returns as soon as the transfer is queued; the hardware copies
//! the pixels in the background and reports completion through a callback
//! that runs in interrupt context.
//!
//! Two panel flavours exist and they report completion through different
//! callback shapes:
//!
//! - [`IoPanel`]: panels behind a panel-IO channel (SPI, i80). Completion is
//!   reported on the IO handle. The controller has to be switched on
//!   explicitly after reset.
//! - [`DpiPanel`]: panels driven over a DPI / MIPI-DSI video interface.
//!   Completion is reported on the panel handle and the panel manages its
//!   own power state.

/// Panel driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Bus or controller did not respond
    Bus,
    /// Transfer queue is full
    QueueFull,
    /// Region lies outside the panel or does not match the pixel count
    InvalidRegion,
    /// Panel has not been opened
    NotOpen,
    /// Callback registration rejected by the driver
    Callback,
}

impl core::fmt::Display for LcdError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus => write!(f, "panel bus error"),
            Self::QueueFull => write!(f, "panel transfer queue full"),
            Self::InvalidRegion => write!(f, "invalid panel region"),
            Self::NotOpen => write!(f, "panel not open"),
            Self::Callback => write!(f, "panel callback registration failed"),
        }
    }
}

/// Rectangular panel region, end coordinates exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelRegion {
    /// First column
    pub x_start: u16,
    /// First row
    pub y_start: u16,
    /// One past the last column
    pub x_end: u16,
    /// One past the last row
    pub y_end: u16,
}

impl PanelRegion {
    /// Create a region from start and exclusive end coordinates
    pub const fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Region width in pixels
    pub const fn width(&self) -> u16 {
        self.x_end.saturating_sub(self.x_start)
    }

    /// Region height in rows
    pub const fn height(&self) -> u16 {
        self.y_end.saturating_sub(self.y_start)
    }

    /// Number of pixels covered by the region
    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Event data passed to [`IoTransferDone`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoTransferEvent;

/// Event data passed to [`DpiTransferDone`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpiTransferEvent;

/// Colour-transfer-done callback for panel-IO channels
///
/// Called from interrupt context. Implementations must not block.
pub trait IoTransferDone: Sync {
    /// A queued colour transfer has finished
    ///
    /// Returns `true` if a higher priority task was woken.
    fn on_color_trans_done(&self, event: &IoTransferEvent) -> bool;
}

/// Colour-transfer-done callback for DPI panels
///
/// Called from interrupt context. Implementations must not block.
pub trait DpiTransferDone: Sync {
    /// A queued colour transfer has finished
    ///
    /// Returns `true` if a higher priority task was woken.
    fn on_color_trans_done(&self, event: &DpiTransferEvent) -> bool;
}

/// Common panel operations
pub trait LcdPanel {
    /// Bring up the bus and the panel controller
    fn open(&mut self) -> Result<(), LcdError>;

    /// Check if the panel has been opened
    fn is_open(&self) -> bool;

    /// Queue a bitmap transfer into `region`
    ///
    /// Returns once the transfer is queued. `pixels` must stay untouched until
    /// the completion callback fires.
    fn draw_bitmap(&mut self, region: PanelRegion, pixels: &[u16]) -> Result<(), LcdError>;
}

/// Panel behind a panel-IO channel (SPI, i80)
pub trait IoPanel: LcdPanel {
    /// Switch the panel display output on or off
    fn set_display_on(&mut self, on: bool) -> Result<(), LcdError>;

    /// Register the colour-transfer-done callback on the IO channel
    fn register_io_callback(
        &mut self,
        handler: &'static dyn IoTransferDone,
    ) -> Result<(), LcdError>;

    /// Remove the colour-transfer-done callback
    fn unregister_io_callback(&mut self);
}

/// Panel driven over a DPI / MIPI-DSI interface
pub trait DpiPanel: LcdPanel {
    /// Register the colour-transfer-done callback on the panel
    fn register_dpi_callback(
        &mut self,
        handler: &'static dyn DpiTransferDone,
    ) -> Result<(), LcdError>;

    /// Remove the colour-transfer-done callback
    fn unregister_dpi_callback(&mut self);
}
