//! Hardware image scaling accelerator
//!
//! Models a pixel-processing accelerator doing scale/rotate/mirror
//! operations on RGB565 blocks. Callers register a client once, then issue
//! blocking scale operations into a device-accessible output buffer.

/// Accelerator errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScalerError {
    /// Client registration was rejected
    Registration,
    /// Operation issued without a registered client
    NotRegistered,
    /// Source or destination dimensions are inconsistent
    InvalidRequest,
    /// Accelerator reported a fault
    Hardware,
}

impl core::fmt::Display for ScalerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Registration => write!(f, "scaler client registration failed"),
            Self::NotRegistered => write!(f, "scaler client not registered"),
            Self::InvalidRequest => write!(f, "invalid scale request"),
            Self::Hardware => write!(f, "scaler hardware fault"),
        }
    }
}

/// One scale operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRequest<'a> {
    /// Source pixels, row-major
    pub src: &'a [u16],
    /// Source width in pixels
    pub src_width: u16,
    /// Source height in rows
    pub src_height: u16,
    /// Scale ratio applied to both axes
    pub ratio: f32,
}

/// Scaling accelerator
pub trait Scaler {
    /// Register a scale client allowing `max_pending` queued operations
    fn register_client(&mut self, max_pending: u8) -> Result<(), ScalerError>;

    /// Release the client registration
    fn unregister_client(&mut self) -> Result<(), ScalerError>;

    /// Check if a client is registered
    fn is_registered(&self) -> bool;

    /// Scale `request.src` into `dst`, blocking until the accelerator is done
    ///
    /// `dst` holds at least `src_width × ratio` by `src_height × ratio`
    /// pixels; the output is written row-major at that stride.
    fn scale(&mut self, request: &ScaleRequest<'_>, dst: &mut [u16]) -> Result<(), ScalerError>;
}
