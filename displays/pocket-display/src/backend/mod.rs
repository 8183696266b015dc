//! Panel backend trait
//!
//! A backend owns the panel handle and its two control lines, and knows how
//! a chunk reaches the hardware. The backend is picked once, when the
//! session is built:
//!
//! - [`DirectPanel`]: IO-channel panels; chunks are staged in a row buffer and
//!   sent as is.
//! - [`AcceleratedPanel`]: DPI panels fed through the scaling accelerator.

mod accelerated;
mod direct;

pub use accelerated::AcceleratedPanel;
pub use direct::DirectPanel;

use crate::chunk::TransferChunk;
use crate::config::PanelConfig;
use crate::error::{InitError, TransferError};
use crate::signal::CompletionSignal;

/// Backend flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackendKind {
    /// IO-channel panel, no scaling
    Direct,
    /// DPI panel behind the scaling accelerator
    Accelerated,
}

/// Hardware side of a panel session
///
/// The session drives these in order at init (`open`, `allocate_scratch`,
/// `register_completion_callback`) and in reverse at deinit.
pub trait PanelBackend {
    /// Backend flavour
    fn kind(&self) -> BackendKind;

    /// Bring up the panel and switch the backlight on
    fn open(&mut self) -> Result<(), InitError>;

    /// Check if the panel has been opened
    fn is_open(&self) -> bool;

    /// Allocate the buffers used while transferring chunks
    fn allocate_scratch(&mut self, config: &PanelConfig) -> Result<(), InitError>;

    /// Free the chunk buffers and release accelerator resources
    fn release_scratch(&mut self);

    /// Route the panel's transfer-done notification to `signal`
    fn register_completion_callback(
        &mut self,
        signal: &'static CompletionSignal,
    ) -> Result<(), InitError>;

    /// Stop routing transfer-done notifications
    fn unregister_completion_callback(&mut self);

    /// Queue one chunk of `pixels` (`width × chunk.rows`)
    ///
    /// Returns once the hardware has accepted the transfer; completion is
    /// reported through the registered signal.
    fn submit_chunk(
        &mut self,
        chunk: &TransferChunk,
        pixels: &[u16],
        config: &PanelConfig,
    ) -> Result<(), TransferError>;

    /// Return the data/command and backlight lines to their reset state
    fn reset_control_pins(&mut self);
}
