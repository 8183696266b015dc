//! IO-channel panel backend (SPI ILI9341 style)

use pocket_hal::{ControlPin, IoPanel, LcdError};

use super::{BackendKind, PanelBackend};
use crate::buffer::ScratchBuffer;
use crate::chunk::TransferChunk;
use crate::config::PanelConfig;
use crate::error::{InitError, TransferError};
use crate::signal::CompletionSignal;

/// Panel behind an IO channel, chunks sent unscaled
///
/// Each chunk is copied into a `width × chunk_height` row buffer before it
/// is queued, so the transfer always reads from device-accessible memory
/// whatever the caller's frame lives in.
pub struct DirectPanel<P, DC, BL> {
    panel: P,
    dc: DC,
    backlight: BL,
    rows: Option<ScratchBuffer>,
}

impl<P, DC, BL> DirectPanel<P, DC, BL>
where
    P: IoPanel,
    DC: ControlPin,
    BL: ControlPin,
{
    /// Create the backend from a panel and its control lines
    pub fn new(panel: P, dc: DC, backlight: BL) -> Self {
        Self {
            panel,
            dc,
            backlight,
            rows: None,
        }
    }

    /// Panel handle
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Panel handle, mutably
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Data/command select line
    pub fn dc(&self) -> &DC {
        &self.dc
    }

    /// Backlight enable line
    pub fn backlight(&self) -> &BL {
        &self.backlight
    }

    /// Row staging buffer, if allocated
    pub fn row_buffer(&self) -> Option<&ScratchBuffer> {
        self.rows.as_ref()
    }
}

impl<P, DC, BL> PanelBackend for DirectPanel<P, DC, BL>
where
    P: IoPanel,
    DC: ControlPin,
    BL: ControlPin,
{
    fn kind(&self) -> BackendKind {
        BackendKind::Direct
    }

    fn open(&mut self) -> Result<(), InitError> {
        // control lines stay in reset until the controller is up
        self.panel.open().map_err(InitError::PanelOpen)?;
        self.panel
            .set_display_on(true)
            .map_err(InitError::PanelOpen)?;
        self.dc.set_low();
        self.backlight.set_high();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    fn allocate_scratch(&mut self, config: &PanelConfig) -> Result<(), InitError> {
        if self.rows.is_none() {
            self.rows = Some(ScratchBuffer::try_new(config.width, config.chunk_height)?);
        }
        Ok(())
    }

    fn release_scratch(&mut self) {
        self.rows = None;
    }

    fn register_completion_callback(
        &mut self,
        signal: &'static CompletionSignal,
    ) -> Result<(), InitError> {
        self.panel
            .register_io_callback(signal)
            .map_err(InitError::CallbackRegister)
    }

    fn unregister_completion_callback(&mut self) {
        self.panel.unregister_io_callback();
    }

    fn submit_chunk(
        &mut self,
        chunk: &TransferChunk,
        pixels: &[u16],
        config: &PanelConfig,
    ) -> Result<(), TransferError> {
        let region = chunk.panel_region(config.width, config.top, 1);
        let submit_error = |error| TransferError::Submit {
            chunk: chunk.index,
            error,
        };

        match self.rows.as_mut() {
            Some(rows) => {
                let staged = rows
                    .as_mut_slice()
                    .get_mut(..pixels.len())
                    .ok_or(submit_error(LcdError::InvalidRegion))?;
                staged.copy_from_slice(pixels);
                self.panel.draw_bitmap(region, staged).map_err(submit_error)
            }
            None => self.panel.draw_bitmap(region, pixels).map_err(submit_error),
        }
    }

    fn reset_control_pins(&mut self) {
        self.dc.reset();
        self.backlight.reset();
    }
}
