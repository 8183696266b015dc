//! DPI panel backend fed through the scaling accelerator (MIPI-DSI style)

use pocket_hal::{ControlPin, DpiPanel, Scaler};

use super::{BackendKind, PanelBackend};
use crate::chunk::TransferChunk;
use crate::config::PanelConfig;
use crate::error::{InitError, TransferError};
use crate::scale::ScaleAdapter;
use crate::signal::CompletionSignal;

/// DPI panel with an optional hardware scale stage
///
/// With a scale factor of 1 chunks go straight to the panel. Otherwise each
/// chunk is scaled into the adapter's buffer and that buffer is queued.
pub struct AcceleratedPanel<P, S, DC, BL> {
    panel: P,
    scaler: ScaleAdapter<S>,
    dc: DC,
    backlight: BL,
}

impl<P, S, DC, BL> AcceleratedPanel<P, S, DC, BL>
where
    P: DpiPanel,
    S: Scaler,
    DC: ControlPin,
    BL: ControlPin,
{
    /// Create the backend from a panel, its accelerator and control lines
    pub fn new(panel: P, scaler: S, dc: DC, backlight: BL) -> Self {
        Self {
            panel,
            scaler: ScaleAdapter::new(scaler),
            dc,
            backlight,
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

    /// Scale adapter
    pub fn scale_adapter(&self) -> &ScaleAdapter<S> {
        &self.scaler
    }

    /// Scale adapter, mutably
    pub fn scale_adapter_mut(&mut self) -> &mut ScaleAdapter<S> {
        &mut self.scaler
    }

    /// Data/command select line
    pub fn dc(&self) -> &DC {
        &self.dc
    }

    /// Backlight enable line
    pub fn backlight(&self) -> &BL {
        &self.backlight
    }
}

impl<P, S, DC, BL> PanelBackend for AcceleratedPanel<P, S, DC, BL>
where
    P: DpiPanel,
    S: Scaler,
    DC: ControlPin,
    BL: ControlPin,
{
    fn kind(&self) -> BackendKind {
        BackendKind::Accelerated
    }

    fn open(&mut self) -> Result<(), InitError> {
        self.panel.open().map_err(InitError::PanelOpen)?;
        self.backlight.set_high();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    fn allocate_scratch(&mut self, config: &PanelConfig) -> Result<(), InitError> {
        self.scaler.init(config)
    }

    fn release_scratch(&mut self) {
        self.scaler.deinit();
    }

    fn register_completion_callback(
        &mut self,
        signal: &'static CompletionSignal,
    ) -> Result<(), InitError> {
        self.panel
            .register_dpi_callback(signal)
            .map_err(InitError::CallbackRegister)
    }

    fn unregister_completion_callback(&mut self) {
        self.panel.unregister_dpi_callback();
    }

    fn submit_chunk(
        &mut self,
        chunk: &TransferChunk,
        pixels: &[u16],
        config: &PanelConfig,
    ) -> Result<(), TransferError> {
        let submit_error = |error| TransferError::Submit {
            chunk: chunk.index,
            error,
        };

        if !self.scaler.is_active() {
            let region = chunk.panel_region(config.width, config.top, 1);
            return self.panel.draw_bitmap(region, pixels).map_err(submit_error);
        }

        let factor = self.scaler.scale().factor;
        let scaled = self
            .scaler
            .scale_chunk(pixels, config.width, chunk.rows)
            .map_err(|error| TransferError::Scale {
                chunk: chunk.index,
                error,
            })?;
        let region = chunk.panel_region(config.width, config.top, factor);
        self.panel.draw_bitmap(region, scaled).map_err(submit_error)
    }

    fn reset_control_pins(&mut self) {
        self.dc.reset();
        self.backlight.reset();
    }
}
