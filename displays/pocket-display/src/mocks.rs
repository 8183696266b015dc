//! Mock hardware for host tests

use std::vec::Vec;

use pocket_hal::{
    ControlPin, DpiPanel, DpiTransferDone, DpiTransferEvent, IoPanel, IoTransferDone,
    IoTransferEvent, LcdError, LcdPanel, OutputPin, PanelRegion, ScaleRequest, Scaler,
    ScalerError,
};

use crate::signal::CompletionSignal;

/// Control line recording its state
pub struct MockPin {
    pub high: bool,
    pub reset: bool,
    pub resets: usize,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: false,
            reset: true,
            resets: 0,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.reset = false;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.reset = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl ControlPin for MockPin {
    fn reset(&mut self) {
        self.high = false;
        self.reset = true;
        self.resets += 1;
    }

    fn is_reset(&self) -> bool {
        self.reset
    }
}

/// How the mock panel reports transfer completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Fire the callback before `draw_bitmap` returns
    Immediate,
    /// Fire the callback from another thread shortly after
    Threaded,
    /// Never fire
    Never,
}

/// One queued transfer
#[derive(Debug, Clone)]
pub struct Submission {
    pub region: PanelRegion,
    pub pixels: Vec<u16>,
}

/// Panel implementing both the IO-channel and the DPI shapes
pub struct MockPanel {
    pub open: bool,
    pub display_on: bool,
    pub fail_open: bool,
    pub fail_display_on: bool,
    pub fail_register: bool,
    /// Submission number (0-based, counting successful ones) that fails
    pub fail_on_submit: Option<usize>,
    pub completion: Completion,
    pub io_handler: Option<&'static dyn IoTransferDone>,
    pub dpi_handler: Option<&'static dyn DpiTransferDone>,
    pub submissions: Vec<Submission>,
    /// Signal checked at every submission; still set means the previous
    /// completion was never consumed
    pub observer: Option<&'static CompletionSignal>,
    pub overlaps: usize,
    pub unregistrations: usize,
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            open: false,
            display_on: false,
            fail_open: false,
            fail_display_on: false,
            fail_register: false,
            fail_on_submit: None,
            completion: Completion::Immediate,
            io_handler: None,
            dpi_handler: None,
            submissions: Vec::new(),
            observer: None,
            overlaps: 0,
            unregistrations: 0,
        }
    }

    pub fn has_callback(&self) -> bool {
        self.io_handler.is_some() || self.dpi_handler.is_some()
    }

    fn fire(io: Option<&'static dyn IoTransferDone>, dpi: Option<&'static dyn DpiTransferDone>) {
        if let Some(handler) = io {
            handler.on_color_trans_done(&IoTransferEvent);
        }
        if let Some(handler) = dpi {
            handler.on_color_trans_done(&DpiTransferEvent);
        }
    }
}

impl LcdPanel for MockPanel {
    fn open(&mut self) -> Result<(), LcdError> {
        if self.fail_open {
            return Err(LcdError::Bus);
        }
        self.open = true;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn draw_bitmap(&mut self, region: PanelRegion, pixels: &[u16]) -> Result<(), LcdError> {
        if !self.open {
            return Err(LcdError::NotOpen);
        }
        if region.pixel_count() != pixels.len() {
            return Err(LcdError::InvalidRegion);
        }
        if self.fail_on_submit == Some(self.submissions.len()) {
            return Err(LcdError::Bus);
        }
        if self.observer.is_some_and(|s| s.is_signaled()) {
            self.overlaps += 1;
        }

        self.submissions.push(Submission {
            region,
            pixels: pixels.to_vec(),
        });

        let (io, dpi) = (self.io_handler, self.dpi_handler);
        match self.completion {
            Completion::Immediate => Self::fire(io, dpi),
            Completion::Threaded => {
                std::thread::spawn(move || {
                    std::thread::sleep(std::time::Duration::from_micros(200));
                    Self::fire(io, dpi);
                });
            }
            Completion::Never => {}
        }
        Ok(())
    }
}

impl IoPanel for MockPanel {
    fn set_display_on(&mut self, on: bool) -> Result<(), LcdError> {
        if self.fail_display_on {
            return Err(LcdError::Bus);
        }
        self.display_on = on;
        Ok(())
    }

    fn register_io_callback(
        &mut self,
        handler: &'static dyn IoTransferDone,
    ) -> Result<(), LcdError> {
        if self.fail_register {
            return Err(LcdError::Callback);
        }
        self.io_handler = Some(handler);
        Ok(())
    }

    fn unregister_io_callback(&mut self) {
        self.io_handler = None;
        self.unregistrations += 1;
    }
}

impl DpiPanel for MockPanel {
    fn register_dpi_callback(
        &mut self,
        handler: &'static dyn DpiTransferDone,
    ) -> Result<(), LcdError> {
        if self.fail_register {
            return Err(LcdError::Callback);
        }
        self.dpi_handler = Some(handler);
        Ok(())
    }

    fn unregister_dpi_callback(&mut self) {
        self.dpi_handler = None;
        self.unregistrations += 1;
    }
}

/// Nearest-neighbour integer scaler
pub struct MockScaler {
    pub registered: bool,
    pub registrations: usize,
    pub unregistrations: usize,
    pub scales: usize,
    pub fail_register: bool,
    /// Scale operation number (0-based) that fails
    pub fail_on_scale: Option<usize>,
}

impl MockScaler {
    pub fn new() -> Self {
        Self {
            registered: false,
            registrations: 0,
            unregistrations: 0,
            scales: 0,
            fail_register: false,
            fail_on_scale: None,
        }
    }
}

impl Scaler for MockScaler {
    fn register_client(&mut self, _max_pending: u8) -> Result<(), ScalerError> {
        if self.fail_register {
            return Err(ScalerError::Registration);
        }
        self.registered = true;
        self.registrations += 1;
        Ok(())
    }

    fn unregister_client(&mut self) -> Result<(), ScalerError> {
        self.registered = false;
        self.unregistrations += 1;
        Ok(())
    }

    fn is_registered(&self) -> bool {
        self.registered
    }

    fn scale(&mut self, request: &ScaleRequest<'_>, dst: &mut [u16]) -> Result<(), ScalerError> {
        if !self.registered {
            return Err(ScalerError::NotRegistered);
        }
        if self.fail_on_scale == Some(self.scales) {
            return Err(ScalerError::Hardware);
        }

        let factor = request.ratio as usize;
        let width = usize::from(request.src_width);
        let height = usize::from(request.src_height);
        let out_width = width * factor;
        if factor == 0 || request.src.len() < width * height || dst.len() < out_width * height * factor
        {
            return Err(ScalerError::InvalidRequest);
        }

        for y in 0..height * factor {
            for x in 0..out_width {
                dst[y * out_width + x] = request.src[(y / factor) * width + x / factor];
            }
        }
        self.scales += 1;
        Ok(())
    }
}
