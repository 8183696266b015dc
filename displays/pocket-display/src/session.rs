//! Panel session lifecycle
//!
//! A [`PanelSession`] owns the backend and the configuration of one panel.
//! It is created once by board bring-up and handed around by reference.
//!
//! # Lifecycle
//!
//! ```text
//!  Uninitialized ──init ok──► Ready ──deinit──► Uninitialized
//!        │                                          ▲
//!        └──init error──► Failed ──deinit──────────┘
//! ```
//!
//! Init steps that succeeded are remembered and are not rolled back on a
//! later failure. Deinit undoes whatever was done.

use crate::backend::PanelBackend;
use crate::config::{PanelConfig, ScaleFactor};
use crate::error::InitError;
use crate::signal::CompletionSignal;
use crate::transfer::TransferState;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Not initialized, or torn down
    Uninitialized,
    /// Initialized, frames can be written
    Ready,
    /// Init failed part way
    Failed,
}

/// Live panel connection
pub struct PanelSession<B> {
    pub(crate) backend: B,
    pub(crate) config: PanelConfig,
    state: SessionState,
    completion: &'static CompletionSignal,
    pub(crate) signal: Option<&'static CompletionSignal>,
    panel_opened: bool,
    scratch_allocated: bool,
    callback_registered: bool,
    pub(crate) transfer_state: TransferState,
}

impl<B: PanelBackend> PanelSession<B> {
    /// Create a session; no hardware is touched until [`init`](Self::init)
    ///
    /// `completion` is the signal the panel's transfer-done callback
    /// releases. It must not be shared with another session.
    pub fn new(backend: B, config: PanelConfig, completion: &'static CompletionSignal) -> Self {
        Self {
            backend,
            config,
            state: SessionState::Uninitialized,
            completion,
            signal: None,
            panel_opened: false,
            scratch_allocated: false,
            callback_registered: false,
            transfer_state: TransferState::Idle,
        }
    }

    /// Change the accelerator scale before init
    ///
    /// Returns `false` and leaves the configuration alone if the session is
    /// initialized or the values are invalid. On a failed session, buffers
    /// sized for the old scale are released so the next init allocates them
    /// again.
    pub fn set_scale_factor(&mut self, factor: u8, ratio: f32) -> bool {
        if self.state == SessionState::Ready {
            warn!("scale factor change ignored, session already initialized");
            return false;
        }
        match ScaleFactor::new(factor, ratio) {
            Ok(scale) => {
                if scale != self.config.scale && self.scratch_allocated {
                    debug!("scale changed after failed init, releasing scratch");
                    self.backend.release_scratch();
                    self.scratch_allocated = false;
                }
                self.config.scale = scale;
                true
            }
            Err(e) => {
                warn!("scale factor {} rejected: {}", factor, e);
                false
            }
        }
    }

    /// Bring the panel up
    ///
    /// No-op on a session that is already initialized.
    pub fn init(&mut self) -> Result<(), InitError> {
        if self.state == SessionState::Ready {
            return Ok(());
        }

        match self.bring_up() {
            Ok(()) => {
                self.state = SessionState::Ready;
                info!(
                    "panel initialized: {}x{} top {}, {} rows per chunk, scale {}",
                    self.config.width,
                    self.config.height,
                    self.config.top,
                    self.config.chunk_height,
                    self.config.scale.factor
                );
                Ok(())
            }
            Err(e) => {
                error!("panel init failed: {}", e);
                self.state = SessionState::Failed;
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), InitError> {
        self.config.validate()?;

        if !self.panel_opened {
            self.backend.open()?;
            self.panel_opened = true;
        }

        if !self.scratch_allocated {
            self.backend.allocate_scratch(&self.config)?;
            self.scratch_allocated = true;
        }

        self.completion.reset();
        self.signal = Some(self.completion);

        if !self.callback_registered {
            self.backend.register_completion_callback(self.completion)?;
            self.callback_registered = true;
        }

        self.transfer_state = TransferState::Idle;
        Ok(())
    }

    /// Tear the panel down
    ///
    /// Releases buffers and the accelerator client, removes the completion
    /// callback and returns the control lines to their reset state. Control
    /// lines are only touched if this session opened the panel. Safe to call
    /// without init and more than once.
    pub fn deinit(&mut self) {
        if self.state == SessionState::Uninitialized && !self.holds_resources() {
            return;
        }

        if self.scratch_allocated {
            self.backend.release_scratch();
            self.scratch_allocated = false;
        }
        if self.callback_registered {
            self.backend.unregister_completion_callback();
            self.callback_registered = false;
        }
        self.signal = None;
        if self.panel_opened {
            self.backend.reset_control_pins();
            self.panel_opened = false;
        }

        self.state = SessionState::Uninitialized;
        self.transfer_state = TransferState::Idle;
        info!("panel deinitialized");
    }

    fn holds_resources(&self) -> bool {
        self.panel_opened || self.scratch_allocated || self.callback_registered
    }

    /// Lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if frames can be written
    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// Active configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// State of the chunk currently or last transferred
    pub fn transfer_state(&self) -> TransferState {
        self.transfer_state
    }

    /// Backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Backend, mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B> Drop for PanelSession<B> {
    fn drop(&mut self) {
        if self.state == SessionState::Ready {
            warn!("panel session dropped without deinit");
        }
    }
}
