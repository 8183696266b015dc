//! Display frame-transfer pipeline
//!
//! Gets a fully rendered RGB565 frame onto the panel through a size-limited
//! transfer channel that completes asynchronously, optionally through the
//! hardware scaling accelerator first.
//!
//! # Flow
//!
//! ```text
//!  frame ──► ChunkPlan ──► [ScaleAdapter] ──► PanelBackend::submit_chunk
//!                                                   │
//!           wait CompletionSignal ◄── transfer-done interrupt
//! ```
//!
//! One chunk is in flight at a time. The frame loop suspends on the
//! [`CompletionSignal`] after every submission and only sends the next chunk
//! once the panel has reported the previous one done.
//!
//! # Usage
//!
//! ```ignore
//! static LCD_DONE: CompletionSignal = CompletionSignal::new();
//!
//! let backend = DirectPanel::new(panel, dc_pin, backlight_pin);
//! let mut session = PanelSession::new(backend, BoardProfile::OdroidGo.panel_config(), &LCD_DONE);
//! session.init()?;
//! session.write_frame(&frame).await?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod backend;
pub mod buffer;
pub mod chunk;
pub mod config;
pub mod error;
pub mod scale;
pub mod session;
pub mod signal;
pub mod transfer;

#[cfg(test)]
mod mocks;

pub use backend::{AcceleratedPanel, BackendKind, DirectPanel, PanelBackend};
pub use buffer::ScratchBuffer;
pub use chunk::{ChunkPlan, TransferChunk};
pub use config::{BoardProfile, ConfigError, PanelConfig, ScaleFactor, DEFAULT_CHUNK_HEIGHT};
pub use error::{InitError, TransferError};
pub use scale::ScaleAdapter;
pub use session::{PanelSession, SessionState};
pub use signal::CompletionSignal;
pub use transfer::{FrameReport, TransferState};
