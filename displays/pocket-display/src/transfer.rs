//! Frame transfer engine
//!
//! Pushes a full frame to the panel one chunk at a time. Exactly one chunk
//! is in flight: after each submission the engine waits for the completion
//! signal and consumes it before the next chunk goes out.
//!
//! Per chunk:
//!
//! ```text
//! Idle ──submit──► Dispatched ──completion consumed──► Complete ──► Idle
//! ```

use embassy_time::{with_timeout, Duration};

use crate::backend::PanelBackend;
use crate::chunk::ChunkPlan;
use crate::error::TransferError;
use crate::session::PanelSession;
use crate::signal::CompletionSignal;

/// Transfer state of the current chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferState {
    /// Nothing in flight
    Idle,
    /// Submitted, completion not yet consumed
    Dispatched,
    /// Completion consumed
    Complete,
}

/// Outcome of one frame transfer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// Chunks submitted
    pub chunks: usize,
    /// Completions consumed
    pub completions: usize,
}

impl<B: PanelBackend> PanelSession<B> {
    /// Transfer a full frame of `width × height` RGB565 pixels
    ///
    /// Suspends while each chunk is in flight. Without a completion timeout a
    /// panel that never reports completion stalls the caller forever.
    ///
    /// # Panics
    ///
    /// A chunk rejected by the hardware is fatal: the frame is abandoned part
    /// way and this panics. Use [`try_write_frame`](Self::try_write_frame) to
    /// get the error instead.
    pub async fn write_frame(&mut self, buffer: &[u16]) -> Result<FrameReport, TransferError> {
        match self.try_write_frame(buffer).await {
            Err(e) if e.is_fatal() => {
                error!("frame transfer aborted: {}", e);
                panic!("frame transfer aborted: {}", e);
            }
            result => result,
        }
    }

    /// Transfer a full frame, returning hardware faults as errors
    ///
    /// Chunks sent before a failure stay on the panel.
    pub async fn try_write_frame(
        &mut self,
        buffer: &[u16],
    ) -> Result<FrameReport, TransferError> {
        let signal = match self.signal {
            Some(signal) if self.is_ready() => signal,
            _ => return Err(TransferError::NotReady),
        };

        let expected = self.config.frame_pixels();
        if buffer.len() != expected {
            return Err(TransferError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        if self.transfer_state == TransferState::Dispatched {
            warn!("previous frame left a chunk in flight, dropping its completion");
            signal.reset();
        }

        let mut report = FrameReport::default();
        let width = self.config.width;
        let timeout = self.config.completion_timeout;

        for chunk in ChunkPlan::new(self.config.height, self.config.chunk_height) {
            let pixels = buffer
                .get(chunk.source_range(width))
                .ok_or(TransferError::BufferSize {
                    expected,
                    actual: buffer.len(),
                })?;

            self.transfer_state = TransferState::Idle;
            self.backend.submit_chunk(&chunk, pixels, &self.config)?;
            self.transfer_state = TransferState::Dispatched;
            report.chunks += 1;
            trace!("chunk {} dispatched, rows {}+{}", chunk.index, chunk.y, chunk.rows);

            wait_completion(signal, timeout, chunk.index).await?;
            self.transfer_state = TransferState::Complete;
            report.completions += 1;
        }

        debug!("frame sent in {} chunks", report.chunks);
        Ok(report)
    }
}

async fn wait_completion(
    signal: &CompletionSignal,
    timeout: Option<Duration>,
    chunk: usize,
) -> Result<(), TransferError> {
    match timeout {
        Some(limit) => with_timeout(limit, signal.consume())
            .await
            .map_err(|_| {
                error!("chunk {} completion timed out", chunk);
                TransferError::Timeout { chunk }
            }),
        None => {
            signal.consume().await;
            Ok(())
        }
    }
}
