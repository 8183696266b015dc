//! Hardware scale adapter
//!
//! Wraps the scaling accelerator and its output buffer. The accelerator
//! client is registered at init whatever the factor; the output buffer is
//! only allocated when the factor is not 1, sized for one full chunk
//! (`width·s × chunk_height·s`), and kept until deinit.

use pocket_hal::{ScaleRequest, Scaler, ScalerError};

use crate::buffer::ScratchBuffer;
use crate::config::{PanelConfig, ScaleFactor};
use crate::error::InitError;

/// Operations the accelerator may queue for this client
pub const MAX_PENDING_SCALES: u8 = 1;

/// Accelerator plus its persistent output buffer
pub struct ScaleAdapter<S> {
    scaler: S,
    scale: ScaleFactor,
    buffer: Option<ScratchBuffer>,
    allocations: usize,
}

impl<S: Scaler> ScaleAdapter<S> {
    /// Wrap an accelerator; nothing is registered or allocated yet
    pub fn new(scaler: S) -> Self {
        Self {
            scaler,
            scale: ScaleFactor::IDENTITY,
            buffer: None,
            allocations: 0,
        }
    }

    /// Register the accelerator client and allocate the output buffer
    ///
    /// Steps already done are skipped, so a retried init does not reallocate.
    pub fn init(&mut self, config: &PanelConfig) -> Result<(), InitError> {
        if !self.scaler.is_registered() {
            self.scaler
                .register_client(MAX_PENDING_SCALES)
                .map_err(InitError::ScalerRegister)?;
        }

        self.scale = config.scale;
        if self.scale.is_identity() || self.buffer.is_some() {
            return Ok(());
        }

        let factor = u16::from(self.scale.factor);
        let buffer =
            ScratchBuffer::try_new(config.width * factor, config.chunk_height * factor)?;
        debug!(
            "scale buffer {}x{} allocated",
            buffer.width(),
            buffer.rows()
        );
        self.buffer = Some(buffer);
        self.allocations += 1;
        Ok(())
    }

    /// Check if chunks go through the accelerator
    pub fn is_active(&self) -> bool {
        !self.scale.is_identity() && self.buffer.is_some()
    }

    /// Active scale
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Scale a `width × rows` source chunk into the output buffer
    ///
    /// Returns the filled `width·s × rows·s` prefix of the buffer.
    pub fn scale_chunk(
        &mut self,
        src: &[u16],
        width: u16,
        rows: u16,
    ) -> Result<&[u16], ScalerError> {
        let buffer = self.buffer.as_mut().ok_or(ScalerError::NotRegistered)?;
        let factor = usize::from(self.scale.factor);
        let len = usize::from(width) * factor * usize::from(rows) * factor;
        let dst = buffer
            .as_mut_slice()
            .get_mut(..len)
            .ok_or(ScalerError::InvalidRequest)?;

        let request = ScaleRequest {
            src,
            src_width: width,
            src_height: rows,
            ratio: self.scale.ratio,
        };
        self.scaler.scale(&request, dst)?;
        Ok(dst)
    }

    /// Free the output buffer and release the accelerator client
    pub fn deinit(&mut self) {
        self.buffer = None;
        if self.scaler.is_registered() {
            if let Err(e) = self.scaler.unregister_client() {
                error!("scaler unregister failed: {}", e);
            }
        }
    }

    /// Output buffer, if allocated
    pub fn buffer(&self) -> Option<&ScratchBuffer> {
        self.buffer.as_ref()
    }

    /// Number of output buffer allocations so far
    pub fn allocation_count(&self) -> usize {
        self.allocations
    }

    /// Underlying accelerator
    pub fn scaler(&self) -> &S {
        &self.scaler
    }

    /// Underlying accelerator, mutably
    pub fn scaler_mut(&mut self) -> &mut S {
        &mut self.scaler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockScaler;

    fn scaled_config(factor: u8) -> PanelConfig {
        PanelConfig::new(320, 240, 0).with_scale(ScaleFactor::integer(factor))
    }

    #[test]
    fn test_identity_registers_without_buffer() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        adapter.init(&PanelConfig::new(320, 240, 0)).unwrap();
        assert!(adapter.scaler().is_registered());
        assert!(adapter.buffer().is_none());
        assert!(!adapter.is_active());
    }

    #[test]
    fn test_buffer_sized_for_full_chunk() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        adapter.init(&scaled_config(2)).unwrap();
        let buffer = adapter.buffer().unwrap();
        assert_eq!((buffer.width(), buffer.rows()), (640, 8));
        assert_eq!(buffer.len(), 640 * 8);
        assert!(adapter.is_active());
    }

    #[test]
    fn test_reinit_does_not_reallocate() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        adapter.init(&scaled_config(2)).unwrap();
        adapter.init(&scaled_config(2)).unwrap();
        assert_eq!(adapter.allocation_count(), 1);
        assert_eq!(adapter.scaler().registrations, 1);
    }

    #[test]
    fn test_registration_failure() {
        let mut scaler = MockScaler::new();
        scaler.fail_register = true;
        let mut adapter = ScaleAdapter::new(scaler);
        assert_eq!(
            adapter.init(&scaled_config(2)),
            Err(InitError::ScalerRegister(ScalerError::Registration))
        );
        assert!(adapter.buffer().is_none());
    }

    #[test]
    fn test_scale_chunk_doubles_pixels() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        adapter
            .init(&PanelConfig::new(2, 2, 0).with_chunk_height(2).with_scale(ScaleFactor::integer(2)))
            .unwrap();

        let out = adapter.scale_chunk(&[1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(
            out,
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn test_partial_chunk_uses_prefix() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        adapter.init(&scaled_config(2)).unwrap();
        let src = vec![7u16; 320];
        let out = adapter.scale_chunk(&src, 320, 1).unwrap();
        assert_eq!(out.len(), 640 * 2);
    }

    #[test]
    fn test_scale_without_buffer_fails() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        assert_eq!(
            adapter.scale_chunk(&[0; 4], 2, 2),
            Err(ScalerError::NotRegistered)
        );
    }

    #[test]
    fn test_deinit_releases_everything() {
        let mut adapter = ScaleAdapter::new(MockScaler::new());
        adapter.init(&scaled_config(2)).unwrap();
        adapter.deinit();
        assert!(adapter.buffer().is_none());
        assert!(!adapter.scaler().is_registered());

        adapter.deinit();
        assert_eq!(adapter.scaler().unregistrations, 1);
    }
}
