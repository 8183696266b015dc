//! Pixel scratch buffers
//!
//! Allocated once at session init and reused for every chunk. Allocation goes
//! through `try_reserve_exact`, so running out of heap is reported as an
//! [`InitError`] instead of aborting. Boards place the heap in DMA-capable
//! internal RAM, which makes these buffers device-accessible.

use alloc::vec::Vec;

use crate::error::InitError;

/// Fixed-size RGB565 buffer of `width × rows` pixels
#[derive(Debug)]
pub struct ScratchBuffer {
    pixels: Vec<u16>,
    width: u16,
    rows: u16,
}

impl ScratchBuffer {
    /// Allocate a zeroed buffer
    pub fn try_new(width: u16, rows: u16) -> Result<Self, InitError> {
        let len = usize::from(width) * usize::from(rows);
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| InitError::ScratchAlloc { pixels: len })?;
        pixels.resize(len, 0);
        Ok(Self {
            pixels,
            width,
            rows,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel data
    pub fn as_slice(&self) -> &[u16] {
        &self.pixels
    }

    /// Mutable pixel data
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.pixels
    }
}
