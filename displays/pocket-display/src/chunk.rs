//! Frame chunk planning
//!
//! A frame is pushed to the panel as consecutive bands of rows. The bands
//! cover `[0, height)` in increasing order with no overlap and no gap; every
//! band is `chunk_height` rows except the last, which takes the remainder.

use core::ops::Range;

use pocket_hal::PanelRegion;

/// One band of rows of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferChunk {
    /// Position of the chunk within the frame
    pub index: usize,
    /// First frame row
    pub y: u16,
    /// Number of rows
    pub rows: u16,
}

impl TransferChunk {
    /// Pixel range of this chunk within a row-major frame buffer
    pub fn source_range(&self, width: u16) -> Range<usize> {
        let width = usize::from(width);
        let start = width * usize::from(self.y);
        start..start + width * usize::from(self.rows)
    }

    /// Panel region the chunk lands on
    ///
    /// Columns `[0, width·factor)`, rows
    /// `[top + y·factor, top + (y + rows)·factor)`. Coordinates saturate; the
    /// configuration check keeps valid geometry in range.
    pub fn panel_region(&self, width: u16, top: u16, factor: u8) -> PanelRegion {
        let factor = u16::from(factor);
        let end = self.y.saturating_add(self.rows);
        PanelRegion::new(
            0,
            top.saturating_add(self.y.saturating_mul(factor)),
            width.saturating_mul(factor),
            top.saturating_add(end.saturating_mul(factor)),
        )
    }
}

/// Iterator over the chunks of one frame
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    height: u16,
    chunk_height: u16,
    next_y: u16,
    index: usize,
}

impl ChunkPlan {
    /// Plan a frame of `height` rows in bands of `chunk_height`
    ///
    /// A zero `chunk_height` yields no chunks.
    pub const fn new(height: u16, chunk_height: u16) -> Self {
        Self {
            height,
            chunk_height,
            next_y: 0,
            index: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.chunk_height == 0 {
            return 0;
        }
        usize::from((self.height - self.next_y).div_ceil(self.chunk_height))
    }
}

impl Iterator for ChunkPlan {
    type Item = TransferChunk;

    fn next(&mut self) -> Option<Self::Item> {
        if self.chunk_height == 0 || self.next_y >= self.height {
            return None;
        }

        let rows = self.chunk_height.min(self.height - self.next_y);
        let chunk = TransferChunk {
            index: self.index,
            y: self.next_y,
            rows,
        };
        self.next_y += rows;
        self.index += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkPlan {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_split() {
        let chunks: Vec<_> = ChunkPlan::new(240, 4).collect();
        assert_eq!(chunks.len(), 60);
        assert_eq!(chunks[0], TransferChunk { index: 0, y: 0, rows: 4 });
        assert_eq!(chunks[59], TransferChunk { index: 59, y: 236, rows: 4 });
    }

    #[test]
    fn test_remainder_chunk() {
        let chunks: Vec<_> = ChunkPlan::new(241, 4).collect();
        assert_eq!(chunks.len(), 61);
        assert_eq!(chunks[60], TransferChunk { index: 60, y: 240, rows: 1 });
    }

    #[test]
    fn test_chunk_taller_than_frame() {
        let chunks: Vec<_> = ChunkPlan::new(3, 4).collect();
        assert_eq!(chunks, vec![TransferChunk { index: 0, y: 0, rows: 3 }]);
    }

    #[test]
    fn test_zero_chunk_height_is_empty() {
        assert_eq!(ChunkPlan::new(240, 0).count(), 0);
        assert_eq!(ChunkPlan::new(240, 0).len(), 0);
    }

    #[test]
    fn test_exact_size() {
        let mut plan = ChunkPlan::new(10, 4);
        assert_eq!(plan.len(), 3);
        plan.next();
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_panel_region_with_offset() {
        let first = TransferChunk { index: 0, y: 0, rows: 4 };
        assert_eq!(first.panel_region(320, 20, 1), PanelRegion::new(0, 20, 320, 24));

        let last = TransferChunk { index: 59, y: 236, rows: 4 };
        assert_eq!(last.panel_region(320, 20, 1), PanelRegion::new(0, 256, 320, 260));
    }

    #[test]
    fn test_scaled_panel_region() {
        let chunk = TransferChunk { index: 1, y: 4, rows: 4 };
        let region = chunk.panel_region(320, 0, 2);
        assert_eq!(region, PanelRegion::new(0, 8, 640, 16));
        assert_eq!(region.pixel_count(), 640 * 8);
    }

    #[test]
    fn test_source_range() {
        let chunk = TransferChunk { index: 2, y: 8, rows: 4 };
        assert_eq!(chunk.source_range(320), 2560..3840);
    }

    proptest! {
        #[test]
        fn test_chunks_partition_rows(height in 1u16..=1200, chunk_height in 1u16..=64) {
            let chunks: Vec<_> = ChunkPlan::new(height, chunk_height).collect();
            let expected = usize::from(height.div_ceil(chunk_height));
            prop_assert_eq!(chunks.len(), expected);

            let mut next = 0u16;
            for (i, chunk) in chunks.iter().enumerate() {
                prop_assert_eq!(chunk.index, i);
                prop_assert_eq!(chunk.y, next);
                prop_assert!(chunk.rows > 0 && chunk.rows <= chunk_height);
                next += chunk.rows;
            }
            prop_assert_eq!(next, height);

            let last = chunks[chunks.len() - 1];
            prop_assert_eq!(
                u32::from(last.rows),
                u32::from(height) - u32::from(chunk_height) * (expected as u32 - 1)
            );
        }

        #[test]
        fn test_source_ranges_tile_buffer(height in 1u16..=300, chunk_height in 1u16..=16, width in 1u16..=64) {
            let mut next = 0usize;
            for chunk in ChunkPlan::new(height, chunk_height) {
                let range = chunk.source_range(width);
                prop_assert_eq!(range.start, next);
                next = range.end;
            }
            prop_assert_eq!(next, usize::from(width) * usize::from(height));
        }
    }
}
