//! Display-sized pixel buffer

use alloc::vec;
use alloc::vec::Vec;

use ledchain_protocol::{ChainError, ChainLayout, PixelSource};

use super::Bitmap;

/// Binary pixel grid matching a chip layout
///
/// Addressed `[x][y]` with `(0, 0)` at the top-left. The size is fixed by the
/// layout at construction. Accessors take signed coordinates so drawing code
/// can pass partially off-screen shapes straight through; out-of-range reads
/// return `false` and out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    layout: ChainLayout,
    /// Column-major storage, `columns * rows` cells
    cells: Vec<bool>,
}

impl PixelBuffer {
    /// Create a blank buffer for a layout
    pub fn new(layout: ChainLayout) -> Self {
        Self {
            layout,
            cells: vec![false; layout.columns() * layout.rows()],
        }
    }

    /// Create a blank buffer for a grid of chips
    pub fn with_blocks(blocks_per_row: usize, blocks_per_column: usize) -> Result<Self, ChainError> {
        ChainLayout::new(blocks_per_row, blocks_per_column).map(Self::new)
    }

    /// Get the layout
    pub fn layout(&self) -> &ChainLayout {
        &self.layout
    }

    /// Width in pixels
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// Height in pixels
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Check if a coordinate lies inside the buffer
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.columns() && y < self.rows()).then(|| x * self.rows() + y)
    }

    /// Pixel at `(x, y)`
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.cells[i])
    }

    /// Set the pixel at `(x, y)`
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = on;
        }
    }

    /// Unsigned read for callers that already clamped their coordinates
    pub(crate) fn at(&self, x: usize, y: usize) -> bool {
        x < self.columns() && y < self.rows() && self.cells[x * self.rows() + y]
    }

    /// Unsigned write for callers that already clamped their coordinates
    pub(crate) fn put(&mut self, x: usize, y: usize, on: bool) {
        if x < self.columns() && y < self.rows() {
            let rows = self.rows();
            self.cells[x * rows + y] = on;
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Set every pixel to the same value
    pub fn fill(&mut self, on: bool) {
        self.cells.fill(on);
    }

    /// Flip every pixel
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    /// Number of pixels that are on
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Snapshot of the whole buffer
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap::from_fn(self.columns(), self.rows(), |x, y| self.at(x, y))
    }

    /// Copy of a `width × height` window starting at `(x, y)`
    ///
    /// Cells outside the buffer read as off.
    pub fn region(&self, x: i32, y: i32, width: usize, height: usize) -> Bitmap {
        let offset = |origin: i32, delta: usize| {
            i32::try_from(delta)
                .ok()
                .and_then(|delta| origin.checked_add(delta))
        };
        Bitmap::from_fn(width, height, |dx, dy| match (offset(x, dx), offset(y, dy)) {
            (Some(x), Some(y)) => self.get(x, y),
            _ => false,
        })
    }
}

impl PixelSource for PixelBuffer {
    fn pixel(&self, x: usize, y: usize) -> bool {
        self.at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_follow_layout() {
        let buffer = PixelBuffer::with_blocks(3, 2).unwrap();
        assert_eq!(buffer.columns(), 24);
        assert_eq!(buffer.rows(), 16);
        assert_eq!(buffer.count_on(), 0);
    }

    #[test]
    fn test_out_of_range_access_is_silent() {
        let mut buffer = PixelBuffer::with_blocks(1, 1).unwrap();
        buffer.set(-1, 0, true);
        buffer.set(8, 0, true);
        buffer.set(0, 8, true);
        assert_eq!(buffer.count_on(), 0);
        assert!(!buffer.get(-1, -1));
        assert!(!buffer.contains(8, 7));
        assert!(buffer.contains(7, 7));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut buffer = PixelBuffer::with_blocks(1, 1).unwrap();
        buffer.set(3, 4, true);
        let snapshot = buffer.to_bitmap();
        buffer.clear();
        assert!(snapshot.get(3, 4));
        assert_eq!(snapshot.width(), 8);
        assert_eq!(snapshot.height(), 8);
        assert!(!buffer.get(3, 4));
    }

    #[test]
    fn test_region_pads_outside_cells() {
        let mut buffer = PixelBuffer::with_blocks(1, 1).unwrap();
        buffer.fill(true);
        let window = buffer.region(6, 6, 4, 4);
        assert!(window.get(1, 1));
        assert!(!window.get(2, 1));
        assert!(!window.get(1, 3));
    }

    #[test]
    fn test_region_past_coordinate_limit_reads_off() {
        let mut buffer = PixelBuffer::with_blocks(1, 1).unwrap();
        buffer.fill(true);
        let edge = buffer.region(i32::MAX - 1, 0, 4, 2);
        assert_eq!(edge, Bitmap::new(4, 2));

        let wrapped = buffer.region(i32::MIN, i32::MIN, 3, 3);
        assert_eq!(wrapped, Bitmap::new(3, 3));

        let corner = buffer.region(-1, -1, 2, 2);
        assert!(corner.get(1, 1));
        assert!(!corner.get(0, 1));
    }

    #[test]
    fn test_pixel_source_matches_get() {
        let mut buffer = PixelBuffer::with_blocks(2, 1).unwrap();
        buffer.set(9, 2, true);
        assert!(buffer.pixel(9, 2));
        assert!(!buffer.pixel(100, 2));
    }
}
