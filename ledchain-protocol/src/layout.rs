//! Chain geometry
//!
//! Chips are tiled into a grid of `blocks_per_row` × `blocks_per_column`
//! 8×8 blocks. Chain position `b` drives the block in column group
//! `b / blocks_per_column` and row group `b % blocks_per_column`, so the
//! chain runs down each column of blocks before moving right.

/// Pixels per chip along each axis
pub const CHIP_SIZE: usize = 8;

/// Longest chain a single frame can address
///
/// Bounds the fixed frame capacity (two bytes per chip).
pub const MAX_CHIPS: usize = 256;

/// Errors in the chain geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainError {
    /// One of the grid dimensions is zero
    EmptyGrid,
    /// More chips than `MAX_CHIPS`
    TooManyChips,
}

/// Read access to a binary pixel grid
///
/// Implemented by the pixel buffer so the encoder does not depend on how
/// pixels are stored. Out-of-range reads must return `false`.
pub trait PixelSource {
    /// Pixel state at column `x`, row `y`
    fn pixel(&self, x: usize, y: usize) -> bool;
}

/// Fixed dimensions of a chip grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainLayout {
    blocks_per_row: usize,
    blocks_per_column: usize,
}

impl ChainLayout {
    /// Create a layout for a grid of chips
    pub const fn new(blocks_per_row: usize, blocks_per_column: usize) -> Result<Self, ChainError> {
        if blocks_per_row == 0 || blocks_per_column == 0 {
            return Err(ChainError::EmptyGrid);
        }
        if blocks_per_row > MAX_CHIPS
            || blocks_per_column > MAX_CHIPS
            || blocks_per_row * blocks_per_column > MAX_CHIPS
        {
            return Err(ChainError::TooManyChips);
        }
        Ok(Self {
            blocks_per_row,
            blocks_per_column,
        })
    }

    pub const fn blocks_per_row(&self) -> usize {
        self.blocks_per_row
    }

    pub const fn blocks_per_column(&self) -> usize {
        self.blocks_per_column
    }

    /// Number of chips in the chain
    pub const fn chips(&self) -> usize {
        self.blocks_per_row * self.blocks_per_column
    }

    /// Width of the grid in pixels
    pub const fn columns(&self) -> usize {
        self.blocks_per_row * CHIP_SIZE
    }

    /// Height of the grid in pixels
    pub const fn rows(&self) -> usize {
        self.blocks_per_column * CHIP_SIZE
    }

    /// Pixel coordinates of the top-left corner of a chip's block
    ///
    /// Returns `None` if the chip is not part of the chain.
    pub const fn chip_origin(&self, chip: usize) -> Option<(usize, usize)> {
        if chip >= self.chips() {
            return None;
        }
        Some((
            (chip / self.blocks_per_column) * CHIP_SIZE,
            (chip % self.blocks_per_column) * CHIP_SIZE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_dimensions() {
        let layout = ChainLayout::new(3, 2).unwrap();
        assert_eq!(layout.chips(), 6);
        assert_eq!(layout.columns(), 24);
        assert_eq!(layout.rows(), 16);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(ChainLayout::new(0, 1), Err(ChainError::EmptyGrid));
        assert_eq!(ChainLayout::new(4, 0), Err(ChainError::EmptyGrid));
    }

    #[test]
    fn test_too_many_chips_rejected() {
        assert_eq!(ChainLayout::new(16, 17), Err(ChainError::TooManyChips));
        assert_eq!(ChainLayout::new(MAX_CHIPS + 1, 1), Err(ChainError::TooManyChips));
        assert_eq!(ChainLayout::new(usize::MAX, usize::MAX), Err(ChainError::TooManyChips));
        assert!(ChainLayout::new(16, 16).is_ok());
    }

    #[test]
    fn test_nine_by_eight_grid_fits() {
        let layout = ChainLayout::new(9, 8).unwrap();
        assert_eq!(layout.chips(), 72);
        assert_eq!(layout.chip_origin(71), Some((64, 56)));
    }

    #[test]
    fn test_chip_origin_runs_down_columns_first() {
        let layout = ChainLayout::new(2, 2).unwrap();
        assert_eq!(layout.chip_origin(0), Some((0, 0)));
        assert_eq!(layout.chip_origin(1), Some((0, 8)));
        assert_eq!(layout.chip_origin(2), Some((8, 0)));
        assert_eq!(layout.chip_origin(3), Some((8, 8)));
        assert_eq!(layout.chip_origin(4), None);
    }
}
