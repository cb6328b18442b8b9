//! Free-standing binary bitmaps

use alloc::vec;
use alloc::vec::Vec;

/// Binary matrix addressed `[x][y]`
///
/// Stored as a list of columns. Columns may have different lengths; any
/// read outside the stored cells returns `false`, so ragged or undersized
/// bitmaps behave as if padded with zeros.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    columns: Vec<Vec<bool>>,
}

impl Bitmap {
    /// Create a blank bitmap
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            columns: vec![vec![false; height]; width],
        }
    }

    /// Build a bitmap from a generator called for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        Self {
            columns: (0..width)
                .map(|x| (0..height).map(|y| f(x, y)).collect())
                .collect(),
        }
    }

    /// Build a bitmap from a column-major literal
    ///
    /// Any non-zero byte is an on pixel.
    ///
    /// ```
    /// use ledchain_core::Bitmap;
    ///
    /// // 3 columns, 3 rows: a plus sign
    /// let plus = Bitmap::from_columns(&[[0, 1, 0], [1, 1, 1], [0, 1, 0]]);
    /// assert!(plus.get(1, 0));
    /// assert!(!plus.get(0, 0));
    /// ```
    pub fn from_columns<C: AsRef<[u8]>>(columns: &[C]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|column| column.as_ref().iter().map(|&cell| cell != 0).collect())
                .collect(),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Length of the tallest column
    pub fn height(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Pixel at `(x, y)`, `false` outside the stored cells
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.columns
            .get(x)
            .and_then(|column| column.get(y))
            .copied()
            .unwrap_or(false)
    }

    /// Set a stored pixel; writes outside the stored cells are ignored
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if let Some(cell) = self.columns.get_mut(x).and_then(|column| column.get_mut(y)) {
            *cell = on;
        }
    }

    /// Copy of this bitmap cropped or zero-padded to exactly `width × height`
    pub fn padded(&self, width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |x, y| self.get(x, y))
    }

    /// One column as a 1-wide bitmap
    pub fn column(&self, x: usize) -> Self {
        let height = self.height();
        Self::from_fn(1, height, |_, y| self.get(x, y))
    }

    /// One row as a 1-tall bitmap
    pub fn row(&self, y: usize) -> Self {
        Self::from_fn(self.width(), 1, |x, _| self.get(x, y))
    }
}

/// Pixels that flow into a region or transition
///
/// Either a uniform value for every cell or an explicit bitmap that is read
/// with zero padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillSpec {
    /// Every cell takes the same value
    Uniform(bool),
    /// Cells come from a bitmap, zero outside it
    Explicit(Bitmap),
}

impl FillSpec {
    /// All cells off
    pub const CLEAR: Self = FillSpec::Uniform(false);
    /// All cells on
    pub const SET: Self = FillSpec::Uniform(true);

    /// Value of the cell at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        match self {
            FillSpec::Uniform(on) => *on,
            FillSpec::Explicit(bitmap) => bitmap.get(x, y),
        }
    }
}

impl Default for FillSpec {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl From<Bitmap> for FillSpec {
    fn from(bitmap: Bitmap) -> Self {
        FillSpec::Explicit(bitmap)
    }
}

impl From<bool> for FillSpec {
    fn from(on: bool) -> Self {
        FillSpec::Uniform(on)
    }
}
