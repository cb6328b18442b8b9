//! Pixel storage
//!
//! [`PixelBuffer`] is the display-sized grid every operation draws into.
//! [`Bitmap`] is a free-standing matrix of any size used as drawing source,
//! snapshot or transition target.

pub mod bitmap;
pub mod pixel;

pub use bitmap::{Bitmap, FillSpec};
pub use pixel::PixelBuffer;
