//! Board-agnostic graphics core for chained LED matrices
//!
//! This crate contains everything that does not touch hardware:
//!
//! - The binary pixel buffer shared by all drawing code
//! - Drawing primitives under a set/clear/invert draw mode
//! - Region shifting and continuous scrolling
//! - Wipe and rain transitions
//! - Collaborator traits (render target, glyph source)
//! - Configuration type definitions
//!
//! The buffer is owned by the caller and lent to each operation as
//! `&mut PixelBuffer`; nothing in this crate keeps a reference to it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod animate;
pub mod buffer;
pub mod config;
pub mod draw;
pub mod traits;
pub mod transform;

#[cfg(test)]
pub(crate) mod testing;

pub use animate::{AnimationError, Animator, CancelToken, RandomSource, XorShift32};
pub use buffer::{Bitmap, FillSpec, PixelBuffer};
pub use config::{ConfigError, DisplayConfig};
pub use draw::{DrawEngine, DrawMode};
pub use traits::{GlyphError, GlyphSource, Render};
pub use transform::{move_region, Direction, Region};
