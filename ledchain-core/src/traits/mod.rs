//! Collaborator traits
//!
//! These traits define the interface between the graphics core and the
//! pieces it does not implement itself: the hardware that shows the buffer
//! and the font tables that supply glyphs.

pub mod glyph;
pub mod render;

pub use glyph::{GlyphError, GlyphSource, GLYPH_WIDTH};
pub use render::Render;
