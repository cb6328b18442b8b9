//! Drawing primitives
//!
//! Every primitive combines a source value with the existing buffer cell
//! through the engine's [`DrawMode`] and clips per pixel at the buffer edge.

pub mod engine;
pub mod mode;

pub use engine::DrawEngine;
pub use mode::DrawMode;
