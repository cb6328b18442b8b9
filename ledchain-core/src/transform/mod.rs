//! Region shifting
//!
//! Moves pixels inside a rectangle and feeds the vacated strip from a
//! [`FillSpec`](crate::buffer::FillSpec). Continuous scrolling builds on
//! this in [`Animator::scroll_bitmap`](crate::animate::Animator::scroll_bitmap).

pub mod direction;
pub mod region;

pub use direction::Direction;
pub use region::{move_region, Region};
