//! Configuration types
//!
//! Board-agnostic display settings. With the `serde` feature the types can be
//! loaded from whatever format the application stores its settings in.

pub mod types;

pub use types::*;
