//! Hardware driver implementations
//!
//! This crate connects the graphics core to real hardware:
//!
//! - [`Max7219Chain`]: the display unit for a daisy chain of MAX7219 chips
//! - Frame transports over a raw SPI bus plus LOAD pin, or over an
//!   `embedded-hal` SPI device that manages chip select itself

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod max7219;
pub mod transport;

pub use max7219::{Max7219Chain, Max7219Error};
pub use transport::{DeviceTransport, FrameTransport, SpiTransport};
