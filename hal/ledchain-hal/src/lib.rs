//! ledchain Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the LED chain driver is written
//! against. Board support code implements them for a concrete SPI peripheral
//! and the GPIO pin wired to the chain's LOAD (chip-select) line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ledchain-drivers (Max7219Chain)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ledchain-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board SPI    │       │  LOAD / CS    │
//! │  peripheral   │       │  GPIO pin     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chain LOAD line)
//! - [`spi::SpiBus`] - SPI master writes

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

pub use gpio::OutputPin;
pub use spi::SpiBus;
