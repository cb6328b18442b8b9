//! Daisy-chain frame protocol
//!
//! This crate turns logical register writes and pixel columns into the byte
//! sequences a chain of MAX7219-style LED drivers expects. Every chip is a
//! 16-bit shift register; a frame carries exactly one `(register, value)`
//! pair per chip and is latched into all of them at once when LOAD rises.
//!
//! # Frame Layout
//!
//! ```text
//!  controller ──▶ chip 0 ──▶ chip 1 ──▶ ... ──▶ chip N-1
//!
//! ┌──────────────┬──────────────┬─────┬──────────────┐
//! │ pair for N-1 │ pair for N-2 │ ... │ pair for 0   │
//! │ REG │ VALUE  │ REG │ VALUE  │     │ REG │ VALUE  │
//! └──────────────┴──────────────┴─────┴──────────────┘
//! ```
//!
//! The pair for the chip furthest from the controller is shifted out first,
//! so it has travelled through the whole chain when the frame latches.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod layout;
pub mod registers;

pub use frame::{ChainEncoder, Frame, MAX_FRAME_SIZE};
pub use layout::{ChainError, ChainLayout, PixelSource, CHIP_SIZE, MAX_CHIPS};
pub use registers::reg;
