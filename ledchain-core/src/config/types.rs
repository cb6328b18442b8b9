//! Configuration type definitions

use ledchain_protocol::registers::MAX_BRIGHTNESS;
use ledchain_protocol::{ChainError, ChainLayout};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default chips per row
pub const DEFAULT_BLOCKS_PER_ROW: usize = 3;

/// Default chips per column
pub const DEFAULT_BLOCKS_PER_COLUMN: usize = 1;

/// Default animation speed (125 ms per frame)
pub const DEFAULT_SPEED: f32 = 3.0;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Chip grid cannot be driven
    Layout(ChainError),
    /// Brightness above the chip's 0-15 range
    BrightnessOutOfRange(u8),
    /// Speed is NaN or infinite
    InvalidSpeed,
}

impl From<ChainError> for ConfigError {
    fn from(err: ChainError) -> Self {
        ConfigError::Layout(err)
    }
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Chips tiled horizontally
    pub blocks_per_row: usize,
    /// Chips tiled vertically
    pub blocks_per_column: usize,
    /// Intensity written at init (0-15)
    pub brightness: u8,
    /// Default animation speed; each step halves the frame delay
    pub speed: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            blocks_per_row: DEFAULT_BLOCKS_PER_ROW,
            blocks_per_column: DEFAULT_BLOCKS_PER_COLUMN,
            brightness: ledchain_protocol::registers::DEFAULT_BRIGHTNESS,
            speed: DEFAULT_SPEED,
        }
    }
}

impl DisplayConfig {
    /// Check the configuration and build the chip layout
    pub fn validate(&self) -> Result<ChainLayout, ConfigError> {
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange(self.brightness));
        }
        if !self.speed.is_finite() {
            return Err(ConfigError::InvalidSpeed);
        }
        Ok(ChainLayout::new(self.blocks_per_row, self.blocks_per_column)?)
    }

    /// Frame delay for the configured speed
    pub fn frame_delay_us(&self) -> u32 {
        crate::animate::frame_delay_us(self.speed)
    }
}
