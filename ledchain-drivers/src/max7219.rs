//! MAX7219 LED matrix chain
//!
//! Each MAX7219 drives one 8×8 block. The chips are wired as a shift
//! register: every frame carries one `(register, value)` pair per chip and
//! the pairs are latched together when LOAD rises. Register writes aimed at
//! one chip pad all other chips with no-ops.
//!
//! # Initialization
//!
//! 1. Clear all eight digit registers
//! 2. Scan limit: all digits
//! 3. Decode mode: none (raw matrix)
//! 4. Display test: off
//! 5. Shutdown: off (normal operation)
//! 6. Intensity: configured brightness

use ledchain_core::{ConfigError, DisplayConfig, PixelBuffer, Render};
use ledchain_protocol::registers::{
    DECODE_NONE, DEFAULT_BRIGHTNESS, DISPLAY_TEST_OFF, DISPLAY_TEST_ON, MAX_BRIGHTNESS, SCAN_ALL,
    SHUTDOWN_ENTER, SHUTDOWN_NORMAL,
};
use ledchain_protocol::{reg, ChainEncoder, ChainLayout, Frame, CHIP_SIZE};

use crate::transport::FrameTransport;

/// MAX7219 chain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<E> {
    /// The transport failed to send a frame
    Transport(E),
    /// The buffer was built for a different chip layout
    LayoutMismatch,
}

/// Display unit for a chain of MAX7219 chips
pub struct Max7219Chain<T> {
    transport: T,
    encoder: ChainEncoder,
    brightness: u8,
}

impl<T: FrameTransport> Max7219Chain<T> {
    /// Create a chain driver; nothing is sent until [`init`](Self::init)
    pub fn new(transport: T, layout: ChainLayout) -> Self {
        Self {
            transport,
            encoder: ChainEncoder::new(layout),
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Create a chain driver from a display configuration
    pub fn from_config(transport: T, config: &DisplayConfig) -> Result<Self, ConfigError> {
        let layout = config.validate()?;
        let mut chain = Self::new(transport, layout);
        chain.brightness = config.brightness;
        Ok(chain)
    }

    /// Get the chip layout
    pub fn layout(&self) -> &ChainLayout {
        self.encoder.layout()
    }

    /// Last brightness written (or to be written by `init`)
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    fn send(&mut self, frame: &Frame) -> Result<(), Max7219Error<T::Error>> {
        self.transport
            .send(frame.as_bytes())
            .map_err(Max7219Error::Transport)
    }

    /// Run the power-on sequence
    pub fn init(&mut self) -> Result<(), Max7219Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "MAX7219 init: {} chips, brightness {}",
            self.layout().chips(),
            self.brightness
        );

        self.clear_all_blocks()?;
        self.send_to_all(reg::SCAN_LIMIT, SCAN_ALL)?;
        self.send_to_all(reg::DECODE_MODE, DECODE_NONE)?;
        self.send_to_all(reg::DISPLAY_TEST, DISPLAY_TEST_OFF)?;
        self.send_to_all(reg::SHUTDOWN, SHUTDOWN_NORMAL)?;
        self.send_to_all(reg::INTENSITY, self.brightness)
    }

    /// Write a register on one chip
    ///
    /// A chip index outside the chain sends nothing and succeeds.
    pub fn send_to(&mut self, chip: usize, register: u8, value: u8) -> Result<(), Max7219Error<T::Error>> {
        match self.encoder.write_register(chip, register, value) {
            Some(frame) => self.send(&frame),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Dropping write to chip {} of {}", chip, self.layout().chips());
                Ok(())
            }
        }
    }

    /// Write a register on every chip
    pub fn send_to_all(&mut self, register: u8, value: u8) -> Result<(), Max7219Error<T::Error>> {
        let frame = self.encoder.write_all(register, value);
        self.send(&frame)
    }

    /// Blank the given chips, leaving the others as they are
    pub fn clear_blocks(&mut self, chips: &[usize]) -> Result<(), Max7219Error<T::Error>> {
        for &chip in chips {
            for column in 0..CHIP_SIZE as u8 {
                self.send_to(chip, reg::digit(column), 0)?;
            }
        }
        Ok(())
    }

    /// Blank every chip
    pub fn clear_all_blocks(&mut self) -> Result<(), Max7219Error<T::Error>> {
        for column in 0..CHIP_SIZE as u8 {
            self.send_to_all(reg::digit(column), 0)?;
        }
        Ok(())
    }

    /// Set the intensity of every chip, clamped to 0-15
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Max7219Error<T::Error>> {
        let level = level.min(MAX_BRIGHTNESS);
        #[cfg(feature = "defmt")]
        defmt::debug!("MAX7219 brightness {}", level);
        self.send_to_all(reg::INTENSITY, level)?;
        self.brightness = level;
        Ok(())
    }

    /// Enter (`true`) or leave (`false`) shutdown on every chip
    ///
    /// Register contents survive shutdown.
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Max7219Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("MAX7219 shutdown {}", shutdown);
        let value = if shutdown { SHUTDOWN_ENTER } else { SHUTDOWN_NORMAL };
        self.send_to_all(reg::SHUTDOWN, value)
    }

    /// Light every LED regardless of the digit registers
    pub fn set_display_test(&mut self, enabled: bool) -> Result<(), Max7219Error<T::Error>> {
        let value = if enabled { DISPLAY_TEST_ON } else { DISPLAY_TEST_OFF };
        self.send_to_all(reg::DISPLAY_TEST, value)
    }

    /// Refresh the whole chain from a buffer, one frame per local column
    pub fn send_buffer(&mut self, buffer: &PixelBuffer) -> Result<(), Max7219Error<T::Error>> {
        if buffer.layout() != self.layout() {
            return Err(Max7219Error::LayoutMismatch);
        }
        for column in 0..CHIP_SIZE as u8 {
            let frame = self.encoder.encode_column(buffer, column);
            self.send(&frame)?;
        }
        Ok(())
    }
}

impl<T: FrameTransport> Render for Max7219Chain<T> {
    type Error = Max7219Error<T::Error>;

    fn render(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
        self.send_buffer(buffer)
    }
}
