//! MAX7219 register map
//!
//! Register addresses and the handful of values the driver writes to them.

/// Register addresses
pub mod reg {
    /// No-op, ignored by every chip; used to pad frames
    pub const NOOP: u8 = 0x0;
    /// First digit register; the display column at local x = 0
    pub const DIGIT0: u8 = 0x1;
    pub const DIGIT1: u8 = 0x2;
    pub const DIGIT2: u8 = 0x3;
    pub const DIGIT3: u8 = 0x4;
    pub const DIGIT4: u8 = 0x5;
    pub const DIGIT5: u8 = 0x6;
    pub const DIGIT6: u8 = 0x7;
    pub const DIGIT7: u8 = 0x8;
    /// BCD decode mode select
    pub const DECODE_MODE: u8 = 0x9;
    /// Brightness, 0-15
    pub const INTENSITY: u8 = 0xA;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0xB;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 0xC;
    /// 1 = all segments lit
    pub const DISPLAY_TEST: u8 = 0xF;

    /// Digit register for a local column (0-7)
    pub const fn digit(column: u8) -> u8 {
        DIGIT0 + (column & 0x07)
    }
}

/// No BCD decoding on any digit (raw matrix mode)
pub const DECODE_NONE: u8 = 0x0;

/// Scan all eight digits
pub const SCAN_ALL: u8 = 0x7;

/// Display test off
pub const DISPLAY_TEST_OFF: u8 = 0x0;

/// Display test on
pub const DISPLAY_TEST_ON: u8 = 0x1;

/// Shutdown register value for normal operation
pub const SHUTDOWN_NORMAL: u8 = 0x1;

/// Shutdown register value for shutdown mode
pub const SHUTDOWN_ENTER: u8 = 0x0;

/// Brightness applied by the init sequence
pub const DEFAULT_BRIGHTNESS: u8 = 4;

/// Highest accepted intensity value
pub const MAX_BRIGHTNESS: u8 = 15;
