//! Randomness for the rain animation

/// Source of uniformly distributed 32-bit values
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

/// Xorshift32 generator
///
/// Small and fast; good enough for picking animation speeds, not for
/// anything that needs real randomness.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator; a zero seed is replaced since it would stick at 0
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
