//! GPIO pin abstractions

/// Digital output pin
///
/// Used for the chain's LOAD line: held low while a frame is shifted in,
/// raised to latch it into every chip at once.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);
}
