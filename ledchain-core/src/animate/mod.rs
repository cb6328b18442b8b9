//! Frame-paced animations
//!
//! An [`Animator`] owns the render target and the delay provider. Every
//! animation step mutates the caller's buffer, renders it, then waits
//! `0.5^speed` seconds before the next step.
//!
//! ```ignore
//! let mut animator = Animator::new(&mut chain, delay);
//! animator.animate_wipe(&mut buffer, &next.into(), 3.0, Direction::RIGHT_DOWN)?;
//! animator.animate_rain(&mut buffer, &FillSpec::CLEAR, 3.0, &mut XorShift32::new(seed))?;
//! ```

pub mod animator;
pub mod cancel;
pub mod rain;
pub mod random;
pub mod wipe;

pub use animator::Animator;
pub use cancel::CancelToken;
pub use random::{RandomSource, XorShift32};

use crate::transform::Direction;

/// Errors that can stop an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError<E> {
    /// The render target failed
    Render(E),
    /// The animation has no behavior for this direction
    UnsupportedDirection(Direction),
}

/// Microseconds between frames for a speed setting
///
/// Each speed step halves the delay: 0 waits one second, 3 waits 125 ms.
/// Fractional speeds are allowed.
pub fn frame_delay_us(speed: f32) -> u32 {
    let micros = libm::exp2f(-speed) * 1_000_000.0;
    // Float-to-int casts saturate, NaN becomes 0
    micros as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: u32, expected: u32) -> bool {
        actual.abs_diff(expected) <= 1
    }

    #[test]
    fn test_frame_delay_halves_per_step() {
        assert!(close(frame_delay_us(0.0), 1_000_000));
        assert!(close(frame_delay_us(1.0), 500_000));
        assert!(close(frame_delay_us(3.0), 125_000));
    }

    #[test]
    fn test_frame_delay_fractional_and_degenerate() {
        let between = frame_delay_us(2.5);
        assert!(between < 250_000 && between > 125_000);
        assert_eq!(frame_delay_us(f32::NAN), 0);
        assert_eq!(frame_delay_us(f32::INFINITY), 0);
        assert_eq!(frame_delay_us(-40.0), u32::MAX);
    }
}
