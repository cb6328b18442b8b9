//! Cooperative cancellation

use portable_atomic::{AtomicBool, Ordering};

/// Flag checked by long-running animations between frames
///
/// Shared by reference; an interrupt handler or another thread can call
/// [`cancel`](Self::cancel) while an animation runs and the animation stops
/// before its next frame.
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Create a token that is not cancelled
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clear a previous request so the token can be reused
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
