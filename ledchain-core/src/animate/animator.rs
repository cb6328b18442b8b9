//! Animation driver and continuous scrolling

use embedded_hal::delay::DelayNs;

use crate::buffer::{FillSpec, PixelBuffer};
use crate::traits::Render;
use crate::transform::{move_region, Direction, Region};

use super::{frame_delay_us, AnimationError, CancelToken};

/// Runs frame-paced animations against a render target
///
/// The buffer is not stored; each animation borrows it for its duration.
pub struct Animator<R, D> {
    renderer: R,
    delay: D,
}

impl<R, D> Animator<R, D>
where
    R: Render,
    D: DelayNs,
{
    /// Create an animator
    pub fn new(renderer: R, delay: D) -> Self {
        Self { renderer, delay }
    }

    /// Get the render target
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the render target mutably
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Give back the render target and delay provider
    pub fn into_parts(self) -> (R, D) {
        (self.renderer, self.delay)
    }

    /// Push the buffer to the render target
    pub fn render(&mut self, buffer: &PixelBuffer) -> Result<(), AnimationError<R::Error>> {
        self.renderer.render(buffer).map_err(AnimationError::Render)
    }

    /// Wait one frame at the given speed
    pub fn pause(&mut self, speed: f32) {
        self.delay.delay_us(frame_delay_us(speed));
    }

    /// Render then wait; one animation step
    pub(crate) fn frame(
        &mut self,
        buffer: &PixelBuffer,
        speed: f32,
    ) -> Result<(), AnimationError<R::Error>> {
        self.render(buffer)?;
        self.pause(speed);
        Ok(())
    }

    /// Clear the buffer and show the blank display
    pub fn clear_display(&mut self, buffer: &mut PixelBuffer) -> Result<(), AnimationError<R::Error>> {
        buffer.clear();
        self.render(buffer)
    }

    /// Scroll `source` into the display one pixel per frame
    ///
    /// `source` is cropped or zero-padded to the buffer size. Each frame
    /// shifts the whole buffer by one pixel and feeds the next column or row
    /// of `source` into the vacated edge, wrapping around to the start once
    /// the source is used up:
    ///
    /// - `LEFT`: columns left to right, entering at the right edge
    /// - `RIGHT`: columns right to left, entering at the left edge
    /// - `UP`: rows top to bottom, entering at the bottom edge
    /// - `DOWN`: rows bottom to top, entering at the top edge
    ///
    /// Runs `repeats` frames, or until `cancel` is set when `repeats` is 0.
    /// The token is checked before every frame in both cases. Returns the
    /// number of frames shown.
    pub fn scroll_bitmap(
        &mut self,
        buffer: &mut PixelBuffer,
        source: &FillSpec,
        direction: Direction,
        speed: f32,
        repeats: u32,
        cancel: &CancelToken,
    ) -> Result<u32, AnimationError<R::Error>> {
        if !direction.is_cardinal() {
            return Err(AnimationError::UnsupportedDirection(direction));
        }

        let (width, height) = (buffer.columns(), buffer.rows());
        let source = match source {
            FillSpec::Explicit(bitmap) => FillSpec::Explicit(bitmap.padded(width, height)),
            uniform => uniform.clone(),
        };
        let region = Region::full(buffer);

        let mut frames = 0u32;
        while repeats == 0 || frames < repeats {
            if cancel.is_cancelled() {
                #[cfg(feature = "defmt")]
                defmt::debug!("Scroll cancelled after {} frames", frames);
                break;
            }

            let step = frames as usize;
            let slice = match &source {
                FillSpec::Uniform(on) => FillSpec::Uniform(*on),
                FillSpec::Explicit(bitmap) => FillSpec::Explicit(if direction == Direction::LEFT {
                    bitmap.column(step % width)
                } else if direction == Direction::RIGHT {
                    bitmap.column(width - 1 - step % width)
                } else if direction == Direction::UP {
                    bitmap.row(step % height)
                } else {
                    bitmap.row(height - 1 - step % height)
                }),
            };

            move_region(buffer, region, direction, 1, &slice);
            self.frame(buffer, speed)?;
            frames = frames.wrapping_add(1);
        }
        Ok(frames)
    }
}
