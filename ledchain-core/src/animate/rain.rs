//! Rain transition
//!
//! Every column runs its own little gravity simulation. Pixels of the target
//! enter at the top one row per frame, bottom row first, and fall at a
//! per-column speed until they land on the pile below them. After `rows`
//! frames every column has stacked the target exactly.

use alloc::vec;
use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::buffer::{FillSpec, PixelBuffer};
use crate::traits::Render;

use super::{AnimationError, Animator, RandomSource};

/// Slowest fall speed in rows per frame
const MIN_FALL: usize = 2;
/// Number of distinct fall speeds
const FALL_SPEEDS: u32 = 4;

/// Falling pixels of one column
///
/// Slots are indexed by depth, slot 0 being the bottom row. `None` is an
/// empty slot; `Some(on)` holds a pixel, lit or not.
#[derive(Debug, Clone)]
struct Fall {
    slots: Vec<Option<bool>>,
    speed: usize,
}

impl Fall {
    fn new(rows: usize, speed: usize) -> Self {
        Self {
            slots: vec![None; rows],
            speed,
        }
    }

    /// Nearest occupied slot above `depth`
    fn next_above(&self, depth: usize) -> Option<usize> {
        (depth + 1..self.slots.len()).find(|&i| self.slots[i].is_some())
    }

    /// Let every pending pixel fall, then feed `incoming` into the top slot
    fn advance(&mut self, incoming: bool) {
        let height = self.slots.len();
        let Some(first_empty) = self.slots.iter().position(Option::is_none) else {
            return;
        };

        for depth in first_empty..height {
            match self.next_above(depth) {
                Some(above) => {
                    let from = above.min(depth + self.speed);
                    let pixel = self.slots[from].take();
                    self.slots[depth] = pixel;
                }
                None if depth == height - 1 => self.slots[depth] = Some(incoming),
                None => {}
            }
        }
    }

    fn draw(&self, buffer: &mut PixelBuffer, x: usize) {
        let rows = self.slots.len();
        for (depth, slot) in self.slots.iter().enumerate() {
            buffer.put(x, rows - 1 - depth, *slot == Some(true));
        }
    }
}

impl<R, D> Animator<R, D>
where
    R: Render,
    D: DelayNs,
{
    /// Let the pixels of `target` fall into place from the top edge
    ///
    /// Each column gets a fall speed of 2 to 5 rows per frame from `rng`.
    /// The display is cleared and shown blank for one frame first, then one
    /// frame is rendered per buffer row. The last frame equals `target`.
    pub fn animate_rain<G>(
        &mut self,
        buffer: &mut PixelBuffer,
        target: &FillSpec,
        speed: f32,
        rng: &mut G,
    ) -> Result<(), AnimationError<R::Error>>
    where
        G: RandomSource + ?Sized,
    {
        let (columns, rows) = (buffer.columns(), buffer.rows());
        let mut falls: Vec<Fall> = (0..columns)
            .map(|_| Fall::new(rows, MIN_FALL + (rng.next_u32() % FALL_SPEEDS) as usize))
            .collect();

        self.clear_display(buffer)?;
        self.pause(speed);

        for tick in 0..rows {
            let y = rows - 1 - tick;
            for (x, fall) in falls.iter_mut().enumerate() {
                fall.advance(target.pixel(x, y));
            }

            buffer.clear();
            for (x, fall) in falls.iter().enumerate() {
                fall.draw(buffer, x);
            }
            self.frame(buffer, speed)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animate::XorShift32;
    use crate::buffer::Bitmap;
    use crate::testing::{buffer, FailingRenderer, NoDelay, RecordingRenderer, Sequence};
    use proptest::prelude::*;

    fn rain(blocks: (usize, usize), target: &FillSpec, rng: &mut dyn RandomSource) -> Vec<Bitmap> {
        let mut buf = buffer(blocks.0, blocks.1);
        buf.fill(true);
        let mut animator = Animator::new(RecordingRenderer::default(), NoDelay::default());
        animator.animate_rain(&mut buf, target, 9.0, rng).unwrap();
        let (renderer, delay) = animator.into_parts();
        assert_eq!(delay.calls, renderer.frames.len());
        renderer.frames
    }

    #[test]
    fn test_starts_blank_and_ends_on_target() {
        let pattern = Bitmap::from_fn(16, 16, |x, y| (x ^ y) % 3 == 0);
        let frames = rain((2, 2), &pattern.clone().into(), &mut XorShift32::new(7));
        assert_eq!(frames.len(), 1 + 16);
        assert_eq!(frames[0], Bitmap::new(16, 16));
        assert_eq!(frames.last(), Some(&pattern));
    }

    #[test]
    fn test_first_tick_feeds_top_row() {
        let frames = rain((1, 1), &FillSpec::SET, &mut Sequence::new(&[0]));
        let first = &frames[1];
        assert_eq!(first.row(0), Bitmap::from_fn(8, 1, |_, _| true));
        for y in 1..8 {
            assert_eq!(first.row(y), Bitmap::new(8, 1));
        }
    }

    #[test]
    fn test_pixels_fall_at_column_speed() {
        // Column 0 falls 2 rows per frame, column 1 falls 5
        let frames = rain((1, 1), &FillSpec::SET, &mut Sequence::new(&[0, 3]));
        let second = &frames[2];
        assert!(second.get(0, 2) && second.get(0, 0));
        assert!(second.get(1, 5) && second.get(1, 0));
        assert!(!second.get(0, 5) && !second.get(1, 2));
    }

    #[test]
    fn test_unlit_pixels_still_take_space() {
        // Only the bottom row is lit; it lands first and stays at the bottom
        let target = FillSpec::from(Bitmap::from_fn(8, 8, |_, y| y == 7));
        let frames = rain((1, 1), &target, &mut XorShift32::new(1));
        assert_eq!(frames.last().unwrap().row(7), Bitmap::from_fn(8, 1, |_, _| true));
        assert_eq!(frames.last().unwrap().row(6), Bitmap::new(8, 1));
    }

    #[test]
    fn test_render_error_stops_rain() {
        let mut buf = buffer(1, 1);
        let mut animator = Animator::new(
            FailingRenderer {
                fail_at: 1,
                calls: 0,
            },
            NoDelay::default(),
        );
        let result = animator.animate_rain(&mut buf, &FillSpec::SET, 3.0, &mut XorShift32::new(3));
        assert_eq!(result, Err(AnimationError::Render("bus fault")));
        assert_eq!(animator.into_parts().1.calls, 0);
    }

    proptest! {
        #[test]
        fn test_fall_stacks_in_feed_order(
            speed in 2usize..=5,
            pixels in proptest::collection::vec(any::<bool>(), 1..40),
        ) {
            let mut fall = Fall::new(pixels.len(), speed);
            for &pixel in &pixels {
                fall.advance(pixel);
            }
            let settled: Vec<Option<bool>> = pixels.iter().map(|&on| Some(on)).collect();
            prop_assert_eq!(fall.slots, settled);
        }
    }
}
