//! Wipe transitions

use embedded_hal::delay::DelayNs;

use crate::buffer::{FillSpec, PixelBuffer};
use crate::traits::Render;
use crate::transform::Direction;

use super::{AnimationError, Animator};

/// Order in which a wipe reveals the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    /// One column per step
    Columns { reverse: bool },
    /// One row per step
    Rows { reverse: bool },
    /// Cells with `x + y == step`
    AntiDiagonal { reverse: bool },
    /// Cells with `x - y == step - (rows - 1)`
    Diagonal { reverse: bool },
}

impl Sweep {
    fn from_direction(direction: Direction) -> Option<Self> {
        let sweep = if direction == Direction::LEFT {
            Sweep::Columns { reverse: true }
        } else if direction == Direction::RIGHT {
            Sweep::Columns { reverse: false }
        } else if direction == Direction::UP {
            Sweep::Rows { reverse: true }
        } else if direction == Direction::DOWN {
            Sweep::Rows { reverse: false }
        } else if direction == Direction::RIGHT_UP {
            Sweep::AntiDiagonal { reverse: false }
        } else if direction == Direction::LEFT_DOWN {
            Sweep::AntiDiagonal { reverse: true }
        } else if direction == Direction::RIGHT_DOWN {
            Sweep::Diagonal { reverse: false }
        } else if direction == Direction::LEFT_UP {
            Sweep::Diagonal { reverse: true }
        } else {
            return None;
        };
        Some(sweep)
    }

    fn steps(self, columns: usize, rows: usize) -> usize {
        match self {
            Sweep::Columns { .. } => columns,
            Sweep::Rows { .. } => rows,
            Sweep::AntiDiagonal { .. } | Sweep::Diagonal { .. } => columns + rows - 1,
        }
    }

    fn reverse(self) -> bool {
        match self {
            Sweep::Columns { reverse }
            | Sweep::Rows { reverse }
            | Sweep::AntiDiagonal { reverse }
            | Sweep::Diagonal { reverse } => reverse,
        }
    }

    /// Copy the cells of one step from `target` into the buffer
    fn reveal(self, buffer: &mut PixelBuffer, target: &FillSpec, step: usize) {
        let (columns, rows) = (buffer.columns(), buffer.rows());
        let steps = self.steps(columns, rows);
        let index = if self.reverse() { steps - 1 - step } else { step };

        let mut copy = |x: usize, y: usize| {
            if x < columns && y < rows {
                buffer.put(x, y, target.pixel(x, y));
            }
        };

        match self {
            Sweep::Columns { .. } => (0..rows).for_each(|y| copy(index, y)),
            Sweep::Rows { .. } => (0..columns).for_each(|x| copy(x, index)),
            Sweep::AntiDiagonal { .. } => {
                for stage in 0..(index + 1).min(columns.max(rows)) {
                    copy(index - stage, stage);
                }
            }
            Sweep::Diagonal { .. } => {
                for stage in 0..(index + 1).min(columns.max(rows)) {
                    if let Some(y) = (rows - 1 + stage).checked_sub(index) {
                        copy(stage, y);
                    }
                }
            }
        }
    }
}

impl<R, D> Animator<R, D>
where
    R: Render,
    D: DelayNs,
{
    /// Replace the buffer contents with `target` one strip per frame
    ///
    /// - `LEFT` reveals columns right to left, `RIGHT` left to right
    /// - `UP` reveals rows bottom to top, `DOWN` top to bottom
    /// - `RIGHT_UP` sweeps the anti-diagonals `x + y` upward from `(0, 0)`,
    ///   `LEFT_DOWN` the same lines in reverse
    /// - `RIGHT_DOWN` sweeps the diagonals `x - y` starting at the
    ///   bottom-left corner, `LEFT_UP` the same lines in reverse
    ///
    /// Each strip is one frame. Any other direction is rejected before the
    /// buffer is touched.
    pub fn animate_wipe(
        &mut self,
        buffer: &mut PixelBuffer,
        target: &FillSpec,
        speed: f32,
        direction: Direction,
    ) -> Result<(), AnimationError<R::Error>> {
        let sweep =
            Sweep::from_direction(direction).ok_or(AnimationError::UnsupportedDirection(direction))?;

        for step in 0..sweep.steps(buffer.columns(), buffer.rows()) {
            sweep.reveal(buffer, target, step);
            self.frame(buffer, speed)?;
        }
        Ok(())
    }
}
