//! Windowed pixel shift

use crate::buffer::{FillSpec, PixelBuffer};

use super::Direction;

/// Rectangle with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Region after clamping to a buffer, corners ordered
#[derive(Debug, Clone, Copy)]
struct Bounds {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl Bounds {
    fn width(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    fn height(&self) -> usize {
        self.y2 - self.y1 + 1
    }
}

impl Region {
    /// Create a region from two inclusive corners
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The whole buffer
    pub fn full(buffer: &PixelBuffer) -> Self {
        Self::new(0, 0, buffer.columns() as i32 - 1, buffer.rows() as i32 - 1)
    }

    fn clamp_to(&self, buffer: &PixelBuffer) -> Bounds {
        let clamp = |value: i32, limit: usize| value.clamp(0, limit as i32 - 1) as usize;
        let (x1, x2) = (clamp(self.x1, buffer.columns()), clamp(self.x2, buffer.columns()));
        let (y1, y2) = (clamp(self.y1, buffer.rows()), clamp(self.y2, buffer.rows()));
        Bounds {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }
}

/// Shift the pixels of a region by `distance` in `direction`
///
/// The region is clamped to the buffer. Pixels pushed past the region edge
/// are discarded and the vacated strip is read from `incoming`, indexed from
/// the strip's own top-left corner. `distance` is capped at the region's
/// extent along the axis, so a large distance replaces the region with
/// `incoming` entirely.
///
/// With both a horizontal and a vertical flag set, the horizontal shift is
/// applied first and the vertical shift then works on its result.
pub fn move_region(
    buffer: &mut PixelBuffer,
    region: Region,
    direction: Direction,
    distance: usize,
    incoming: &FillSpec,
) {
    let bounds = region.clamp_to(buffer);

    if let Some(horizontal) = direction.horizontal() {
        shift_horizontal(buffer, bounds, horizontal, distance, incoming);
    }
    if let Some(vertical) = direction.vertical() {
        shift_vertical(buffer, bounds, vertical, distance, incoming);
    }
}

fn shift_horizontal(
    buffer: &mut PixelBuffer,
    b: Bounds,
    direction: Direction,
    distance: usize,
    incoming: &FillSpec,
) {
    let distance = distance.min(b.width());
    if distance == 0 {
        return;
    }

    if direction == Direction::LEFT {
        let strip = b.x2 + 1 - distance;
        for x in b.x1..=b.x2 {
            for y in b.y1..=b.y2 {
                let value = if x < strip {
                    buffer.at(x + distance, y)
                } else {
                    incoming.pixel(x - strip, y - b.y1)
                };
                buffer.put(x, y, value);
            }
        }
    } else {
        let strip = b.x1 + distance;
        for x in (b.x1..=b.x2).rev() {
            for y in b.y1..=b.y2 {
                let value = if x >= strip {
                    buffer.at(x - distance, y)
                } else {
                    incoming.pixel(x - b.x1, y - b.y1)
                };
                buffer.put(x, y, value);
            }
        }
    }
}

fn shift_vertical(
    buffer: &mut PixelBuffer,
    b: Bounds,
    direction: Direction,
    distance: usize,
    incoming: &FillSpec,
) {
    let distance = distance.min(b.height());
    if distance == 0 {
        return;
    }

    if direction == Direction::UP {
        let strip = b.y2 + 1 - distance;
        for x in b.x1..=b.x2 {
            for y in b.y1..=b.y2 {
                let value = if y < strip {
                    buffer.at(x, y + distance)
                } else {
                    incoming.pixel(x - b.x1, y - strip)
                };
                buffer.put(x, y, value);
            }
        }
    } else {
        let strip = b.y1 + distance;
        for x in b.x1..=b.x2 {
            for y in (b.y1..=b.y2).rev() {
                let value = if y >= strip {
                    buffer.at(x, y - distance)
                } else {
                    incoming.pixel(x - b.x1, y - b.y1)
                };
                buffer.put(x, y, value);
            }
        }
    }
}
