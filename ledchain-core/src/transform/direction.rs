//! Movement and sweep directions

bitflags::bitflags! {
    /// Direction flags
    ///
    /// Cardinal directions are single flags; diagonals are the union of one
    /// horizontal and one vertical flag. `UP` points toward row 0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const LEFT  = 0b0001;
        const RIGHT = 0b0010;
        const UP    = 0b0100;
        const DOWN  = 0b1000;

        const LEFT_UP    = Self::LEFT.bits() | Self::UP.bits();
        const RIGHT_UP   = Self::RIGHT.bits() | Self::UP.bits();
        const LEFT_DOWN  = Self::LEFT.bits() | Self::DOWN.bits();
        const RIGHT_DOWN = Self::RIGHT.bits() | Self::DOWN.bits();
    }
}

impl Direction {
    /// Horizontal component, `LEFT` winning if both are set
    pub fn horizontal(self) -> Option<Direction> {
        if self.contains(Direction::LEFT) {
            Some(Direction::LEFT)
        } else if self.contains(Direction::RIGHT) {
            Some(Direction::RIGHT)
        } else {
            None
        }
    }

    /// Vertical component, `UP` winning if both are set
    pub fn vertical(self) -> Option<Direction> {
        if self.contains(Direction::UP) {
            Some(Direction::UP)
        } else if self.contains(Direction::DOWN) {
            Some(Direction::DOWN)
        } else {
            None
        }
    }

    /// Exactly one of the four cardinal flags
    pub fn is_cardinal(self) -> bool {
        [Direction::LEFT, Direction::RIGHT, Direction::UP, Direction::DOWN].contains(&self)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Direction({=u8:#06b})", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonals_are_unions() {
        assert_eq!(Direction::LEFT_UP, Direction::LEFT | Direction::UP);
        assert_eq!(Direction::RIGHT_DOWN.horizontal(), Some(Direction::RIGHT));
        assert_eq!(Direction::RIGHT_DOWN.vertical(), Some(Direction::DOWN));
        assert!(!Direction::RIGHT_DOWN.is_cardinal());
        assert!(Direction::UP.is_cardinal());
    }

    #[test]
    fn test_conflicting_flags_resolve() {
        let both = Direction::LEFT | Direction::RIGHT | Direction::UP | Direction::DOWN;
        assert_eq!(both.horizontal(), Some(Direction::LEFT));
        assert_eq!(both.vertical(), Some(Direction::UP));
        assert_eq!(Direction::empty().horizontal(), None);
    }
}
