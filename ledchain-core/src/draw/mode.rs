//! Draw mode policy

/// How a drawn pixel combines with the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawMode {
    /// Write the source value
    #[default]
    Set,
    /// Write the complement of the source value
    Clear,
    /// XOR the source value into the buffer
    Invert,
}

impl DrawMode {
    /// New cell value for a source pixel drawn over an existing one
    pub const fn apply(self, source: bool, existing: bool) -> bool {
        match self {
            DrawMode::Set => source,
            DrawMode::Clear => !source,
            DrawMode::Invert => source ^ existing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_truth_table() {
        for existing in [false, true] {
            assert!(DrawMode::Set.apply(true, existing));
            assert!(!DrawMode::Set.apply(false, existing));
            assert!(!DrawMode::Clear.apply(true, existing));
            assert!(DrawMode::Clear.apply(false, existing));
            assert_eq!(DrawMode::Invert.apply(true, existing), !existing);
            assert_eq!(DrawMode::Invert.apply(false, existing), existing);
        }
    }
}
