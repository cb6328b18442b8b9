//! Glyph source trait

/// Width and height of a glyph cell in pixels
pub const GLYPH_WIDTH: usize = 8;

/// Errors from glyph lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// The font has no glyph for this character
    Unmapped(char),
}

/// Font lookup
///
/// A glyph is eight column bytes, left column first. Within a byte the most
/// significant bit is the top row.
pub trait GlyphSource {
    /// Glyph for a character, or `None` if the font does not map it
    fn glyph(&self, ch: char) -> Option<[u8; GLYPH_WIDTH]>;

    /// Glyph for a character, failing on unmapped characters
    fn require(&self, ch: char) -> Result<[u8; GLYPH_WIDTH], GlyphError> {
        self.glyph(ch).ok_or(GlyphError::Unmapped(ch))
    }
}

impl<G: GlyphSource + ?Sized> GlyphSource for &G {
    fn glyph(&self, ch: char) -> Option<[u8; GLYPH_WIDTH]> {
        (**self).glyph(ch)
    }
}
