//! Render target trait

use crate::buffer::PixelBuffer;

/// Something that can show the current buffer
///
/// Animations call this once per tick after mutating the buffer. For a
/// driver chain this encodes and transmits the whole grid.
pub trait Render {
    /// Error type of the underlying transport
    type Error;

    /// Push the buffer to the display
    fn render(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error>;
}

impl<R: Render + ?Sized> Render for &mut R {
    type Error = R::Error;

    fn render(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
        (**self).render(buffer)
    }
}
