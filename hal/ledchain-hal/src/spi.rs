//! SPI bus abstractions
//!
//! The LED chain is a write-only shift register: data goes out on MOSI and
//! nothing useful ever comes back, so the bus trait only models writes.

/// SPI bus master
///
/// Chip select is not part of this trait. The chain latches on the rising
/// edge of its LOAD line, which the caller drives through an
/// [`OutputPin`](crate::gpio::OutputPin) around each frame.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until every queued byte has been clocked out
    ///
    /// Buses without a transmit FIFO can rely on the default.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bus that counts bytes clocked out
    struct CountingBus {
        sent: usize,
    }

    impl SpiBus for CountingBus {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            self.sent += data.len();
            Ok(())
        }
    }

    #[test]
    fn test_default_flush_succeeds() {
        let mut bus = CountingBus { sent: 0 };
        bus.write(&[0x0C, 0x01]).unwrap();
        assert_eq!(bus.flush(), Ok(()));
        assert_eq!(bus.sent, 2);
    }
}
