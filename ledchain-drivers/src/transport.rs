//! Frame transports
//!
//! A transport shifts one complete frame into the chain and latches it. It
//! does no buffering, retries or acknowledgement; the chain cannot answer.

use embedded_hal::spi::SpiDevice;
use ledchain_hal::{OutputPin, SpiBus};

/// Sends whole frames to the chain
pub trait FrameTransport {
    /// Error type for the underlying bus
    type Error;

    /// Transmit `bytes` verbatim between two chip-select boundaries
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: FrameTransport + ?Sized> FrameTransport for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::send(self, bytes)
    }
}

/// Raw SPI bus with a separate LOAD (chip select) pin
///
/// LOAD idles high, is pulled low for the frame and raised again afterwards,
/// which latches the shifted data into every chip. The pin is raised even
/// when the bus fails so the chain never stays selected.
pub struct SpiTransport<SPI, LOAD> {
    spi: SPI,
    load: LOAD,
}

impl<SPI, LOAD> SpiTransport<SPI, LOAD>
where
    SPI: SpiBus,
    LOAD: OutputPin,
{
    /// Create a transport and park LOAD high
    pub fn new(spi: SPI, mut load: LOAD) -> Self {
        load.set_high();
        Self { spi, load }
    }

    /// Give back the bus and pin
    pub fn release(self) -> (SPI, LOAD) {
        (self.spi, self.load)
    }
}

impl<SPI, LOAD> FrameTransport for SpiTransport<SPI, LOAD>
where
    SPI: SpiBus,
    LOAD: OutputPin,
{
    type Error = SPI::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.load.set_low();
        let result = self.spi.write(bytes).and_then(|()| self.spi.flush());
        self.load.set_high();
        result
    }
}

/// `embedded-hal` SPI device; the device owns chip select
pub struct DeviceTransport<D> {
    device: D,
}

impl<D: SpiDevice> DeviceTransport<D> {
    /// Wrap an SPI device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Give back the device
    pub fn release(self) -> D {
        self.device
    }
}

impl<D: SpiDevice> FrameTransport for DeviceTransport<D> {
    type Error = D::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.device.write(bytes)
    }
}
