// librc522/src/transport/spi.rs
//! embedded-hal SPI transport with a manually driven chip select.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// SPI transport over an `embedded-hal` bus and a manually driven NSS pin.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Take ownership of the bus and the chip-select pin.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Give the bus and pin back.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(|e| Error::Transport(format!("spi transfer: {:?}", e)))?;
        Ok(buf[0])
    }

    fn select(&mut self) -> Result<()> {
        self.cs
            .set_low()
            .map_err(|e| Error::Transport(format!("nss low: {:?}", e)))
    }

    fn deselect(&mut self) -> Result<()> {
        // make sure the last byte left the shifter before releasing NSS
        self.spi
            .flush()
            .map_err(|e| Error::Transport(format!("spi flush: {:?}", e)))?;
        self.cs
            .set_high()
            .map_err(|e| Error::Transport(format!("nss high: {:?}", e)))
    }
}
