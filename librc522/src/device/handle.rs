// librc522/src/device/handle.rs
//! The type-state driver handle and raw register access.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::chip::flags::tx_control;
use crate::chip::register::{read_frame, write_frame};
use crate::chip::{PcdCommand, Register};
use crate::constants::DUMMY_BYTE;
use crate::device::config::{self, DriverConfig};
use crate::transport::Transport;
use crate::{Error, Result};

/// Type-state marker: chip not yet programmed.
pub struct Uninitialized;
/// Type-state marker: `initialize` ran and the antenna is on.
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
///
/// Register access and session control work in either state; card-facing
/// operations need `Device<Initialized>`.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: DriverConfig,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance (SPI adapter,
    /// or a MockTransport in tests).
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Result<Self> {
        Ok(Self {
            transport,
            config: DriverConfig::default(),
            _state: PhantomData,
        })
    }

    /// Replace the driver tunables before initializing.
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Soft-reset the chip, program timer, RF gain, modulation and CRC
    /// preset, then switch the antenna on.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.reset()?;

        this.write_register(Register::TMode, config::TIMER_MODE)?;
        this.write_register(Register::TPrescaler, config::TIMER_PRESCALER)?;
        this.write_register(Register::TReloadL, config::TIMER_RELOAD_L)?;
        this.write_register(Register::TReloadH, config::TIMER_RELOAD_H)?;
        this.write_register(Register::RfCfg, config::RF_GAIN)?;
        this.write_register(Register::TxAuto, config::TX_ASK)?;
        this.write_register(Register::Mode, config::MODE)?;

        this.antenna_on()?;
        debug!("rc522 initialized");

        Ok(Device {
            transport: this.transport,
            config: this.config,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    /// Active driver tunables.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Read a register by raw 6-bit address. Out-of-range bits are masked
    /// off by the bus framing, not rejected.
    pub fn read_register_addr(&mut self, addr: u8) -> Result<u8> {
        let rx = self.transport.exchange(&[read_frame(addr), DUMMY_BYTE])?;
        let value = rx.get(1).copied().ok_or(Error::InvalidLength {
            expected: 2,
            actual: rx.len(),
        })?;
        trace!("rd {:#04x} -> {:#04x}", addr, value);
        Ok(value)
    }

    /// Write a register by raw 6-bit address.
    pub fn write_register_addr(&mut self, addr: u8, value: u8) -> Result<()> {
        trace!("wr {:#04x} <- {:#04x}", addr, value);
        self.transport.exchange(&[write_frame(addr), value])?;
        Ok(())
    }

    /// Read one register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        self.read_register_addr(reg.addr())
    }

    /// Write one register.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.write_register_addr(reg.addr(), value)
    }

    /// Read-modify-write: OR `mask` into the register.
    pub fn set_bit_mask(&mut self, reg: Register, mask: u8) -> Result<()> {
        let v = self.read_register(reg)?;
        self.write_register(reg, v | mask)
    }

    /// Read-modify-write: clear the bits of `mask`.
    pub fn clear_bit_mask(&mut self, reg: Register, mask: u8) -> Result<()> {
        let v = self.read_register(reg)?;
        self.write_register(reg, v & !mask)
    }

    /// Issue SoftReset. Nothing is awaited.
    pub fn reset(&mut self) -> Result<()> {
        self.write_register(Register::Command, PcdCommand::SoftReset.code())
    }

    /// Enable both antenna drivers unless they already are.
    pub fn antenna_on(&mut self) -> Result<()> {
        let v = self.read_register(Register::TxControl)?;
        if v & tx_control::ANTENNA != tx_control::ANTENNA {
            self.write_register(Register::TxControl, v | tx_control::ANTENNA)?;
        }
        Ok(())
    }

    /// Disable both antenna drivers.
    pub fn antenna_off(&mut self) -> Result<()> {
        self.clear_bit_mask(Register::TxControl, tx_control::ANTENNA)
    }

    /// Chip version byte (0x91 / 0x92 on genuine parts).
    pub fn version(&mut self) -> Result<u8> {
        self.read_register(Register::Version)
    }

    /// Read every known register and log the snapshot.
    #[cfg(feature = "diagnostics")]
    pub fn dump_registers(&mut self) -> Result<Vec<(Register, u8)>> {
        let mut out = Vec::with_capacity(Register::ALL.len());
        for reg in Register::ALL {
            // reading FIFOData would pop a byte off the FIFO
            if reg == Register::FifoData {
                continue;
            }
            let v = self.read_register(reg)?;
            debug!("{:?} ({:#04x}) = {:#04x}", reg, reg.addr(), v);
            out.push((reg, v));
        }
        Ok(out)
    }
}
