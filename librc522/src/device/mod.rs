// librc522/src/device/mod.rs
//! The driver handle. Register access, the command executor, the CRC
//! coprocessor and card discovery all hang off [`Device`].

pub mod builder;
pub mod config;
mod crc;
mod discovery;
mod executor;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DriverConfig;
pub use crc::CrcResult;
pub use executor::Exchange;
pub use handle::{Device, Initialized, Uninitialized};
