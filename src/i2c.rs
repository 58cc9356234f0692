// SPDX-License-Identifier: GPL-3.0-only

//! Presence probing over the Linux i2c-dev interface.

use i2c_linux::{I2c, ReadWrite};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::errors::{ProbeError, StartupError};

/// Something that can tell whether the peer answered.
pub trait Probe {
    fn probe(&mut self) -> Result<(), ProbeError>;
}

/// An open `/dev/i2c-N` node bound to a single peer address.
///
/// The descriptor is closed when the value is dropped.
pub struct I2cDevice {
    path: PathBuf,
    i2c:  I2c<File>,
}

impl I2cDevice {
    pub fn device_path(bus: u32) -> PathBuf { PathBuf::from(format!("/dev/i2c-{}", bus)) }

    /// Opens the node read/write and addresses `peer` with a 7-bit address.
    pub fn open(path: &Path, peer: u16) -> Result<Self, StartupError> {
        let mut i2c =
            I2c::from_path(path).map_err(|why| StartupError::DeviceOpen(path.to_owned(), why))?;

        i2c.smbus_set_slave_address(peer, false)
            .map_err(|why| StartupError::SlaveAddress(path.to_owned(), why))?;

        Ok(Self { path: path.to_owned(), i2c })
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl Probe for I2cDevice {
    /// SMBus quick write: the address byte alone, no payload.
    fn probe(&mut self) -> Result<(), ProbeError> {
        self.i2c.smbus_write_quick(ReadWrite::Write).map_err(ProbeError::NoAck)
    }
}
