// SPDX-License-Identifier: GPL-3.0-only

#![deny(clippy::all)]
#![deny(unused_crate_dependencies)]
#![deny(unused_imports)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod daemon;
pub mod errors;
pub mod frontend;
pub mod i2c;
pub mod logging;
pub mod presence;

#[cfg(test)]
mod testing;

/// The HDCP port of a display sink; it only acknowledges while the display is on.
pub const HDCP_I2C_ADDRESS: u16 = 0x3a;
