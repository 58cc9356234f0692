// SPDX-License-Identifier: GPL-3.0-only

use std::{io, path::PathBuf, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("failed to start: {}", _0)]
    Startup(StartupError),
    #[error("lost control of the frontend: {}", _0)]
    Rpc(RpcError),
    #[error("failed to set up the runtime: {}", _0)]
    Runtime(io::Error),
}

impl From<StartupError> for DaemonError {
    fn from(why: StartupError) -> DaemonError { DaemonError::Startup(why) }
}

impl From<RpcError> for DaemonError {
    fn from(why: RpcError) -> DaemonError { DaemonError::Rpc(why) }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to open {:?}: {}", _0, _1)]
    DeviceOpen(PathBuf, io::Error),
    #[error("failed to set i2c slave on {:?}: {}", _0, _1)]
    SlaveAddress(PathBuf, io::Error),
    #[error("failed to open dbus: {}", _0)]
    DbusConnect(zbus::Error),
    #[error("failed to create frontend proxy: {}", _0)]
    DbusProxy(zbus::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("no acknowledgement from peer: {}", _0)]
    NoAck(io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("call failed: {}", _0)]
    Transport(zbus::Error),
    #[error("no reply within {:?}", _0)]
    Timeout(Duration),
    #[error("malformed reply: {}", _0)]
    MalformedReply(zbus::Error),
}

impl RpcError {
    /// Whether the control channel should be considered lost.
    pub fn is_fatal(&self) -> bool { !matches!(self, RpcError::MalformedReply(_)) }
}
