// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};
use zvariant::Type;

pub static DBUS_NAME: &str = "de.yavdr.frontend";
pub static DBUS_PATH: &str = "/de/yavdr/frontend";
pub static DBUS_IFACE: &str = "de.yavdr.frontend.Controller";

/// Reply body shared by `start` and `stop`: `(bs)`.
#[derive(Deserialize, Serialize, Type, Debug, Clone, PartialEq, Eq)]
pub struct FrontendReply {
    pub success: bool,
    pub message: String,
}

impl From<(bool, String)> for FrontendReply {
    fn from((success, message): (bool, String)) -> Self { Self { success, message } }
}

#[zbus::proxy(
    interface = "de.yavdr.frontend.Controller",
    default_service = "de.yavdr.frontend",
    default_path = "/de/yavdr/frontend"
)]
pub trait Controller {
    /// Start method
    #[zbus(name = "start")]
    fn start(&self) -> zbus::Result<(bool, String)>;

    /// Stop method
    #[zbus(name = "stop")]
    fn stop(&self) -> zbus::Result<(bool, String)>;
}
