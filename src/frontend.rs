// SPDX-License-Identifier: GPL-3.0-only

use std::{fmt, time::Duration};
use tv_presence_zbus::{ControllerProxy, DBUS_PATH};
use zbus::{proxy::CacheProperties, Connection};

use crate::{
    errors::{RpcError, StartupError},
    presence::Transition,
};

pub use tv_presence_zbus::FrontendReply;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    pub fn member(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Action::Start => "started",
            Action::Stop => "stopped",
        }
    }
}

impl From<Transition> for Action {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::BecameAbsent => Action::Stop,
            Transition::BecamePresent => Action::Start,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.member()) }
}

/// One outstanding call at a time, each answered by the frontend's `(bs)` reply.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn call(&mut self, action: Action) -> Result<FrontendReply, RpcError>;

    async fn flush(&mut self) -> Result<(), RpcError> { Ok(()) }
}

/// Calls the frontend controller over the system bus.
pub struct ZbusTransport {
    proxy:    ControllerProxy<'static>,
    deadline: Option<Duration>,
}

impl ZbusTransport {
    pub async fn connect(deadline: Option<Duration>) -> Result<Self, StartupError> {
        let connection = Connection::system().await.map_err(StartupError::DbusConnect)?;
        Self::on(&connection, DBUS_PATH, deadline).await
    }

    /// Talks to the controller object at `path` over an already open connection.
    pub async fn on(
        connection: &Connection,
        path: &'static str,
        deadline: Option<Duration>,
    ) -> Result<Self, StartupError> {
        let proxy = ControllerProxy::builder(connection)
            .path(path)
            .map_err(StartupError::DbusProxy)?
            .cache_properties(CacheProperties::No)
            .build()
            .await
            .map_err(StartupError::DbusProxy)?;

        Ok(Self { proxy, deadline })
    }
}

impl Transport for ZbusTransport {
    async fn call(&mut self, action: Action) -> Result<FrontendReply, RpcError> {
        // The raw call keeps a failed delivery apart from a reply we cannot read.
        let call = self.proxy.inner().call_method(action.member(), &());
        let reply = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .map_err(|_| RpcError::Timeout(deadline))?,
            None => call.await,
        }
        .map_err(RpcError::Transport)?;

        let body = reply.body();
        let fields: (bool, String) = body.deserialize().map_err(RpcError::MalformedReply)?;
        Ok(fields.into())
    }
}

pub struct FrontendController<T> {
    transport: T,
}

impl<T: Transport> FrontendController<T> {
    pub fn new(transport: T) -> Self { Self { transport } }

    pub fn transport(&self) -> &T { &self.transport }

    pub async fn request_stop(&mut self) -> Result<FrontendReply, RpcError> {
        self.request(Action::Stop).await
    }

    pub async fn request_start(&mut self) -> Result<FrontendReply, RpcError> {
        self.request(Action::Start).await
    }

    /// Issues the action that acts on `transition`.
    pub async fn dispatch(&mut self, transition: Transition) -> Result<FrontendReply, RpcError> {
        match Action::from(transition) {
            Action::Stop => self.request_stop().await,
            Action::Start => self.request_start().await,
        }
    }

    pub async fn flush(&mut self) -> Result<(), RpcError> { self.transport.flush().await }

    async fn request(&mut self, action: Action) -> Result<FrontendReply, RpcError> {
        let reply = match self.transport.call(action).await {
            Ok(reply) => reply,
            Err(why) => {
                log::error!("failed to {} frontend: {}", action, why);
                return Err(why);
            }
        };

        log::info!("{} frontend got response: {} {}", action, reply.success, reply.message);
        if reply.success {
            log::info!("{} frontend", action.past_tense());
        } else {
            log::warn!("could not {} frontend", action);
        }

        Ok(reply)
    }
}
