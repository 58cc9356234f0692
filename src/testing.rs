//! In-memory stand-ins for the bus, the frontend and the clock.

use std::{collections::VecDeque, io, time::Duration};

use crate::{
    daemon::Sleeper,
    errors::{ProbeError, RpcError},
    frontend::{Action, FrontendReply, Transport},
    i2c::Probe,
};

pub fn reply(success: bool, message: &str) -> FrontendReply {
    FrontendReply { success, message: message.to_owned() }
}

/// Answers probes from a fixed list, then keeps repeating `then`.
pub struct ScriptedProbe {
    script: VecDeque<bool>,
    then:   bool,
    pub probes: usize,
}

impl ScriptedProbe {
    pub fn new(script: &[bool], then: bool) -> Self {
        Self { script: script.iter().copied().collect(), then, probes: 0 }
    }

    pub fn always(acked: bool) -> Self { Self::new(&[], acked) }
}

impl Probe for ScriptedProbe {
    fn probe(&mut self) -> Result<(), ProbeError> {
        self.probes += 1;
        if self.script.pop_front().unwrap_or(self.then) {
            Ok(())
        } else {
            Err(ProbeError::NoAck(io::Error::from(io::ErrorKind::NotConnected)))
        }
    }
}

/// Hands out queued replies and records which actions were requested.
///
/// Once the queue is empty every call succeeds.
pub struct ScriptedTransport {
    replies: VecDeque<Result<FrontendReply, RpcError>>,
    calls:   Vec<Action>,
    pub flushes: usize,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<FrontendReply, RpcError>>) -> Self {
        Self { replies: replies.into(), calls: Vec::new(), flushes: 0 }
    }

    pub fn calls(&self) -> &[Action] { &self.calls }
}

impl Transport for ScriptedTransport {
    async fn call(&mut self, action: Action) -> Result<FrontendReply, RpcError> {
        self.calls.push(action);
        self.replies.pop_front().unwrap_or_else(|| Ok(reply(true, "ok")))
    }

    async fn flush(&mut self) -> Result<(), RpcError> {
        self.flushes += 1;
        Ok(())
    }
}

/// A frontend that never answers.
#[derive(Default)]
pub struct HangingTransport {
    pub calls: usize,
}

impl Transport for HangingTransport {
    async fn call(&mut self, _action: Action) -> Result<FrontendReply, RpcError> {
        self.calls += 1;
        std::future::pending().await
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub slept: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&mut self, duration: Duration) { self.slept.push(duration); }
}
