// SPDX-License-Identifier: GPL-3.0-only

use futures_lite::future;
use std::{future::Future, time::Duration};
use tv_presence_zbus::{DBUS_IFACE, DBUS_NAME, DBUS_PATH};

use crate::{
    args::Args,
    errors::{DaemonError, RpcError},
    frontend::{FrontendController, Transport, ZbusTransport},
    i2c::{I2cDevice, Probe},
    presence::PresenceTracker,
    HDCP_I2C_ADDRESS,
};

mod interrupt;

/// Suspends the loop between cycles.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&mut self, duration: Duration);
}

pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&mut self, duration: Duration) { tokio::time::sleep(duration).await }
}

/// Probes the display, acts on the frontend when presence changes, sleeps.
pub struct PollLoop<P, T, S> {
    probe:      P,
    controller: FrontendController<T>,
    tracker:    PresenceTracker,
    sleeper:    S,
}

impl<P: Probe, T: Transport, S: Sleeper> PollLoop<P, T, S> {
    pub fn new(probe: P, transport: T, sleeper: S) -> Self {
        Self {
            probe,
            controller: FrontendController::new(transport),
            tracker: PresenceTracker::default(),
            sleeper,
        }
    }

    pub fn tracker(&self) -> &PresenceTracker { &self.tracker }

    /// Runs a single cycle. Only a lost control channel is returned as an error.
    pub async fn step(&mut self) -> Result<(), RpcError> {
        let probe = self.probe.probe();
        match probe {
            Ok(()) => log::debug!("display answered"),
            Err(ref why) => log::debug!("display did not answer: {}", why),
        }

        if let Some(transition) = self.tracker.evaluate(&probe) {
            match self.controller.dispatch(transition).await {
                Ok(reply) if reply.success => self.tracker.commit(transition),
                Ok(_) => (),
                Err(why) if why.is_fatal() => return Err(why),
                // Left uncommitted; the next cycle decides again.
                Err(_) => (),
            }
        }

        self.controller.flush().await?;

        let duration = self.tracker.interval().duration();
        log::info!("sleep for {:.2} seconds", duration.as_secs_f64());
        self.sleeper.sleep(duration).await;

        Ok(())
    }

    /// Cycles until the control channel is lost.
    pub async fn run(&mut self) -> Result<(), RpcError> {
        loop {
            self.step().await?;
        }
    }

    /// Cycles until `shutdown` resolves, abandoning whatever call or sleep is
    /// in flight at that moment.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<(), RpcError>
    where
        F: Future<Output = ()>,
    {
        future::or(self.run(), async {
            shutdown.await;
            Ok(())
        })
        .await
    }
}

pub fn daemon(args: Args) -> Result<(), DaemonError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DaemonError::Runtime)?
        .block_on(run(args))
}

async fn run(args: Args) -> Result<(), DaemonError> {
    let path = I2cDevice::device_path(args.device);
    log::info!("Opening {} at address {:#04x}", path.display(), HDCP_I2C_ADDRESS);
    let device = I2cDevice::open(&path, HDCP_I2C_ADDRESS)?;

    log::info!("Connecting to dbus system bus");
    let transport = ZbusTransport::connect(args.call_deadline()).await?;
    log::info!("Controlling {} at {} through {}", DBUS_NAME, DBUS_PATH, DBUS_IFACE);

    let shutdown = interrupt::handle().map_err(DaemonError::Runtime)?;

    log::info!("Watching {} for the display", device.path().display());
    let mut poll = PollLoop::new(device, transport, TokioSleeper);
    poll.run_until(shutdown).await?;

    log::info!("Shutting down");
    Ok(())
}
