// SPDX-License-Identifier: GPL-3.0-only

use futures_lite::future;
use std::{future::Future, io};
use tokio::signal::unix::{signal, SignalKind};

/// Resolves once SIGINT, SIGHUP or SIGTERM arrives.
///
/// The handlers are installed before this returns, so a signal delivered
/// while the future is not yet polled is still seen.
pub fn handle() -> io::Result<impl Future<Output = ()>> {
    let mut int = signal(SignalKind::interrupt())?;
    let mut hup = signal(SignalKind::hangup())?;
    let mut term = signal(SignalKind::terminate())?;

    Ok(async move {
        let sig = future::or(
            future::or(
                async {
                    int.recv().await;
                    "SIGINT"
                },
                async {
                    hup.recv().await;
                    "SIGHUP"
                },
            ),
            async {
                term.recv().await;
                "SIGTERM"
            },
        )
        .await;

        log::info!("caught signal: {}", sig);
    })
}
