// shutdown.rs - Interrupt handling as a flag polled at tick boundaries

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

/// Cancellation flag shared between the signal listener and the main loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    triggered: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }
}

/// Waits for SIGINT or SIGTERM, then raises `signal`.
///
/// Never touches the grid. If a handler cannot be installed the simulation
/// keeps running and can only be stopped by a harder kill.
pub async fn listen(signal: ShutdownSignal) {
    match wait_for_termination().await {
        Ok(name) => {
            info!("received {name}, stopping after the current tick");
            signal.trigger();
        }
        Err(err) => warn!("could not install signal handlers: {err}"),
    }
}

#[cfg(unix)]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = interrupt.recv() => Ok("SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl-C")
}
