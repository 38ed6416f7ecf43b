//! Signal handling for graceful shutdown (SIGTERM/SIGINT).

use tokio::sync::watch;

/// Listens for OS signals and flips a shutdown flag.
pub struct SignalHandler {
    shutdown_tx: watch::Sender<bool>,
}

impl SignalHandler {
    /// Create a new signal handler and a receiver that becomes `true` on shutdown.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { shutdown_tx: tx }, rx)
    }

    /// Run until a shutdown signal arrives.
    ///
    /// - SIGTERM / SIGINT / Ctrl+C → triggers shutdown
    pub async fn run(&self) -> std::io::Result<()> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut sigterm = signal(SignalKind::terminate())?;

            tokio::select! {
                res = tokio::signal::ctrl_c() => {
                    res?;
                    tracing::info!("Received SIGINT, initiating shutdown...");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating shutdown...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await?;
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        }

        self.trigger();
        Ok(())
    }

    /// Flip the shutdown flag without waiting for a signal.
    pub fn trigger(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
