//! Process lifecycle: readiness notification, signal handling, and logging.

pub mod logging;
pub mod notify;
pub mod signal;

/// Lifecycle event notification (foreground vs systemd).
pub trait Lifecycle: Send + Sync {
    /// Called once the listener is bound.
    fn on_ready(&self);
    /// Called when the server is about to stop.
    fn on_stopping(&self);
}

/// Foreground lifecycle — logs events only.
pub struct ForegroundLifecycle;

impl Lifecycle for ForegroundLifecycle {
    fn on_ready(&self) {
        tracing::info!("Relay ready");
    }

    fn on_stopping(&self) {
        tracing::info!("Relay stopping...");
    }
}

/// Systemd lifecycle — sends sd-notify messages and logs.
pub struct SystemdLifecycle;

impl Lifecycle for SystemdLifecycle {
    fn on_ready(&self) {
        notify::sd_ready();
        tracing::info!("Relay ready (notified systemd)");
    }

    fn on_stopping(&self) {
        notify::sd_stopping();
        tracing::info!("Relay stopping (notified systemd)...");
    }
}

/// Returns `SystemdLifecycle` if `NOTIFY_SOCKET` is set, else `ForegroundLifecycle`.
pub fn detect_lifecycle<E: crate::env::ReadEnv + ?Sized>(env: &E) -> Box<dyn Lifecycle> {
    if env.var("NOTIFY_SOCKET").is_ok() {
        Box::new(SystemdLifecycle)
    } else {
        Box::new(ForegroundLifecycle)
    }
}
