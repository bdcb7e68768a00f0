//! Shutdown signal handling for the interactive session

use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tracing::info;

/// Shutdown request raised by SIGINT/SIGTERM or by the session itself
#[derive(Clone)]
pub struct ShutdownSignal {
    shutdown: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            shutdown: Arc::new(tx),
        }
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        *self.shutdown.borrow()
    }

    pub fn trigger(&self) {
        self.shutdown.send_replace(true);
    }

    /// Completes once shutdown was requested
    pub async fn wait(&self) {
        let mut rx = self.shutdown.subscribe();
        let _ = rx.wait_for(|requested| *requested).await;
    }

    /// Setup SIGINT (Ctrl+C) and SIGTERM handlers
    pub fn setup(&self) -> Result<(), std::io::Error> {
        for (kind, name) in [
            (SignalKind::interrupt(), "SIGINT"),
            (SignalKind::terminate(), "SIGTERM"),
        ] {
            let mut stream = signal(kind)?;
            let shutdown = self.clone();
            tokio::spawn(async move {
                stream.recv().await;
                info!(signal = name, "shutdown requested");
                shutdown.trigger();
            });
        }
        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
