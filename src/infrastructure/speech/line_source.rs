//! Shared source of typed input lines

use std::io::BufRead;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// Stream of input lines shared by the command loop and the recognizers.
///
/// Whoever awaits [`LineSource::next_line`] first gets the next line, so the
/// command loop must not read while a capture is running.
#[derive(Clone)]
pub struct LineSource {
    rx: Arc<Mutex<mpsc::Receiver<String>>>,
}

impl LineSource {
    pub fn from_receiver(rx: mpsc::Receiver<String>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Forward stdin lines until EOF.
    ///
    /// Reads on a dedicated thread; a pending read must not hold up runtime
    /// shutdown.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel(16);
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        debug!(error = %e, "stdin read failed");
                        break;
                    }
                }
            }
        });
        Self::from_receiver(rx)
    }

    /// Next line, or `None` once input is closed
    pub async fn next_line(&self) -> Option<String> {
        self.rx.lock().await.recv().await
    }
}
