//! Terminal-backed native recognizer adapter

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::ports::{
    NativeRecognizer, PartialResultCallback, PartialSubscription, PermissionState,
    RecognitionError, RecognitionOptions,
};

use super::line_source::LineSource;

type Listeners = Arc<Mutex<Vec<(u64, PartialResultCallback)>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Native recognizer that treats the next typed line as one partial result.
///
/// Capture is shared: `start` replaces any running capture and `stop`
/// ends it, whichever listening attempt asked.
pub struct TerminalRecognizer {
    lines: LineSource,
    listeners: Listeners,
    next_id: AtomicU64,
    capture: Mutex<Option<JoinHandle<()>>>,
}

impl TerminalRecognizer {
    pub fn new(lines: LineSource) -> Self {
        Self {
            lines,
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
            capture: Mutex::new(None),
        }
    }

    pub fn is_capturing(&self) -> bool {
        lock(&self.capture)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

struct TerminalSubscription {
    id: u64,
    listeners: Listeners,
}

impl PartialSubscription for TerminalSubscription {
    fn remove(&self) {
        lock(&self.listeners).retain(|(id, _)| *id != self.id);
    }
}

#[async_trait]
impl NativeRecognizer for TerminalRecognizer {
    async fn check_permission(&self) -> Result<PermissionState, RecognitionError> {
        Ok(PermissionState::Granted)
    }

    async fn request_permission(&self) -> Result<PermissionState, RecognitionError> {
        Ok(PermissionState::Granted)
    }

    async fn start(&self, options: RecognitionOptions) -> Result<(), RecognitionError> {
        let lines = self.lines.clone();
        let listeners = Arc::clone(&self.listeners);
        let language = options.language;

        let task = tokio::spawn(async move {
            let Some(line) = lines.next_line().await else {
                debug!("input closed while capturing");
                return;
            };
            debug!(%language, "captured line");
            let matches = vec![line];
            let callbacks: Vec<PartialResultCallback> =
                lock(&listeners).iter().map(|(_, cb)| Arc::clone(cb)).collect();
            for callback in callbacks {
                callback(matches.as_slice());
            }
        });

        if let Some(previous) = lock(&self.capture).replace(task) {
            previous.abort();
        }
        Ok(())
    }

    async fn stop(&self) -> Result<(), RecognitionError> {
        if let Some(task) = lock(&self.capture).take() {
            task.abort();
        }
        Ok(())
    }

    async fn add_partial_listener(
        &self,
        callback: PartialResultCallback,
    ) -> Result<Box<dyn PartialSubscription>, RecognitionError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        lock(&self.listeners).push((id, callback));
        Ok(Box::new(TerminalSubscription {
            id,
            listeners: Arc::clone(&self.listeners),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::Language;
    use tokio::sync::mpsc;

    fn options() -> RecognitionOptions {
        RecognitionOptions {
            language: Language::Telugu,
            partial_results: true,
        }
    }

    fn collector() -> (PartialResultCallback, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: PartialResultCallback = Arc::new(move |matches: &[String]| {
            sink.lock().unwrap().extend(matches.iter().cloned());
        });
        (callback, seen)
    }

    #[tokio::test]
    async fn typed_line_reaches_listener() {
        let (tx, rx) = mpsc::channel(4);
        let recognizer = TerminalRecognizer::new(LineSource::from_receiver(rx));
        let (callback, seen) = collector();

        let _subscription = recognizer.add_partial_listener(callback).await.unwrap();
        recognizer.start(options()).await.unwrap();
        tx.send("Ravi Kumar".to_string()).await.unwrap();

        while recognizer.is_capturing() {
            tokio::task::yield_now().await;
        }
        assert_eq!(*seen.lock().unwrap(), vec!["Ravi Kumar".to_string()]);
    }

    #[tokio::test]
    async fn removed_listener_hears_nothing() {
        let (tx, rx) = mpsc::channel(4);
        let recognizer = TerminalRecognizer::new(LineSource::from_receiver(rx));
        let (callback, seen) = collector();

        let subscription = recognizer.add_partial_listener(callback).await.unwrap();
        subscription.remove();
        subscription.remove();
        recognizer.start(options()).await.unwrap();
        tx.send("Ravi".to_string()).await.unwrap();

        while recognizer.is_capturing() {
            tokio::task::yield_now().await;
        }
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stop_leaves_line_for_next_reader() {
        let (tx, rx) = mpsc::channel(4);
        let lines = LineSource::from_receiver(rx);
        let recognizer = TerminalRecognizer::new(lines.clone());

        recognizer.start(options()).await.unwrap();
        recognizer.stop().await.unwrap();
        recognizer.stop().await.unwrap();
        assert!(!recognizer.is_capturing());

        tx.send("status".to_string()).await.unwrap();
        assert_eq!(lines.next_line().await.as_deref(), Some("status"));
    }

    #[tokio::test]
    async fn permission_is_always_granted() {
        let (_tx, rx) = mpsc::channel(1);
        let recognizer = TerminalRecognizer::new(LineSource::from_receiver(rx));
        assert!(recognizer.check_permission().await.unwrap().is_granted());
        assert!(recognizer.request_permission().await.unwrap().is_granted());
    }
}
