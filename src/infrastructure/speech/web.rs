//! Terminal-backed web recognizer adapter

use std::sync::{Mutex, MutexGuard};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::ports::{
    RecognitionError, WebEventHandler, WebRecognition, WebRecognitionEvent, WebRecognizerConfig,
    WebRecognizerFactory,
};

use super::line_source::LineSource;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Builds one-shot recognizers that report the next typed line as a final result
pub struct TerminalWebRecognizerFactory {
    lines: LineSource,
}

impl TerminalWebRecognizerFactory {
    pub fn new(lines: LineSource) -> Self {
        Self { lines }
    }
}

impl WebRecognizerFactory for TerminalWebRecognizerFactory {
    fn create(&self, config: WebRecognizerConfig) -> Option<Box<dyn WebRecognition>> {
        Some(Box::new(TerminalWebRecognition {
            lines: self.lines.clone(),
            config,
            handler: Mutex::new(None),
            task: Mutex::new(None),
        }))
    }
}

struct TerminalWebRecognition {
    lines: LineSource,
    config: WebRecognizerConfig,
    handler: Mutex<Option<WebEventHandler>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl WebRecognition for TerminalWebRecognition {
    fn set_handler(&self, handler: WebEventHandler) {
        *lock(&self.handler) = Some(handler);
    }

    fn start(&self) -> Result<(), RecognitionError> {
        let mut task = lock(&self.task);
        if task.is_some() {
            return Err(RecognitionError::StartFailed(
                "recognition already started".to_string(),
            ));
        }

        let lines = self.lines.clone();
        let handler = lock(&self.handler).clone();
        let lang = self.config.lang;
        *task = Some(tokio::spawn(async move {
            let line = lines.next_line().await;
            let Some(handler) = handler else {
                return;
            };
            match line {
                Some(text) => {
                    debug!(%lang, "captured line");
                    handler(WebRecognitionEvent::Result(text));
                }
                None => handler(WebRecognitionEvent::Error("input closed".to_string())),
            }
            handler(WebRecognitionEvent::End);
        }));
        Ok(())
    }

    fn stop(&self) {
        if let Some(task) = lock(&self.task).as_ref() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::Language;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn config() -> WebRecognizerConfig {
        WebRecognizerConfig {
            lang: Language::English,
            continuous: false,
            interim_results: false,
        }
    }

    fn recorder() -> (WebEventHandler, Arc<Mutex<Vec<WebRecognitionEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let handler: WebEventHandler = Arc::new(move |event: WebRecognitionEvent| {
            sink.lock().unwrap().push(event)
        });
        (handler, events)
    }

    async fn wait_for(events: &Mutex<Vec<WebRecognitionEvent>>, count: usize) {
        while events.lock().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn line_becomes_result_then_end() {
        let (tx, rx) = mpsc::channel(4);
        let factory = TerminalWebRecognizerFactory::new(LineSource::from_receiver(rx));
        let recognition = factory.create(config()).unwrap();
        let (handler, events) = recorder();

        recognition.set_handler(handler);
        recognition.start().unwrap();
        tx.send("Guntur".to_string()).await.unwrap();
        wait_for(&events, 2).await;

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                WebRecognitionEvent::Result("Guntur".into()),
                WebRecognitionEvent::End
            ]
        );
    }

    #[tokio::test]
    async fn closed_input_reports_error() {
        let (tx, rx) = mpsc::channel::<String>(1);
        drop(tx);
        let factory = TerminalWebRecognizerFactory::new(LineSource::from_receiver(rx));
        let recognition = factory.create(config()).unwrap();
        let (handler, events) = recorder();

        recognition.set_handler(handler);
        recognition.start().unwrap();
        wait_for(&events, 2).await;

        assert!(matches!(
            events.lock().unwrap()[0],
            WebRecognitionEvent::Error(_)
        ));
    }

    #[tokio::test]
    async fn second_start_fails() {
        let (_tx, rx) = mpsc::channel::<String>(1);
        let factory = TerminalWebRecognizerFactory::new(LineSource::from_receiver(rx));
        let recognition = factory.create(config()).unwrap();

        recognition.start().unwrap();
        assert!(recognition.start().is_err());
        recognition.stop();
        recognition.stop();
    }
}
