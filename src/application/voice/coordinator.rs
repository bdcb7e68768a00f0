//! Voice coordinator use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::oneshot;
use tokio::time::sleep_until;
use tracing::{debug, warn};

use crate::application::ports::{
    NativeRecognizer, PartialResultCallback, PartialSubscription, Platform, PreferenceStore,
    RecognitionError, RecognitionOptions, SpeechRequest, SpeechSynthesizer, WebEventHandler,
    WebRecognition, WebRecognitionEvent, WebRecognizerConfig, WebRecognizerFactory,
};
use crate::domain::voice::{
    FieldKey, Language, ListenOutcome, ListenRegister, ListenResult, ListenSession,
    ListenTimeout, Phrase,
};

use super::resolver::GuardedResolver;

/// Preference key holding the selected language tag
pub const LANGUAGE_KEY: &str = "appLang";

/// Process-wide voice settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceConfig {
    pub language: Language,
    pub voice_mode_enabled: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            voice_mode_enabled: true,
        }
    }
}

/// Options for one listening request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenOptions {
    pub timeout: ListenTimeout,
}

impl ListenOptions {
    pub fn with_timeout(timeout: ListenTimeout) -> Self {
        Self { timeout }
    }
}

/// Live capture wired to a resolver, torn down once the attempt settles
enum Capture {
    Native(Option<Box<dyn PartialSubscription>>),
    Web(Option<Box<dyn WebRecognition>>),
}

/// Voice coordinator use case.
///
/// Owns the active listen token and the single live capture. Only the most
/// recent `listen_for` call can deliver text; older calls settle as
/// [`ListenOutcome::Superseded`]. No operation returns an error: failures
/// surface as empty text and are logged.
pub struct VoiceCoordinator<S, N, W, P, K>
where
    S: SpeechSynthesizer,
    N: NativeRecognizer,
    W: WebRecognizerFactory,
    P: Platform,
    K: PreferenceStore,
{
    synthesizer: S,
    native: N,
    web: W,
    platform: P,
    preferences: K,
    register: Arc<ListenRegister>,
    config: Mutex<VoiceConfig>,
    speaking: AtomicBool,
}

impl<S, N, W, P, K> VoiceCoordinator<S, N, W, P, K>
where
    S: SpeechSynthesizer,
    N: NativeRecognizer,
    W: WebRecognizerFactory,
    P: Platform,
    K: PreferenceStore,
{
    /// Create a new coordinator instance
    pub fn new(
        synthesizer: S,
        native: N,
        web: W,
        platform: P,
        preferences: K,
        config: VoiceConfig,
    ) -> Self {
        Self {
            synthesizer,
            native,
            web,
            platform,
            preferences,
            register: Arc::new(ListenRegister::new()),
            config: Mutex::new(config),
            speaking: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> VoiceConfig {
        *self.config_guard()
    }

    pub fn language(&self) -> Language {
        self.config_guard().language
    }

    pub fn voice_mode(&self) -> bool {
        self.config_guard().voice_mode_enabled
    }

    pub fn set_voice_mode(&self, enabled: bool) {
        self.config_guard().voice_mode_enabled = enabled;
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    /// Whether a listening attempt currently holds the active token
    pub fn is_listening(&self) -> bool {
        self.register.active().is_some()
    }

    /// Speak `text` in the configured language, cutting off earlier speech.
    /// Does nothing while voice mode is off.
    pub async fn speak(&self, text: &str) {
        let config = self.config();
        if !config.voice_mode_enabled {
            return;
        }

        self.speaking.store(true, Ordering::SeqCst);
        self.stop_synthesis().await;
        let request = SpeechRequest::new(text, config.language);
        if let Err(e) = self.synthesizer.speak(&request).await {
            debug!(error = %e, "speech synthesis failed");
        }
        self.speaking.store(false, Ordering::SeqCst);
    }

    /// Speak a fixed announcement in the configured language
    pub async fn announce(&self, phrase: Phrase) {
        self.speak(phrase.text(self.language())).await;
    }

    /// Listen once for `field`.
    ///
    /// Starting a new request supersedes any request still in flight. The
    /// returned result carries text only if this request was still the
    /// active one when it settled. A denied permission prompt yields an
    /// empty result without starting capture.
    pub async fn listen_for(&self, field: FieldKey, options: ListenOptions) -> ListenResult {
        // Free the audio device before capturing
        self.stop_synthesis().await;

        let session = self.register.begin(field, options.timeout);
        let language = self.language();
        debug!(token = %session.token, %field, timeout = %options.timeout, "listen session started");

        let (resolver, mut rx) = GuardedResolver::new(session.token, Arc::clone(&self.register));
        let capture = if self.platform.is_web() {
            Capture::Web(self.arm_web(language, &resolver))
        } else {
            Capture::Native(self.arm_native(language, &resolver).await)
        };

        let outcome = self.settle(&session, &resolver, &mut rx).await;
        self.release(capture, &outcome).await;
        self.register.finish(session.token);

        debug!(token = %session.token, ?outcome, "listen session settled");
        ListenResult::new(field, outcome)
    }

    /// Abandon the active listening request, if any
    pub async fn cancel(&self) {
        if let Some(token) = self.register.clear() {
            debug!(%token, "listen session cancelled");
        }
        self.stop_recognition().await;
    }

    /// Switch language, stopping any speech or capture in progress
    pub async fn set_language(&self, language: Language) {
        self.stop_recognition().await;
        self.stop_synthesis().await;
        self.config_guard().language = language;

        if let Err(e) = self.preferences.set(LANGUAGE_KEY, language.tag()).await {
            warn!(error = %e, "failed to persist language");
        }
    }

    /// Restore the persisted language, keeping the current one if none is stored
    pub async fn load_language(&self) -> Language {
        match self.preferences.get(LANGUAGE_KEY).await {
            Ok(Some(tag)) => match tag.parse::<Language>() {
                Ok(language) => self.config_guard().language = language,
                Err(e) => warn!(error = %e, "ignoring stored language"),
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to read stored language"),
        }
        self.language()
    }

    /// Wait for the first of: delivered outcome, supersession, deadline
    async fn settle(
        &self,
        session: &ListenSession,
        resolver: &GuardedResolver,
        rx: &mut oneshot::Receiver<ListenOutcome>,
    ) -> ListenOutcome {
        tokio::select! {
            biased;
            outcome = &mut *rx => outcome.unwrap_or(ListenOutcome::Superseded),
            _ = self.register.foreclosed(session.token) => ListenOutcome::Superseded,
            _ = sleep_until(session.deadline) => {
                debug!(token = %session.token, "listen session timed out");
                if !resolver.is_settled() {
                    resolver.resolve_empty();
                }
                rx.try_recv().unwrap_or(ListenOutcome::Superseded)
            }
        }
    }

    async fn release(&self, capture: Capture, outcome: &ListenOutcome) {
        match capture {
            Capture::Native(subscription) => {
                if let Some(subscription) = subscription {
                    subscription.remove();
                }
                // A superseded attempt no longer owns the capture
                if !outcome.is_superseded() {
                    self.stop_recognition().await;
                }
            }
            Capture::Web(Some(recognition)) => recognition.stop(),
            Capture::Web(None) => {}
        }
    }

    async fn arm_native(
        &self,
        language: Language,
        resolver: &Arc<GuardedResolver>,
    ) -> Option<Box<dyn PartialSubscription>> {
        if let Err(e) = self.ensure_permission().await {
            debug!(token = %resolver.token(), error = %e, "recognition permission unavailable");
            resolver.resolve_empty();
            return None;
        }
        // Superseded while waiting on permission; the newer attempt owns capture
        if !self.register.is_active(resolver.token()) {
            return None;
        }

        let callback: PartialResultCallback = {
            let resolver = Arc::clone(resolver);
            Arc::new(move |matches: &[String]| {
                let text = matches.first().map(|m| m.trim()).unwrap_or_default();
                if !text.is_empty() {
                    resolver.resolve(ListenOutcome::Success(text.to_string()));
                }
            })
        };
        let subscription = match self.native.add_partial_listener(callback).await {
            Ok(subscription) => subscription,
            Err(e) => {
                debug!(token = %resolver.token(), error = %e, "partial result subscription failed");
                resolver.resolve_empty();
                return None;
            }
        };
        if !self.register.is_active(resolver.token()) {
            subscription.remove();
            return None;
        }

        let options = RecognitionOptions {
            language,
            partial_results: true,
        };
        if let Err(e) = self.native.start(options).await {
            debug!(token = %resolver.token(), error = %e, "native capture failed to start");
            subscription.remove();
            resolver.resolve_empty();
            return None;
        }

        Some(subscription)
    }

    fn arm_web(
        &self,
        language: Language,
        resolver: &Arc<GuardedResolver>,
    ) -> Option<Box<dyn WebRecognition>> {
        let config = WebRecognizerConfig {
            lang: language,
            continuous: false,
            interim_results: false,
        };
        let Some(recognition) = self.web.create(config) else {
            debug!(token = %resolver.token(), "web recognition unsupported");
            resolver.resolve_empty();
            return None;
        };

        let handler: WebEventHandler = {
            let resolver = Arc::clone(resolver);
            Arc::new(move |event: WebRecognitionEvent| match event {
                WebRecognitionEvent::Result(text) => {
                    resolver.resolve_text(&text);
                }
                WebRecognitionEvent::Error(message) => {
                    debug!(token = %resolver.token(), %message, "web recognition error");
                    resolver.resolve_empty();
                }
                WebRecognitionEvent::End => {
                    resolver.resolve_empty();
                }
            })
        };
        recognition.set_handler(handler);

        if let Err(e) = recognition.start() {
            debug!(token = %resolver.token(), error = %e, "web capture failed to start");
            resolver.resolve_empty();
        }
        Some(recognition)
    }

    async fn ensure_permission(&self) -> Result<(), RecognitionError> {
        if self.native.check_permission().await?.is_granted() {
            return Ok(());
        }
        if self.native.request_permission().await?.is_granted() {
            Ok(())
        } else {
            Err(RecognitionError::PermissionDenied)
        }
    }

    async fn stop_synthesis(&self) {
        if let Err(e) = self.synthesizer.stop().await {
            debug!(error = %e, "stopping speech failed");
        }
    }

    async fn stop_recognition(&self) {
        if let Err(e) = self.native.stop().await {
            debug!(error = %e, "stopping recognition failed");
        }
    }

    fn config_guard(&self) -> MutexGuard<'_, VoiceConfig> {
        self.config.lock().unwrap_or_else(|e| e.into_inner())
    }
}
