//! Interactive work session
//!
//! Reads commands line by line. While a listening request runs, the next
//! typed line is taken as the recognised speech.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Local;
use thiserror::Error;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::application::ports::PreferenceStore;
use crate::application::{BillBook, ListenOptions, VoiceConfig, VoiceCoordinator};
use crate::domain::billing::BillDraft;
use crate::domain::error::{InvalidFieldError, InvalidLanguageError};
use crate::domain::timer::{format_hms, TimerState, WorkTimer};
use crate::domain::voice::{FieldKey, Language, ListenResult, Phrase};
use crate::infrastructure::{
    ConsoleSynthesizer, LineSource, StaticPlatform, TerminalRecognizer,
    TerminalWebRecognizerFactory,
};

use super::args::SessionOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

const HELP: &str = "\
Commands:
  start               start the work timer
  pause               machine stopped
  resume              started again
  finish              stop, then ask farmer name and address and save the bill
  listen <field>      fill a bill field by voice (farmer, address)
  set <entry> <text>  type a bill entry (farmer, address, field, mobile)
  speak <text>        say something
  lang <tag>          switch language (te-IN, en-US)
  voice on|off        toggle spoken announcements
  status              show timer and voice state
  cancel              abandon listening
  quit                leave the session";

/// Error when a typed command cannot be understood
#[derive(Debug, Error)]
pub enum CommandParseError {
    #[error("Unknown command: \"{0}\". Type 'help' for commands")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    InvalidField(#[from] InvalidFieldError),

    #[error(transparent)]
    InvalidLanguage(#[from] InvalidLanguageError),

    #[error("Expected 'on' or 'off', got \"{0}\"")]
    InvalidSwitch(String),

    #[error("Unknown bill entry: \"{0}\". Valid entries are: farmer, address, field, mobile")]
    InvalidEntry(String),
}

/// Bill form entry that can be typed directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftEntry {
    Farmer,
    Address,
    FieldName,
    Mobile,
}

impl FromStr for DraftEntry {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farmer" | "name" => Ok(Self::Farmer),
            "address" => Ok(Self::Address),
            "field" | "plot" => Ok(Self::FieldName),
            "mobile" | "phone" => Ok(Self::Mobile),
            other => Err(CommandParseError::InvalidEntry(other.to_string())),
        }
    }
}

/// One typed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Pause,
    Resume,
    Finish,
    Listen(FieldKey),
    Set(DraftEntry, String),
    Speak(String),
    Lang(Language),
    Voice(bool),
    Status,
    Cancel,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(head, rest)| (head, rest.trim()))
            .unwrap_or((line, ""));

        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandParseError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        match head.to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "pause" | "stop" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "finish" | "done" => Ok(Self::Finish),
            "listen" => Ok(Self::Listen(required("listen")?.parse()?)),
            "set" => {
                let (entry, text) = required("set")?
                    .split_once(char::is_whitespace)
                    .ok_or(CommandParseError::MissingArgument("set"))?;
                Ok(Self::Set(entry.parse()?, text.trim().to_string()))
            }
            "speak" | "say" => Ok(Self::Speak(required("speak")?.to_string())),
            "lang" | "language" => Ok(Self::Lang(required("lang")?.parse()?)),
            "voice" => match required("voice")?.to_lowercase().as_str() {
                "on" | "true" => Ok(Self::Voice(true)),
                "off" | "false" => Ok(Self::Voice(false)),
                other => Err(CommandParseError::InvalidSwitch(other.to_string())),
            },
            "status" => Ok(Self::Status),
            "cancel" => Ok(Self::Cancel),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandParseError::Unknown(line.to_string())),
        }
    }
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

type TerminalCoordinator<K> = VoiceCoordinator<
    ConsoleSynthesizer,
    TerminalRecognizer,
    TerminalWebRecognizerFactory,
    StaticPlatform,
    Arc<K>,
>;

/// Interactive session wiring the timer, the voice coordinator and the bill book
pub struct Session<K: PreferenceStore> {
    coordinator: TerminalCoordinator<K>,
    bills: BillBook<Arc<K>>,
    timer: WorkTimer,
    draft: BillDraft,
    lines: LineSource,
    presenter: Presenter,
    options: SessionOptions,
    shutdown: ShutdownSignal,
}

impl<K: PreferenceStore> Session<K> {
    pub fn new(
        options: SessionOptions,
        lines: LineSource,
        preferences: Arc<K>,
        shutdown: ShutdownSignal,
    ) -> Self {
        let coordinator = VoiceCoordinator::new(
            ConsoleSynthesizer::new(),
            TerminalRecognizer::new(lines.clone()),
            TerminalWebRecognizerFactory::new(lines.clone()),
            StaticPlatform::from_web_fallback(options.web_fallback),
            Arc::clone(&preferences),
            VoiceConfig {
                language: options.language,
                voice_mode_enabled: options.voice_mode,
            },
        );

        Self {
            coordinator,
            bills: BillBook::new(preferences),
            timer: WorkTimer::new(),
            draft: BillDraft::new("", options.rate_per_hour),
            lines,
            presenter: Presenter::new(),
            options,
            shutdown,
        }
    }

    pub fn timer(&self) -> &WorkTimer {
        &self.timer
    }

    pub fn draft(&self) -> &BillDraft {
        &self.draft
    }

    pub fn bills(&self) -> &BillBook<Arc<K>> {
        &self.bills
    }

    pub fn language(&self) -> Language {
        self.coordinator.language()
    }

    /// Read and execute commands until `quit`, end of input or shutdown
    pub async fn run(&mut self) {
        if !self.options.language_pinned {
            self.coordinator.load_language().await;
        }
        let config = self.coordinator.config();
        self.presenter.info(&format!(
            "Language {} | voice {} | type 'help' for commands",
            config.language.label(),
            if config.voice_mode_enabled { "on" } else { "off" }
        ));

        loop {
            if self.shutdown.is_shutdown() {
                break;
            }
            self.presenter.prompt();

            let line = tokio::select! {
                line = self.lines.next_line() => line,
                _ = self.shutdown.wait() => None,
            };
            let Some(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<SessionCommand>() {
                Ok(command) => {
                    if self.execute(command).await == Flow::Quit {
                        break;
                    }
                }
                Err(e) => self.presenter.error(&e.to_string()),
            }
        }

        self.coordinator.cancel().await;
        debug!("session ended");
    }

    pub async fn execute(&mut self, command: SessionCommand) -> Flow {
        debug!(?command, "executing");
        match command {
            SessionCommand::Start => self.start().await,
            SessionCommand::Pause => self.pause().await,
            SessionCommand::Resume => self.resume().await,
            SessionCommand::Finish => self.finish().await,
            SessionCommand::Listen(field) => {
                let result = self.listen(field).await;
                self.fill(&result);
            }
            SessionCommand::Set(entry, text) => {
                self.set_entry(entry, text);
                self.presenter.success("Bill entry updated");
            }
            SessionCommand::Speak(text) => self.coordinator.speak(&text).await,
            SessionCommand::Lang(language) => {
                self.coordinator.set_language(language).await;
                self.presenter
                    .success(&format!("Language set to {}", language.label()));
            }
            SessionCommand::Voice(enabled) => {
                self.coordinator.set_voice_mode(enabled);
                self.presenter.success(&format!(
                    "Voice announcements {}",
                    if enabled { "on" } else { "off" }
                ));
            }
            SessionCommand::Status => self.status(),
            SessionCommand::Cancel => self.coordinator.cancel().await,
            SessionCommand::Help => self.presenter.output(HELP),
            SessionCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn start(&mut self) {
        match self.timer.state() {
            TimerState::Running => self.presenter.warn("Already running"),
            TimerState::Paused => self.presenter.warn("Paused; use 'resume'"),
            TimerState::Stopped => self.presenter.warn("Finished; save the bill with 'finish'"),
            TimerState::Idle => {
                self.timer.start();
                self.coordinator.announce(Phrase::WorkStarted).await;
                self.presenter.success("Work started");
            }
        }
    }

    async fn pause(&mut self) {
        if self.timer.state() != TimerState::Running {
            self.presenter.warn("Timer is not running");
            return;
        }
        self.timer.pause();
        self.coordinator.announce(Phrase::MachineStopped).await;
        self.presenter.success("Machine stopped");
    }

    async fn resume(&mut self) {
        if self.timer.state() != TimerState::Paused {
            self.presenter.warn("Timer is not paused");
            return;
        }
        self.timer.resume();
        self.coordinator.announce(Phrase::StartedAgain).await;
        self.presenter.success("Started again");
    }

    async fn finish(&mut self) {
        match self.timer.state() {
            TimerState::Idle => {
                self.presenter.warn("Nothing to finish; use 'start' first");
                return;
            }
            TimerState::Stopped => {}
            TimerState::Running | TimerState::Paused => {
                self.timer.stop();
                self.coordinator.announce(Phrase::WorkFinished).await;
            }
        }

        let summary = self.timer.summary();
        self.presenter.summary(&summary);

        if self.draft.farmer_name.trim().is_empty() {
            self.coordinator.announce(Phrase::AskFarmerName).await;
            let result = self.listen(FieldKey::Farmer).await;
            if !self.fill(&result) {
                return;
            }
        }
        if self.draft.farmer_name.trim().is_empty() {
            self.presenter
                .warn("No farmer name heard; say 'finish' to try again");
            return;
        }

        if self.draft.address.is_none() {
            self.coordinator.announce(Phrase::AskAddress).await;
            let result = self.listen(FieldKey::Address).await;
            if !self.fill(&result) {
                return;
            }
        }

        let draft = std::mem::replace(&mut self.draft, BillDraft::new("", self.options.rate_per_hour));
        let bill = match draft.clone().finalize(&summary, Local::now()) {
            Ok(bill) => bill,
            Err(e) => {
                self.draft = draft;
                self.presenter.error(&e.to_string());
                return;
            }
        };

        if let Err(e) = self.bills.add_bill(bill.clone()).await {
            warn!(error = %e, "bill not saved");
            self.draft = draft;
            self.presenter.error(&format!("Bill not saved: {}", e));
            return;
        }

        self.coordinator.announce(Phrase::BillSaved).await;
        self.presenter.bill(&bill);
        self.presenter.output(&bill.share_text());
        self.timer.reset();
    }

    /// Write a listening result into the bill form.
    /// Returns false when the request was superseded and nothing was written.
    fn fill(&mut self, result: &ListenResult) -> bool {
        let Some(text) = result.text() else {
            return false;
        };
        match result.field {
            FieldKey::Farmer => self.draft.farmer_name = text.to_string(),
            FieldKey::Address => self.draft.address = Some(text.to_string()),
        }
        true
    }

    fn set_entry(&mut self, entry: DraftEntry, text: String) {
        match entry {
            DraftEntry::Farmer => self.draft.farmer_name = text,
            DraftEntry::Address => self.draft.address = Some(text),
            DraftEntry::FieldName => self.draft.field_name = text,
            DraftEntry::Mobile => self.draft.mobile = Some(text),
        }
    }

    /// Listen for `field` with a progress spinner. Shutdown cancels the request.
    async fn listen(&mut self, field: FieldKey) -> ListenResult {
        let timeout = self.options.listen_timeout;
        let total_ms = timeout.as_millis();
        self.presenter.show_listening(field);

        let result = {
            let started = Instant::now();
            let listening = self
                .coordinator
                .listen_for(field, ListenOptions::with_timeout(timeout));
            tokio::pin!(listening);

            let mut ticker = interval(StdDuration::from_millis(250));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut cancelled = false;

            loop {
                tokio::select! {
                    result = &mut listening => break result,
                    _ = self.shutdown.wait(), if !cancelled => {
                        cancelled = true;
                        self.coordinator.cancel().await;
                    }
                    _ = ticker.tick() => {
                        let elapsed_ms = started.elapsed().as_millis() as u64;
                        self.presenter.update_listening(field, elapsed_ms, total_ms);
                    }
                }
            }
        };

        self.presenter.listen_result(&result);
        result
    }

    fn status(&self) {
        let elapsed_ms = self
            .timer
            .open_session_elapsed()
            .map(|d| d.num_milliseconds())
            .unwrap_or(0);
        let total_ms = (self.timer.total_active_minutes() * 60_000.0).round() as i64 + elapsed_ms;
        self.presenter.timer_status(
            self.timer.state(),
            &format_hms(elapsed_ms),
            &format_hms(total_ms),
        );

        let config = self.coordinator.config();
        self.presenter.key_value("language", config.language.tag());
        self.presenter.key_value(
            "voice",
            if config.voice_mode_enabled { "on" } else { "off" },
        );
        self.presenter.key_value(
            "listening",
            if self.coordinator.is_listening() { "yes" } else { "no" },
        );
        if !self.draft.farmer_name.is_empty() {
            self.presenter.key_value("farmer", &self.draft.farmer_name);
        }
        if let Some(ref address) = self.draft.address {
            self.presenter.key_value("address", address);
        }
        if !self.draft.field_name.is_empty() {
            self.presenter.key_value("field", &self.draft.field_name);
        }
        if let Some(ref mobile) = self.draft.mobile {
            self.presenter.key_value("mobile", mobile);
        }
    }
}
