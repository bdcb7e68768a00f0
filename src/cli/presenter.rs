//! CLI presenter for output formatting

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::billing::BillRecord;
use crate::domain::timer::{TimerState, WorkSummary};
use crate::domain::voice::{FieldKey, ListenResult};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
    is_spinner_active: Arc<AtomicBool>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: None,
            is_spinner_active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
        self.is_spinner_active.store(true, Ordering::SeqCst);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.is_spinner_active.store(false, Ordering::SeqCst);
    }

    pub fn is_spinner_active(&self) -> bool {
        self.is_spinner_active.load(Ordering::SeqCst)
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print the command prompt without a newline
    pub fn prompt(&self) {
        print!("{} ", "›".cyan());
        let _ = io::stdout().flush();
    }

    /// Format listening progress bar
    pub fn format_progress(&self, elapsed_ms: u64, total_ms: u64) -> String {
        let elapsed_secs = elapsed_ms / 1000;
        let total_secs = total_ms / 1000;
        let percent = if total_ms > 0 {
            (elapsed_ms as f64 / total_ms as f64 * 100.0).min(100.0)
        } else {
            0.0
        };

        let bar_width = 20;
        let filled = ((percent / 100.0) * bar_width as f64) as usize;
        let empty = bar_width - filled;

        format!(
            "[{}{}] {:>3}s / {}s",
            "█".repeat(filled).cyan(),
            "░".repeat(empty),
            elapsed_secs,
            total_secs
        )
    }

    /// Spinner shown while waiting for speech
    pub fn show_listening(&mut self, field: FieldKey) {
        self.start_spinner(&format!("Listening for {}... (type it)", field.label()));
    }

    pub fn update_listening(&self, field: FieldKey, elapsed_ms: u64, total_ms: u64) {
        let progress = self.format_progress(elapsed_ms, total_ms);
        self.update_spinner(&format!("Listening for {}... {}", field.label(), progress));
    }

    /// Close the listening spinner and report what was heard
    pub fn listen_result(&mut self, result: &ListenResult) {
        self.stop_spinner();
        match result.text() {
            Some("") => self.warn(&format!("Nothing heard for {}", result.field.label())),
            Some(text) => self.success(&format!("{}: {}", result.field.label(), text)),
            None => self.info(&format!("Listening for {} cancelled", result.field.label())),
        }
    }

    /// Print timer state and elapsed time of the open session
    pub fn timer_status(&self, state: TimerState, elapsed: &str, total: &str) {
        eprintln!(
            "{} {} | session {} | total {}",
            "●".cyan(),
            state.to_string().bold(),
            elapsed,
            total
        );
    }

    /// Print the figures of finished work
    pub fn summary(&self, summary: &WorkSummary) {
        self.key_value("Start", &summary.start_time);
        self.key_value("End", &summary.end_time);
        self.key_value(
            "Worked",
            &format!(
                "{} ({:.2} h)",
                summary.total_display(),
                summary.total_hours
            ),
        );
        for period in &summary.stop_periods {
            self.key_value("  session", &format!("{} - {}", period.start, period.end));
        }
    }

    /// Print one saved bill
    pub fn bill(&self, bill: &BillRecord) {
        println!(
            "{} {}  {}  {:.2} h × {:.2} = {}",
            "🌾".green(),
            bill.farmer_name.bold(),
            bill.date,
            bill.total_hours,
            bill.rate_per_hour,
            format!("₹{:.2}", bill.total_amount).green()
        );
        if let Some(ref address) = bill.address {
            println!("   {}", address);
        }
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
