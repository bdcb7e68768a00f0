//! Work timer entity

use std::fmt;

use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::summary::{format_time_of_day, WorkSummary};

/// One contiguous interval of active work.
/// An interval without an end is the open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSession {
    start: DateTime<Local>,
    end: Option<DateTime<Local>>,
}

impl WorkSession {
    fn open(start: DateTime<Local>) -> Self {
        Self { start, end: None }
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Local>> {
        self.end
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of a closed session; `None` while open
    pub fn duration(&self) -> Option<TimeDelta> {
        self.end.map(|end| end - self.start)
    }
}

/// A closed session rendered as local time-of-day strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopPeriod {
    pub start: String,
    pub end: String,
}

/// Coarse timer state for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
    Stopped,
}

impl TimerState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Work timer entity.
/// Accumulates active sessions across pauses.
///
/// Transitions never fail: a call that does not fit the current state is
/// ignored and leaves the session list untouched.
///
///   start:  not running -> running (opens a session, marks first start)
///   pause:  running -> not running (closes the open session)
///   resume: not running -> running (opens a session)
///   stop:   closes the open session if any, always marks the final stop
///   reset:  back to an empty timer
#[derive(Debug)]
pub struct WorkTimer<C = SystemClock> {
    clock: C,
    sessions: Vec<WorkSession>,
    running: bool,
    start_time: Option<DateTime<Local>>,
    end_time: Option<DateTime<Local>>,
}

impl WorkTimer<SystemClock> {
    /// Create a timer driven by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for WorkTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> WorkTimer<C> {
    /// Create a timer driven by a custom clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            sessions: Vec::new(),
            running: false,
            start_time: None,
            end_time: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn sessions(&self) -> &[WorkSession] {
        &self.sessions
    }

    /// When work first began in this lifecycle
    pub fn start_time(&self) -> Option<DateTime<Local>> {
        self.start_time
    }

    /// When work was finally stopped
    pub fn end_time(&self) -> Option<DateTime<Local>> {
        self.end_time
    }

    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.end_time.is_some() {
            TimerState::Stopped
        } else if self.sessions.is_empty() {
            TimerState::Idle
        } else {
            TimerState::Paused
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        let now = self.clock.now();
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        self.open_session(now);
    }

    pub fn pause(&mut self) {
        if !self.running || self.sessions.is_empty() {
            return;
        }
        self.close_open_session();
        self.running = false;
    }

    pub fn resume(&mut self) {
        if self.running {
            return;
        }
        let now = self.clock.now();
        self.open_session(now);
    }

    pub fn stop(&mut self) {
        if self.running {
            self.close_open_session();
        }
        self.end_time = Some(self.clock.now());
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.sessions.clear();
        self.running = false;
        self.start_time = None;
        self.end_time = None;
    }

    /// Total minutes over closed sessions.
    ///
    /// The open session is not counted until it closes, so the value lags
    /// while the timer runs. Add [`Self::open_session_elapsed`] for a live total.
    pub fn total_active_minutes(&self) -> f64 {
        let total_ms: i64 = self
            .sessions
            .iter()
            .filter_map(WorkSession::duration)
            .map(|d| d.num_milliseconds())
            .sum();
        total_ms as f64 / 60_000.0
    }

    /// Closed sessions as local `HH:MM` pairs, oldest first
    pub fn stop_periods(&self) -> Vec<StopPeriod> {
        self.sessions
            .iter()
            .filter_map(|s| {
                s.end().map(|end| StopPeriod {
                    start: format_time_of_day(s.start()),
                    end: format_time_of_day(end),
                })
            })
            .collect()
    }

    /// Time spent in the open session so far
    pub fn open_session_elapsed(&self) -> Option<TimeDelta> {
        if !self.running {
            return None;
        }
        self.sessions
            .last()
            .filter(|s| s.is_open())
            .map(|s| self.clock.now() - s.start())
    }

    /// Snapshot of the figures a bill is built from
    pub fn summary(&self) -> WorkSummary {
        WorkSummary::new(
            self.total_active_minutes(),
            self.start_time,
            self.end_time,
            self.stop_periods(),
        )
    }

    fn open_session(&mut self, now: DateTime<Local>) {
        self.sessions.push(WorkSession::open(now));
        self.running = true;
    }

    fn close_open_session(&mut self) {
        let now = self.clock.now();
        if let Some(session) = self.sessions.last_mut() {
            if session.is_open() {
                session.end = Some(now);
            }
        }
    }
}
