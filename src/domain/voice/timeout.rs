//! Listen timeout value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::error::TimeoutParseError;

/// Default time a listening attempt waits for speech (7 seconds)
pub const DEFAULT_LISTEN_TIMEOUT_MS: u64 = 7_000;

/// How long one listening attempt may wait before settling empty.
/// Always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenTimeout {
    milliseconds: u64,
}

impl ListenTimeout {
    /// Create a timeout from milliseconds; zero is raised to one millisecond
    pub const fn from_millis(ms: u64) -> Self {
        Self {
            milliseconds: if ms == 0 { 1 } else { ms },
        }
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self::from_millis(secs * 1000)
    }

    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    pub const fn as_std(&self) -> Duration {
        Duration::from_millis(self.milliseconds)
    }
}

impl Default for ListenTimeout {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LISTEN_TIMEOUT_MS)
    }
}

impl FromStr for ListenTimeout {
    type Err = TimeoutParseError;

    /// Parse "1500ms", "7s", "1m" or "1m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeoutParseError {
            input: s.to_string(),
        };
        let input = s.trim().to_lowercase();
        let mut chars = input.chars().peekable();
        let mut total_ms: u64 = 0;
        let mut found_any = false;

        while chars.peek().is_some() {
            let mut digits = String::new();
            while let Some(ch) = chars.peek().filter(|c| c.is_ascii_digit()) {
                digits.push(*ch);
                chars.next();
            }
            if digits.is_empty() {
                return Err(err());
            }
            let value: u64 = digits.parse().map_err(|_| err())?;

            let factor = match chars.next() {
                Some('m') if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                Some('m') => 60_000,
                Some('s') => 1_000,
                _ => return Err(err()),
            };
            total_ms = value
                .checked_mul(factor)
                .and_then(|v| total_ms.checked_add(v))
                .ok_or_else(err)?;
            found_any = true;
        }

        if !found_any || total_ms == 0 {
            return Err(err());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for ListenTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milliseconds % 1000 != 0 {
            return write!(f, "{}ms", self.milliseconds);
        }
        let total_secs = self.milliseconds / 1000;
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}
