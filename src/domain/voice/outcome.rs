//! Listening outcome value objects

use super::field::FieldKey;

/// How one listening attempt settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenOutcome {
    /// Speech was recognised
    Success(String),
    /// Nothing usable: silence, timeout, denied permission or a backend failure
    Empty,
    /// A newer attempt (or a cancel) took over before this one settled
    Superseded,
}

impl ListenOutcome {
    /// Classify recognised text; blank text counts as nothing heard
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Success(trimmed.to_string())
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// Result delivered to the caller of a listening request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenResult {
    pub field: FieldKey,
    pub outcome: ListenOutcome,
}

impl ListenResult {
    pub fn new(field: FieldKey, outcome: ListenOutcome) -> Self {
        Self { field, outcome }
    }

    /// Text to write into the field.
    ///
    /// `Some("")` when nothing was heard; `None` for a superseded attempt,
    /// whose field must be left untouched.
    pub fn text(&self) -> Option<&str> {
        match &self.outcome {
            ListenOutcome::Success(text) => Some(text),
            ListenOutcome::Empty => Some(""),
            ListenOutcome::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        self.outcome.is_superseded()
    }
}
