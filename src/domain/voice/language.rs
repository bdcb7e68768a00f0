//! Speech language value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// All supported languages
pub const ALL_LANGUAGES: &[Language] = &[Language::Telugu, Language::English];

/// Language used for both synthesis and recognition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Telugu,
    English,
}

impl Language {
    /// BCP 47 tag handed to the speech backends
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Telugu => "te-IN",
            Self::English => "en-US",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Telugu => "Telugu",
            Self::English => "English",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    /// Accepts the full tag or the bare language subtag, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "te-in" | "te" | "telugu" => Ok(Self::Telugu),
            "en-us" | "en" | "english" => Ok(Self::English),
            _ => Err(InvalidLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
