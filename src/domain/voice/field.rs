//! Form field targeted by a listening request

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidFieldError;

/// Form fields that can be filled by voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Farmer,
    Address,
}

impl FieldKey {
    /// Get the string identifier for this field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Address => "address",
        }
    }

    /// Get the human-readable label for this field
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Farmer => "Farmer name",
            Self::Address => "Address",
        }
    }
}

impl FromStr for FieldKey {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farmer" | "name" => Ok(Self::Farmer),
            "address" => Ok(Self::Address),
            _ => Err(InvalidFieldError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
