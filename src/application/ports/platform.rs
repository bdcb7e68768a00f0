//! Platform query port

use std::fmt;

/// Runtime environment the app is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    #[default]
    Native,
    Web,
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Web => write!(f, "web"),
        }
    }
}

/// Port reporting which recognition backend applies
pub trait Platform: Send + Sync {
    fn kind(&self) -> PlatformKind;

    fn is_web(&self) -> bool {
        self.kind() == PlatformKind::Web
    }
}
