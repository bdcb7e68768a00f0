//! Platform adapters

use crate::application::ports::{Platform, PlatformKind};

/// Platform fixed at start-up (native unless web fallback is configured)
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPlatform {
    kind: PlatformKind,
}

impl StaticPlatform {
    pub fn new(kind: PlatformKind) -> Self {
        Self { kind }
    }

    pub fn from_web_fallback(web_fallback: bool) -> Self {
        if web_fallback {
            Self::new(PlatformKind::Web)
        } else {
            Self::new(PlatformKind::Native)
        }
    }
}

impl Platform for StaticPlatform {
    fn kind(&self) -> PlatformKind {
        self.kind
    }
}
