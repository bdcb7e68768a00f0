//! Active listen-session register

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::time::Instant;

use super::field::FieldKey;
use super::timeout::ListenTimeout;

/// Opaque identifier scoping one listening attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenToken(u64);

impl fmt::Display for ListenToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listen-{}", self.0)
    }
}

/// One listening attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenSession {
    pub token: ListenToken,
    pub field: FieldKey,
    pub deadline: Instant,
}

/// Single-writer register holding the one token allowed to deliver a result.
///
/// `begin` overwrites the active token, which forecloses every earlier one
/// no matter how far along its callbacks are. Waiters observe the change
/// through [`ListenRegister::foreclosed`].
#[derive(Debug)]
pub struct ListenRegister {
    next: AtomicU64,
    active: watch::Sender<Option<ListenToken>>,
}

impl ListenRegister {
    pub fn new() -> Self {
        let (active, _) = watch::channel(None);
        Self {
            next: AtomicU64::new(1),
            active,
        }
    }

    /// Mint a token, make it the active one, and arm its deadline
    pub fn begin(&self, field: FieldKey, timeout: ListenTimeout) -> ListenSession {
        let token = ListenToken(self.next.fetch_add(1, Ordering::SeqCst));
        let deadline = Instant::now() + timeout.as_std();
        self.active.send_replace(Some(token));
        ListenSession {
            token,
            field,
            deadline,
        }
    }

    pub fn is_active(&self, token: ListenToken) -> bool {
        *self.active.borrow() == Some(token)
    }

    pub fn active(&self) -> Option<ListenToken> {
        *self.active.borrow()
    }

    /// Foreclose whatever token is active. Returns it, if there was one.
    pub fn clear(&self) -> Option<ListenToken> {
        self.active.send_replace(None)
    }

    /// Retire `token` after it settled. A newer token is left alone.
    pub fn finish(&self, token: ListenToken) -> bool {
        self.active.send_if_modified(|current| {
            if *current == Some(token) {
                *current = None;
                true
            } else {
                false
            }
        })
    }

    /// Completes once `token` is no longer the active token
    pub async fn foreclosed(&self, token: ListenToken) {
        let mut rx = self.active.subscribe();
        let _ = rx.wait_for(|current| *current != Some(token)).await;
    }
}

impl Default for ListenRegister {
    fn default() -> Self {
        Self::new()
    }
}
