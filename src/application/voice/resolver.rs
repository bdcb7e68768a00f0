//! Guarded resolver for one listening attempt

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::domain::voice::{ListenOutcome, ListenRegister, ListenToken};

/// The only path by which a listening attempt delivers its outcome.
///
/// Every event source (partial result, web result/error/end, start failure,
/// timeout) calls [`GuardedResolver::resolve`]. The first call made while the
/// token is still active wins; every other call is a no-op.
pub(crate) struct GuardedResolver {
    token: ListenToken,
    register: Arc<ListenRegister>,
    slot: Mutex<Option<oneshot::Sender<ListenOutcome>>>,
}

impl GuardedResolver {
    pub(crate) fn new(
        token: ListenToken,
        register: Arc<ListenRegister>,
    ) -> (Arc<Self>, oneshot::Receiver<ListenOutcome>) {
        let (tx, rx) = oneshot::channel();
        let resolver = Arc::new(Self {
            token,
            register,
            slot: Mutex::new(Some(tx)),
        });
        (resolver, rx)
    }

    pub(crate) fn token(&self) -> ListenToken {
        self.token
    }

    /// Deliver `outcome` if nothing was delivered yet and the token is active.
    /// Returns whether this call delivered.
    pub(crate) fn resolve(&self, outcome: ListenOutcome) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_none() || !self.register.is_active(self.token) {
            return false;
        }
        match slot.take() {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }

    /// Deliver recognised text, treating blank text as nothing heard
    pub(crate) fn resolve_text(&self, text: &str) -> bool {
        self.resolve(ListenOutcome::from_text(text))
    }

    pub(crate) fn resolve_empty(&self) -> bool {
        self.resolve(ListenOutcome::Empty)
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_none()
    }
}
