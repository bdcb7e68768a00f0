//! Bill history use case

use tracing::debug;

use crate::domain::billing::BillRecord;

use super::ports::{PreferenceError, PreferenceStore};

/// Preference key holding the JSON bill list
pub const BILLS_KEY: &str = "bills";

/// Saved bills, latest first, kept in a preference store
pub struct BillBook<K: PreferenceStore> {
    store: K,
}

impl<K: PreferenceStore> BillBook<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// All saved bills, latest first. Empty when nothing was saved yet.
    pub async fn all_bills(&self) -> Result<Vec<BillRecord>, PreferenceError> {
        let Some(raw) = self.store.get(BILLS_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| PreferenceError::Malformed {
            key: BILLS_KEY.to_string(),
            message: e.to_string(),
        })
    }

    /// Put `bill` at the front of the history
    pub async fn add_bill(&self, bill: BillRecord) -> Result<(), PreferenceError> {
        let mut bills = self.all_bills().await?;
        debug!(id = %bill.id, existing = bills.len(), "saving bill");
        bills.insert(0, bill);

        let raw = serde_json::to_string(&bills)
            .map_err(|e| PreferenceError::WriteFailed(e.to_string()))?;
        self.store.set(BILLS_KEY, &raw).await
    }

    pub async fn clear_bills(&self) -> Result<(), PreferenceError> {
        self.store.remove(BILLS_KEY).await
    }
}
