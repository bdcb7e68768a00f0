//! Billing domain module

mod bill;

pub use bill::{BillDraft, BillRecord};
