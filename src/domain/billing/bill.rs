//! Bill record entity

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::error::BillError;
use crate::domain::timer::WorkSummary;

/// A finished bill as stored in the bill history.
/// Field names follow the stored JSON layout (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: String,
    pub farmer_name: String,
    pub field_name: String,
    pub total_hours: f64,
    pub rate_per_hour: f64,
    pub total_amount: f64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl BillRecord {
    /// Text handed to a share sheet
    pub fn share_text(&self) -> String {
        format!(
            "🌾 {}\nAmount: ₹{:.2}\nHours: {:.2}",
            self.farmer_name, self.total_amount, self.total_hours
        )
    }
}

/// Bill form contents before the work figures are attached
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillDraft {
    pub farmer_name: String,
    pub field_name: String,
    pub rate_per_hour: f64,
    pub mobile: Option<String>,
    pub address: Option<String>,
}

impl BillDraft {
    pub fn new(farmer_name: impl Into<String>, rate_per_hour: f64) -> Self {
        Self {
            farmer_name: farmer_name.into(),
            rate_per_hour,
            ..Default::default()
        }
    }

    /// Attach the work figures and price the bill at `hours × rate`
    pub fn finalize(
        self,
        summary: &WorkSummary,
        issued_at: DateTime<Local>,
    ) -> Result<BillRecord, BillError> {
        let farmer_name = self.farmer_name.trim().to_string();
        if farmer_name.is_empty() {
            return Err(BillError::MissingFarmerName);
        }
        if !self.rate_per_hour.is_finite() || self.rate_per_hour < 0.0 {
            return Err(BillError::InvalidRate(self.rate_per_hour));
        }

        Ok(BillRecord {
            id: issued_at.timestamp_millis().to_string(),
            farmer_name,
            field_name: self.field_name.trim().to_string(),
            total_hours: summary.total_hours,
            rate_per_hour: self.rate_per_hour,
            total_amount: summary.total_hours * self.rate_per_hour,
            date: issued_at.to_rfc3339(),
            mobile: non_blank(self.mobile),
            address: non_blank(self.address),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
