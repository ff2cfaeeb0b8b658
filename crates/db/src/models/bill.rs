//! Bill entity model and DTOs.
//!
//! A bill is a billing-period snapshot: every field except `status` is fixed
//! at creation. The contact number is copied from the request rather than
//! referencing the profile, so later profile edits leave past bills intact.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use rentledger_core::billing::CustomField;
use rentledger_core::types::{Amount, DbId, Timestamp};

/// Payment status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "bill_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Paid,
}

impl BillStatus {
    /// The single status transition: pending and paid flip into each other.
    pub fn toggled(self) -> Self {
        match self {
            BillStatus::Pending => BillStatus::Paid,
            BillStatus::Paid => BillStatus::Pending,
        }
    }

    /// Capitalized label for human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Pending => "Pending",
            BillStatus::Paid => "Paid",
        }
    }
}

/// A bill row from the `bills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bill {
    pub id: DbId,
    pub profile_id: DbId,
    pub issued_on: Timestamp,
    pub rent: Amount,
    pub electric: Option<Amount>,
    pub gas: Option<Amount>,
    pub water: Option<Amount>,
    pub custom_fields: Option<Json<Vec<CustomField>>>,
    pub total: Amount,
    pub contact_number: String,
    pub description: Option<String>,
    pub status: BillStatus,
    pub created_at: Timestamp,
}

impl Bill {
    /// The custom charge line items, empty when none were recorded.
    pub fn custom_fields(&self) -> &[CustomField] {
        self.custom_fields.as_ref().map_or(&[], |json| &json.0)
    }
}

/// Validated input for creating a bill. The total has already been computed
/// from the validated charge set.
#[derive(Debug, Clone)]
pub struct CreateBill {
    pub profile_id: DbId,
    pub rent: Amount,
    pub electric: Option<Amount>,
    pub gas: Option<Amount>,
    pub water: Option<Amount>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub total: Amount,
    pub contact_number: String,
    pub description: Option<String>,
}
