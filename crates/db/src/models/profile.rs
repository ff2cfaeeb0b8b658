//! Profile (tenant record) entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use rentledger_core::types::{Amount, DbId, Timestamp};

use crate::models::bill::Bill;

/// A profile row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub tenant_name: String,
    pub contact_number: String,
    pub room_label: String,
    pub rent: Option<Amount>,
    pub security_deposit: Option<Amount>,
    pub move_in_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for creating a profile. Built by the endpoint layer after
/// the explicit validation step.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub tenant_name: String,
    pub contact_number: String,
    /// Defaults to `"Unknown"` when omitted.
    pub room_label: Option<String>,
    pub rent: Option<Amount>,
    pub security_deposit: Option<Amount>,
    pub move_in_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Validated input for updating a profile.
///
/// Updates are full-field replaces over the editable set: every field here is
/// written as-is, so an omitted optional field clears the stored value. The
/// room label is fixed at creation and not part of the editable set.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub tenant_name: String,
    pub contact_number: String,
    pub rent: Option<Amount>,
    pub security_deposit: Option<Amount>,
    pub move_in_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// A profile together with a capped, newest-first slice of its bills.
///
/// Used both for the profile list (at most one bill, the latest) and the
/// profile detail view (at most five).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileWithBills {
    #[serde(flatten)]
    pub profile: Profile,
    pub bills: Vec<Bill>,
}
