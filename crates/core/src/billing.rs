//! Bill charge validation and total computation.
//!
//! The total of a bill is computed exactly once, at creation time, from the
//! validated charge set and persisted alongside the bill. Later reads never
//! recompute it; later profile edits never alter it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Amount;

/// An arbitrary named monetary line item attached to a bill at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub amount: Amount,
}

/// The validated charge set of a bill.
///
/// `rent` is the one mandatory monetary component; the utilities are treated
/// as zero when absent. Custom fields keep their submitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillCharges {
    pub rent: Amount,
    pub electric: Option<Amount>,
    pub gas: Option<Amount>,
    pub water: Option<Amount>,
    pub custom_fields: Vec<CustomField>,
}

impl BillCharges {
    /// Compute the bill total.
    ///
    /// Pure: no dependency on time, identity, or stored state. Absent
    /// utilities count as zero.
    pub fn total(&self) -> Amount {
        self.rent
            + self.electric.unwrap_or(0)
            + self.gas.unwrap_or(0)
            + self.water.unwrap_or(0)
            + self.custom_fields.iter().map(|f| f.amount).sum::<Amount>()
    }
}

/// Validate a charge set before any persistence call is made.
///
/// Negative amounts are rejected for every monetary component, including
/// custom fields; custom field names must be non-empty. The components must
/// also sum without overflowing [`Amount`], so a validated charge set is
/// guaranteed to have a representable total.
pub fn validate_charges(charges: &BillCharges) -> Result<(), CoreError> {
    if charges.rent < 0 {
        return Err(CoreError::Validation("Rent must not be negative".into()));
    }
    for (label, value) in [
        ("Electric", charges.electric),
        ("Gas", charges.gas),
        ("Water", charges.water),
    ] {
        if value.is_some_and(|v| v < 0) {
            return Err(CoreError::Validation(format!(
                "{label} must not be negative"
            )));
        }
    }
    for field in &charges.custom_fields {
        if field.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Custom charge name must not be empty".into(),
            ));
        }
        if field.amount < 0 {
            return Err(CoreError::Validation(format!(
                "Custom charge '{}' must not be negative",
                field.name
            )));
        }
    }

    // Checked accumulation mirrors `total()` component for component.
    let mut sum = charges.rent;
    for value in [charges.electric, charges.gas, charges.water]
        .into_iter()
        .flatten()
        .chain(charges.custom_fields.iter().map(|f| f.amount))
    {
        sum = sum
            .checked_add(value)
            .ok_or_else(|| CoreError::Validation("Bill total is too large".into()))?;
    }
    Ok(())
}

/// Validate a contact number. Only presence is enforced; the format is left
/// to the landlord.
pub fn validate_contact_number(contact_number: &str) -> Result<(), CoreError> {
    if contact_number.trim().is_empty() {
        return Err(CoreError::Validation(
            "Contact number is required".into(),
        ));
    }
    Ok(())
}
