//! WhatsApp deep-link derivation for bill summaries.
//!
//! Produces `https://api.whatsapp.com/send?phone=...&text=...` URLs that open
//! a prefilled chat with the tenant. Pure derivation; no side effects.

use crate::billing::CustomField;
use crate::types::Amount;

/// Country calling code prepended to contact numbers that carry no
/// international prefix.
pub const DEFAULT_COUNTRY_PREFIX: &str = "+92";

/// Everything needed to render a bill summary message.
#[derive(Debug, Clone)]
pub struct BillSummary<'a> {
    pub tenant_name: &'a str,
    pub contact_number: &'a str,
    pub rent: Amount,
    pub electric: Option<Amount>,
    pub gas: Option<Amount>,
    pub water: Option<Amount>,
    pub custom_fields: &'a [CustomField],
    pub total: Amount,
    /// Human-readable status, e.g. `"Pending"` or `"Paid"`.
    pub status_label: &'a str,
    pub description: Option<&'a str>,
}

/// Normalize a contact number for the `phone` query parameter.
///
/// Numbers already starting with `+` are used as-is; everything else gets the
/// default country prefix prepended.
pub fn format_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_COUNTRY_PREFIX}{trimmed}")
    }
}

/// Render the plaintext bill summary message.
pub fn bill_message(summary: &BillSummary<'_>) -> String {
    let mut message = format!(
        "Bill Details for {}:\nRent: PKR {}\nElectric: PKR {}\nGas: PKR {}\nWater: PKR {}",
        summary.tenant_name,
        summary.rent,
        summary.electric.unwrap_or(0),
        summary.gas.unwrap_or(0),
        summary.water.unwrap_or(0),
    );
    for field in summary.custom_fields {
        message.push_str(&format!("\n{}: PKR {}", field.name, field.amount));
    }
    message.push_str(&format!(
        "\nTotal: PKR {}\nStatus: {}",
        summary.total, summary.status_label
    ));
    if let Some(description) = summary.description {
        message.push_str(&format!("\nDescription: {description}"));
    }
    message
}

/// Build the full WhatsApp send URL for a bill summary.
pub fn deep_link(summary: &BillSummary<'_>) -> String {
    let phone = format_phone(summary.contact_number);
    let text = bill_message(summary);
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        phone,
        urlencoding::encode(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> BillSummary<'static> {
        BillSummary {
            tenant_name: "Ali",
            contact_number: "3001234567",
            rent: 15000,
            electric: Some(1200),
            gas: None,
            water: None,
            custom_fields: &[],
            total: 16200,
            status_label: "Pending",
            description: None,
        }
    }

    #[test]
    fn test_format_phone_prepends_country_prefix() {
        assert_eq!(format_phone("3001234567"), "+923001234567");
    }

    #[test]
    fn test_format_phone_keeps_international_numbers() {
        assert_eq!(format_phone("+923001234567"), "+923001234567");
        assert_eq!(format_phone("+4479111222"), "+4479111222");
    }

    #[test]
    fn test_message_defaults_absent_utilities_to_zero() {
        let message = bill_message(&summary());
        assert!(message.contains("Rent: PKR 15000"));
        assert!(message.contains("Electric: PKR 1200"));
        assert!(message.contains("Gas: PKR 0"));
        assert!(message.contains("Water: PKR 0"));
        assert!(message.contains("Status: Pending"));
        assert!(!message.contains("Description:"));
    }

    #[test]
    fn test_message_lists_custom_fields_in_order() {
        let fields = [
            CustomField {
                name: "Internet".to_string(),
                amount: 2000,
            },
            CustomField {
                name: "Cleaning".to_string(),
                amount: 500,
            },
        ];
        let mut s = summary();
        s.custom_fields = &fields;
        let message = bill_message(&s);
        let internet = message.find("Internet: PKR 2000").unwrap();
        let cleaning = message.find("Cleaning: PKR 500").unwrap();
        assert!(internet < cleaning);
    }

    #[test]
    fn test_message_includes_description_when_present() {
        let mut s = summary();
        s.description = Some("June rent");
        assert!(bill_message(&s).ends_with("Description: June rent"));
    }

    #[test]
    fn test_deep_link_encodes_text() {
        let url = deep_link(&summary());
        assert!(url.starts_with("https://api.whatsapp.com/send?phone=+923001234567&text="));
        // Newlines must be percent-encoded; raw spaces and newlines may not appear.
        assert!(url.contains("%0A"));
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
        assert!(url.contains("Total%3A%20PKR%2016200"));
    }
}
