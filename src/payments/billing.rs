use super::types::{
    BillingData, CustomerDetails, DEFAULT_CITY, DEFAULT_COUNTRY, DEFAULT_FIRST_NAME,
    NOT_AVAILABLE,
};

/// Convert whole pounds to piasters, rounding half away from zero.
///
/// Everything sent to the gateway is an integer amount of minor units.
pub fn egp_to_cents(amount_egp: f64) -> i64 {
    (amount_egp * 100.0).round() as i64
}

/// Split a full name into (first, last) for the gateway's billing record.
///
/// This is a lossy heuristic: the first whitespace-separated token is taken
/// as the first name and everything after it as the last name. It knows
/// nothing about name order conventions (Arabic patronymic chains, family
/// names written first, single-word names), so the result is only good
/// enough for the gateway's required fields and must not be shown back to
/// the customer as their name.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or(DEFAULT_FIRST_NAME).to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        rest
    };
    (first, last)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn billing_data_for(customer: &CustomerDetails) -> BillingData {
    let (first_name, last_name) = split_full_name(&customer.full_name);
    BillingData {
        first_name,
        last_name,
        email: customer.email.trim().to_string(),
        phone_number: customer.phone.trim().to_string(),
        street: or_placeholder(&customer.address, NOT_AVAILABLE),
        city: or_placeholder(&customer.city, DEFAULT_CITY),
        country: DEFAULT_COUNTRY.to_string(),
        state: NOT_AVAILABLE.to_string(),
        postal_code: NOT_AVAILABLE.to_string(),
        building: NOT_AVAILABLE.to_string(),
        floor: NOT_AVAILABLE.to_string(),
        apartment: NOT_AVAILABLE.to_string(),
    }
}

/// Normalize an Egyptian mobile wallet number to `01XXXXXXXXX`.
///
/// Spaces and dashes are ignored and `+20` / `0020` country prefixes are
/// accepted. Returns `None` if the result is not an 11-digit `01` number.
pub fn normalize_wallet_phone(raw: &str) -> Option<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let national = if let Some(rest) = compact.strip_prefix("+20") {
        format!("0{rest}")
    } else if let Some(rest) = compact.strip_prefix("0020") {
        format!("0{rest}")
    } else {
        compact
    };

    let valid = national.len() == 11
        && national.starts_with("01")
        && national.chars().all(|c| c.is_ascii_digit());
    valid.then_some(national)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_conversion_rounds_instead_of_truncating() {
        assert_eq!(egp_to_cents(1500.005), 150001);
        assert_eq!(egp_to_cents(350.0), 35000);
        assert_eq!(egp_to_cents(0.0), 0);
        assert_eq!(egp_to_cents(19.994), 1999);
    }

    #[test]
    fn splits_multi_word_name() {
        let (first, last) = split_full_name("Omar Mohamed Said");
        assert_eq!(first, "Omar");
        assert_eq!(last, "Mohamed Said");
    }

    #[test]
    fn single_token_name_gets_fallback_last_name() {
        let (first, last) = split_full_name("Omar");
        assert_eq!(first, "Omar");
        assert_eq!(last, "N/A");
    }

    #[test]
    fn blank_name_gets_both_fallbacks() {
        assert_eq!(
            split_full_name("   "),
            ("Customer".to_string(), "N/A".to_string())
        );
    }

    #[test]
    fn repeated_whitespace_collapses() {
        let (first, last) = split_full_name("  محمد   علي  حسن ");
        assert_eq!(first, "محمد");
        assert_eq!(last, "علي حسن");
    }

    #[test]
    fn billing_data_fills_placeholders() {
        let customer = CustomerDetails {
            full_name: "Omar".into(),
            email: "omar@example.com".into(),
            phone: "01012345678".into(),
            address: "".into(),
            city: " ".into(),
        };
        let billing = billing_data_for(&customer);
        assert_eq!(billing.first_name, "Omar");
        assert_eq!(billing.last_name, "N/A");
        assert_eq!(billing.street, "N/A");
        assert_eq!(billing.city, "Cairo");
        assert_eq!(billing.country, "EG");
        assert_eq!(billing.apartment, "N/A");
    }

    #[test]
    fn wallet_phone_normalization() {
        assert_eq!(normalize_wallet_phone("010 1234 5678").as_deref(), Some("01012345678"));
        assert_eq!(normalize_wallet_phone("+20 10-1234-5678").as_deref(), Some("01012345678"));
        assert_eq!(normalize_wallet_phone("00201012345678").as_deref(), Some("01012345678"));
        assert_eq!(normalize_wallet_phone("0101234567"), None);
        assert_eq!(normalize_wallet_phone("02012345678"), None);
        assert_eq!(normalize_wallet_phone("0101234567a"), None);
    }
}
