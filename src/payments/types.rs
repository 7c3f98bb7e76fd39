use serde::{Deserialize, Serialize};

pub const CURRENCY: &str = "EGP";
/// Lifetime of a payment key, in seconds.
pub const PAYMENT_KEY_EXPIRATION: u32 = 3600;
pub const WALLET_SUBTYPE: &str = "WALLET";

/// Placeholder the gateway accepts for billing fields we do not collect.
pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_FIRST_NAME: &str = "Customer";
pub const DEFAULT_CITY: &str = "Cairo";
pub const DEFAULT_COUNTRY: &str = "EG";

/// Customer fields taken from the booking form.
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub state: String,
    pub postal_code: String,
    pub building: String,
    pub floor: String,
    pub apartment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub name: String,
    pub amount_cents: i64,
    pub quantity: u32,
}

/// Gateway answer to a wallet `pay` call.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WalletCharge {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub pending: Option<bool>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub iframe_redirection_url: Option<String>,
}

impl WalletCharge {
    /// Where the visitor should be sent to approve the charge, if anywhere.
    pub fn redirect_target(&self) -> Option<&str> {
        [&self.redirect_url, &self.iframe_redirection_url]
            .into_iter()
            .filter_map(|u| u.as_deref())
            .map(str::trim)
            .find(|u| !u.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Wire bodies
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub api_key: &'a str,
}

#[derive(Serialize)]
pub(crate) struct OrderRequest<'a> {
    pub auth_token: &'a str,
    pub delivery_needed: bool,
    pub amount_cents: i64,
    pub currency: &'static str,
    pub items: &'a [OrderItem],
}

#[derive(Serialize)]
pub(crate) struct PaymentKeyRequest<'a> {
    pub auth_token: &'a str,
    pub amount_cents: i64,
    pub expiration: u32,
    pub order_id: i64,
    pub billing_data: &'a BillingData,
    pub currency: &'static str,
    pub integration_id: &'a str,
}

#[derive(Serialize)]
pub(crate) struct WalletSource<'a> {
    pub identifier: &'a str,
    pub subtype: &'static str,
}

#[derive(Serialize)]
pub(crate) struct WalletPayRequest<'a> {
    pub source: WalletSource<'a>,
    pub payment_token: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

#[derive(Deserialize)]
pub(crate) struct OrderResponse {
    pub id: i64,
}
