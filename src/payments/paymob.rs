use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::PaymobSettings;

use super::billing::{billing_data_for, egp_to_cents};
use super::types::{
    AuthRequest, CURRENCY, CustomerDetails, OrderItem, OrderRequest, OrderResponse,
    PAYMENT_KEY_EXPIRATION, PaymentKeyRequest, TokenResponse, WALLET_SUBTYPE, WalletCharge,
    WalletPayRequest, WalletSource,
};
use super::{PaymentError, StepFailure};

/// Paymob "Accept" API client.
///
/// Cheap to clone; the underlying connection pool is shared. Every payment
/// attempt obtains a fresh auth token, order and payment key. Dropping an
/// in-flight future aborts the request that is currently outstanding.
#[derive(Clone)]
pub struct PaymobClient {
    http: Client,
    settings: PaymobSettings,
}

impl PaymobClient {
    pub fn new(settings: PaymobSettings) -> Result<Self, PaymentError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| PaymentError::Setup(format!("HTTP client: {e}")))?;
        Ok(Self { http, settings })
    }

    /// True when the API key, card integration and iframe are all set.
    pub fn is_configured(&self) -> bool {
        !self.settings.api_key.is_empty()
            && !self.settings.integration_id_card.is_empty()
            && !self.settings.iframe_id.is_empty()
    }

    /// Wallet payments additionally need their own integration.
    pub fn wallet_enabled(&self) -> bool {
        self.is_configured() && !self.settings.integration_id_wallet.is_empty()
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, StepFailure>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.settings.api_base, path);
        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| StepFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StepFailure::Status(status.as_u16()));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| StepFailure::Decode(e.to_string()))
    }

    /// Step 1: exchange the API key for a short-lived auth token.
    pub async fn get_auth_token(&self) -> Result<String, PaymentError> {
        let body = AuthRequest { api_key: &self.settings.api_key };
        let resp: TokenResponse = self
            .post_json("/auth/tokens", &body)
            .await
            .map_err(PaymentError::Auth)?;
        Ok(resp.token)
    }

    /// Step 2: register an order; returns the gateway's order id.
    pub async fn create_order(
        &self,
        auth_token: &str,
        amount_cents: i64,
        items: &[OrderItem],
    ) -> Result<i64, PaymentError> {
        let body = OrderRequest {
            auth_token,
            delivery_needed: false,
            amount_cents,
            currency: CURRENCY,
            items,
        };
        let resp: OrderResponse = self
            .post_json("/ecommerce/orders", &body)
            .await
            .map_err(PaymentError::Order)?;
        Ok(resp.id)
    }

    /// Step 3: bind order, amount and billing data to one integration.
    pub async fn get_payment_key(
        &self,
        auth_token: &str,
        order_id: i64,
        amount_cents: i64,
        billing_data: &super::BillingData,
        integration_id: &str,
    ) -> Result<String, PaymentError> {
        let body = PaymentKeyRequest {
            auth_token,
            amount_cents,
            expiration: PAYMENT_KEY_EXPIRATION,
            order_id,
            billing_data,
            currency: CURRENCY,
            integration_id,
        };
        let resp: TokenResponse = self
            .post_json("/acceptance/payment_keys", &body)
            .await
            .map_err(PaymentError::Key)?;
        Ok(resp.token)
    }

    /// Wallet step: charge the given mobile wallet with a payment key.
    pub async fn pay_with_wallet(
        &self,
        payment_key: &str,
        wallet_phone: &str,
    ) -> Result<WalletCharge, PaymentError> {
        let body = WalletPayRequest {
            source: WalletSource {
                identifier: wallet_phone,
                subtype: WALLET_SUBTYPE,
            },
            payment_token: payment_key,
        };
        self.post_json("/acceptance/payments/pay", &body)
            .await
            .map_err(PaymentError::WalletPay)
    }

    /// Hosted card form for a payment key.
    pub fn iframe_url(&self, payment_key: &str) -> Result<String, PaymentError> {
        let base = format!(
            "{}/acceptance/iframes/{}",
            self.settings.api_base, self.settings.iframe_id
        );
        Url::parse_with_params(&base, &[("payment_token", payment_key)])
            .map(String::from)
            .map_err(|e| PaymentError::Setup(format!("iframe url: {e}")))
    }

    /// Runs auth -> order -> payment key for one package purchase.
    async fn prepare_payment_key(
        &self,
        amount_egp: f64,
        customer: &CustomerDetails,
        package_name: &str,
        integration_id: &str,
    ) -> Result<String, PaymentError> {
        let amount_cents = egp_to_cents(amount_egp);

        let auth_token = self.get_auth_token().await?;

        let items = [OrderItem {
            name: package_name.to_string(),
            amount_cents,
            quantity: 1,
        }];
        let order_id = self.create_order(&auth_token, amount_cents, &items).await?;
        log::info!("Paymob order {order_id} created ({amount_cents} piasters, {package_name})");

        let billing = billing_data_for(customer);
        self.get_payment_key(&auth_token, order_id, amount_cents, &billing, integration_id)
            .await
    }

    /// Card flow; returns the iframe URL the visitor should be shown.
    pub async fn initiate_card_payment(
        &self,
        amount_egp: f64,
        customer: &CustomerDetails,
        package_name: &str,
    ) -> Result<String, PaymentError> {
        let key = self
            .prepare_payment_key(
                amount_egp,
                customer,
                package_name,
                &self.settings.integration_id_card,
            )
            .await?;
        self.iframe_url(&key)
    }

    /// Wallet flow; returns the gateway's charge answer.
    pub async fn initiate_wallet_payment(
        &self,
        amount_egp: f64,
        customer: &CustomerDetails,
        package_name: &str,
        wallet_phone: &str,
    ) -> Result<WalletCharge, PaymentError> {
        let key = self
            .prepare_payment_key(
                amount_egp,
                customer,
                package_name,
                &self.settings.integration_id_wallet,
            )
            .await?;
        self.pay_with_wallet(&key, wallet_phone).await
    }
}
