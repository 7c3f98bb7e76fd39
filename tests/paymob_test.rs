//! Paymob client tests against an in-process gateway.
//!
//! Covers the three-step handshake for card and wallet payments:
//! - auth token -> order -> payment key request chaining
//! - amounts sent in piasters, billing data derived from the customer
//! - each failing step surfacing as its own error variant

mod common;

use std::time::Duration;

use zeeprivate::config::PaymobSettings;
use zeeprivate::payments::{CustomerDetails, PaymentError, PaymobClient, StepFailure};
use common::*;

fn customer() -> CustomerDetails {
    CustomerDetails {
        full_name: "Mona Adel Hassan".to_string(),
        email: "mona@example.com".to_string(),
        phone: "01001234567".to_string(),
        address: "12 Nile St".to_string(),
        city: "Giza".to_string(),
    }
}

#[actix_rt::test]
async fn test_card_payment_returns_iframe_url_with_payment_key() {
    let gw = MockGateway::start(GatewayBehaviour::default());
    let client = gw.client();

    let url = client
        .initiate_card_payment(1500.0, &customer(), "5 Sessions Package")
        .await
        .expect("card payment");

    assert_eq!(
        url,
        format!(
            "{}/acceptance/iframes/{IFRAME_ID}?payment_token={PAYMENT_KEY}",
            gw.base
        )
    );
    assert_eq!(gw.paths(), vec![AUTH_PATH, ORDER_PATH, KEY_PATH]);
}

#[actix_rt::test]
async fn test_card_payment_chains_tokens_and_amounts() {
    let gw = MockGateway::start(GatewayBehaviour::default());
    gw.client()
        .initiate_card_payment(350.0, &customer(), "Single Session")
        .await
        .expect("card payment");

    let auth = gw.body_of(AUTH_PATH);
    assert_eq!(auth["api_key"], "test-api-key");

    let order = gw.body_of(ORDER_PATH);
    assert_eq!(order["auth_token"], AUTH_TOKEN);
    assert_eq!(order["amount_cents"], 35000);
    assert_eq!(order["currency"], "EGP");
    assert_eq!(order["delivery_needed"], false);
    assert_eq!(order["items"][0]["name"], "Single Session");
    assert_eq!(order["items"][0]["quantity"], 1);

    let key = gw.body_of(KEY_PATH);
    assert_eq!(key["auth_token"], AUTH_TOKEN);
    assert_eq!(key["order_id"], ORDER_ID);
    assert_eq!(key["amount_cents"], 35000);
    assert_eq!(key["expiration"], 3600);
    assert_eq!(key["integration_id"], "111");
    assert_eq!(key["billing_data"]["first_name"], "Mona");
    assert_eq!(key["billing_data"]["last_name"], "Adel Hassan");
    assert_eq!(key["billing_data"]["city"], "Giza");
    assert_eq!(key["billing_data"]["country"], "EG");
    assert_eq!(key["billing_data"]["floor"], "N/A");
}

#[actix_rt::test]
async fn test_wallet_payment_uses_wallet_integration_and_phone() {
    let gw = MockGateway::start(GatewayBehaviour::default());

    let charge = gw
        .client()
        .initiate_wallet_payment(2800.0, &customer(), "10 Sessions Package", "01012345678")
        .await
        .expect("wallet payment");

    assert_eq!(charge.redirect_target(), Some(WALLET_REDIRECT));
    assert_eq!(charge.pending, Some(true));
    assert_eq!(gw.paths(), vec![AUTH_PATH, ORDER_PATH, KEY_PATH, WALLET_PATH]);

    assert_eq!(gw.body_of(KEY_PATH)["integration_id"], "222");
    let pay = gw.body_of(WALLET_PATH);
    assert_eq!(pay["source"]["identifier"], "01012345678");
    assert_eq!(pay["source"]["subtype"], "WALLET");
    assert_eq!(pay["payment_token"], PAYMENT_KEY);
}

#[actix_rt::test]
async fn test_wallet_rejection_is_reported_as_wallet_step() {
    let gw = MockGateway::start(GatewayBehaviour {
        fail_path: Some(WALLET_PATH),
        fail_status: 400,
        ..GatewayBehaviour::default()
    });

    let err = gw
        .client()
        .initiate_wallet_payment(350.0, &customer(), "Single Session", "01012345678")
        .await
        .expect_err("wallet pay should fail");

    assert!(matches!(err, PaymentError::WalletPay(StepFailure::Status(400))));
}

#[actix_rt::test]
async fn test_auth_failure_stops_before_order() {
    let gw = MockGateway::start(GatewayBehaviour {
        fail_path: Some(AUTH_PATH),
        fail_status: 401,
        ..GatewayBehaviour::default()
    });

    let err = gw
        .client()
        .initiate_card_payment(350.0, &customer(), "Single Session")
        .await
        .expect_err("auth should fail");

    assert!(matches!(err, PaymentError::Auth(StepFailure::Status(401))));
    assert_eq!(gw.paths(), vec![AUTH_PATH]);
}

#[actix_rt::test]
async fn test_order_failure_is_reported_as_order_step() {
    let gw = MockGateway::start(GatewayBehaviour {
        fail_path: Some(ORDER_PATH),
        ..GatewayBehaviour::default()
    });

    let err = gw
        .client()
        .initiate_card_payment(350.0, &customer(), "Single Session")
        .await
        .expect_err("order should fail");

    assert!(matches!(err, PaymentError::Order(StepFailure::Status(500))));
    assert_eq!(gw.paths(), vec![AUTH_PATH, ORDER_PATH]);
}

#[actix_rt::test]
async fn test_payment_key_failure_is_reported_as_key_step() {
    let gw = MockGateway::start(GatewayBehaviour {
        fail_path: Some(KEY_PATH),
        fail_status: 422,
        ..GatewayBehaviour::default()
    });

    let err = gw
        .client()
        .initiate_card_payment(350.0, &customer(), "Single Session")
        .await
        .expect_err("payment key should fail");

    assert!(matches!(err, PaymentError::Key(StepFailure::Status(422))));
}

#[actix_rt::test]
async fn test_unreachable_gateway_is_a_transport_failure() {
    // Nothing listens on the discard port in the test environment.
    let settings = PaymobSettings {
        api_base: "http://127.0.0.1:9/api".to_string(),
        api_key: "test-api-key".to_string(),
        timeout: Duration::from_secs(2),
        ..PaymobSettings::default()
    };
    let client = PaymobClient::new(settings).expect("client");

    let err = client.get_auth_token().await.expect_err("no gateway");
    assert!(matches!(err, PaymentError::Auth(StepFailure::Transport(_))));
}
