//! Shared test infrastructure.
//!
//! - `MockGateway` - an in-process stand-in for the Paymob Accept API
//! - `test_app!` - the full site wired against a given `PaymobClient`
//! - cookie and CSRF helpers for driving the booking wizard

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use zeeprivate::config::PaymobSettings;
use zeeprivate::payments::PaymobClient;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const AUTH_TOKEN: &str = "auth-token-1";
pub const ORDER_ID: i64 = 4242;
pub const PAYMENT_KEY: &str = "payment-key-1";
pub const IFRAME_ID: &str = "9001";
pub const WALLET_REDIRECT: &str = "https://wallet.example/confirm/77";

pub const AUTH_PATH: &str = "/api/auth/tokens";
pub const ORDER_PATH: &str = "/api/ecommerce/orders";
pub const KEY_PATH: &str = "/api/acceptance/payment_keys";
pub const WALLET_PATH: &str = "/api/acceptance/payments/pay";

// ============================================================================
// MOCK GATEWAY
// ============================================================================

/// What the mock answers; tweak before starting.
#[derive(Clone)]
pub struct GatewayBehaviour {
    /// Path that answers with `fail_status` instead of succeeding.
    pub fail_path: Option<&'static str>,
    pub fail_status: u16,
    /// Body returned by the wallet pay endpoint.
    pub wallet_response: Value,
}

impl Default for GatewayBehaviour {
    fn default() -> Self {
        Self {
            fail_path: None,
            fail_status: 500,
            wallet_response: json!({
                "id": 77,
                "pending": true,
                "success": false,
                "redirect_url": WALLET_REDIRECT,
            }),
        }
    }
}

#[derive(Clone)]
struct GatewayState {
    behaviour: GatewayBehaviour,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

pub struct MockGateway {
    pub base: String,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    handle: ServerHandle,
}

async fn gateway(
    req: HttpRequest,
    body: web::Json<Value>,
    state: web::Data<GatewayState>,
) -> HttpResponse {
    let path = req.path().to_string();
    state
        .calls
        .lock()
        .expect("calls lock")
        .push((path.clone(), body.into_inner()));

    if state.behaviour.fail_path == Some(path.as_str()) {
        let status = actix_web::http::StatusCode::from_u16(state.behaviour.fail_status)
            .expect("valid status");
        return HttpResponse::build(status).json(json!({ "detail": "rejected" }));
    }

    match path.as_str() {
        AUTH_PATH => HttpResponse::Ok().json(json!({ "token": AUTH_TOKEN, "profile": {} })),
        ORDER_PATH => HttpResponse::Created().json(json!({ "id": ORDER_ID })),
        KEY_PATH => HttpResponse::Created().json(json!({ "token": PAYMENT_KEY })),
        WALLET_PATH => HttpResponse::Ok().json(state.behaviour.wallet_response.clone()),
        _ => HttpResponse::NotFound().finish(),
    }
}

impl MockGateway {
    /// Bind an ephemeral port and serve until dropped.
    /// Must be called inside an actix system (`#[actix_rt::test]`).
    pub fn start(behaviour: GatewayBehaviour) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(GatewayState {
            behaviour,
            calls: calls.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(gateway))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock gateway");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base: format!("http://{addr}/api"),
            calls,
            handle,
        }
    }

    /// Paths called so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Body of the first call to `path`.
    pub fn body_of(&self, path: &str) -> Value {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, b)| b.clone())
            .unwrap_or_else(|| panic!("no call to {path}"))
    }

    /// Settings pointing at this mock with every integration configured.
    pub fn settings(&self) -> PaymobSettings {
        PaymobSettings {
            api_base: self.base.clone(),
            api_key: "test-api-key".to_string(),
            integration_id_card: "111".to_string(),
            integration_id_wallet: "222".to_string(),
            iframe_id: IFRAME_ID.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn client(&self) -> PaymobClient {
        PaymobClient::new(self.settings()).expect("client")
    }
}

impl Drop for MockGateway {
    fn drop(&mut self) {
        let handle = self.handle.clone();
        actix_rt::spawn(async move { handle.stop(false).await });
    }
}

/// A client whose gateway is unreachable and not configured.
pub fn unconfigured_client() -> PaymobClient {
    PaymobClient::new(PaymobSettings::default()).expect("client")
}

// ============================================================================
// SITE HARNESS
// ============================================================================

/// Build the full site as a test service around `$client`.
/// Needs `#[macro_use] mod common;`.
#[allow(unused_macros)]
macro_rules! test_app {
    ($client:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(zeeprivate::session_middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::new($client))
                .app_data(actix_web::web::Data::new(
                    zeeprivate::security::RateLimiter::default(),
                ))
                .configure(zeeprivate::handlers::routes)
                .default_service(actix_web::web::to(
                    zeeprivate::handlers::home_handlers::not_found,
                )),
        )
        .await
    };
}

/// Holds the session cookie between requests, like a browser would.
#[derive(Default)]
pub struct Jar(Option<actix_web::cookie::Cookie<'static>>);

impl Jar {
    pub fn attach(&self, req: actix_web::test::TestRequest) -> actix_web::test::TestRequest {
        match &self.0 {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    pub fn remember<B>(&mut self, resp: &actix_web::dev::ServiceResponse<B>) {
        for cookie in resp.response().cookies() {
            if cookie.name() == "id" {
                self.0 = Some(cookie.into_owned());
            }
        }
    }
}

/// Call `$app` with `$req` through `$jar`; yields (status, location, body).
#[allow(unused_macros)]
macro_rules! send {
    ($app:expr, $jar:expr, $req:expr) => {{
        let resp =
            actix_web::test::call_service(&$app, $jar.attach($req).to_request()).await;
        let status = resp.status();
        let location = resp
            .headers()
            .get(actix_web::http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        $jar.remember(&resp);
        let body = actix_web::test::read_body(resp).await;
        (status, location, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }};
}

/// Pull the CSRF token out of a rendered page.
pub fn csrf_from(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page carries a csrf token")
}

/// URL-encode form pairs for a POST body.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("encode form")
}

/// Form-encoded POST to `uri`.
pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> actix_web::test::TestRequest {
    actix_web::test::TestRequest::post()
        .uri(uri)
        .insert_header(actix_web::http::header::ContentType::form_url_encoded())
        .set_payload(form_body(pairs))
}

/// Personal-info fields that pass validation.
pub fn valid_personal_info() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full_name", "Mona Adel Hassan"),
        ("email", "mona@example.com"),
        ("phone", "+20 100 123 4567"),
        ("address", "12 Nile St, Zamalek"),
        ("city", "Cairo"),
    ]
}

/// A preferred date safely in the future.
pub fn future_date() -> String {
    (chrono::Local::now().date_naive() + chrono::Days::new(14))
        .format("%Y-%m-%d")
        .to_string()
}
