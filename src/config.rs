use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PAYMOB_API_BASE: &str = "https://accept.paymob.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_SESSION_KEY_LEN: usize = 64;

/// Gateway credentials and endpoint. Empty strings mean "not configured".
#[derive(Debug, Clone)]
pub struct PaymobSettings {
    pub api_base: String,
    pub api_key: String,
    pub integration_id_card: String,
    pub integration_id_wallet: String,
    pub iframe_id: String,
    pub timeout: Duration,
}

impl Default for PaymobSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_PAYMOB_API_BASE.to_string(),
            api_key: String::new(),
            integration_id_card: String::new(),
            integration_id_wallet: String::new(),
            iframe_id: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Raw session key material; `None` when missing or too short.
    pub session_key: Option<Vec<u8>>,
    pub cookie_secure: bool,
    pub paymob: PaymobSettings,
}

impl AppConfig {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => Some(val.into_bytes()),
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {}+), ignoring it",
                    val.len(),
                    MIN_SESSION_KEY_LEN
                );
                None
            }
            None => None,
        };

        let api_base = match get("PAYMOB_API_BASE") {
            base if base.is_empty() => DEFAULT_PAYMOB_API_BASE.to_string(),
            base => base.trim_end_matches('/').to_string(),
        };

        let timeout_secs = match get("PAYMOB_TIMEOUT_SECS") {
            raw if raw.is_empty() => DEFAULT_TIMEOUT_SECS,
            raw => raw.parse::<u64>().unwrap_or_else(|_| {
                log::warn!("Invalid PAYMOB_TIMEOUT_SECS '{raw}', using {DEFAULT_TIMEOUT_SECS}");
                DEFAULT_TIMEOUT_SECS
            }),
        };

        let bind_addr = match get("BIND_ADDR") {
            addr if addr.is_empty() => DEFAULT_BIND_ADDR.to_string(),
            addr => addr,
        };

        Self {
            bind_addr,
            session_key,
            cookie_secure: get("COOKIE_SECURE").eq_ignore_ascii_case("true"),
            paymob: PaymobSettings {
                api_base,
                api_key: get("PAYMOB_API_KEY"),
                integration_id_card: get("PAYMOB_INTEGRATION_ID_CARD"),
                integration_id_wallet: get("PAYMOB_INTEGRATION_ID_WALLET"),
                iframe_id: get("PAYMOB_IFRAME_ID"),
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }
}
