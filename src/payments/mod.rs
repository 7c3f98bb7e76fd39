//! Payment initiation against the Paymob gateway.
//!
//! A payment attempt is a fixed sequence of gateway calls
//! (auth token -> order -> payment key, then `pay` for wallets). Each call
//! either yields the input for the next one or stops the attempt with a
//! [`PaymentError`] tagged with the step that failed.

pub mod billing;
pub mod paymob;
pub mod types;

use std::fmt;
use std::str::FromStr;

pub use billing::{egp_to_cents, normalize_wallet_phone, split_full_name};
pub use paymob::PaymobClient;
pub use types::{BillingData, CustomerDetails, OrderItem, WalletCharge};

/// How the visitor chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Wallet => "wallet",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "card" => Ok(PaymentMethod::Card),
            // "vodafone" is the name the booking page historically posted
            "wallet" | "vodafone" => Ok(PaymentMethod::Wallet),
            other => Err(format!("unknown payment method '{other}'")),
        }
    }
}

/// The gateway call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStep {
    Auth,
    Order,
    PaymentKey,
    WalletPay,
}

impl fmt::Display for PaymentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentStep::Auth => "authentication",
            PaymentStep::Order => "order creation",
            PaymentStep::PaymentKey => "payment key",
            PaymentStep::WalletPay => "wallet payment",
        };
        f.write_str(name)
    }
}

/// Why a single gateway call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    /// The gateway answered with a non-2xx status.
    Status(u16),
    /// The request never completed (connect error, timeout, ...).
    Transport(String),
    /// 2xx answer whose body lacked the expected fields.
    Decode(String),
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepFailure::Status(code) => write!(f, "gateway returned HTTP {code}"),
            StepFailure::Transport(e) => write!(f, "request failed: {e}"),
            StepFailure::Decode(e) => write!(f, "unexpected response: {e}"),
        }
    }
}

#[derive(Debug)]
pub enum PaymentError {
    Auth(StepFailure),
    Order(StepFailure),
    Key(StepFailure),
    WalletPay(StepFailure),
    /// Client construction or redirect URL building failed.
    Setup(String),
}

impl StepFailure {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StepFailure::Status(_) => "status",
            StepFailure::Transport(_) => "transport",
            StepFailure::Decode(_) => "decode",
        }
    }
}

impl PaymentError {
    /// The step that failed, or `None` for setup problems.
    pub fn step(&self) -> Option<PaymentStep> {
        match self {
            PaymentError::Auth(_) => Some(PaymentStep::Auth),
            PaymentError::Order(_) => Some(PaymentStep::Order),
            PaymentError::Key(_) => Some(PaymentStep::PaymentKey),
            PaymentError::WalletPay(_) => Some(PaymentStep::WalletPay),
            PaymentError::Setup(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            PaymentError::Auth(f)
            | PaymentError::Order(f)
            | PaymentError::Key(f)
            | PaymentError::WalletPay(f) => Some(f),
            PaymentError::Setup(_) => None,
        }
    }
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentError::Auth(e) => write!(f, "Failed to authenticate with Paymob: {e}"),
            PaymentError::Order(e) => write!(f, "Failed to create order: {e}"),
            PaymentError::Key(e) => write!(f, "Failed to get payment key: {e}"),
            PaymentError::WalletPay(e) => write!(f, "Failed to initiate wallet payment: {e}"),
            PaymentError::Setup(e) => write!(f, "Payment setup error: {e}"),
        }
    }
}

impl std::error::Error for PaymentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_parses_known_values() {
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("wallet".parse::<PaymentMethod>(), Ok(PaymentMethod::Wallet));
        assert_eq!("vodafone".parse::<PaymentMethod>(), Ok(PaymentMethod::Wallet));
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn error_reports_failed_step() {
        let err = PaymentError::WalletPay(StepFailure::Status(502));
        assert_eq!(err.step(), Some(PaymentStep::WalletPay));
        assert_eq!(err.failure(), Some(&StepFailure::Status(502)));
        assert_eq!(err.failure().map(StepFailure::kind), Some("status"));
        assert!(err.to_string().contains("HTTP 502"));

        let err = PaymentError::Setup("bad url".to_string());
        assert_eq!(err.step(), None);
    }
}
