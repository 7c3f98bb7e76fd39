use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::language::Language;

/// Bookable session packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Single,
    Pack5,
    Pack10,
    Pack20,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Single,
        SessionType::Pack5,
        SessionType::Pack10,
        SessionType::Pack20,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SessionType::Single => "single",
            SessionType::Pack5 => "pack5",
            SessionType::Pack10 => "pack10",
            SessionType::Pack20 => "pack20",
        }
    }

    /// Package price in whole Egyptian pounds.
    pub fn price_egp(&self) -> u32 {
        match self {
            SessionType::Single => 350,
            SessionType::Pack5 => 1500,
            SessionType::Pack10 => 2800,
            SessionType::Pack20 => 5200,
        }
    }

    pub fn session_count(&self) -> u32 {
        match self {
            SessionType::Single => 1,
            SessionType::Pack5 => 8,
            SessionType::Pack10 => 10,
            SessionType::Pack20 => 20,
        }
    }

    /// Rounded per-session price, for the pricing table.
    pub fn price_per_session(&self) -> u32 {
        let count = self.session_count();
        (self.price_egp() + count / 2) / count
    }

    pub fn name(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (SessionType::Single, Language::En) => "Single Session",
            (SessionType::Single, Language::Ar) => "جلسة واحدة",
            (SessionType::Pack5, Language::En) => "8 Sessions Pack",
            (SessionType::Pack5, Language::Ar) => "باقة 8 جلسات",
            (SessionType::Pack10, Language::En) => "10 Sessions Pack",
            (SessionType::Pack10, Language::Ar) => "باقة 10 جلسات",
            (SessionType::Pack20, Language::En) => "VIP Monthly",
            (SessionType::Pack20, Language::Ar) => "VIP شهري",
        }
    }

    /// Name sent to the gateway as the order item.
    pub fn order_item_name(&self) -> &'static str {
        self.name(Language::En)
    }
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionType::ALL
            .into_iter()
            .find(|t| t.code() == s.trim())
            .ok_or_else(|| format!("unknown session package '{s}'"))
    }
}
