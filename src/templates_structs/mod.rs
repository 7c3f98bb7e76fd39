// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::i18n::{self, Strings};
use crate::models::language::{self, Language};
use crate::models::pricing::SessionType;
use crate::security::csrf;

mod booking;
mod common;
mod notify;

pub use self::booking::{
    BookingSummary, BookingTemplate, CardPaymentTemplate, StepView, TimeOption,
    WalletPendingTemplate,
};
pub use self::common::{HomeTemplate, NotFoundTemplate};
pub use self::notify::NotifyTemplate;

/// Common context shared by all pages.
/// Templates access these as `ctx.t.next`, `ctx.lang.dir()`, etc.
pub struct PageContext {
    pub lang: Language,
    pub t: &'static Strings,
    pub csrf_token: String,
    /// Path the language switcher returns to.
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Self {
        let lang = language::load(session);
        Self {
            lang,
            t: i18n::strings(lang),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }

    pub fn other_lang(&self) -> Language {
        self.lang.other()
    }
}

/// One package as shown in the pricing table and the package picker.
pub struct PackageView {
    pub code: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub sessions: u32,
    pub per_session: u32,
    pub selected: bool,
}

impl PackageView {
    pub fn all(lang: Language, selected: Option<SessionType>) -> Vec<Self> {
        SessionType::ALL
            .into_iter()
            .map(|t| PackageView {
                code: t.code(),
                name: t.name(lang),
                price: t.price_egp(),
                sessions: t.session_count(),
                per_session: t.price_per_session(),
                selected: selected == Some(t),
            })
            .collect()
    }
}
