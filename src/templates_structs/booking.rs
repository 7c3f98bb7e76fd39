use askama::Template;

use super::{PackageView, PageContext};
use crate::models::booking::{BookingForm, BookingWizard, WizardStep};
use crate::validate::TIME_SLOTS;

pub struct StepView {
    pub number: u8,
    pub label: &'static str,
    pub done: bool,
    pub active: bool,
}

pub struct TimeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct BookingSummary {
    pub package_name: &'static str,
    pub date: String,
    pub time: String,
    pub total: u32,
}

impl BookingSummary {
    pub fn from_wizard(ctx: &PageContext, wizard: &BookingWizard) -> Self {
        let form = wizard.form();
        Self {
            package_name: form.session_type.name(ctx.lang),
            date: form.preferred_date.clone(),
            time: form.preferred_time.clone(),
            total: wizard.price_egp(),
        }
    }
}

#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub ctx: PageContext,
    pub step: u8,
    pub steps: Vec<StepView>,
    pub form: BookingForm,
    pub packages: Vec<PackageView>,
    pub time_slots: Vec<TimeOption>,
    pub summary: BookingSummary,
    pub errors: Vec<String>,
    /// Payment-step notice (failure, unavailable, throttled).
    pub notice: Option<String>,
    pub wallet_phone: String,
    pub payment_available: bool,
    pub wallet_available: bool,
    pub min_date: String,
}

impl BookingTemplate {
    pub fn new(ctx: PageContext, wizard: &BookingWizard, min_date: String) -> Self {
        let current = wizard.step();
        let form = wizard.form().clone();
        let steps = WizardStep::ALL
            .into_iter()
            .map(|s| StepView {
                number: s.number(),
                label: ctx.t.step_label(s.number()),
                done: s < current,
                active: s == current,
            })
            .collect();
        let time_slots = TIME_SLOTS
            .into_iter()
            .map(|(value, label)| TimeOption {
                value,
                label,
                selected: form.preferred_time == value,
            })
            .collect();
        let packages = PackageView::all(ctx.lang, Some(form.session_type));
        let summary = BookingSummary::from_wizard(&ctx, wizard);
        let wallet_phone = form.phone.clone();
        Self {
            ctx,
            step: current.number(),
            steps,
            form,
            packages,
            time_slots,
            summary,
            errors: vec![],
            notice: None,
            wallet_phone,
            payment_available: true,
            wallet_available: true,
            min_date,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_notice(mut self, notice: &str) -> Self {
        self.notice = Some(notice.to_string());
        self
    }

    pub fn with_availability(mut self, payment: bool, wallet: bool) -> Self {
        self.payment_available = payment;
        self.wallet_available = wallet;
        self
    }

    pub fn with_wallet_phone(mut self, phone: &str) -> Self {
        self.wallet_phone = phone.to_string();
        self
    }
}

#[derive(Template)]
#[template(path = "payment_card.html")]
pub struct CardPaymentTemplate {
    pub ctx: PageContext,
    pub iframe_url: String,
    pub summary: BookingSummary,
}

#[derive(Template)]
#[template(path = "payment_wallet.html")]
pub struct WalletPendingTemplate {
    pub ctx: PageContext,
    pub summary: BookingSummary,
}
