use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render, see_other};
use crate::models::booking::{self, BookingField, BookingWizard, WizardStep};
use crate::models::pricing::SessionType;
use crate::payments::{PaymentError, PaymentMethod, PaymobClient, normalize_wallet_phone};
use crate::security::{RateLimiter, csrf};
use crate::templates_structs::{
    BookingSummary, BookingTemplate, CardPaymentTemplate, PageContext, WalletPendingTemplate,
};
use crate::validate::{self, FieldError, Problem};

const PATH: &str = "/booking";

#[derive(Deserialize)]
pub struct PackageQuery {
    pub package: Option<String>,
}

#[derive(Deserialize)]
pub struct PayForm {
    pub csrf_token: String,
    pub method: String,
    #[serde(default)]
    pub wallet_phone: String,
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn booking_page(ctx: PageContext, wizard: &BookingWizard) -> BookingTemplate {
    BookingTemplate::new(ctx, wizard, today().format("%Y-%m-%d").to_string())
}

fn save(session: &Session, wizard: &BookingWizard) -> Result<(), AppError> {
    booking::save(session, wizard).map_err(AppError::Session)
}

pub async fn show(
    session: Session,
    query: web::Query<PackageQuery>,
    client: web::Data<PaymobClient>,
) -> Result<HttpResponse, AppError> {
    let mut wizard = booking::load(&session);

    // Links from the pricing table preselect a package.
    if let Some(package) = query.package.as_deref() {
        match package.parse::<SessionType>() {
            Ok(p) if wizard.step() != WizardStep::Payment => {
                wizard.select_package(p);
                save(&session, &wizard)?;
            }
            Ok(_) => {}
            Err(e) => log::debug!("Ignoring package preselection: {e}"),
        }
    }

    let ctx = PageContext::build(&session, PATH);
    let tmpl = booking_page(ctx, &wizard)
        .with_availability(client.is_configured(), client.wallet_enabled());
    render(tmpl)
}

/// Merge the posted fields of the current step, then move as requested.
pub async fn submit_step(
    session: Session,
    form: web::Form<HashMap<String, String>>,
    client: web::Data<PaymobClient>,
) -> Result<HttpResponse, AppError> {
    let posted = form.into_inner();
    let token = posted.get("csrf_token").map(String::as_str).unwrap_or("");
    csrf::validate_csrf(&session, token)?;

    let mut wizard = booking::load(&session);
    let mut errors: Vec<FieldError> = vec![];
    let editable = wizard.step().fields();

    for (name, value) in &posted {
        let Ok(field) = name.parse::<BookingField>() else {
            continue;
        };
        if !editable.contains(&field) {
            log::debug!("Ignoring {name} posted outside its step");
            continue;
        }
        if let Err(e) = wizard.update_field(field, value) {
            log::debug!("Rejected booking field {name}: {e}");
            errors.push(FieldError::new(field.key(), Problem::InvalidChoice));
        }
    }

    let action = posted.get("action").map(String::as_str).unwrap_or("next");
    match action {
        "back" => {
            if let Err(e) = wizard.retreat() {
                log::debug!("Ignoring back navigation: {e}");
            }
        }
        "reset" => wizard.reset(),
        _ => {
            errors.extend(match wizard.step() {
                WizardStep::PersonalInfo => wizard.form().personal_info_errors(),
                WizardStep::SessionDetails => wizard.form().session_details_errors(today()),
                WizardStep::Payment => vec![],
            });

            if errors.is_empty() {
                if let Err(e) = wizard.advance() {
                    log::debug!("Ignoring advance: {e}");
                }
            } else {
                save(&session, &wizard)?;
                let ctx = PageContext::build(&session, PATH);
                let messages = ctx.t.describe_all(&errors);
                let tmpl = booking_page(ctx, &wizard)
                    .with_availability(client.is_configured(), client.wallet_enabled())
                    .with_errors(messages);
                return render(tmpl);
            }
        }
    }

    save(&session, &wizard)?;
    Ok(see_other(PATH))
}

fn failed_step(e: &PaymentError) -> String {
    match (e.step(), e.failure()) {
        (Some(step), Some(failure)) => format!("{step} ({})", failure.kind()),
        _ => "setup".to_string(),
    }
}

fn client_ip(req: &HttpRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Start a payment for the wizard's package and show the visitor its outcome.
pub async fn pay(
    req: HttpRequest,
    session: Session,
    form: web::Form<PayForm>,
    client: web::Data<PaymobClient>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let wizard = booking::load(&session);
    if wizard.step() != WizardStep::Payment {
        return Ok(see_other(PATH));
    }

    let Ok(method) = form.method.parse::<PaymentMethod>() else {
        return Ok(HttpResponse::BadRequest().body("Unknown payment method"));
    };

    let ctx = PageContext::build(&session, PATH);
    let t = ctx.t;
    let page = |ctx: PageContext| {
        booking_page(ctx, &wizard)
            .with_availability(client.is_configured(), client.wallet_enabled())
            .with_wallet_phone(&form.wallet_phone)
    };

    // The stored booking is checked again: a saved date may have gone stale.
    let problems = wizard.form().payment_errors(today());
    if !problems.is_empty() {
        let messages = t.describe_all(&problems);
        return render(page(ctx).with_errors(messages));
    }

    if !client.is_configured() {
        log::warn!("Payment requested but Paymob is not configured");
        return render(page(ctx).with_notice(t.payment_unavailable));
    }
    if method == PaymentMethod::Wallet && !client.wallet_enabled() {
        return render(page(ctx).with_notice(t.wallet_unavailable));
    }

    let wallet_phone = match method {
        PaymentMethod::Wallet => {
            let errors = validate::collect([(
                "wallet_phone",
                validate::validate_wallet_phone(&form.wallet_phone),
            )]);
            match normalize_wallet_phone(&form.wallet_phone) {
                Some(phone) if errors.is_empty() => Some(phone),
                _ => {
                    let messages = t.describe_all(&errors);
                    return render(page(ctx).with_errors(messages));
                }
            }
        }
        PaymentMethod::Card => None,
    };

    let ip = client_ip(&req);
    if !limiter.try_acquire(ip) {
        log::warn!("Payment attempt from {ip} refused by rate limit");
        return render(page(ctx).with_notice(t.too_many_attempts));
    }

    let summary = BookingSummary::from_wizard(&ctx, &wizard);
    let amount = f64::from(wizard.price_egp());
    let customer = wizard.form().customer_details();
    let package_name = wizard.selected_package().order_item_name();
    log::info!(
        "Starting {} payment for {} ({} EGP)",
        method.as_str(),
        wizard.selected_package().code(),
        wizard.price_egp()
    );

    match wallet_phone {
        None => match client.initiate_card_payment(amount, &customer, package_name).await {
            Ok(iframe_url) => {
                booking::clear(&session);
                render(CardPaymentTemplate { ctx, iframe_url, summary })
            }
            Err(e) => {
                log::warn!("Card payment failed at {}: {e}", failed_step(&e));
                render(page(ctx).with_notice(t.payment_failed))
            }
        },
        Some(phone) => match client
            .initiate_wallet_payment(amount, &customer, package_name, &phone)
            .await
        {
            Ok(charge) => {
                booking::clear(&session);
                match charge.redirect_target() {
                    Some(target) => Ok(see_other(target)),
                    None => render(WalletPendingTemplate { ctx, summary }),
                }
            }
            Err(e) => {
                log::warn!("Wallet payment failed at {}: {e}", failed_step(&e));
                render(page(ctx).with_notice(t.payment_failed))
            }
        },
    }
}
