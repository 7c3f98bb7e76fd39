use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render, see_other};
use crate::models::notify::{self, NotifySubmission};
use crate::security::csrf;
use crate::templates_structs::{NotifyTemplate, PageContext};

const PATH: &str = "/notify";

#[derive(Deserialize)]
pub struct NotifyForm {
    pub csrf_token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, PATH);
    let submitted = notify::take_submitted(&session);
    render(NotifyTemplate {
        ctx,
        form: NotifySubmission::default(),
        errors: vec![],
        submitted,
    })
}

pub async fn submit(
    session: Session,
    form: web::Form<NotifyForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let form = form.into_inner();
    let submission = NotifySubmission {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
    };

    let errors = submission.errors();
    if !errors.is_empty() {
        let ctx = PageContext::build(&session, PATH);
        let errors = ctx.t.describe_all(&errors);
        return render(NotifyTemplate {
            ctx,
            form: submission,
            errors,
            submitted: false,
        });
    }

    log::info!(
        "App launch signup: name={}, email={}, phone={}",
        submission.name,
        submission.email,
        submission.phone
    );
    notify::mark_submitted(&session).map_err(AppError::Session)?;
    Ok(see_other(PATH))
}
