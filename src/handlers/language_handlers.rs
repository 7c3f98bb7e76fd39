use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, see_other};
use crate::models::language::{self, Language};
use crate::security::csrf;

#[derive(Deserialize)]
pub struct LanguageForm {
    pub csrf_token: String,
    pub code: String,
    #[serde(default)]
    pub return_to: String,
}

/// Only same-site paths; anything else goes home.
pub fn safe_return_path(raw: &str) -> &str {
    let local = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    if local { raw } else { "/" }
}

pub async fn switch(
    session: Session,
    form: web::Form<LanguageForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match Language::from_code(&form.code) {
        Some(lang) => language::store(&session, lang).map_err(AppError::Session)?,
        None => log::debug!("Ignoring unknown language code '{}'", form.code),
    }

    Ok(see_other(safe_return_path(&form.return_to)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_path_must_be_local() {
        assert_eq!(safe_return_path("/booking"), "/booking");
        assert_eq!(safe_return_path("//evil.example"), "/");
        assert_eq!(safe_return_path("https://evil.example"), "/");
        assert_eq!(safe_return_path("/\\evil.example"), "/");
        assert_eq!(safe_return_path(""), "/");
    }
}
