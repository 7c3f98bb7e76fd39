use actix_session::Session;
use serde::Deserialize;

use crate::validate::{self, FieldError};

const SUBMITTED_KEY: &str = "notify_submitted";

/// App-launch signup. Logged and acknowledged, never stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifySubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl NotifySubmission {
    pub fn errors(&self) -> Vec<FieldError> {
        validate::collect([
            ("name", validate::validate_required(&self.name, 100)),
            ("email", validate::validate_email(&self.email)),
            ("phone", validate::validate_phone(&self.phone)),
        ])
    }
}

pub fn mark_submitted(session: &Session) -> Result<(), String> {
    session
        .insert(SUBMITTED_KEY, true)
        .map_err(|e| format!("Failed to store signup flag: {e}"))
}

/// True once after a successful signup.
pub fn take_submitted(session: &Session) -> bool {
    let submitted = session.get::<bool>(SUBMITTED_KEY).unwrap_or(None).unwrap_or(false);
    if submitted {
        session.remove(SUBMITTED_KEY);
    }
    submitted
}
