pub mod types;
pub mod wizard;

use actix_session::Session;

pub use types::{BookingField, BookingForm};
pub use wizard::{BookingWizard, WizardError, WizardStep};

const SESSION_KEY: &str = "booking_wizard";

/// Load the visitor's wizard, starting a fresh one if none is stored
/// or the stored state no longer decodes.
pub fn load(session: &Session) -> BookingWizard {
    match session.get::<BookingWizard>(SESSION_KEY) {
        Ok(Some(wizard)) => wizard,
        Ok(None) => BookingWizard::new(),
        Err(e) => {
            log::warn!("Discarding unreadable booking state: {e}");
            session.remove(SESSION_KEY);
            BookingWizard::new()
        }
    }
}

pub fn save(session: &Session, wizard: &BookingWizard) -> Result<(), String> {
    session
        .insert(SESSION_KEY, wizard)
        .map_err(|e| format!("Failed to store booking state: {e}"))
}

pub fn clear(session: &Session) {
    session.remove(SESSION_KEY);
}
