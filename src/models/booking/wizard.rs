use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{BookingField, BookingForm};
use crate::models::pricing::SessionType;

const PERSONAL_INFO_FIELDS: [BookingField; 5] = [
    BookingField::FullName,
    BookingField::Email,
    BookingField::Phone,
    BookingField::Address,
    BookingField::City,
];

const SESSION_DETAILS_FIELDS: [BookingField; 4] = [
    BookingField::PreferredDate,
    BookingField::PreferredTime,
    BookingField::SessionType,
    BookingField::SpecialRequests,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    #[default]
    PersonalInfo = 1,
    SessionDetails = 2,
    Payment = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::PersonalInfo,
        WizardStep::SessionDetails,
        WizardStep::Payment,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Form fields a post from this step may change.
    pub fn fields(&self) -> &'static [BookingField] {
        match self {
            WizardStep::PersonalInfo => &PERSONAL_INFO_FIELDS,
            WizardStep::SessionDetails => &SESSION_DETAILS_FIELDS,
            WizardStep::Payment => &[],
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            WizardStep::PersonalInfo => Some(WizardStep::SessionDetails),
            WizardStep::SessionDetails => Some(WizardStep::Payment),
            WizardStep::Payment => None,
        }
    }

    fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::PersonalInfo => None,
            WizardStep::SessionDetails => Some(WizardStep::PersonalInfo),
            WizardStep::Payment => Some(WizardStep::SessionDetails),
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(WizardStep::PersonalInfo),
            2 => Ok(WizardStep::SessionDetails),
            3 => Ok(WizardStep::Payment),
            other => Err(format!("invalid wizard step {other}")),
        }
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    AtLastStep,
    AtFirstStep,
    UnknownPackage(String),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::AtLastStep => write!(f, "Already at the last step"),
            WizardError::AtFirstStep => write!(f, "Already at the first step"),
            WizardError::UnknownPackage(p) => write!(f, "Unknown session package '{p}'"),
        }
    }
}

impl std::error::Error for WizardError {}

/// Three-step booking flow: personal info -> session details -> payment.
///
/// Moves one step at a time. Going back never discards entered values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWizard {
    step: WizardStep,
    form: BookingForm,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        self.step = next;
        Ok(next)
    }

    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::AtFirstStep)?;
        self.step = previous;
        Ok(previous)
    }

    /// Merge one field; no cross-field checks happen here.
    pub fn update_field(&mut self, field: BookingField, value: &str) -> Result<(), WizardError> {
        match self.form.text_field_mut(field) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => {
                let package = value
                    .parse::<SessionType>()
                    .map_err(|_| WizardError::UnknownPackage(value.to_string()))?;
                self.select_package(package);
                Ok(())
            }
        }
    }

    pub fn select_package(&mut self, package: SessionType) {
        self.form.session_type = package;
    }

    pub fn selected_package(&self) -> SessionType {
        self.form.session_type
    }

    /// Price of the selected package in whole pounds.
    pub fn price_egp(&self) -> u32 {
        self.form.session_type.price_egp()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
