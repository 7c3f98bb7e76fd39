use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::pricing::SessionType;
use crate::payments::CustomerDetails;
use crate::validate::{self, FieldError};

/// Everything the visitor has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub session_type: SessionType,
    pub special_requests: String,
}

/// A single editable field of [`BookingForm`], named as in the HTML form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    FullName,
    Email,
    Phone,
    Address,
    City,
    PreferredDate,
    PreferredTime,
    SessionType,
    SpecialRequests,
}

impl BookingField {
    pub const ALL: [BookingField; 9] = [
        BookingField::FullName,
        BookingField::Email,
        BookingField::Phone,
        BookingField::Address,
        BookingField::City,
        BookingField::PreferredDate,
        BookingField::PreferredTime,
        BookingField::SessionType,
        BookingField::SpecialRequests,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BookingField::FullName => "full_name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::Address => "address",
            BookingField::City => "city",
            BookingField::PreferredDate => "preferred_date",
            BookingField::PreferredTime => "preferred_time",
            BookingField::SessionType => "session_type",
            BookingField::SpecialRequests => "special_requests",
        }
    }
}

impl FromStr for BookingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("unknown booking field '{s}'"))
    }
}

impl BookingForm {
    /// Mutable access to a free-text field; `None` for `session_type`.
    pub(crate) fn text_field_mut(&mut self, field: BookingField) -> Option<&mut String> {
        match field {
            BookingField::FullName => Some(&mut self.full_name),
            BookingField::Email => Some(&mut self.email),
            BookingField::Phone => Some(&mut self.phone),
            BookingField::Address => Some(&mut self.address),
            BookingField::City => Some(&mut self.city),
            BookingField::PreferredDate => Some(&mut self.preferred_date),
            BookingField::PreferredTime => Some(&mut self.preferred_time),
            BookingField::SpecialRequests => Some(&mut self.special_requests),
            BookingField::SessionType => None,
        }
    }

    /// Problems with the personal-information step.
    pub fn personal_info_errors(&self) -> Vec<FieldError> {
        validate::collect([
            (BookingField::FullName.key(), validate::validate_required(&self.full_name, 100)),
            (BookingField::Email.key(), validate::validate_email(&self.email)),
            (BookingField::Phone.key(), validate::validate_phone(&self.phone)),
            (BookingField::City.key(), validate::validate_required(&self.city, 100)),
            (BookingField::Address.key(), validate::validate_required(&self.address, 200)),
        ])
    }

    /// Problems with the session-details step.
    pub fn session_details_errors(&self, today: NaiveDate) -> Vec<FieldError> {
        validate::collect([
            (
                BookingField::PreferredDate.key(),
                validate::validate_date(&self.preferred_date, today),
            ),
            (
                BookingField::PreferredTime.key(),
                validate::validate_time_slot(&self.preferred_time),
            ),
            (
                BookingField::SpecialRequests.key(),
                validate::validate_optional(&self.special_requests, 500),
            ),
        ])
    }

    /// Problems anywhere in the form; empty when it is ready for payment.
    pub fn payment_errors(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = self.personal_info_errors();
        errors.extend(self.session_details_errors(today));
        errors
    }

    pub fn customer_details(&self) -> CustomerDetails {
        CustomerDetails {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
        }
    }
}
