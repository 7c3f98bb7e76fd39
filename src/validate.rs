//! Server-side form validation.
//!
//! Validators return `None` when the value is acceptable and the problem
//! otherwise; callers pair the problem with the field it belongs to.

use chrono::NaiveDate;

use crate::payments::normalize_wallet_phone;

/// Offered session start times: (form value, 12-hour display).
pub const TIME_SLOTS: [(&str, &str); 7] = [
    ("08:00", "08:00 AM"),
    ("10:00", "10:00 AM"),
    ("12:00", "12:00 PM"),
    ("14:00", "02:00 PM"),
    ("16:00", "04:00 PM"),
    ("18:00", "06:00 PM"),
    ("20:00", "08:00 PM"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Required,
    TooLong(usize),
    InvalidEmail,
    InvalidPhone,
    InvalidDate,
    DateInPast,
    InvalidTime,
    InvalidWalletPhone,
    InvalidChoice,
}

/// A problem attached to a form field, keyed by the field's form name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: Problem,
}

impl FieldError {
    pub fn new(field: &'static str, problem: Problem) -> Self {
        Self { field, problem }
    }
}

/// Collect the problems of several (field, check) pairs.
pub fn collect(checks: impl IntoIterator<Item = (&'static str, Option<Problem>)>) -> Vec<FieldError> {
    checks
        .into_iter()
        .filter_map(|(field, problem)| problem.map(|p| FieldError::new(field, p)))
        .collect()
}

pub fn validate_required(value: &str, max_len: usize) -> Option<Problem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(Problem::Required);
    }
    if trimmed.chars().count() > max_len {
        return Some(Problem::TooLong(max_len));
    }
    None
}

/// Empty is OK.
pub fn validate_optional(value: &str, max_len: usize) -> Option<Problem> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(Problem::TooLong(max_len));
    }
    None
}

/// Must contain a non-empty local part, '@' and a dotted domain; max 254 chars.
pub fn validate_email(email: &str) -> Option<Problem> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some(Problem::Required);
    }
    if trimmed.len() > 254 {
        return Some(Problem::TooLong(254));
    }
    let well_formed = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !well_formed {
        return Some(Problem::InvalidEmail);
    }
    None
}

/// 7-15 digits, optionally with a leading '+', spaces and dashes.
pub fn validate_phone(phone: &str) -> Option<Problem> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Some(Problem::Required);
    }
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return Some(Problem::InvalidPhone);
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Some(Problem::InvalidPhone);
    }
    None
}

/// ISO `YYYY-MM-DD`, not before `today`.
pub fn validate_date(value: &str, today: NaiveDate) -> Option<Problem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(Problem::Required);
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) if date < today => Some(Problem::DateInPast),
        Ok(_) => None,
        Err(_) => Some(Problem::InvalidDate),
    }
}

pub fn validate_time_slot(value: &str) -> Option<Problem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(Problem::Required);
    }
    if !TIME_SLOTS.iter().any(|(slot, _)| *slot == trimmed) {
        return Some(Problem::InvalidTime);
    }
    None
}

pub fn validate_wallet_phone(value: &str) -> Option<Problem> {
    if value.trim().is_empty() {
        return Some(Problem::Required);
    }
    match normalize_wallet_phone(value) {
        Some(_) => None,
        None => Some(Problem::InvalidWalletPhone),
    }
}
