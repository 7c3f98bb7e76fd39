pub mod booking;
pub mod language;
pub mod notify;
pub mod pricing;
