//! Billing form validation.
//!
//! A pure function from form values to per-field error messages. Submission
//! only proceeds when the result is empty.

use std::collections::BTreeMap;

use bazaar_core::Email;

use super::form::{BillingField, BillingForm};

/// Message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

/// Validation errors keyed by field, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<BillingField, &'static str>);

impl FieldErrors {
    /// The error for a field, if any.
    #[must_use]
    pub fn get(&self, field: BillingField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with errors, in display order.
    pub fn fields(&self) -> impl Iterator<Item = BillingField> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: BillingField, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// Message shown when a required field is empty.
#[must_use]
pub const fn required_message(field: BillingField) -> Option<&'static str> {
    match field {
        BillingField::FirstName => Some("First Name is required"),
        BillingField::LastName => Some("Last Name is required"),
        BillingField::StreetAddress => Some("Street Address is required"),
        BillingField::City => Some("City is required"),
        BillingField::ZipCode => Some("Zip Code is required"),
        BillingField::Phone => Some("Phone number is required"),
        BillingField::Email => Some("Email address is required"),
        BillingField::CompanyName | BillingField::AdditionalInfo => None,
    }
}

/// Validate billing details.
///
/// Required fields must be non-empty (whitespace counts as a value). The email
/// must additionally be a well-formed address; a malformed one gets
/// [`INVALID_EMAIL_MESSAGE`] rather than the "required" message.
#[must_use]
pub fn validate(form: &BillingForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let required = BillingField::ALL
        .into_iter()
        .filter_map(|field| required_message(field).map(|message| (field, message)));
    for (field, message) in required {
        if form.value(field).is_empty() {
            errors.insert(field, message);
        }
    }

    if !form.email.is_empty() && Email::parse(&form.email).is_err() {
        errors.insert(BillingField::Email, INVALID_EMAIL_MESSAGE);
    }

    errors
}
