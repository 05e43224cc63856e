//! Client-side password policy.
//!
//! A password is acceptable when it is at least [`PASSWORD_MIN_LENGTH`] long
//! and contains a digit, an uppercase and a lowercase ASCII letter. Any other
//! character only counts towards the length.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::trace;

use crate::consts::{PASSWORD_MIN_LENGTH, PASSWORD_MISMATCH_MESSAGE, PASSWORD_POLICY_MESSAGE};
use crate::dom::{StrengthDisplay, ValidityField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Requirement {
    MinLength,
    Digit,
    Uppercase,
    Lowercase,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Requirement::MinLength => write!(f, "at least {} characters", PASSWORD_MIN_LENGTH),
            Requirement::Digit => f.write_str("a digit"),
            Requirement::Uppercase => f.write_str("an uppercase letter"),
            Requirement::Lowercase => f.write_str("a lowercase letter"),
        }
    }
}

impl Requirement {
    pub fn is_met_by(self, password: &str) -> bool {
        match self {
            // same unit as the browser's `value.length`
            Requirement::MinLength => password.encode_utf16().count() >= PASSWORD_MIN_LENGTH,
            Requirement::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Requirement::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid { unmet: Vec<Requirement> },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn unmet(&self) -> &[Requirement] {
        match self {
            Verdict::Valid => &[],
            Verdict::Invalid { unmet } => unmet,
        }
    }

    /// The message to hand to `setCustomValidity`.
    pub fn custom_validity(&self) -> &'static str {
        match self {
            Verdict::Valid => "",
            Verdict::Invalid { .. } => PASSWORD_POLICY_MESSAGE,
        }
    }
}

/// Returns `None` for the empty password: nothing has been typed yet, so no
/// verdict is given either way.
pub fn evaluate(password: &str) -> Option<Verdict> {
    if password.is_empty() {
        return None;
    }

    let unmet: Vec<_> = Requirement::iter()
        .filter(|r| !r.is_met_by(password))
        .collect();

    if unmet.is_empty() {
        Some(Verdict::Valid)
    } else {
        Some(Verdict::Invalid { unmet })
    }
}

pub fn custom_validity_for(password: &str) -> Option<&'static str> {
    evaluate(password).map(|v| v.custom_validity())
}

/// `None` leaves the confirmation field untouched, which only happens while
/// both fields are empty. Clearing the confirmation of a typed password is a
/// mismatch, so no stale "match" state survives.
pub fn confirmation_validity(password: &str, confirmation: &str) -> Option<&'static str> {
    if password.is_empty() && confirmation.is_empty() {
        None
    } else if password == confirmation {
        Some("")
    } else {
        Some(PASSWORD_MISMATCH_MESSAGE)
    }
}

/// zxcvbn score in `0..=4`, `None` for the empty password.
///
/// `email` is split on `@` and `.` so passwords derived from it are
/// penalized.
pub fn strength_score(password: &str, email: &str) -> Option<u8> {
    if password.is_empty() {
        return None;
    }
    let user_inputs: Vec<_> = email
        .split(|c| c == '@' || c == '.')
        .filter(|s| !s.is_empty())
        .collect();
    match zxcvbn::zxcvbn(password, &user_inputs) {
        Ok(e) => Some(e.score()),
        Err(_) => Some(0),
    }
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "very weak",
        1 => "weak",
        2 => "fair",
        3 => "strong",
        _ => "very strong",
    }
}

pub fn on_password_input<F: ValidityField>(field: &F) {
    let password = field.value();
    match evaluate(&password) {
        Some(verdict) => {
            trace!(len = password.encode_utf16().count(), valid = verdict.is_valid(), "password verdict");
            field.set_custom_validity(verdict.custom_validity());
        }
        None => trace!("empty password, leaving validity untouched"),
    }
}

pub fn on_confirmation_input<F: ValidityField>(password: &F, confirmation: &F) {
    if let Some(message) = confirmation_validity(&password.value(), &confirmation.value()) {
        trace!(matching = message.is_empty(), "confirmation verdict");
        confirmation.set_custom_validity(message);
    }
}

pub fn on_strength_input<F: ValidityField, D: StrengthDisplay>(password: &F, email: Option<&F>, display: &D) {
    let email = email.map(|e| e.value()).unwrap_or_default();
    match strength_score(&password.value(), &email) {
        Some(score) => {
            trace!(score, "password strength");
            display.show(score, strength_label(score));
        }
        None => display.clear(),
    }
}
