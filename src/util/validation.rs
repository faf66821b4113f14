//! Credential shape rules for the sign form.
//!
//! DESIGN
//! ======
//! Predicates are pure. The flag updater only raises an error for a field
//! that is non-empty and failing, so the form never shows an error before the
//! user has typed anything.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;

use crate::state::sign::{SignField, SignState};

const EMAIL_PATTERN: &str =
    r"^[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*@[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*\.[a-zA-Z]{2,3}$";

/// Minimum accepted password length, in UTF-16 code units like an
/// `<input>` value's `length`.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_FORMAT_MESSAGE: &str = "This is not the format of the email";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Please enter at least 8 characters";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// `local@domain.tld` with single interior `-`, `_` or `.` separators and a
/// 2-3 letter TLD.
pub fn is_valid_email(input: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(input))
}

pub fn is_valid_password(input: &str) -> bool {
    input.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Whether `value` should display the invalid-format error for `field`.
pub fn is_flagged(field: SignField, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    match field {
        SignField::Email => !is_valid_email(value),
        SignField::Password => !is_valid_password(value),
    }
}

/// Recompute the cached invalid flag for the field named `name` from the
/// current draft. Unknown names are ignored.
pub fn update_valid_message(state: &mut SignState, name: &str) {
    let Some(field) = SignField::from_name(name) else {
        return;
    };
    let flagged = is_flagged(field, state.field(field));
    match field {
        SignField::Email => state.set_email_invalid(flagged),
        SignField::Password => state.set_password_invalid(flagged),
    }
}

/// Submit stays disabled until both draft values pass their predicates.
///
/// Reads the draft directly; the cached flags are ignored.
pub fn is_submit_disabled(state: &SignState) -> bool {
    !(is_valid_password(&state.password) && is_valid_email(&state.email))
}
