use super::*;

fn state(email: &str, password: &str) -> SignState {
    SignState { email: email.to_owned(), password: password.to_owned(), ..SignState::default() }
}

// =============================================================
// Predicates
// =============================================================

#[test]
fn accepts_simple_email() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail-host.com"));
    assert!(is_valid_email("user_1@sub.domain.net"));
}

#[test]
fn rejects_long_tld() {
    assert!(!is_valid_email("a@b.toolong"));
    assert!(!is_valid_email("a@b.c"));
}

#[test]
fn rejects_missing_at_or_empty_segments() {
    for input in ["", "plainaddress", "a.b.co", "@b.co", "a@.co", "a@", "a@@b.co"] {
        assert!(!is_valid_email(input), "{input:?} should be rejected");
    }
}

#[test]
fn rejects_doubled_or_edge_separators() {
    for input in ["a..b@c.co", ".a@b.co", "a.@b.co", "a@b-.co", "a@-b.co", "a b@c.co"] {
        assert!(!is_valid_email(input), "{input:?} should be rejected");
    }
}

#[test]
fn password_length_boundary() {
    assert!(!is_valid_password("1234567"));
    assert!(is_valid_password("12345678"));
    assert!(!is_valid_password(""));
}

#[test]
fn password_length_counts_utf16_units() {
    assert!(is_valid_password("ééééàààà"));
    assert!(!is_valid_password("éééé"));
    // Each emoji is a surrogate pair: four make eight units.
    assert!(is_valid_password("😀😀😀😀"));
    assert!(!is_valid_password("😀😀😀"));
    assert!(!is_valid_password("😀😀😀a"));
    assert!(is_valid_password("😀😀😀ab"));
}

// =============================================================
// Flag updates
// =============================================================

#[test]
fn empty_email_never_flags() {
    let mut s = state("", "");
    s.email_invalid = true;
    update_valid_message(&mut s, "userEmail");
    assert!(!s.email_invalid);
}

#[test]
fn malformed_email_flags_and_valid_email_clears() {
    let mut s = state("not-an-email", "");
    update_valid_message(&mut s, "userEmail");
    assert!(s.email_invalid);

    s.set_email("a@b.co");
    update_valid_message(&mut s, "userEmail");
    assert!(!s.email_invalid);
}

#[test]
fn short_password_flags_and_empty_clears() {
    let mut s = state("", "short");
    update_valid_message(&mut s, "userPassword");
    assert!(s.password_invalid);

    s.set_password("");
    update_valid_message(&mut s, "userPassword");
    assert!(!s.password_invalid);
}

#[test]
fn update_only_touches_named_field() {
    let mut s = state("bad", "short");
    update_valid_message(&mut s, "userPassword");
    assert!(s.password_invalid);
    assert!(!s.email_invalid);
}

#[test]
fn unknown_field_is_noop() {
    let mut s = state("bad", "short");
    let before = s.clone();
    update_valid_message(&mut s, "nickname");
    assert_eq!(s, before);
}

// =============================================================
// Submit enablement
// =============================================================

#[test]
fn submit_disabled_when_either_field_invalid_or_empty() {
    assert!(is_submit_disabled(&state("", "")));
    assert!(is_submit_disabled(&state("a@b.co", "")));
    assert!(is_submit_disabled(&state("", "12345678")));
    assert!(is_submit_disabled(&state("a@b", "12345678")));
    assert!(is_submit_disabled(&state("a@b.co", "1234567")));
}

#[test]
fn submit_enabled_when_both_valid() {
    assert!(!is_submit_disabled(&state("a@b.co", "12345678")));
}

#[test]
fn submit_ignores_cached_flags() {
    let mut s = state("a@b.co", "12345678");
    s.email_invalid = true;
    s.password_invalid = true;
    assert!(!is_submit_disabled(&s));

    let mut s = state("bad", "short");
    s.email_invalid = false;
    s.password_invalid = false;
    assert!(is_submit_disabled(&s));
}
