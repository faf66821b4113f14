use super::*;
use crate::util::storage::MemoryStorage;

fn change(name: &str, value: &str) -> FieldChange {
    FieldChange { name: name.to_owned(), value: value.to_owned() }
}

#[test]
fn field_change_writes_draft_and_flags_bad_value() {
    let mut state = SignState::default();
    apply_field_change(&mut state, change("userEmail", "a@b"));
    assert_eq!(state.email, "a@b");
    assert!(state.email_invalid);

    apply_field_change(&mut state, change("userEmail", "a@b.co"));
    assert!(!state.email_invalid);
}

#[test]
fn clearing_a_field_clears_its_flag() {
    let mut state = SignState::default();
    apply_field_change(&mut state, change("userPassword", "short"));
    assert!(state.password_invalid);

    apply_field_change(&mut state, change("userPassword", ""));
    assert!(state.password.is_empty());
    assert!(!state.password_invalid);
}

#[test]
fn empty_email_change_never_flags() {
    let mut state = SignState::default();
    apply_field_change(&mut state, change("userEmail", ""));
    assert!(!state.email_invalid);
}

#[test]
fn unknown_field_change_is_ignored() {
    let mut state = SignState::default();
    apply_field_change(&mut state, change("nickname", "zed"));
    assert_eq!(state, SignState::default());
}

#[test]
fn stored_token_redirects_to_landing_route() {
    let storage = MemoryStorage::default();
    storage.set("access_token", "T");
    assert_eq!(guard_redirect(&storage), Some("/todo"));
}

#[test]
fn empty_or_missing_token_keeps_form() {
    let storage = MemoryStorage::default();
    assert_eq!(guard_redirect(&storage), None);

    storage.set("access_token", "");
    assert_eq!(guard_redirect(&storage), None);
}

#[test]
fn guard_reads_context_storage_handle() {
    let memory = MemoryStorage::default();
    let shared: SharedStorage = std::sync::Arc::new(memory.clone());
    assert_eq!(guard_redirect(&*shared), None);

    memory.set("access_token", "T");
    assert_eq!(guard_redirect(&*shared), Some("/todo"));
}
