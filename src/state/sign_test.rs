use super::*;

// =============================================================
// SignMode
// =============================================================

#[test]
fn base_path_is_sign_in() {
    assert_eq!(SignMode::from_path("/"), SignMode::SignIn);
    assert_eq!(SignMode::from_path(""), SignMode::SignIn);
}

#[test]
fn any_other_path_is_sign_up() {
    assert_eq!(SignMode::from_path("/signUp"), SignMode::SignUp);
    assert_eq!(SignMode::from_path("/elsewhere"), SignMode::SignUp);
}

#[test]
fn endpoint_follows_mode() {
    assert_eq!(SignMode::SignIn.endpoint(), "/auth/signin");
    assert_eq!(SignMode::SignUp.endpoint(), "/auth/signup");
}

#[test]
fn switch_link_points_at_other_mode() {
    assert_eq!(SignMode::SignIn.switch_link(), ("Sign Up", "/signUp"));
    assert_eq!(SignMode::SignUp.switch_link(), ("Sign In", "/"));
    assert_eq!(SignMode::from_path(SignMode::SignIn.switch_link().1), SignMode::SignUp);
    assert_eq!(SignMode::from_path(SignMode::SignUp.switch_link().1), SignMode::SignIn);
}

#[test]
fn copy_differs_per_mode() {
    assert_eq!(SignMode::SignIn.submit_label(), "Sign in");
    assert_eq!(SignMode::SignUp.submit_label(), "Sign Up");
    assert_eq!(SignMode::SignIn.success_message(), "Sign-in successed");
    assert_eq!(SignMode::SignUp.success_message(), "Sign-up successed");
}

// =============================================================
// SignField
// =============================================================

#[test]
fn field_names_map_to_fields() {
    assert_eq!(SignField::from_name("userEmail"), Some(SignField::Email));
    assert_eq!(SignField::from_name("userPassword"), Some(SignField::Password));
    assert_eq!(SignField::from_name("nickname"), None);
}

// =============================================================
// SignState
// =============================================================

#[test]
fn sign_state_default_is_empty() {
    let state = SignState::default();
    assert!(state.email.is_empty());
    assert!(state.password.is_empty());
    assert!(!state.email_invalid);
    assert!(!state.password_invalid);
    assert!(!state.pending);
}

#[test]
fn set_field_writes_named_field() {
    let mut state = SignState::default();
    state.set_field(SignField::Email, "a@b.co");
    state.set_field(SignField::Password, "hunter22");
    assert_eq!(state.field(SignField::Email), "a@b.co");
    assert_eq!(state.field(SignField::Password), "hunter22");
}

#[test]
fn clear_draft_keeps_flags() {
    let mut state = SignState {
        email: "a@b.co".to_owned(),
        password: "secret".to_owned(),
        email_invalid: true,
        password_invalid: true,
        pending: false,
    };
    state.clear_draft();
    assert!(state.email.is_empty());
    assert!(state.password.is_empty());
    assert!(state.email_invalid);
    assert!(state.password_invalid);
}

#[test]
fn reset_restores_initial_draft_and_flags() {
    let mut state = SignState {
        email: "bad".to_owned(),
        password: "short".to_owned(),
        email_invalid: true,
        password_invalid: true,
        pending: false,
    };
    state.reset();
    assert_eq!(state, SignState::default());
}
