//! Credential draft and validation-flag state for the sign page.
//!
//! DESIGN
//! ======
//! The draft mutates on every keystroke, while the invalid flags are cached
//! and only recomputed on field-change events. Flags drive error text only;
//! submit enablement is derived from the draft itself.

#[cfg(test)]
#[path = "sign_test.rs"]
mod sign_test;

/// Input `name` attribute of the email field.
pub const EMAIL_FIELD: &str = "userEmail";

/// Input `name` attribute of the password field.
pub const PASSWORD_FIELD: &str = "userPassword";

/// Which form the sign page is showing, derived from the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignMode {
    /// Base path `/`.
    #[default]
    SignIn,
    /// Any other path, normally `/signUp`.
    SignUp,
}

impl SignMode {
    /// Resolve the mode from a router pathname.
    pub fn from_path(path: &str) -> Self {
        if path.trim_start_matches('/').is_empty() {
            Self::SignIn
        } else {
            Self::SignUp
        }
    }

    /// Auth endpoint path for this mode.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::SignIn => "/auth/signin",
            Self::SignUp => "/auth/signup",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign Up",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Sign-in successed",
            Self::SignUp => "Sign-up successed",
        }
    }

    /// Prompt shown beside the link to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "You don't have an account?",
            Self::SignUp => "Do you already have an account?",
        }
    }

    /// Link label and target for switching to the other mode.
    pub fn switch_link(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Sign Up", "/signUp"),
            Self::SignUp => ("Sign In", "/"),
        }
    }
}

/// A named credential field of the sign form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignField {
    Email,
    Password,
}

impl SignField {
    /// Map an input `name` attribute to a field; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            EMAIL_FIELD => Some(Self::Email),
            PASSWORD_FIELD => Some(Self::Password),
            _ => None,
        }
    }
}

/// Shared sign-form state, provided as `RwSignal<SignState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignState {
    pub email: String,
    pub password: String,
    pub email_invalid: bool,
    pub password_invalid: bool,
    /// True while a submission is awaiting the server.
    pub pending: bool,
}

impl SignState {
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_email_invalid(&mut self, invalid: bool) {
        self.email_invalid = invalid;
    }

    pub fn set_password_invalid(&mut self, invalid: bool) {
        self.password_invalid = invalid;
    }

    pub fn field(&self, field: SignField) -> &str {
        match field {
            SignField::Email => &self.email,
            SignField::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: SignField, value: impl Into<String>) {
        match field {
            SignField::Email => self.set_email(value),
            SignField::Password => self.set_password(value),
        }
    }

    /// Empty both credential fields, leaving flags untouched.
    pub fn clear_draft(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    /// Return to the initial state for a freshly shown mode.
    pub fn reset(&mut self) {
        self.clear_draft();
        self.email_invalid = false;
        self.password_invalid = false;
    }
}
