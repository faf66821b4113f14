//! Submission controller for the sign form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `begin_submit` turns the draft into a request payload, `submit` performs the
//! call through an `AuthClient`, and `resolve` maps the result to the state
//! changes the page applies afterwards (draft clearing, token write, toast,
//! navigation). Each attempt is terminal; there is no retry.
//!
//! ERROR HANDLING
//! ==============
//! Only responses that carry a status are branched on. Transport and decode
//! failures fall through to the generic connection message.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::config::LANDING_ROUTE;
use crate::error::AuthError;
use crate::net::api::AuthClient;
use crate::net::types::{Credentials, TokenResponse};
use crate::state::sign::{SignMode, SignState};
use crate::state::toast::{ToastIcon, ToastState};
use crate::util::storage::SessionStorage;
use crate::util::validation::is_submit_disabled;

pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "This account has already been subscribed";
pub const RETRY_CREDENTIALS_MESSAGE: &str = "Please enter your ID or password again";
pub const NOT_REGISTERED_MESSAGE: &str = "You are not a registered user";
pub const UNKNOWN_CAUSE_MESSAGE: &str = "The cause is unknown";
pub const LOST_CONNECTION_MESSAGE: &str = "Lost connection with server";

/// How the draft changes once an attempt settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftUpdate {
    ClearAll,
    ClearEmail,
    ClearPassword,
    Keep,
}

/// Side effects of one settled submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub draft: DraftUpdate,
    /// Token to persist, present only on success.
    pub token: Option<String>,
    pub icon: ToastIcon,
    pub message: &'static str,
    /// Route to navigate to, present only on success.
    pub redirect: Option<&'static str>,
}

impl Resolution {
    fn failure(draft: DraftUpdate, message: &'static str) -> Self {
        Self { draft, token: None, icon: ToastIcon::Error, message, redirect: None }
    }

    /// Apply draft, storage and toast effects; returns the route to navigate to.
    pub fn apply<S: SessionStorage + ?Sized>(
        self,
        sign: &mut SignState,
        toast: &mut ToastState,
        storage: &S,
        token_key: &str,
    ) -> Option<&'static str> {
        sign.pending = false;
        match self.draft {
            DraftUpdate::ClearAll => sign.clear_draft(),
            DraftUpdate::ClearEmail => sign.set_email(""),
            DraftUpdate::ClearPassword => sign.set_password(""),
            DraftUpdate::Keep => {}
        }
        if let Some(token) = &self.token {
            storage.set(token_key, token);
        }
        toast.show(self.icon, self.message);
        self.redirect
    }
}

/// Toast copy and draft handling for a failed attempt.
pub fn failure_resolution(err: &AuthError) -> Resolution {
    match err.status() {
        Some(400) => Resolution::failure(DraftUpdate::ClearEmail, ALREADY_SUBSCRIBED_MESSAGE),
        Some(401) => Resolution::failure(DraftUpdate::ClearPassword, RETRY_CREDENTIALS_MESSAGE),
        Some(404) => Resolution::failure(DraftUpdate::Keep, NOT_REGISTERED_MESSAGE),
        Some(500) => Resolution::failure(DraftUpdate::Keep, UNKNOWN_CAUSE_MESSAGE),
        _ => Resolution::failure(DraftUpdate::Keep, LOST_CONNECTION_MESSAGE),
    }
}

/// Map a settled request to its side effects.
pub fn resolve(result: Result<TokenResponse, AuthError>, mode: SignMode) -> Resolution {
    match result {
        Ok(body) => Resolution {
            draft: DraftUpdate::ClearAll,
            token: Some(body.access_token),
            icon: ToastIcon::Success,
            message: mode.success_message(),
            redirect: Some(LANDING_ROUTE),
        },
        Err(err) => failure_resolution(&err),
    }
}

/// Build the request payload and mark the form pending.
///
/// Returns `None` without touching state when a request is already in flight
/// or the draft does not pass validation.
pub fn begin_submit(sign: &mut SignState) -> Option<Credentials> {
    if sign.pending || is_submit_disabled(sign) {
        return None;
    }
    sign.pending = true;
    Some(Credentials { email: sign.email.clone(), password: sign.password.clone() })
}

/// Send `credentials` for `mode` and resolve the outcome.
pub async fn submit<C: AuthClient>(
    client: &C,
    mode: SignMode,
    credentials: Credentials,
) -> Resolution {
    let result = client.authenticate(mode, &credentials).await;
    if let Err(e) = &result {
        leptos::logging::warn!("{} failed: {e}", mode.endpoint());
    }
    resolve(result, mode)
}
