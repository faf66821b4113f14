//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/` (sign in) and `/signUp` (sign up). Redirects to the landing
//! route when a session token is already stored; otherwise renders the
//! credential form and drives the submission controller in `util::submit`.
//!
//! The token check runs in an `Effect`, so the server and the hydrating client
//! both render the form first and only the browser navigates away.
//!
//! TRADE-OFFS
//! ==========
//! The in-flight request is not aborted on unmount. Its continuation checks an
//! alive flag cleared by `on_cleanup` and drops the outcome instead of touching
//! shared state.

#[cfg(test)]
#[path = "sign_test.rs"]
mod sign_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::input::{FieldChange, Input};
use crate::config::{AppConfig, LANDING_ROUTE, TOKEN_KEY};
use crate::state::sign::{EMAIL_FIELD, PASSWORD_FIELD, SignField, SignMode, SignState};
use crate::util::storage::{SessionStorage, SharedStorage, has_session};
use crate::util::submit::begin_submit;
use crate::util::validation::{
    EMAIL_FORMAT_MESSAGE, PASSWORD_LENGTH_MESSAGE, is_submit_disabled, update_valid_message,
};

/// Write an edited value into the draft and refresh that field's flag.
fn apply_field_change(state: &mut SignState, change: FieldChange) {
    let Some(field) = SignField::from_name(&change.name) else {
        return;
    };
    state.set_field(field, change.value);
    update_valid_message(state, &change.name);
}

/// Route to leave for when a session token is already stored.
fn guard_redirect<S: SessionStorage + ?Sized>(storage: &S) -> Option<&'static str> {
    has_session(storage, TOKEN_KEY).then_some(LANDING_ROUTE)
}

/// Sign page; the route path selects sign-in or sign-up mode.
#[component]
pub fn SignPage() -> impl IntoView {
    let sign = expect_context::<RwSignal<SignState>>();
    let storage = expect_context::<SharedStorage>();
    #[cfg(feature = "hydrate")]
    let toast = expect_context::<RwSignal<crate::state::toast::ToastState>>();
    let location = use_location();
    let navigate = use_navigate();
    let config = AppConfig::load();
    let mode = Memo::new(move |_| SignMode::from_path(&location.pathname.get()));

    // `/` and `/signUp` are separate routes, so switching mode remounts this
    // page and this reset clears the draft and flags of the previous mode. It
    // also drops a pending flag left by a request from an unmounted page.
    sign.set(SignState::default());

    let redirecting = RwSignal::new(false);
    {
        let storage = storage.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if let Some(path) = guard_redirect(&*storage) {
                redirecting.set(true);
                navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_change = Callback::new(move |change: FieldChange| {
        sign.update(|s| apply_field_change(s, change));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = sign.try_update(begin_submit).flatten() else {
            return;
        };
        let submit_mode = mode.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let navigate = navigate.clone();
            let storage = storage.clone();
            let client = crate::net::api::HttpAuthClient::new(config.clone());
            leptos::task::spawn_local(async move {
                let resolution = crate::util::submit::submit(&client, submit_mode, credentials).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    leptos::logging::log!("sign page unmounted; dropping {} result", submit_mode.endpoint());
                    return;
                }
                let mut redirect = None;
                sign.update(|s| {
                    toast.update(|t| redirect = resolution.apply(s, t, &*storage, TOKEN_KEY));
                });
                if let Some(path) = redirect {
                    navigate(path, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, submit_mode, &navigate, &config, &storage);
        }
    };

    let email = Signal::derive(move || sign.with(|s| s.email.clone()));
    let password = Signal::derive(move || sign.with(|s| s.password.clone()));
    let disabled = move || sign.with(|s| s.pending || is_submit_disabled(s));

    view! {
        <div class="sign-page" hidden=move || redirecting.get()>
            <form class="sign-form" on:submit=on_submit>
                <Input
                    input_type="text"
                    name=EMAIL_FIELD
                    value=email
                    label="Email"
                    placeholder="Please enter your email"
                    on_change=on_change
                />
                <Show when=move || sign.with(|s| s.email_invalid)>
                    <p class="sign-form__error">{EMAIL_FORMAT_MESSAGE}</p>
                </Show>
                <Input
                    input_type="password"
                    name=PASSWORD_FIELD
                    value=password
                    label="Password"
                    placeholder="Please enter your password"
                    on_change=on_change
                />
                <Show when=move || sign.with(|s| s.password_invalid)>
                    <p class="sign-form__error">{PASSWORD_LENGTH_MESSAGE}</p>
                </Show>
                <button class="sign-form__submit" type="submit" disabled=disabled>
                    {move || mode.get().submit_label()}
                </button>
            </form>
            <div class="sign-divider">
                <span class="sign-divider__label">"OR"</span>
            </div>
            <p class="sign-switch">
                {move || mode.get().switch_prompt()}
                <A href=move || mode.get().switch_link().1.to_owned() attr:class="sign-switch__link">
                    {move || mode.get().switch_link().0}
                </A>
            </p>
        </div>
    }
}
