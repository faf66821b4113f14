//! Toast display for the latest submission notification.
//!
//! DESIGN
//! ======
//! Reads `ToastState` from context and clears the message after a short delay
//! in the browser. A newer message restarts the delay; an older timer never
//! dismisses a message it did not start for.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long a toast stays visible.
#[cfg(feature = "hydrate")]
const TOAST_VISIBLE_MS: u64 = 3_000;

/// Floating notification bound to the shared `ToastState`.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let shown_seq = StoredValue::new(0_u64);
        Effect::new(move || {
            if !toast.with(ToastState::is_visible) {
                return;
            }
            let seq = shown_seq.get_value() + 1;
            shown_seq.set_value(seq);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_VISIBLE_MS)).await;
                if shown_seq.try_get_value() == Some(seq) {
                    let _ = toast.try_update(ToastState::dismiss);
                }
            });
        });
    }

    view! {
        <Show when=move || toast.with(ToastState::is_visible)>
            <div class="toast" role="status">
                <span class=move || format!("toast__icon {}", toast.get().icon.class())>
                    {move || toast.get().icon.glyph()}
                </span>
                <span class="toast__message">{move || toast.get().message}</span>
            </div>
        </Show>
    }
}
