//! Authenticated landing route.
//!
//! The todo list itself lives outside this crate; the page only gives
//! post-sign-in navigation a target.

use leptos::prelude::*;

#[component]
pub fn TodoPage() -> impl IntoView {
    view! {
        <div class="todo-page">
            <h1>"Todo"</h1>
        </div>
    }
}
