//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toast;
use crate::pages::{sign::SignPage, todo::TodoPage};
use crate::state::{sign::SignState, toast::ToastState};
use crate::util::storage::{BrowserStorage, SharedStorage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared sign and toast state plus the session storage
/// capability, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sign = RwSignal::new(SignState::default());
    let toast = RwSignal::new(ToastState::default());

    let storage: SharedStorage = std::sync::Arc::new(BrowserStorage);

    provide_context(sign);
    provide_context(toast);
    provide_context(storage);

    view! {
        <Stylesheet id="leptos" href="/pkg/todo-web.css"/>
        <Title text="Todo"/>

        <Router>
            <Toast/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignPage/>
                <Route path=StaticSegment("signUp") view=SignPage/>
                <Route path=StaticSegment("todo") view=TodoPage/>
            </Routes>
        </Router>
    }
}
