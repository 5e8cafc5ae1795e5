//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth;

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
/// Provides the `RwSignal<AuthSession>` every page dispatches into.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = auth::provide_session();
    auth::install_stored_token_restore(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/authflow.css"/>
        <Title text="Authflow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}
