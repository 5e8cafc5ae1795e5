//! Landing route: shows the session state and offers logout.

use forms::AuthSession;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let logged_in = move || session.get().is_logged_in();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Home"</h1>
                <p class="auth-status">{move || auth::session_label(session.get())}</p>
                <Show
                    when=logged_in
                    fallback=|| view! {
                        <p class="auth-switch">
                            <A href="/login">"Login"</A>
                            " or "
                            <A href="/signup">"Create Account"</A>
                        </p>
                    }
                >
                    <button class="auth-button" type="button" on:click=move |_| auth::logout(session)>
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
