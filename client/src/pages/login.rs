//! Login page: email + password exchanged for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps a [`LoginFlow`] in a signal. A submit takes the request
//! from the flow, posts it, and feeds the outcome back; the returned effects
//! store the token, flip the session to logged in, and route home.

use forms::{AuthSession, LoginField, LoginFlow};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::field_view::{input_class, non_empty, password_input_type, visibility_icon, visibility_label};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(LoginFlow::submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&request).await;
                if let Err(e) = &outcome {
                    log::warn!("login request failed: {e}");
                }
                let effects = flow.try_update(|f| f.complete(outcome)).unwrap_or_default();
                let target = crate::util::effects::BrowserEffects { session, navigate, file_input: None };
                crate::util::effects::apply_effects(effects, &target);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, &navigate);
        }
    };

    let field_class = move |field: LoginField| input_class(flow.with(|f| f.is_field_valid(field)));
    let helper = move |field: LoginField| flow.with(|f| f.helper_text(field));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate>
                <h1 class="auth-card__title">"Login Account"</h1>

                <label class="auth-label" for="loginEmail">"Email"</label>
                <input
                    id="loginEmail"
                    name="email"
                    type="email"
                    required
                    placeholder="Enter your email"
                    class=move || field_class(LoginField::Email)
                    prop:value=move || flow.with(|f| f.value(LoginField::Email).to_owned())
                    on:input=move |ev| flow.update(|f| f.change(LoginField::Email, event_target_value(&ev)))
                    on:blur=move |_| flow.update(|f| f.blur(LoginField::Email))
                />
                {move || helper(LoginField::Email).map(|text| view! { <p class="auth-helper">{text}</p> })}

                <label class="auth-label" for="loginPassword">"Password"</label>
                <div class="auth-password">
                    <input
                        id="loginPassword"
                        name="password"
                        required
                        placeholder="Enter your password"
                        type=move || password_input_type(flow.with(LoginFlow::show_password))
                        class=move || field_class(LoginField::Password)
                        prop:value=move || flow.with(|f| f.value(LoginField::Password).to_owned())
                        on:input=move |ev| flow.update(|f| f.change(LoginField::Password, event_target_value(&ev)))
                        on:blur=move |_| flow.update(|f| f.blur(LoginField::Password))
                    />
                    <button
                        type="button"
                        class="auth-password__toggle"
                        aria-label=move || visibility_label(flow.with(LoginFlow::show_password))
                        on:click=move |_| flow.update(LoginFlow::toggle_password_visibility)
                    >
                        {move || visibility_icon(flow.with(LoginFlow::show_password))}
                    </button>
                </div>
                {move || helper(LoginField::Password).map(|text| view! { <p class="auth-helper">{text}</p> })}

                {move || flow.with(|f| non_empty(f.error())).map(|text| view! { <p class="auth-error">{text}</p> })}

                <button class="auth-button" type="submit" disabled=move || flow.with(LoginFlow::is_pending)>
                    "Login"
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/signup">"Create Account"</A>
                </p>
            </form>
        </div>
    }
}
