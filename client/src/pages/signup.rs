//! Signup page: name, email, password and an optional profile picture.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fields are validated on every change and blur through the rule table in
//! `forms::validation`; submission is refused until every field is clean.
//! A successful upload clears the file input and routes to `/login`.
//!
//! The flow signal uses local storage because the selected `web_sys::File`
//! is not `Send`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use forms::{AuthSession, SignupField, SignupFlow};
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::field_view::{input_class, non_empty, password_input_type, visibility_icon, visibility_label};
use crate::net::picked_file::PickedFile;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    let flow = RwSignal::new_local(SignupFlow::<PickedFile>::default());
    let file_input = NodeRef::<Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(|f| f.submit()).flatten() else {
            #[cfg(feature = "hydrate")]
            log::info!("signup form is invalid");
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::signup(request).await;
                match &outcome {
                    Ok(()) => log::info!("signup successful"),
                    Err(e) => log::warn!("signup request failed: {e}"),
                }
                let effects = flow.try_update(|f| f.complete(outcome)).unwrap_or_default();
                let target = crate::util::effects::BrowserEffects { session, navigate, file_input: Some(file_input) };
                crate::util::effects::apply_effects(effects, &target);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, &navigate);
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        flow.update(|f| f.select_file(crate::net::picked_file::first_file(&ev)));
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let show_password = move || flow.with(|f| f.show_password());

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate>
                <h2 class="auth-card__title">"Create Account"</h2>

                <TextField flow=flow field=SignupField::Name label="Name" input_type="text" placeholder="Enter your name"/>
                <TextField flow=flow field=SignupField::Email label="Email" input_type="email" placeholder="Enter your email"/>

                <label class="auth-label" for="signupPassword">"Password"</label>
                <div class="auth-password">
                    <input
                        id="signupPassword"
                        name="password"
                        required
                        placeholder="Enter your password"
                        type=move || password_input_type(show_password())
                        class=move || input_class(flow.with(|f| f.errors().get(SignupField::Password).is_empty()))
                        prop:value=move || flow.with(|f| f.value(SignupField::Password).to_owned())
                        on:input=move |ev| flow.update(|f| f.change(SignupField::Password, event_target_value(&ev)))
                        on:blur=move |_| flow.update(|f| f.blur(SignupField::Password))
                    />
                    <button
                        type="button"
                        class="auth-password__toggle"
                        aria-label=move || visibility_label(show_password())
                        on:click=move |_| flow.update(|f| f.toggle_password_visibility())
                    >
                        {move || visibility_icon(show_password())}
                    </button>
                </div>
                <FieldMessage flow=flow field=SignupField::Password/>

                <input
                    id="signupProfilePicture"
                    name="profilePicture"
                    type="file"
                    accept="image/*"
                    class="auth-file__input"
                    node_ref=file_input
                    on:change=on_file
                />
                <label class="auth-file" for="signupProfilePicture">
                    <span class="auth-button auth-button--outlined">
                        {move || flow.with(|f| f.file_button_label().to_owned())}
                    </span>
                </label>

                {move || flow.with(|f| non_empty(f.error())).map(|text| view! { <p class="auth-error">{text}</p> })}

                <button class="auth-button" type="submit" disabled=move || flow.with(|f| f.is_loading())>
                    "Sign Up"
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </form>

            <Show when=move || flow.with(|f| f.is_loading())>
                <div class="auth-backdrop">
                    <div class="auth-spinner" role="progressbar" aria-label="Creating account"></div>
                </div>
            </Show>
        </div>
    }
}

/// Labelled single-line input bound to one signup field.
#[component]
fn TextField(
    flow: RwSignal<SignupFlow<PickedFile>, LocalStorage>,
    field: SignupField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field_input_id(field);
    view! {
        <label class="auth-label" for=id.clone()>{label}</label>
        <input
            id=id
            name=field.as_str()
            type=input_type
            required
            placeholder=placeholder
            class=move || input_class(flow.with(|f| f.errors().get(field).is_empty()))
            prop:value=move || flow.with(|f| f.value(field).to_owned())
            on:input=move |ev| flow.update(|f| f.change(field, event_target_value(&ev)))
            on:blur=move |_| flow.update(|f| f.blur(field))
        />
        <FieldMessage flow=flow field=field/>
    }
}

/// Current rule message for `field`, hidden while the field is clean.
#[component]
fn FieldMessage(flow: RwSignal<SignupFlow<PickedFile>, LocalStorage>, field: SignupField) -> impl IntoView {
    move || {
        flow.with(|f| non_empty(f.errors().get(field)))
            .map(|text| view! { <p class="auth-helper">{text}</p> })
    }
}

/// DOM id for a signup input, e.g. `signupName`.
pub(crate) fn field_input_id(field: SignupField) -> String {
    let name = field.as_str();
    let mut chars = name.chars();
    let head = chars.next().map(|c| c.to_ascii_uppercase()).into_iter();
    format!("signup{}", head.chain(chars).collect::<String>())
}
