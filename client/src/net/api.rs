//! REST calls against the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`SubmitError::Network`] since these
//! submissions only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`SubmitError`] so the flows can treat
//! transport errors, non-2xx statuses and undecodable bodies the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forms::wire::{self, DEFAULT_API_BASE_URL, LOGIN_PATH, SIGNUP_PATH};
use forms::{LoginRequest, LoginResponse, SignupRequest, SubmitError};

use super::picked_file::PickedFile;

/// API origin baked in at build time from `AUTHFLOW_API_BASE_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("AUTHFLOW_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

pub fn login_endpoint() -> String {
    wire::endpoint(api_base_url(), LOGIN_PATH)
}

pub fn signup_endpoint() -> String {
    wire::endpoint(api_base_url(), SIGNUP_PATH)
}

/// `POST` the credentials as JSON and read the token from the reply.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the request cannot be sent, the status is
/// not 2xx, or the body carries no token.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(request)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        SubmitError::check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| SubmitError::Decode(e.to_string()))?;
        wire::parse_login_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Network(NOT_IN_BROWSER.to_owned()))
    }
}

/// `POST` the signup form as `multipart/form-data`. The profile picture part
/// is present only when a file was chosen.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the form cannot be built or sent, or the
/// status is not 2xx.
pub async fn signup(request: SignupRequest<PickedFile>) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in request.text_parts() {
            form.append_with_str(name, value).map_err(js_error)?;
        }
        if let Some(picture) = &request.profile_picture {
            let part = SignupRequest::<PickedFile>::file_part_name();
            form.append_with_blob_and_filename(part, picture.blob(), picture.name())
                .map_err(js_error)?;
        }
        let resp = gloo_net::http::Request::post(&signup_endpoint())
            .body(form)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        SubmitError::check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Network(NOT_IN_BROWSER.to_owned()))
    }
}

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available on server";

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> SubmitError {
    SubmitError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
