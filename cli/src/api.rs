//! `reqwest` transport for the remote auth API.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped to [`SubmitError`] and handed to the flow, which
//! collapses it into its generic message. The detail only reaches the log.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use forms::wire::{self, LOGIN_PATH, SIGNUP_PATH};
use forms::{LoginRequest, LoginResponse, SignupRequest, SubmitError};
use reqwest::multipart::{Form, Part};

use crate::attachment::Attachment;
use crate::error::CliError;

#[derive(Clone, Debug)]
pub struct AuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl AuthApi {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] for non-HTTP URLs and
    /// [`CliError::Http`] if the TLS backend cannot initialize.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/login` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] for transport failures, non-2xx statuses, or
    /// a body without a string `token`.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, SubmitError> {
        let url = wire::endpoint(&self.base_url, LOGIN_PATH);
        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        SubmitError::check_status(resp.status().as_u16())?;
        let body = resp.text().await.map_err(|e| SubmitError::Network(e.to_string()))?;
        wire::parse_login_response(&body)
    }

    /// `POST /api/signup` with a multipart body.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] for transport failures or non-2xx statuses.
    pub async fn signup(&self, request: SignupRequest<Attachment>) -> Result<(), SubmitError> {
        let url = wire::endpoint(&self.base_url, SIGNUP_PATH);
        let form = signup_form(request)?;
        let resp = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        SubmitError::check_status(resp.status().as_u16())
    }
}

fn signup_form(request: SignupRequest<Attachment>) -> Result<Form, SubmitError> {
    let mut form = Form::new();
    for (name, value) in request.text_parts() {
        form = form.text(name, value.to_owned());
    }
    if let Some(picture) = request.profile_picture {
        let part = Part::bytes(picture.bytes)
            .file_name(picture.file_name)
            .mime_str(&picture.mime)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        form = form.part(SignupRequest::<Attachment>::file_part_name(), part);
    }
    Ok(form)
}

/// Validate `raw` as an absolute `http`/`https` URL with a host, returning
/// it without trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let invalid = || CliError::InvalidBaseUrl(raw.to_owned());
    let url = reqwest::Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}
