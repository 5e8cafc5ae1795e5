//! Process-level failures. Flow failures (bad credentials, rejected signup)
//! are display state and never become a `CliError`.

use std::fmt::Display;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token store {path}: {message}")]
    Storage { path: String, message: String },
    #[error("cannot read profile picture {path}: {message}")]
    Attachment { path: String, message: String },
}

impl CliError {
    pub(crate) fn storage(path: &Path, err: impl Display) -> Self {
        Self::Storage { path: path.display().to_string(), message: err.to_string() }
    }

    pub(crate) fn attachment(path: &Path, err: impl Display) -> Self {
        Self::Attachment { path: path.display().to_string(), message: err.to_string() }
    }
}
