//! Host configuration from environment variables.
//!
//! `PORT` (default 3000) picks the listening port; Leptos site options come
//! from `[package.metadata.leptos]` via `leptos::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but not a port
    /// number.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup` so tests need not touch the real
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim().parse::<u16>().map_err(|_| HostError::InvalidPort(raw))?
            }
            _ => DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
