//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app. Login and signup requests go from
//! the browser straight to the auth API, so there are no API routes here,
//! just SSR pages, the `/pkg` bundle and a health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Probe routes that never touch Leptos.
pub fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend plus static assets and probes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the hydrate build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
