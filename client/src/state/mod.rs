//! Reactive state shared between pages.

pub mod auth;
