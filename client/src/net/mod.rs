//! Networking for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two HTTP submissions and `picked_file` wraps the
//! browser `File` a user selects for the profile picture.

pub mod api;
pub mod picked_file;
