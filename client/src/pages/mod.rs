//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one `forms` flow in a signal, forwards DOM events to it,
//! and runs the flow's effects through [`crate::util::effects`].

pub(crate) mod field_view;
pub mod home;
pub mod login;
pub mod signup;
