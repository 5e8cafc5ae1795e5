//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, effect plumbing) from
//! page logic so the pages stay declarative and the helpers stay testable.

pub mod effects;
pub mod token_storage;
