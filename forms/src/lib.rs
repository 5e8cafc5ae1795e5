//! Login and signup form state machines shared by every authflow runtime.
//!
//! This crate owns the behavior of the two auth forms: field values, touched
//! flags, the signup validation rule table, submission bookkeeping, and the
//! auth-session reducer. It performs no I/O. Runtimes (`client` in the
//! browser, `cli` natively) feed user events in, send the request a flow
//! hands back, then execute the [`Effect`]s returned by `complete`.
//!
//! FLOW SHAPE
//! ==========
//! ```text
//! change/blur ... -> submit() -> Some(request) -> runtime I/O -> complete(outcome) -> Vec<Effect>
//!                             -> None          (pending, or signup validation failed)
//! ```

pub mod effect;
pub mod login;
pub mod session;
pub mod signup;
pub mod validation;
pub mod wire;

pub use effect::{Effect, Route, TOKEN_STORAGE_KEY};
pub use login::{LoginField, LoginFlow, LoginValues, Touched};
pub use session::{AuthSession, AuthSignal};
pub use signup::{SelectedFile, SignupFlow, SignupRequest, SignupValues};
pub use validation::{FieldErrors, SignupField};
pub use wire::{LoginRequest, LoginResponse, SubmitError};
