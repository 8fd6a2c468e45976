//! Identity
//!
//! Resolves opaque session credentials to the user acting on a cart. Credential
//! issuance lives elsewhere; this module only consumes sessions.

mod errors;
mod models;
mod service;

pub use errors::*;
pub use models::*;
pub use service::*;
