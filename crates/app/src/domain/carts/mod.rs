//! Carts

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::{CartValidationError, CartsErrorKind, CartsServiceError};
pub use service::*;
