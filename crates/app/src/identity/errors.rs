//! Identity errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("session credential is not recognised")]
    InvalidCredential,

    #[error("session credential has expired")]
    Expired,
}
