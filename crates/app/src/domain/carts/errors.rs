//! Carts service errors.

use thiserror::Error;

use crust::{pricing::PricingError, quantity::QuantityError};

use crate::{domain::catalog::CatalogError, identity::IdentityError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("caller could not be authenticated")]
    Authentication(#[from] IdentityError),

    #[error("cart item belongs to another user")]
    Authorization,

    #[error("cart not found")]
    CartNotFound,

    #[error("cart item not found")]
    CartItemNotFound,

    #[error("invalid cart data")]
    Validation(#[from] CartValidationError),

    #[error("catalog lookup failed")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Error, PartialEq)]
pub enum CartValidationError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("cart owner does not resolve to this cart")]
    UnresolvedOwner,
}

impl From<QuantityError> for CartsServiceError {
    fn from(error: QuantityError) -> Self {
        Self::Validation(error.into())
    }
}

impl From<PricingError> for CartsServiceError {
    fn from(error: PricingError) -> Self {
        Self::Validation(error.into())
    }
}

/// Coarse error classes for transports mapping failures to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartsErrorKind {
    Authentication,
    Authorization,
    NotFound,
    Validation,
    Catalog,
}

impl CartsServiceError {
    #[must_use]
    pub fn kind(&self) -> CartsErrorKind {
        match self {
            Self::Authentication(_) => CartsErrorKind::Authentication,
            Self::Authorization => CartsErrorKind::Authorization,
            Self::CartNotFound | Self::CartItemNotFound => CartsErrorKind::NotFound,
            Self::Validation(_) => CartsErrorKind::Validation,
            Self::Catalog(_) => CartsErrorKind::Catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        let cases = [
            (
                CartsServiceError::from(IdentityError::Expired),
                CartsErrorKind::Authentication,
            ),
            (CartsServiceError::Authorization, CartsErrorKind::Authorization),
            (CartsServiceError::CartNotFound, CartsErrorKind::NotFound),
            (CartsServiceError::CartItemNotFound, CartsErrorKind::NotFound),
            (
                CartsServiceError::from(QuantityError::BelowMinimum(0)),
                CartsErrorKind::Validation,
            ),
            (
                CartsServiceError::from(PricingError::Overflow),
                CartsErrorKind::Validation,
            ),
            (
                CartsServiceError::from(CatalogError::Unavailable("timeout".to_string())),
                CartsErrorKind::Catalog,
            ),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "wrong kind for {error:?}");
        }
    }
}
