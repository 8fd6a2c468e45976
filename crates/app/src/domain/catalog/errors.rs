//! Catalog lookup errors.

use thiserror::Error;

use crust::ingredients::Ingredient;

use crate::domain::catalog::models::MenuItemUuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("menu item {0} not found")]
    MenuItemNotFound(MenuItemUuid),

    #[error("ingredient {0} has no listed surcharge")]
    IngredientNotFound(Ingredient),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
