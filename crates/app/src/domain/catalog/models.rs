//! Catalog Models

pub use crust::menu::MenuItem;

use crate::uuids::TypedUuid;

/// Menu Item UUID
pub type MenuItemUuid = TypedUuid<MenuItem>;
