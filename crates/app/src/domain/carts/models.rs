//! Cart Models

use jiff::Timestamp;

use crust::{
    ingredients::IngredientSelection, lines::Line, pricing::PricingError, quantity::Quantity,
};

use crate::{domain::catalog::models::MenuItemUuid, identity::UserUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    pub(crate) fn new(uuid: CartUuid, user_uuid: UserUuid, now: Timestamp) -> Self {
        Self {
            uuid,
            user_uuid,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Look up a line by UUID.
    #[must_use]
    pub fn item(&self, uuid: CartItemUuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.uuid == uuid)
    }

    pub(crate) fn item_mut(&mut self, uuid: CartItemUuid) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.uuid == uuid)
    }

    /// Line totals in cart order.
    pub fn line_totals(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(CartItem::total)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub menu_item_uuid: MenuItemUuid,
    line: Line,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItem {
    pub(crate) fn new(
        cart_uuid: CartUuid,
        menu_item_uuid: MenuItemUuid,
        line: Line,
        now: Timestamp,
    ) -> Self {
        Self {
            uuid: CartItemUuid::new(),
            cart_uuid,
            menu_item_uuid,
            line,
            created_at: now,
            updated_at: now,
        }
    }

    /// Priced line details.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    #[must_use]
    pub fn ingredients(&self) -> &IngredientSelection {
        self.line.ingredients()
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.line.quantity()
    }

    #[must_use]
    pub fn unit_price(&self) -> u64 {
        self.line.unit_price()
    }

    /// Unit price × quantity.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.line.total()
    }

    pub(crate) fn set_quantity(
        &mut self,
        quantity: Quantity,
        now: Timestamp,
    ) -> Result<(), PricingError> {
        self.line.set_quantity(quantity)?;
        self.updated_at = now;

        Ok(())
    }
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub menu_item_uuid: MenuItemUuid,
    pub quantity: i64,
    pub ingredients: IngredientSelection,
}
