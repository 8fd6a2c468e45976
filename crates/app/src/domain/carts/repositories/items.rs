//! Cart Items Repository

use jiff::Timestamp;

use crust::{lines::Line, pricing::PricingError, quantity::Quantity};

use crate::{
    domain::{
        carts::models::{CartItem, CartItemUuid},
        catalog::models::MenuItemUuid,
    },
    store::CartTransaction,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryCartItemsRepository;

impl MemoryCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn create_cart_item(
        &self,
        tx: &mut CartTransaction,
        menu_item: MenuItemUuid,
        line: Line,
        now: Timestamp,
    ) -> CartItem {
        let cart = tx.cart_mut();
        let item = CartItem::new(cart.uuid, menu_item, line, now);

        cart.items.push(item.clone());
        cart.updated_at = now;

        item
    }

    /// Returns `Ok(None)` when the cart has no such item.
    pub(crate) fn update_cart_item_quantity(
        &self,
        tx: &mut CartTransaction,
        item: CartItemUuid,
        quantity: Quantity,
        now: Timestamp,
    ) -> Result<Option<CartItem>, PricingError> {
        let cart = tx.cart_mut();

        let Some(existing) = cart.item_mut(item) else {
            return Ok(None);
        };

        existing.set_quantity(quantity, now)?;
        let updated = existing.clone();

        cart.updated_at = now;

        Ok(Some(updated))
    }

    pub(crate) fn delete_cart_item(
        &self,
        tx: &mut CartTransaction,
        item: CartItemUuid,
        now: Timestamp,
    ) -> usize {
        let cart = tx.cart_mut();
        let before = cart.items.len();

        cart.items.retain(|existing| existing.uuid != item);

        let rows_affected = before - cart.items.len();

        if rows_affected > 0 {
            cart.updated_at = now;
        }

        rows_affected
    }
}
