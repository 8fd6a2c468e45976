//! Carts Repository

use jiff::Timestamp;

use crate::{
    domain::carts::models::{Cart, CartUuid},
    identity::UserUuid,
    store::{CartTransaction, Store},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryCartsRepository;

impl MemoryCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart(&self, store: &Store, cart: CartUuid) -> Option<Cart> {
        store.get_cart(cart).await
    }

    pub(crate) async fn find_cart_for_user(&self, store: &Store, user: UserUuid) -> Option<Cart> {
        let cart = store.cart_uuid_for_user(user).await?;

        store.get_cart(cart).await
    }

    /// Whether `cart` is the cart recorded for its owner.
    pub(crate) async fn owner_resolves_to(&self, store: &Store, cart: &Cart) -> bool {
        store.cart_uuid_for_user(cart.user_uuid).await == Some(cart.uuid)
    }

    /// Empty the cart, returning the number of lines removed.
    pub(crate) fn clear_cart(&self, tx: &mut CartTransaction, now: Timestamp) -> usize {
        let cart = tx.cart_mut();
        let rows_affected = cart.items.len();

        cart.items.clear();
        cart.updated_at = now;

        rows_affected
    }
}
