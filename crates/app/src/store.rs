//! In-memory cart storage
//!
//! Carts live behind their own async mutex. Mutations take that lock through a
//! [`CartTransaction`], edit a working copy and write it back on commit, so a
//! transaction dropped early (an error returned with `?`) leaves the stored
//! cart untouched.
//!
//! Lock order: index locks are never held while waiting on a cart mutex, with
//! the one exception of lazy creation, which holds the owner index while it
//! inserts into the cart table.

use std::sync::Arc;

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::{
    domain::carts::models::{Cart, CartItemUuid, CartUuid},
    identity::UserUuid,
};

#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    carts: RwLock<FxHashMap<CartUuid, Arc<Mutex<Cart>>>>,
    owners: Mutex<FxHashMap<UserUuid, CartUuid>>,
    items: RwLock<FxHashMap<CartItemUuid, CartUuid>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock a cart for mutation.
    pub async fn begin_cart_transaction(&self, cart: CartUuid) -> Option<CartTransaction> {
        let handle = self.tables.carts.read().await.get(&cart).cloned()?;
        let guard = handle.lock_owned().await;

        Some(CartTransaction::new(self.clone(), guard))
    }

    /// Lock the user's existing cart for mutation.
    pub async fn begin_user_cart_transaction(&self, user: UserUuid) -> Option<CartTransaction> {
        let cart = self.cart_uuid_for_user(user).await?;

        self.begin_cart_transaction(cart).await
    }

    /// Lock the user's cart for mutation, creating an empty one first when the
    /// user has none.
    pub async fn begin_or_create_user_cart_transaction(
        &self,
        user: UserUuid,
    ) -> CartTransaction {
        loop {
            let cart = {
                let mut owners = self.tables.owners.lock().await;

                match owners.get(&user) {
                    Some(cart) => *cart,
                    None => {
                        let cart = Cart::new(CartUuid::new(), user, Timestamp::now());
                        let uuid = cart.uuid;

                        self.tables
                            .carts
                            .write()
                            .await
                            .insert(uuid, Arc::new(Mutex::new(cart)));
                        owners.insert(user, uuid);

                        uuid
                    }
                }
            };

            // Carts are never removed from the table, so this only loops if
            // that ever changes.
            if let Some(tx) = self.begin_cart_transaction(cart).await {
                return tx;
            }
        }
    }

    /// Lock the cart holding `item` for mutation.
    ///
    /// Returns `None` when the item is unknown, or was removed while waiting
    /// for the cart lock.
    pub async fn begin_item_transaction(&self, item: CartItemUuid) -> Option<CartTransaction> {
        let cart = self.tables.items.read().await.get(&item).copied()?;
        let tx = self.begin_cart_transaction(cart).await?;

        tx.cart().item(item).is_some().then_some(tx)
    }

    /// Snapshot of a cart as of its last commit.
    pub async fn get_cart(&self, cart: CartUuid) -> Option<Cart> {
        let handle = self.tables.carts.read().await.get(&cart).cloned()?;
        let cart = handle.lock().await.clone();

        Some(cart)
    }

    /// UUID of the cart owned by `user`, if they have one.
    pub async fn cart_uuid_for_user(&self, user: UserUuid) -> Option<CartUuid> {
        self.tables.owners.lock().await.get(&user).copied()
    }
}

/// Exclusive access to one cart until committed or dropped.
#[derive(Debug)]
pub struct CartTransaction {
    store: Store,
    guard: OwnedMutexGuard<Cart>,
    working: Cart,
}

impl CartTransaction {
    fn new(store: Store, guard: OwnedMutexGuard<Cart>) -> Self {
        let working = guard.clone();

        Self {
            store,
            guard,
            working,
        }
    }

    /// Working copy, including uncommitted changes.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.working
    }

    pub(crate) fn cart_mut(&mut self) -> &mut Cart {
        &mut self.working
    }

    /// Write the working copy back and release the cart lock.
    pub async fn commit(mut self) -> Cart {
        {
            let mut index = self.store.tables.items.write().await;

            for item in &self.guard.items {
                if self.working.item(item.uuid).is_none() {
                    index.remove(&item.uuid);
                }
            }

            for item in &self.working.items {
                index.insert(item.uuid, self.working.uuid);
            }
        }

        *self.guard = self.working.clone();

        self.working
    }
}

#[cfg(test)]
mod tests {
    use crust::{ingredients::IngredientSelection, lines::Line, quantity::Quantity};
    use testresult::TestResult;

    use crate::domain::{carts::models::CartItem, catalog::models::MenuItemUuid};

    use super::*;

    fn item_for(cart: CartUuid) -> TestResult<CartItem> {
        let line = Line::new(IngredientSelection::default(), 500, Quantity::ONE)?;

        Ok(CartItem::new(cart, MenuItemUuid::new(), line, Timestamp::now()))
    }

    #[tokio::test]
    async fn creates_one_cart_per_user() -> TestResult {
        let store = Store::new();
        let user = UserUuid::new();

        let first = store.begin_or_create_user_cart_transaction(user).await;
        let cart = first.cart().uuid;
        drop(first);

        let second = store.begin_or_create_user_cart_transaction(user).await;

        assert_eq!(second.cart().uuid, cart, "expected the existing cart");
        assert_eq!(store.cart_uuid_for_user(user).await, Some(cart));

        Ok(())
    }

    #[tokio::test]
    async fn dropped_transactions_discard_changes() -> TestResult {
        let store = Store::new();
        let user = UserUuid::new();

        let mut tx = store.begin_or_create_user_cart_transaction(user).await;
        let cart = tx.cart().uuid;
        let item = item_for(cart)?;
        let item_uuid = item.uuid;
        tx.cart_mut().items.push(item);
        drop(tx);

        let stored = store.get_cart(cart).await.ok_or("cart missing")?;

        assert!(stored.is_empty(), "expected no items, got {stored:?}");
        assert!(store.begin_item_transaction(item_uuid).await.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn commit_indexes_added_and_removed_items() -> TestResult {
        let store = Store::new();
        let user = UserUuid::new();

        let mut tx = store.begin_or_create_user_cart_transaction(user).await;
        let cart = tx.cart().uuid;
        let item = item_for(cart)?;
        let item_uuid = item.uuid;
        tx.cart_mut().items.push(item);
        let committed = tx.commit().await;

        assert_eq!(committed.len(), 1);

        let mut tx = store
            .begin_item_transaction(item_uuid)
            .await
            .ok_or("item not indexed")?;

        assert_eq!(tx.cart().uuid, cart);

        tx.cart_mut().items.clear();
        tx.commit().await;

        assert!(store.begin_item_transaction(item_uuid).await.is_none());

        Ok(())
    }
}
