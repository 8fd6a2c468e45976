//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{Span, info, warn};

use crust::{
    lines::Line,
    pricing::{OrderSummary, SummaryPolicy, total_price, unit_price},
    quantity::Quantity,
};

use crate::{
    domain::{
        carts::{
            errors::{CartValidationError, CartsServiceError},
            models::{Cart, CartItem, CartItemUuid, CartUuid, NewCartItem},
            repositories::{MemoryCartItemsRepository, MemoryCartsRepository},
        },
        catalog::CatalogService,
    },
    identity::{IdentityService, SessionCredential, UserUuid},
    store::Store,
};

#[derive(Clone)]
pub struct MemoryCartsService {
    store: Store,
    identity: Arc<dyn IdentityService>,
    catalog: Arc<dyn CatalogService>,
    summary_policy: SummaryPolicy,
    carts_repository: MemoryCartsRepository,
    items_repository: MemoryCartItemsRepository,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new(
        store: Store,
        identity: Arc<dyn IdentityService>,
        catalog: Arc<dyn CatalogService>,
        summary_policy: SummaryPolicy,
    ) -> Self {
        Self {
            store,
            identity,
            catalog,
            summary_policy,
            carts_repository: MemoryCartsRepository::new(),
            items_repository: MemoryCartItemsRepository::new(),
        }
    }

    async fn resolve_caller(
        &self,
        credential: &SessionCredential,
    ) -> Result<UserUuid, CartsServiceError> {
        let user = self.identity.resolve_identity(credential).await?;

        Span::current().record("user_uuid", tracing::field::display(user));

        Ok(user)
    }

    async fn price_line(&self, item: NewCartItem) -> Result<Line, CartsServiceError> {
        let menu_item = self.catalog.get_menu_item(item.menu_item_uuid).await?;
        let quantity = Quantity::new(item.quantity)?;

        menu_item.validate_selection(&item.ingredients)?;

        let mut surcharges = Vec::with_capacity(item.ingredients.len());

        for ingredient in &item.ingredients {
            surcharges.push(self.catalog.get_ingredient_surcharge(ingredient).await?);
        }

        let unit_price = unit_price(menu_item.base_price, surcharges)?;

        Ok(Line::new(item.ingredients, unit_price, quantity)?)
    }

    async fn ensure_owner_resolves(&self, cart: &Cart) -> Result<(), CartsServiceError> {
        if self.carts_repository.owner_resolves_to(&self.store, cart).await {
            Ok(())
        } else {
            Err(CartValidationError::UnresolvedOwner.into())
        }
    }
}

impl fmt::Debug for MemoryCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCartsService")
            .field("store", &self.store)
            .field("summary_policy", &self.summary_policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for MemoryCartsService {
    #[tracing::instrument(
        name = "carts.service.add_item_to_cart",
        skip(self, credential, item),
        fields(
            user_uuid = tracing::field::Empty,
            menu_item_uuid = %item.menu_item_uuid,
            quantity = item.quantity,
            cart_uuid = tracing::field::Empty,
            cart_item_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn add_item_to_cart(
        &self,
        credential: &SessionCredential,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        let user = self.resolve_caller(credential).await?;

        let menu_item_uuid = item.menu_item_uuid;
        let line = self.price_line(item).await?;

        let mut tx = self.store.begin_or_create_user_cart_transaction(user).await;

        let created =
            self.items_repository
                .create_cart_item(&mut tx, menu_item_uuid, line, Timestamp::now());

        tx.commit().await;

        let span = Span::current();

        span.record("cart_uuid", tracing::field::display(created.cart_uuid));
        span.record("cart_item_uuid", tracing::field::display(created.uuid));

        info!(total = created.total(), "added item to cart");

        Ok(created)
    }

    #[tracing::instrument(
        name = "carts.service.update_cart_item_quantity",
        skip(self, credential),
        fields(user_uuid = tracing::field::Empty, cart_item_uuid = %item),
        err
    )]
    async fn update_cart_item_quantity(
        &self,
        credential: &SessionCredential,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartItem, CartsServiceError> {
        let user = self.resolve_caller(credential).await?;

        let mut tx = self
            .store
            .begin_item_transaction(item)
            .await
            .ok_or(CartsServiceError::CartItemNotFound)?;

        if tx.cart().user_uuid != user {
            warn!(cart_uuid = %tx.cart().uuid, "rejected update of another user's cart item");

            return Err(CartsServiceError::Authorization);
        }

        let quantity = Quantity::new(quantity)?;

        let updated = self
            .items_repository
            .update_cart_item_quantity(&mut tx, item, quantity, Timestamp::now())?
            .ok_or(CartsServiceError::CartItemNotFound)?;

        tx.commit().await;

        info!(total = updated.total(), "updated cart item quantity");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "carts.service.remove_item_from_cart",
        skip(self, credential),
        fields(user_uuid = tracing::field::Empty, cart_item_uuid = %item),
        err
    )]
    async fn remove_item_from_cart(
        &self,
        credential: &SessionCredential,
        item: CartItemUuid,
    ) -> Result<Cart, CartsServiceError> {
        let user = self.resolve_caller(credential).await?;

        let mut tx = self
            .store
            .begin_item_transaction(item)
            .await
            .ok_or(CartsServiceError::CartItemNotFound)?;

        if tx.cart().user_uuid != user {
            warn!(cart_uuid = %tx.cart().uuid, "rejected removal of another user's cart item");

            return Err(CartsServiceError::Authorization);
        }

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, item, Timestamp::now());

        if rows_affected == 0 {
            return Err(CartsServiceError::CartItemNotFound);
        }

        let cart = tx.commit().await;

        info!(remaining = cart.len(), "removed item from cart");

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.calculate_cart_totals",
        skip(self, cart),
        fields(cart_uuid = %cart.uuid, lines = cart.len()),
        err
    )]
    async fn calculate_cart_totals(&self, cart: &Cart) -> Result<u64, CartsServiceError> {
        self.ensure_owner_resolves(cart).await?;

        Ok(total_price(cart.line_totals())?)
    }

    #[tracing::instrument(
        name = "carts.service.summarize_cart",
        skip(self, cart),
        fields(cart_uuid = %cart.uuid, lines = cart.len()),
        err
    )]
    async fn summarize_cart(&self, cart: &Cart) -> Result<OrderSummary, CartsServiceError> {
        self.ensure_owner_resolves(cart).await?;

        Ok(OrderSummary::calculate(
            cart.line_totals(),
            &self.summary_policy,
        )?)
    }

    async fn find_cart_by_id(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        self.carts_repository
            .get_cart(&self.store, cart)
            .await
            .ok_or(CartsServiceError::CartNotFound)
    }

    async fn find_cart_by_user_id(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        self.carts_repository
            .find_cart_for_user(&self.store, user)
            .await
            .ok_or(CartsServiceError::CartNotFound)
    }

    #[tracing::instrument(
        name = "carts.service.find_cart_by_credential",
        skip(self, credential),
        fields(user_uuid = tracing::field::Empty),
        err
    )]
    async fn find_cart_by_credential(
        &self,
        credential: &SessionCredential,
    ) -> Result<Cart, CartsServiceError> {
        let user = self.resolve_caller(credential).await?;

        self.find_cart_by_user_id(user).await
    }

    #[tracing::instrument(
        name = "carts.service.clear_cart",
        skip(self),
        fields(user_uuid = %user, cart_uuid = tracing::field::Empty),
        err
    )]
    async fn clear_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self
            .store
            .begin_user_cart_transaction(user)
            .await
            .ok_or(CartsServiceError::CartNotFound)?;

        Span::current().record("cart_uuid", tracing::field::display(tx.cart().uuid));

        let removed = self.carts_repository.clear_cart(&mut tx, Timestamp::now());

        let cart = tx.commit().await;

        info!(removed, "cleared cart");

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add a customised menu item to the caller's cart, creating the cart on
    /// first use. Every call appends a new line.
    async fn add_item_to_cart(
        &self,
        credential: &SessionCredential,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError>;

    /// Change the quantity of one of the caller's cart items.
    async fn update_cart_item_quantity(
        &self,
        credential: &SessionCredential,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartItem, CartsServiceError>;

    /// Remove one of the caller's cart items, returning the updated cart.
    async fn remove_item_from_cart(
        &self,
        credential: &SessionCredential,
        item: CartItemUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Sum of the cart's line totals.
    async fn calculate_cart_totals(&self, cart: &Cart) -> Result<u64, CartsServiceError>;

    /// Subtotal, delivery fee, tax and grand total for the cart.
    async fn summarize_cart(&self, cart: &Cart) -> Result<OrderSummary, CartsServiceError>;

    /// Retrieve a single cart.
    async fn find_cart_by_id(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Retrieve the cart owned by `user`.
    async fn find_cart_by_user_id(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Retrieve the caller's own cart.
    async fn find_cart_by_credential(
        &self,
        credential: &SessionCredential,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove every item from the user's cart, keeping the cart itself.
    async fn clear_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;
}
