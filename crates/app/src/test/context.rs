//! Test context for service-level tests.

use std::sync::Arc;

use rust_decimal::Decimal;

use crust::{menu::MenuItem, pricing::SummaryPolicy};

use crate::{
    domain::{
        carts::MemoryCartsService,
        catalog::{InMemoryCatalogService, models::MenuItemUuid},
    },
    identity::{InMemoryIdentityService, SessionCredential, UserUuid},
    store::Store,
};

/// Flat delivery fee used by test summaries.
pub(crate) const DELIVERY_FEE: u64 = 4000;

pub(crate) struct TestContext {
    pub store: Store,
    pub identity: Arc<InMemoryIdentityService>,
    pub carts: MemoryCartsService,

    /// 500, no selectable ingredients
    pub garlic_bread: MenuItemUuid,

    /// 300, offers olives (100), jalapeno (50) and extra-cheese (150)
    pub margherita: MenuItemUuid,
}

impl TestContext {
    pub fn new() -> Self {
        let mut catalog = InMemoryCatalogService::default();

        catalog.set_surcharge("olives", 100);
        catalog.set_surcharge("jalapeno", 50);
        catalog.set_surcharge("extra-cheese", 150);
        catalog.set_surcharge("anchovies", 200);

        let garlic_bread = catalog.add_item("garlic-bread", MenuItem::new("Garlic Bread", 500));

        let margherita = catalog.add_item(
            "margherita",
            MenuItem::new("Margherita", 300)
                .with_ingredient("olives")
                .with_ingredient("jalapeno")
                .with_ingredient("extra-cheese"),
        );

        let store = Store::new();
        let identity = Arc::new(InMemoryIdentityService::new());

        let policy = SummaryPolicy::new(DELIVERY_FEE, Decimal::new(18, 2))
            .unwrap_or_else(|_| SummaryPolicy::untaxed());

        Self {
            carts: MemoryCartsService::new(
                store.clone(),
                identity.clone(),
                Arc::new(catalog),
                policy,
            ),
            store,
            identity,
            garlic_bread,
            margherita,
        }
    }

    /// Open a session for a brand new user.
    pub async fn sign_in(&self) -> (UserUuid, SessionCredential) {
        let user = UserUuid::new();
        let credential = self.identity.open_session(user, None).await;

        (user, credential)
    }
}
