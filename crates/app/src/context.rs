//! App Context

use std::sync::Arc;

use crust::{menu::Menu, pricing::SummaryPolicy};

use crate::{
    domain::{
        carts::{CartsService, MemoryCartsService},
        catalog::InMemoryCatalogService,
    },
    identity::InMemoryIdentityService,
    store::Store,
};

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<InMemoryCatalogService>,
    pub identity: Arc<InMemoryIdentityService>,
}

impl AppContext {
    /// Build an in-memory application around `menu`.
    #[must_use]
    pub fn from_menu(menu: &Menu, summary_policy: SummaryPolicy) -> Self {
        let catalog = Arc::new(InMemoryCatalogService::from_menu(menu));
        let identity = Arc::new(InMemoryIdentityService::new());

        let carts = MemoryCartsService::new(
            Store::new(),
            identity.clone(),
            catalog.clone(),
            summary_policy,
        );

        Self {
            carts: Arc::new(carts),
            catalog,
            identity,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("catalog", &self.catalog)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
