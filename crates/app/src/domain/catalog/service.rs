//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};

use crust::{ingredients::Ingredient, menu::Menu};

use crate::domain::catalog::{
    errors::CatalogError,
    models::{MenuItem, MenuItemUuid},
};

/// Catalog held in memory, built from a menu fixture or assembled by hand.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogService {
    currency: &'static Currency,
    items: FxHashMap<MenuItemUuid, MenuItem>,
    slugs: FxHashMap<String, MenuItemUuid>,
    surcharges: FxHashMap<Ingredient, u64>,
}

impl InMemoryCatalogService {
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            items: FxHashMap::default(),
            slugs: FxHashMap::default(),
            surcharges: FxHashMap::default(),
        }
    }

    /// Build a catalog from a menu, assigning every item a fresh UUID.
    #[must_use]
    pub fn from_menu(menu: &Menu) -> Self {
        let mut catalog = Self::new(menu.currency());

        for (ingredient, surcharge) in menu.surcharges() {
            catalog.set_surcharge(ingredient.clone(), surcharge);
        }

        for (slug, item) in menu.items() {
            catalog.add_item(slug, item.clone());
        }

        catalog
    }

    /// List an item under `slug`, returning its UUID.
    pub fn add_item(&mut self, slug: impl Into<String>, item: MenuItem) -> MenuItemUuid {
        let uuid = MenuItemUuid::new();

        self.items.insert(uuid, item);
        self.slugs.insert(slug.into(), uuid);

        uuid
    }

    /// Set the surcharge for selecting `ingredient`.
    pub fn set_surcharge(&mut self, ingredient: impl Into<Ingredient>, surcharge: u64) {
        self.surcharges.insert(ingredient.into(), surcharge);
    }

    /// UUID of the item listed under `slug`.
    #[must_use]
    pub fn menu_item_uuid(&self, slug: &str) -> Option<MenuItemUuid> {
        self.slugs.get(slug).copied()
    }

    /// Currency the catalog is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Default for InMemoryCatalogService {
    fn default() -> Self {
        Self::new(iso::INR)
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn get_menu_item(&self, menu_item: MenuItemUuid) -> Result<MenuItem, CatalogError> {
        self.items
            .get(&menu_item)
            .cloned()
            .ok_or(CatalogError::MenuItemNotFound(menu_item))
    }

    async fn get_ingredient_surcharge(&self, ingredient: &Ingredient) -> Result<u64, CatalogError> {
        self.surcharges
            .get(ingredient)
            .copied()
            .ok_or_else(|| CatalogError::IngredientNotFound(ingredient.clone()))
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve a menu item with its base price and selectable ingredients.
    async fn get_menu_item(&self, menu_item: MenuItemUuid) -> Result<MenuItem, CatalogError>;

    /// Retrieve the surcharge for selecting an ingredient.
    async fn get_ingredient_surcharge(&self, ingredient: &Ingredient) -> Result<u64, CatalogError>;
}

#[cfg(test)]
mod tests {
    use crust::fixtures::MenuFixture;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn lists_items_from_a_menu_fixture() -> TestResult {
        let fixture = MenuFixture::from_yaml(
            r#"
ingredients:
  olives: "25.00 INR"
items:
  margherita:
    name: Margherita
    price: "199.00 INR"
    ingredients: [olives]
"#,
        )?;

        let catalog = InMemoryCatalogService::from_menu(&Menu::try_from(fixture)?);

        let uuid = catalog
            .menu_item_uuid("margherita")
            .ok_or("margherita not listed")?;

        let item = catalog.get_menu_item(uuid).await?;

        assert_eq!(item.name, "Margherita");
        assert_eq!(item.base_price, 19900);
        assert!(item.offers("olives"));
        assert_eq!(
            catalog
                .get_ingredient_surcharge(&Ingredient::from("olives"))
                .await?,
            2500
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let catalog = InMemoryCatalogService::default();
        let uuid = MenuItemUuid::new();

        let result = catalog.get_menu_item(uuid).await;

        assert_eq!(result, Err(CatalogError::MenuItemNotFound(uuid)));
    }

    #[tokio::test]
    async fn unpriced_ingredient_is_not_found() {
        let catalog = InMemoryCatalogService::default();

        let result = catalog
            .get_ingredient_surcharge(&Ingredient::from("truffle"))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::IngredientNotFound(Ingredient::from("truffle")))
        );
    }
}
