//! Menu Items

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::Currency;

use crate::{
    ingredients::{Ingredient, IngredientSelection},
    pricing::PricingError,
};

/// A priced menu item and the ingredients a customer may pick for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display name
    pub name: String,

    /// Base price in minor units, before any ingredient surcharges
    pub base_price: u64,

    /// Ingredients that may be selected for this item
    pub ingredients: FxHashSet<Ingredient>,
}

impl MenuItem {
    /// Create a menu item with no selectable ingredients.
    pub fn new(name: impl Into<String>, base_price: u64) -> Self {
        Self {
            name: name.into(),
            base_price,
            ingredients: FxHashSet::default(),
        }
    }

    /// Add a selectable ingredient.
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<Ingredient>) -> Self {
        self.ingredients.insert(ingredient.into());
        self
    }

    /// Whether `ingredient` may be selected for this item.
    pub fn offers(&self, ingredient: &str) -> bool {
        self.ingredients.contains(ingredient)
    }

    /// Check that every selected ingredient is offered for this item.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::IneligibleIngredient`] for the first ingredient (in
    /// canonical order) that is not offered.
    pub fn validate_selection(&self, selection: &IngredientSelection) -> Result<(), PricingError> {
        match selection.iter().find(|ingredient| !self.offers(ingredient.as_str())) {
            Some(ingredient) => Err(PricingError::IneligibleIngredient {
                ingredient: ingredient.clone(),
                item: self.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// A full menu: items keyed by slug plus the ingredient surcharge list.
#[derive(Debug, Clone)]
pub struct Menu {
    currency: &'static Currency,
    items: FxHashMap<String, MenuItem>,
    surcharges: FxHashMap<Ingredient, u64>,
}

impl Menu {
    /// Create a menu.
    pub fn new(
        currency: &'static Currency,
        items: FxHashMap<String, MenuItem>,
        surcharges: FxHashMap<Ingredient, u64>,
    ) -> Self {
        Self {
            currency,
            items,
            surcharges,
        }
    }

    /// Currency every price on the menu is expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Look up an item by slug.
    pub fn item(&self, key: &str) -> Option<&MenuItem> {
        self.items.get(key)
    }

    /// Iterate `(slug, item)` pairs.
    pub fn items(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.items.iter().map(|(key, item)| (key.as_str(), item))
    }

    /// Surcharge for selecting `ingredient`, in minor units.
    pub fn surcharge(&self, ingredient: &str) -> Option<u64> {
        self.surcharges.get(ingredient).copied()
    }

    /// Iterate `(ingredient, surcharge)` pairs.
    pub fn surcharges(&self) -> impl Iterator<Item = (&Ingredient, u64)> {
        self.surcharges
            .iter()
            .map(|(ingredient, surcharge)| (ingredient, *surcharge))
    }

    /// Number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> MenuItem {
        MenuItem::new("Margherita", 500)
            .with_ingredient("basil")
            .with_ingredient("extra-cheese")
    }

    #[test]
    fn offered_ingredients_validate() {
        let selection: IngredientSelection = ["basil", "extra-cheese"].into_iter().collect();

        assert_eq!(margherita().validate_selection(&selection), Ok(()));
    }

    #[test]
    fn empty_selection_is_always_valid() {
        assert_eq!(
            MenuItem::new("Garlic Bread", 250).validate_selection(&IngredientSelection::new()),
            Ok(())
        );
    }

    #[test]
    fn unknown_ingredient_is_rejected() {
        let selection: IngredientSelection = ["basil", "pineapple"].into_iter().collect();

        assert_eq!(
            margherita().validate_selection(&selection),
            Err(PricingError::IneligibleIngredient {
                ingredient: Ingredient::from("pineapple"),
                item: "Margherita".to_string(),
            })
        );
    }
}
