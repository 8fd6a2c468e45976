//! Menu Fixtures

use std::path::Path;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::iso::{Currency, EUR, GBP, INR, USD};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, load_yaml},
    ingredients::Ingredient,
    menu::{Menu, MenuItem},
};

/// Menu document
///
/// ```yaml
/// ingredients:
///   extra-cheese: "40.00 INR"
/// items:
///   margherita:
///     name: Margherita
///     price: "199.00 INR"
///     ingredients: [extra-cheese]
/// ```
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Ingredient name -> surcharge (e.g., "40.00 INR")
    #[serde(default)]
    pub ingredients: FxHashMap<String, String>,

    /// Menu item key -> item fixture
    pub items: FxHashMap<String, MenuItemFixture>,
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Display name
    pub name: String,

    /// Base price (e.g., "199.00 INR")
    pub price: String,

    /// Ingredients that may be selected for this item
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl MenuFixture {
    /// Load a menu fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        load_yaml(path)
    }

    /// Parse a menu fixture from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }
}

impl TryFrom<MenuFixture> for Menu {
    type Error = FixtureError;

    fn try_from(fixture: MenuFixture) -> Result<Self, Self::Error> {
        let mut currency: Option<&'static Currency> = None;

        let mut surcharges = FxHashMap::default();

        for (name, price) in fixture.ingredients {
            let (minor_units, price_currency) = parse_price(&price)?;

            check_currency(&mut currency, price_currency)?;

            surcharges.insert(Ingredient::from(name), minor_units);
        }

        let mut items = FxHashMap::default();

        for (key, item) in fixture.items {
            let (base_price, price_currency) = parse_price(&item.price)?;

            check_currency(&mut currency, price_currency)?;

            let mut menu_item = MenuItem::new(item.name, base_price);

            for ingredient in item.ingredients {
                if !surcharges.contains_key(ingredient.as_str()) {
                    return Err(FixtureError::UnknownIngredient {
                        item: key,
                        ingredient,
                    });
                }

                menu_item = menu_item.with_ingredient(ingredient);
            }

            items.insert(key, menu_item);
        }

        Ok(Menu::new(currency.unwrap_or(INR), items, surcharges))
    }
}

fn check_currency(
    expected: &mut Option<&'static Currency>,
    found: &'static Currency,
) -> Result<(), FixtureError> {
    match expected {
        Some(currency) if *currency != found => Err(FixtureError::CurrencyMismatch(
            currency.iso_alpha_code.to_string(),
            found.iso_alpha_code.to_string(),
        )),
        Some(_) => Ok(()),
        None => {
            *expected = Some(found);
            Ok(())
        }
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is negative or cannot be parsed as a decimal, or if the currency
/// code is not recognized.
pub fn parse_price(s: &str) -> Result<(u64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "INR" => INR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const MENU: &str = r#"
ingredients:
  extra-cheese: "40.00 INR"
  olives: "25.50 INR"
items:
  margherita:
    name: Margherita
    price: "199.00 INR"
    ingredients: [extra-cheese, olives]
  garlic-bread:
    name: Garlic Bread
    price: "99 INR"
"#;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99INR");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00 INR");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_converts_to_minor_units() -> TestResult {
        let (minor, currency) = parse_price("25.50 INR")?;

        assert_eq!(minor, 2550);
        assert_eq!(currency, INR);

        Ok(())
    }

    #[test]
    fn menu_fixture_builds_menu() -> TestResult {
        let menu = Menu::try_from(MenuFixture::from_yaml(MENU)?)?;

        let margherita = menu.item("margherita").ok_or("margherita missing")?;

        assert_eq!(margherita.name, "Margherita");
        assert_eq!(margherita.base_price, 19900);
        assert!(margherita.offers("olives"));
        assert_eq!(menu.surcharge("olives"), Some(2550));
        assert_eq!(menu.currency(), INR);
        assert_eq!(menu.len(), 2);

        Ok(())
    }

    #[test]
    fn menu_fixture_rejects_unpriced_ingredients() -> TestResult {
        let yaml = r#"
items:
  margherita:
    name: Margherita
    price: "199.00 INR"
    ingredients: [truffle]
"#;

        let result = Menu::try_from(MenuFixture::from_yaml(yaml)?);

        assert!(matches!(
            result,
            Err(FixtureError::UnknownIngredient { ingredient, .. }) if ingredient == "truffle"
        ));

        Ok(())
    }

    #[test]
    fn menu_fixture_rejects_mixed_currencies() -> TestResult {
        let yaml = r#"
items:
  margherita:
    name: Margherita
    price: "199.00 INR"
  pepperoni:
    name: Pepperoni
    price: "9.99 GBP"
"#;

        let result = Menu::try_from(MenuFixture::from_yaml(yaml)?);

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }
}
