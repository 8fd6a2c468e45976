//! Order Fixtures

use std::path::Path;

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, load_yaml},
    ingredients::IngredientSelection,
};

/// Order document: the lines a customer wants in their cart.
///
/// ```yaml
/// lines:
///   - item: margherita
///     quantity: 2
///     ingredients: [extra-cheese]
/// ```
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Requested lines, in the order they are added
    pub lines: Vec<OrderLineFixture>,
}

/// Order Line Fixture
#[derive(Debug, Deserialize)]
pub struct OrderLineFixture {
    /// Menu item key
    pub item: String,

    /// Requested quantity; validated when the line is added to a cart
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Selected ingredients
    #[serde(default)]
    pub ingredients: IngredientSelection,
}

fn default_quantity() -> i64 {
    1
}

impl OrderFixture {
    /// Load an order fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        load_yaml(path)
    }

    /// Parse an order fixture from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn quantity_defaults_to_one() -> TestResult {
        let order = OrderFixture::from_yaml("lines:\n  - item: margherita\n")?;

        let line = order.lines.first().ok_or("line missing")?;

        assert_eq!(line.quantity, 1);
        assert!(line.ingredients.is_empty());

        Ok(())
    }

    #[test]
    fn keeps_line_order_and_quantities() -> TestResult {
        let yaml = r"
lines:
  - item: margherita
    quantity: 2
    ingredients: [olives, extra-cheese]
  - item: garlic-bread
    quantity: 0
";

        let order = OrderFixture::from_yaml(yaml)?;

        let items: Vec<&str> = order.lines.iter().map(|line| line.item.as_str()).collect();

        assert_eq!(items, ["margherita", "garlic-bread"]);
        assert_eq!(order.lines.get(1).map(|line| line.quantity), Some(0));
        assert_eq!(
            order.lines.first().map(|line| line.ingredients.len()),
            Some(2)
        );

        Ok(())
    }
}
