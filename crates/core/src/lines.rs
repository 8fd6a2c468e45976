//! Cart Lines

use crate::{
    ingredients::IngredientSelection,
    pricing::{PricingError, line_total},
    quantity::Quantity,
};

/// The priced part of a cart line: what was chosen, how many, and what it costs.
///
/// The ingredient selection is fixed once a line exists. Changing toppings means
/// removing the line and adding a new one; only the quantity may change in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    ingredients: IngredientSelection,
    unit_price: u64,
    quantity: Quantity,
    total: u64,
}

impl Line {
    /// Create a line.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the line total exceeds `u64`.
    pub fn new(
        ingredients: IngredientSelection,
        unit_price: u64,
        quantity: Quantity,
    ) -> Result<Self, PricingError> {
        let total = line_total(unit_price, quantity)?;

        Ok(Self {
            ingredients,
            unit_price,
            quantity,
            total,
        })
    }

    /// Selected ingredients.
    pub fn ingredients(&self) -> &IngredientSelection {
        &self.ingredients
    }

    /// Price of one unit, including surcharges.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Number of units.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Change the quantity and recompute the line total.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the new total exceeds `u64`; the line is
    /// left untouched.
    pub fn set_quantity(&mut self, quantity: Quantity) -> Result<(), PricingError> {
        self.total = line_total(self.unit_price, quantity)?;
        self.quantity = quantity;

        Ok(())
    }
}
