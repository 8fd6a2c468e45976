//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    ingredients::IngredientSelection, lines::Line, pricing::OrderSummary, quantity::Quantity,
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Amount cannot be displayed as money.
    #[error("amount {0} is too large to display")]
    AmountOutOfRange(u64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Menu item name
    pub name: String,

    /// Selected ingredients
    pub ingredients: IngredientSelection,

    /// Number of units
    pub quantity: Quantity,

    /// Price of one unit including surcharges
    pub unit_price: u64,

    /// Unit price × quantity
    pub total: u64,
}

impl ReceiptLine {
    /// Build a receipt line from a named cart line.
    pub fn from_line(name: impl Into<String>, line: &Line) -> Self {
        Self {
            name: name.into(),
            ingredients: line.ingredients().clone(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            total: line.total(),
        }
    }
}

/// Itemised receipt for a cart.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    summary: OrderSummary,
    currency: &'static Currency,
}

impl Receipt {
    /// Create a receipt.
    pub fn new(
        lines: Vec<ReceiptLine>,
        summary: OrderSummary,
        currency: &'static Currency,
    ) -> Self {
        Self {
            lines,
            summary,
            currency,
        }
    }

    /// Rendered lines.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Order summary.
    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    /// Write the receipt table and summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if an amount cannot be formatted or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Ingredients", "Qty", "Unit Price", "Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.ingredients.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"),
                line.quantity.to_string(),
                self.format_amount(line.unit_price)?,
                self.format_amount(line.total)?,
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}")?;

        let rows = [
            (" Subtotal:", self.summary.subtotal),
            (" Delivery:", self.summary.delivery_fee),
            (" Tax:", self.summary.tax),
            (" Total:", self.summary.total),
        ];

        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        for (label, amount) in rows {
            writeln!(out, "{label:<label_width$} {}", self.format_amount(amount)?)?;
        }

        writeln!(out)?;

        Ok(())
    }

    fn format_amount(&self, amount: u64) -> Result<String, ReceiptError> {
        let minor = i64::try_from(amount).map_err(|_err| ReceiptError::AmountOutOfRange(amount))?;

        Ok(Money::from_minor(minor, self.currency).to_string())
    }
}
