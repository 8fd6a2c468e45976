//! Crust
//!
//! Crust is the pricing core behind customisable pizza carts: quantities, ingredient
//! selections, menu item pricing, line totals and order summaries.

pub mod fixtures;
pub mod ingredients;
pub mod lines;
pub mod menu;
pub mod pricing;
pub mod quantity;
pub mod receipt;
