//! Ingredients

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ingredient, identified by the name the catalog publishes it under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ingredient(String);

impl Ingredient {
    /// Create an ingredient from its catalog name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Catalog name of the ingredient.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ingredient {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Ingredient {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Ingredient {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ingredients chosen for a single cart line.
///
/// Selections behave as sets: duplicates collapse and members are kept sorted, so two
/// selections with the same ingredients are equal regardless of the order they were
/// picked in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Ingredient>", into = "Vec<Ingredient>")]
pub struct IngredientSelection(SmallVec<[Ingredient; 4]>);

impl IngredientSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct ingredients selected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `ingredient` is part of the selection.
    pub fn contains(&self, ingredient: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(ingredient))
            .is_ok()
    }

    /// Iterate the selection in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.0.iter()
    }
}

impl FromIterator<Ingredient> for IngredientSelection {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut ingredients: SmallVec<[Ingredient; 4]> = iter.into_iter().collect();

        ingredients.sort_unstable();
        ingredients.dedup();

        Self(ingredients)
    }
}

impl<'a> FromIterator<&'a str> for IngredientSelection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Ingredient::from).collect()
    }
}

impl From<Vec<Ingredient>> for IngredientSelection {
    fn from(ingredients: Vec<Ingredient>) -> Self {
        ingredients.into_iter().collect()
    }
}

impl From<IngredientSelection> for Vec<Ingredient> {
    fn from(selection: IngredientSelection) -> Self {
        selection.0.into_vec()
    }
}

impl<'a> IntoIterator for &'a IngredientSelection {
    type Item = &'a Ingredient;
    type IntoIter = std::slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for IngredientSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, ingredient) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            f.write_str(ingredient.as_str())?;
        }

        Ok(())
    }
}
