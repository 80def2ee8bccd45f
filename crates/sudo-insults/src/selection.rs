//! Parsing the comma-separated category argument into a [`Selection`].

use indexmap::IndexSet;
use serde::Serialize;

use crate::category::Category;
use crate::error::{InsultsError, Result};

/// Alias token that selects every category.
pub const ALL_TOKEN: &str = "ALL";

/// Modifier token that switches to politically correct variants.
pub const PC_TOKEN: &str = "PC";

/// The validated set of categories for one run.
///
/// Always non-empty. Iteration order is the order categories were first
/// named; `ALL` expands to [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    categories: IndexSet<Category>,
    pc: bool,
}

impl Selection {
    /// Build a selection from already-typed categories.
    pub fn new(categories: impl IntoIterator<Item = Category>, pc: bool) -> Result<Self> {
        let categories: IndexSet<Category> = categories.into_iter().collect();
        if categories.is_empty() {
            return Err(InsultsError::EmptySelection);
        }
        Ok(Self { categories, pc })
    }

    /// Parse a raw argument such as `classic,2001,PC`.
    ///
    /// Tokens are uppercased as given. Any unknown token fails the whole
    /// parse, even alongside `ALL`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut categories = IndexSet::new();
        let mut all = false;
        let mut pc = false;

        for token in raw.split(',') {
            let token = token.to_uppercase();
            match token.as_str() {
                ALL_TOKEN => all = true,
                PC_TOKEN => pc = true,
                _ => {
                    categories.insert(token.parse::<Category>()?);
                }
            }
        }

        if all {
            categories = Category::ALL.into_iter().collect();
        }

        Self::new(categories, pc)
    }

    /// Selected categories in iteration order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a constructed selection.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Whether politically correct variants are selected.
    pub fn pc(&self) -> bool {
        self.pc
    }
}
