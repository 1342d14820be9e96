//! Category types for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A catalog category.
///
/// The category set is fixed; every product carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Thriller,
    Fantasy,
}

impl Category {
    /// All categories in chip order.
    pub const ALL: [Category; 5] = [
        Category::Fiction,
        Category::NonFiction,
        Category::SelfHelp,
        Category::Thriller,
        Category::Fantasy,
    ];

    /// Display label, also the parse form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::SelfHelp => "Self-Help",
            Category::Thriller => "Thriller",
            Category::Fantasy => "Fantasy",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The selected category chip: either the "All" sentinel or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Label of the "All" chip.
    pub const ALL_LABEL: &'static str = "All";

    /// Every chip, "All" first, then categories in chip order.
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether a product in `category` passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
