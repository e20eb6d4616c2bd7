//! Configuration options for table views.

use arp_model::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// How sort keys are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Plain string comparison, so `"10"` sorts before `"2"`.
    #[default]
    Lexical,
    /// Digit runs compare by numeric value, so `"2"` sorts before `"10"`.
    Natural,
}

/// How a descending sort orders rows with equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescendingOrder {
    /// Reverse the ascending result; equal rows swap relative order.
    #[default]
    Reverse,
    /// Negate the comparator; equal rows keep input order.
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOptions {
    #[serde(default)]
    pub collation: Collation,
    #[serde(default)]
    pub descending: DescendingOrder,
}

/// Options controlling a data view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Initial rows per page.
    pub page_size: usize,

    /// Sort key comparison.
    pub collation: Collation,

    /// Tie order under descending sort.
    pub descending: DescendingOrder,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            collation: Collation::default(),
            descending: DescendingOrder::default(),
        }
    }
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    #[must_use]
    pub fn with_descending(mut self, descending: DescendingOrder) -> Self {
        self.descending = descending;
        self
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            collation: self.collation,
            descending: self.descending,
        }
    }
}
