//! Sort, page and output types shared by the view engines and presenters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::FieldName;
use crate::row::Record;

/// Default number of rows per page in the console's tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: FieldName,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: FieldName, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: FieldName) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn descending(key: FieldName) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// Page size and 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub size: usize,
    pub number: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            number: 1,
        }
    }
}

/// Everything a presenter needs to draw one table page.
#[derive(Debug, Serialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "R: Serialize, R::Id: Serialize")
)]
pub struct ViewState<'a, R: Record> {
    pub page_rows: Vec<&'a R>,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub selected_id: Option<R::Id>,
    pub sort_key: Option<FieldName>,
    pub sort_direction: Option<SortDirection>,
    pub row_actions_enabled: bool,
}

impl<R: Record> ViewState<'_, R> {
    /// 1-based index of the first visible row, 0 when nothing is visible.
    pub fn first_row(&self) -> usize {
        if self.page_rows.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last visible row, 0 when nothing is visible.
    pub fn last_row(&self) -> usize {
        if self.page_rows.is_empty() {
            0
        } else {
            self.first_row() + self.page_rows.len() - 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
