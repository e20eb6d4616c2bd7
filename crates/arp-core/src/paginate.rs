//! Page slicing with a clamped page number.

use crate::error::{Result, ViewError};

/// One visible page of an ordered row list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    pub total: usize,
    pub total_pages: usize,
    /// The requested page clamped into `[1, total_pages]`.
    pub safe_page: usize,
    /// 1-based position of the first row on the page, 0 when empty.
    pub first_row: usize,
    /// 1-based position of the last row on the page, 0 when empty.
    pub last_row: usize,
}

/// Slice bounds of a page, computed without validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageBounds {
    pub total_pages: usize,
    pub safe_page: usize,
    pub start: usize,
    pub end: usize,
}

/// `max(1, ceil(total / page_size))`. `page_size` must be positive.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

pub(crate) fn page_bounds(total: usize, page_size: usize, page_number: usize) -> PageBounds {
    let total_pages = total_pages(total, page_size);
    let safe_page = page_number.min(total_pages);
    let start = if total == 0 {
        0
    } else {
        (safe_page - 1) * page_size
    };
    let end = (start + page_size).min(total);
    PageBounds {
        total_pages,
        safe_page,
        start,
        end,
    }
}

/// Slice page `page_number` (1-based) of `rows` at `page_size` rows per page.
///
/// Page numbers past the end clamp to the last page. A zero page size or
/// page number is rejected.
pub fn paginate<T>(rows: &[T], page_size: usize, page_number: usize) -> Result<Page<'_, T>> {
    if page_size == 0 {
        return Err(ViewError::invalid("page_size", "page size must be positive"));
    }
    if page_number == 0 {
        return Err(ViewError::invalid(
            "page_number",
            "page numbers start at 1",
        ));
    }
    let bounds = page_bounds(rows.len(), page_size, page_number);
    let slice = &rows[bounds.start..bounds.end];
    let (first_row, last_row) = if slice.is_empty() {
        (0, 0)
    } else {
        (bounds.start + 1, bounds.end)
    };
    Ok(Page {
        rows: slice,
        total: rows.len(),
        total_pages: bounds.total_pages,
        safe_page: bounds.safe_page,
        first_row,
        last_row,
    })
}
