//! The data view controller: owns one table's row snapshot and view state.
//!
//! Every recomputation runs filter → sort → paginate in that order. The
//! filtered and sorted ordering is memoized as row indices and dropped
//! whenever the rows, the query, the search fields or the sort spec change;
//! paging and selection changes reuse it.

use std::borrow::Cow;
use std::cell::OnceCell;

use arp_model::{
    ActionKind, FieldName, PageSpec, Record, RowSet, Scalar, SortDirection, SortSpec, ViewState,
};
use tracing::{debug, trace, warn};

use crate::error::{Result, ViewError};
use crate::event::ViewEvent;
use crate::filter::filter;
use crate::options::ViewOptions;
use crate::paginate::{page_bounds, total_pages};
use crate::selection::Selection;
use crate::sort::sort;

#[derive(Debug, Clone)]
pub struct DataView<R: Record> {
    rows: RowSet<R>,
    query: String,
    search_fields: Option<Vec<FieldName>>,
    sort: Option<SortSpec>,
    page: PageSpec,
    selection: Selection<R::Id>,
    options: ViewOptions,
    ordered: OnceCell<Vec<usize>>,
}

impl<R: Record> DataView<R> {
    pub fn new(rows: RowSet<R>, options: ViewOptions) -> Result<Self> {
        if options.page_size == 0 {
            return Err(ViewError::invalid("page_size", "page size must be positive"));
        }
        Ok(Self {
            rows,
            query: String::new(),
            search_fields: None,
            sort: None,
            page: PageSpec {
                size: options.page_size,
                number: 1,
            },
            selection: Selection::new(),
            options,
            ordered: OnceCell::new(),
        })
    }

    /// Build a view over `rows`, checking that their ids are unique.
    pub fn from_rows(rows: Vec<R>, options: ViewOptions) -> Result<Self> {
        Self::new(RowSet::new(rows)?, options)
    }

    pub fn rows(&self) -> &RowSet<R> {
        &self.rows
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_fields(&self) -> Option<&[FieldName]> {
        self.search_fields.as_deref()
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page_spec(&self) -> PageSpec {
        self.page
    }

    pub fn selection(&self) -> &Selection<R::Id> {
        &self.selection
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query_len = self.query.len(), "query changed");
        self.page.number = 1;
        self.invalidate();
    }

    /// Restrict the search haystack to `fields`; `None` searches every field.
    pub fn set_search_fields(&mut self, fields: Option<Vec<FieldName>>) {
        self.search_fields = fields;
        self.page.number = 1;
        self.invalidate();
    }

    /// Column-header click: the active key flips direction, any other key
    /// starts ascending.
    pub fn set_sort(&mut self, key: FieldName) {
        let direction = match &self.sort {
            Some(active) if active.key == key => active.direction.toggled(),
            _ => SortDirection::Asc,
        };
        debug!(key = %key, direction = %direction, "sort changed");
        self.set_sort_spec(Some(SortSpec::new(key, direction)));
    }

    pub fn set_sort_spec(&mut self, spec: Option<SortSpec>) {
        self.sort = spec;
        self.page.number = 1;
        self.invalidate();
    }

    pub fn clear_sort(&mut self) {
        self.set_sort_spec(None);
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(ViewError::invalid("page_size", "page size must be positive"));
        }
        debug!(page_size = size, "page size changed");
        self.page.size = size;
        self.page.number = 1;
        Ok(())
    }

    /// Move to page `number`, clamped to the last page.
    pub fn set_page(&mut self, number: usize) -> Result<()> {
        if number == 0 {
            return Err(ViewError::invalid("page_number", "page numbers start at 1"));
        }
        let last = total_pages(self.ordered_indices().len(), self.page.size);
        self.page.number = number.min(last);
        debug!(requested = number, page = self.page.number, "page changed");
        Ok(())
    }

    /// Select the row with `id`. Ids outside the row set are ignored and
    /// reported as `false`.
    pub fn select_row(&mut self, id: R::Id) -> bool {
        if !self.rows.contains(&id) {
            warn!(row_id = %id, "ignoring click on unknown row");
            return false;
        }
        trace!(row_id = %id, "row selected");
        self.selection.select(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Swap in a new row snapshot. The selection is cleared and the page
    /// number re-clamped.
    pub fn replace_rows(&mut self, rows: Vec<R>) -> Result<()> {
        self.rows = RowSet::new(rows)?;
        debug!(rows = self.rows.len(), "row set replaced");
        self.selection.clear();
        self.invalidate();
        self.clamp_page();
        Ok(())
    }

    /// Append a newly created row; its id must be new to the set.
    pub fn insert_row(&mut self, row: R) -> Result<()> {
        self.rows.insert(row)?;
        self.invalidate();
        Ok(())
    }

    /// Swap the row sharing `row`'s id for `row`; returns the old row.
    pub fn replace_row(&mut self, row: R) -> Result<R> {
        let id = row.id();
        let previous = self
            .rows
            .replace(row)
            .ok_or_else(|| ViewError::UnknownRow(id.to_string()))?;
        self.invalidate();
        self.clamp_page();
        Ok(previous)
    }

    /// Drop the row with `id`, clearing the selection if it pointed there.
    pub fn remove_row(&mut self, id: &R::Id) -> Option<R> {
        let removed = self.rows.remove(id)?;
        self.selection.retain_if(|selected| selected != id);
        self.invalidate();
        self.clamp_page();
        Some(removed)
    }

    /// Back to an unfiltered, unsorted first page with nothing selected.
    pub fn reset(&mut self) {
        self.query.clear();
        self.sort = None;
        self.page.number = 1;
        self.selection.clear();
        self.invalidate();
        debug!("view reset");
    }

    pub fn apply(&mut self, event: ViewEvent<R>) -> Result<()> {
        trace!(event = event.name(), "applying view event");
        match event {
            ViewEvent::QueryChanged(query) => self.set_query(query),
            ViewEvent::SortColumnClicked(key) => self.set_sort(key),
            ViewEvent::PageSizeChanged(size) => self.set_page_size(size)?,
            ViewEvent::PageClicked(number) => self.set_page(number)?,
            ViewEvent::RowClicked(id) => {
                self.select_row(id);
            }
            ViewEvent::RowSetReplaced(rows) => self.replace_rows(rows)?,
            ViewEvent::Reset => self.reset(),
        }
        Ok(())
    }

    /// The selected id if that row survives the current filter.
    pub fn effective_selection(&self) -> Option<&R::Id> {
        let selected = self.selection.current()?;
        let rows = self.rows.rows();
        self.ordered_indices()
            .iter()
            .any(|&idx| rows[idx].id() == *selected)
            .then_some(selected)
    }

    /// Row-level actions need a visible selection; the rest are always on.
    pub fn is_action_enabled(&self, kind: ActionKind) -> bool {
        !kind.requires_selection() || self.effective_selection().is_some()
    }

    /// Number of rows left after filtering.
    pub fn filtered_len(&self) -> usize {
        self.ordered_indices().len()
    }

    /// Every row after filtering and sorting, across all pages.
    pub fn ordered_rows(&self) -> Vec<&R> {
        let rows = self.rows.rows();
        self.ordered_indices().iter().map(|&idx| &rows[idx]).collect()
    }

    pub fn visible_state(&self) -> ViewState<'_, R> {
        let rows = self.rows.rows();
        let ordered = self.ordered_indices();
        let bounds = page_bounds(ordered.len(), self.page.size, self.page.number);
        let page_rows = ordered[bounds.start..bounds.end]
            .iter()
            .map(|&idx| &rows[idx])
            .collect();
        let selected_id = self.effective_selection().cloned();
        let row_actions_enabled = selected_id.is_some();
        ViewState {
            page_rows,
            total: ordered.len(),
            total_pages: bounds.total_pages,
            current_page: bounds.safe_page,
            page_size: self.page.size,
            selected_id,
            sort_key: self.sort.as_ref().map(|spec| spec.key.clone()),
            sort_direction: self.sort.as_ref().map(|spec| spec.direction),
            row_actions_enabled,
        }
    }

    fn ordered_indices(&self) -> &[usize] {
        self.ordered.get_or_init(|| {
            let indexed: Vec<Indexed<'_, R>> = self
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| Indexed { index, row })
                .collect();
            let filtered = filter(&indexed, &self.query, self.search_fields.as_deref());
            let sorted = sort(filtered, self.sort.as_ref(), self.options.sort_options());
            sorted.into_iter().map(|item| item.index).collect()
        })
    }

    fn invalidate(&mut self) {
        self.ordered.take();
    }

    fn clamp_page(&mut self) {
        let last = total_pages(self.ordered_indices().len(), self.page.size);
        self.page.number = self.page.number.clamp(1, last);
    }
}

/// A borrowed row tagged with its position in the snapshot, so the engines'
/// output can be memoized as indices.
struct Indexed<'a, R> {
    index: usize,
    row: &'a R,
}

impl<R: Record> Record for Indexed<'_, R> {
    type Id = R::Id;

    fn id(&self) -> Self::Id {
        self.row.id()
    }

    fn value(&self, field: &str) -> Option<Cow<'_, Scalar>> {
        self.row.value(field)
    }

    fn values(&self) -> Vec<Cow<'_, Scalar>> {
        self.row.values()
    }
}
