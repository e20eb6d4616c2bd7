use arp_model::{FieldName, Record};

/// Presentation-layer input forwarded to a [`DataView`](crate::DataView).
#[derive(Debug, Clone)]
pub enum ViewEvent<R: Record> {
    /// The search box text changed.
    QueryChanged(String),
    /// A column header was clicked.
    SortColumnClicked(FieldName),
    /// A different rows-per-page value was chosen.
    PageSizeChanged(usize),
    /// A page button was clicked (1-based).
    PageClicked(usize),
    /// A row's radio button was clicked.
    RowClicked(R::Id),
    /// A new search produced a fresh row set.
    RowSetReplaced(Vec<R>),
    /// The view's reset button was clicked.
    Reset,
}

impl<R: Record> ViewEvent<R> {
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::QueryChanged(_) => "query_changed",
            ViewEvent::SortColumnClicked(_) => "sort_column_clicked",
            ViewEvent::PageSizeChanged(_) => "page_size_changed",
            ViewEvent::PageClicked(_) => "page_clicked",
            ViewEvent::RowClicked(_) => "row_clicked",
            ViewEvent::RowSetReplaced(_) => "row_set_replaced",
            ViewEvent::Reset => "reset",
        }
    }
}
