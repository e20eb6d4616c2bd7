//! Data model for the academic record console's table views.

pub mod action;
pub mod error;
pub mod ids;
pub mod row;
pub mod scalar;
pub mod view;

pub use action::{ActionCatalog, ActionEntry, ActionKind, ActionStyle, ButtonColor};
pub use error::{ModelError, Result};
pub use ids::{DEFAULT_ID_FIELD, FieldName, RowId};
pub use row::{FieldList, Record, Row, RowSet};
pub use scalar::Scalar;
pub use view::{DEFAULT_PAGE_SIZE, PageSpec, SortDirection, SortSpec, ViewState};
