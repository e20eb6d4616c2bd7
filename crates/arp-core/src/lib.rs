//! Table view engines for the academic record console.
//!
//! The pieces compose leaf first: [`normalize()`] feeds the [`filter()`] and
//! [`sort()`] engines, [`paginate()`] slices the ordered rows, [`Selection`]
//! tracks the chosen row, and [`DataView`] wires them together behind the
//! single contract a presenter calls on every interaction.

pub mod controller;
pub mod error;
pub mod event;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod paginate;
pub mod selection;
pub mod sort;

pub use controller::DataView;
pub use error::{Result, ViewError};
pub use event::ViewEvent;
pub use filter::{filter, haystack};
pub use normalize::{CharClass, collation_key, normalize, normalize_str, primary_weight};
pub use options::{Collation, DescendingOrder, SortOptions, ViewOptions};
pub use paginate::{Page, paginate, total_pages};
pub use selection::Selection;
pub use sort::{natural_cmp, sort};
