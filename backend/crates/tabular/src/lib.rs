//! In-memory tabular view: search filtering, multi-type sorting, and
//! clamped pagination over a record collection.
//!
//! The view is a linear pipeline (filter, then sort, then paginate) that is
//! recomputed on every read. Nothing is persisted and no operation can fail:
//! empty data yields zero pages and all navigation clamps to the valid range.
//!
//! Records expose typed cells through per-column accessors returning
//! [`CellValue`], so comparison and search dispatch on an explicit tagged
//! union instead of probing runtime types.

mod value;
mod view;

pub use value::{CellValue, compare_cells};
pub use view::{Column, DEFAULT_ROWS_PER_PAGE, SortDirection, TableView, TableViewBuilder};
