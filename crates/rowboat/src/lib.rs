#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Rowboat
//!
//! A sortable, paginated, selectable data table widget for terminal UIs.
//!
//! Rowboat renders arbitrary row data through column descriptors and keeps
//! three independent state slices:
//! - **sort** - single-column stable ordering with direction toggling
//! - **paginator** - fixed-size pages with boundary-rejecting navigation
//! - **selection** - row membership keyed by stable identity
//!
//! plus a substring **filter** over text-bearing cells. Rows flow one way on
//! every render: raw rows → filter → sort → paginate → view. Selection is
//! tracked by key, not position, so re-sorting and re-paginating never
//! corrupt it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rowboat::prelude::*;
//!
//! let columns = vec![
//!     Column::new("name", "Vendor").sortable(true),
//!     Column::new("cost", "Cost").kind(CellKind::Number).sortable(true),
//!     Column::new("status", "Status").kind(CellKind::Badge),
//! ];
//!
//! let mut table = DataTable::new(columns)?.rows(vendors).page_size(10);
//! table.sort_by("cost");
//! println!("{}", table.view());
//! ```

pub mod column;
pub mod filter;
pub mod paginator;
pub mod row;
pub mod selection;
pub mod sort;
pub mod style;
pub mod value;

// The composed widget
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::{CellKind, CellRenderer, Column};
    pub use crate::filter::filter_rows;
    pub use crate::paginator::{IndicatorType, Paginator};
    pub use crate::row::Row;
    pub use crate::selection::Selection;
    pub use crate::sort::{Direction, SortState, sort_rows};
    pub use crate::style::{Style, Styles};
    pub use crate::table::{DataTable, TableError, ViewMode};
    pub use crate::value::CellValue;
}
