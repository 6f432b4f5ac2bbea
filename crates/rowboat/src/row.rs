//! Row trait connecting caller data to the table.
//!
//! The table never inspects row shape directly; it reads cells through
//! [`Row::cell`] and tracks selection through the stable identity returned by
//! [`Row::key`]. Two structurally identical rows with distinct keys are
//! distinct selections.
//!
//! # Example
//!
//! ```rust
//! use rowboat::row::Row;
//! use rowboat::value::CellValue;
//!
//! #[derive(Clone)]
//! struct Vendor {
//!     id: u32,
//!     name: String,
//!     cost: f64,
//! }
//!
//! impl Row for Vendor {
//!     type Key = u32;
//!
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn cell(&self, column: &str) -> CellValue {
//!         match column {
//!             "name" => self.name.as_str().into(),
//!             "cost" => self.cost.into(),
//!             _ => CellValue::Empty,
//!         }
//!     }
//! }
//! ```

use crate::value::CellValue;
use std::hash::Hash;

/// Trait for records displayed as table rows.
pub trait Row: Clone + Send + 'static {
    /// Stable identity used for selection tracking. Selection is keyed by
    /// this value, never by position, so re-sorting and re-paginating cannot
    /// corrupt it.
    type Key: Clone + Eq + Hash + Send + 'static;

    /// Returns the row's stable identity.
    fn key(&self) -> Self::Key;

    /// Reads the value for a column key. Unknown columns should return
    /// [`CellValue::Empty`].
    fn cell(&self, column: &str) -> CellValue;
}
