//! Sort engine: single-column, stable, direction-aware ordering.
//!
//! Sorting is a pure function of the input rows and a [`SortState`]; the
//! input is never mutated and a fresh vector is returned so the caller's
//! array stays comparable across renders.
//!
//! # Example
//!
//! ```rust
//! use rowboat::sort::{Direction, SortState};
//!
//! let mut state = SortState::new();
//! state.toggle("cost");
//! assert_eq!(state.direction(), Direction::Ascending);
//!
//! // Toggling the active column flips direction.
//! state.toggle("cost");
//! assert_eq!(state.direction(), Direction::Descending);
//!
//! // A new column becomes active ascending.
//! state.toggle("name");
//! assert_eq!(state.column(), Some("name"));
//! assert_eq!(state.direction(), Direction::Ascending);
//! ```

use crate::row::Row;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first.
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies the direction to a single comparison.
    ///
    /// Descending negates each comparison rather than reversing a sorted
    /// vector; `Equal` stays `Equal`, so ties keep their original relative
    /// order under a stable sort in both directions.
    #[must_use]
    pub const fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

/// Current sort configuration: at most one active column.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    column: Option<String>,
    direction: Direction,
}

impl SortState {
    /// Creates an inactive sort state (rows keep input order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active column key, if any.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the current direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether the given column is the active sort column.
    #[must_use]
    pub fn is_active(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }

    /// Activates a column: the active column flips direction, a new column
    /// starts ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.is_active(column) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(column.to_string());
            self.direction = Direction::Ascending;
        }
    }

    /// Deactivates sorting; rows return to input order.
    pub fn clear(&mut self) {
        self.column = None;
        self.direction = Direction::Ascending;
    }

    /// Tri-state header indicator for a sortable column.
    #[must_use]
    pub fn indicator(&self, column: &str) -> &'static str {
        if self.is_active(column) {
            match self.direction {
                Direction::Ascending => "↑",
                Direction::Descending => "↓",
            }
        } else {
            "↕"
        }
    }
}

/// Produces a sorted copy of `rows` according to `state`.
///
/// An inactive state is a stable passthrough. Otherwise rows are stably
/// sorted by the natural ordering of each row's value in the active column,
/// so equal values preserve their original relative order.
#[must_use]
pub fn sort_rows<R: Row>(rows: &[R], state: &SortState) -> Vec<R> {
    let mut sorted = rows.to_vec();
    let Some(column) = state.column() else {
        return sorted;
    };
    let direction = state.direction();
    sorted.sort_by(|a, b| direction.apply(a.cell(column).natural_cmp(&b.cell(column))));
    sorted
}
