//! Row filtering by case-insensitive substring match.
//!
//! The filter narrows the effective row set ahead of sorting and pagination.
//! Only text-bearing cells (text and badge values) of the configured columns
//! participate; numeric and date cells are skipped.
//!
//! # Example
//!
//! ```rust
//! use rowboat::column::Column;
//! use rowboat::filter::filter_rows;
//! use rowboat::row::Row;
//! use rowboat::value::CellValue;
//!
//! #[derive(Clone)]
//! struct Guest(u32, &'static str);
//!
//! impl Row for Guest {
//!     type Key = u32;
//!     fn key(&self) -> u32 {
//!         self.0
//!     }
//!     fn cell(&self, _column: &str) -> CellValue {
//!         self.1.into()
//!     }
//! }
//!
//! let rows = vec![Guest(1, "Amy"), Guest(2, "Bob")];
//! let columns = vec![Column::new("name", "Name")];
//! let matched = filter_rows(&rows, &columns, "am");
//! assert_eq!(matched.len(), 1);
//! ```

use crate::column::Column;
use crate::row::Row;

/// Returns whether any text-bearing cell of the row matches the needle.
///
/// `needle` must already be lowercased.
fn matches_row<R: Row>(row: &R, columns: &[Column<R>], needle: &str) -> bool {
    columns.iter().any(|col| {
        row.cell(&col.key)
            .filter_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Produces the subset of `rows` matching `term`, preserving input order.
///
/// An empty term matches everything. The input is never mutated.
#[must_use]
pub fn filter_rows<R: Row>(rows: &[R], columns: &[Column<R>], term: &str) -> Vec<R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| matches_row(*row, columns, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Guest {
        id: u32,
        name: &'static str,
        rsvp: &'static str,
        party: f64,
    }

    impl Row for Guest {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }

        fn cell(&self, column: &str) -> CellValue {
            match column {
                "name" => self.name.into(),
                "rsvp" => CellValue::Badge(self.rsvp.to_string()),
                "party" => self.party.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn columns() -> Vec<Column<Guest>> {
        vec![
            Column::new("name", "Name"),
            Column::new("rsvp", "RSVP"),
            Column::new("party", "Party"),
        ]
    }

    fn guests() -> Vec<Guest> {
        vec![
            Guest { id: 1, name: "Amy Archer", rsvp: "confirmed", party: 2.0 },
            Guest { id: 2, name: "Bob Breeze", rsvp: "pending", party: 1.0 },
            Guest { id: 3, name: "Cam Cole", rsvp: "confirmed", party: 4.0 },
        ]
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(filter_rows(&guests(), &columns(), "").len(), 3);
        assert_eq!(filter_rows(&guests(), &columns(), "   ").len(), 3);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let matched = filter_rows(&guests(), &columns(), "AMY");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_badge_cells_participate() {
        let matched = filter_rows(&guests(), &columns(), "confirmed");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_numeric_cells_are_skipped() {
        // "2" appears in party counts but in no text cell.
        assert!(filter_rows(&guests(), &columns(), "2").is_empty());
    }

    #[test]
    fn test_input_order_preserved() {
        let matched = filter_rows(&guests(), &columns(), "c");
        let ids: Vec<_> = matched.iter().map(|g| g.id).collect();
        assert_eq!(ids, [1, 3]);
    }
}
