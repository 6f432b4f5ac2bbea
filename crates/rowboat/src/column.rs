//! Column descriptors: labeling, formatting, and sort participation.
//!
//! A [`Column`] describes how one field is read, labeled, and formatted
//! across all rows. Formatting goes through the column's [`CellKind`] unless
//! a custom renderer is supplied, in which case its output is used verbatim.
//!
//! # Example
//!
//! ```rust
//! use rowboat::column::{CellKind, Column};
//! use rowboat::value::CellValue;
//!
//! # #[derive(Clone)]
//! # struct Vendor;
//! let columns: Vec<Column<Vendor>> = vec![
//!     Column::new("name", "Vendor").sortable(true),
//!     Column::new("cost", "Cost").kind(CellKind::Number).sortable(true),
//!     Column::new("status", "Status").kind(CellKind::Badge),
//! ];
//! ```

use crate::value::CellValue;
use std::fmt;
use std::sync::Arc;

/// Selects the default formatter for a column when no renderer is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Plain text.
    #[default]
    Text,
    /// Thousands-grouped number.
    Number,
    /// Formatted calendar date.
    Date,
    /// Short status label rendered as a pill.
    Badge,
    /// No default formatter; a custom renderer is required.
    Action,
}

/// Custom cell formatter. Receives the cell value and the full row.
///
/// Renderers should return unstyled text; the table applies cell styling and
/// width fitting after rendering.
pub type CellRenderer<R> = Arc<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

/// Configuration for one displayed field.
pub struct Column<R> {
    /// Field name passed to [`crate::row::Row::cell`].
    pub key: String,
    /// Display header text.
    pub label: String,
    /// Whether activating the header triggers a sort.
    pub sortable: bool,
    /// Default formatter selection.
    pub kind: CellKind,
    /// Drop this column from rendering below the narrow breakpoint.
    /// Layout hint only; no data effect.
    pub hide_when_narrow: bool,
    renderer: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    /// Creates a text column with the given field key and header label.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            kind: CellKind::Text,
            hide_when_narrow: false,
            renderer: None,
        }
    }

    /// Sets the cell kind (builder pattern).
    #[must_use]
    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets whether the column is sortable (builder pattern).
    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Hides the column below the narrow breakpoint (builder pattern).
    #[must_use]
    pub fn hide_when_narrow(mut self, hide: bool) -> Self {
        self.hide_when_narrow = hide;
        self
    }

    /// Sets a custom cell renderer (builder pattern).
    ///
    /// Required for [`CellKind::Action`] columns.
    #[must_use]
    pub fn renderer(
        mut self,
        f: impl Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Returns whether a custom renderer is set.
    #[must_use]
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Produces the unstyled cell text for a row.
    ///
    /// A custom renderer wins over the kind default. Action columns have no
    /// default; the table validates at construction that they carry one.
    pub(crate) fn cell_text(&self, value: &CellValue, row: &R) -> String {
        match &self.renderer {
            Some(render) => render(value, row),
            None => match self.kind {
                CellKind::Action => String::new(),
                _ => value.to_string(),
            },
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            kind: self.kind,
            hide_when_narrow: self.hide_when_narrow,
            renderer: self.renderer.clone(),
        }
    }
}

// Manual Debug since CellRenderer doesn't implement Debug.
impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("kind", &self.kind)
            .field("hide_when_narrow", &self.hide_when_narrow)
            .field("has_renderer", &self.renderer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Unit;

    #[test]
    fn test_column_new_defaults() {
        let col: Column<Unit> = Column::new("name", "Name");
        assert_eq!(col.key, "name");
        assert_eq!(col.label, "Name");
        assert!(!col.sortable);
        assert_eq!(col.kind, CellKind::Text);
        assert!(!col.hide_when_narrow);
        assert!(!col.has_renderer());
    }

    #[test]
    fn test_column_builder() {
        let col: Column<Unit> = Column::new("cost", "Cost")
            .kind(CellKind::Number)
            .sortable(true)
            .hide_when_narrow(true);
        assert!(col.sortable);
        assert_eq!(col.kind, CellKind::Number);
        assert!(col.hide_when_narrow);
    }

    #[test]
    fn test_default_formatting_by_kind() {
        let col: Column<Unit> = Column::new("cost", "Cost").kind(CellKind::Number);
        let text = col.cell_text(&CellValue::Number(1200.0), &Unit);
        assert_eq!(text, "1,200");
    }

    #[test]
    fn test_custom_renderer_wins() {
        let col: Column<Unit> = Column::new("cost", "Cost")
            .kind(CellKind::Number)
            .renderer(|value, _| format!("${value}"));
        let text = col.cell_text(&CellValue::Number(1200.0), &Unit);
        assert_eq!(text, "$1,200");
    }

    #[test]
    fn test_action_without_renderer_is_blank() {
        let col: Column<Unit> = Column::new("ops", "Actions").kind(CellKind::Action);
        assert_eq!(col.cell_text(&CellValue::Empty, &Unit), "");
    }

    #[test]
    fn test_renderer_sees_full_row() {
        #[derive(Clone)]
        struct Pair(&'static str);
        let col: Column<Pair> =
            Column::new("x", "X").renderer(|_, row: &Pair| row.0.to_uppercase());
        assert_eq!(col.cell_text(&CellValue::Empty, &Pair("hi")), "HI");
    }
}
