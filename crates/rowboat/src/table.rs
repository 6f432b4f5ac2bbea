//! Data table widget: sort, filter, paginate, select, render.
//!
//! [`DataTable`] owns three independent state slices (sort, pagination, and
//! selection) plus an optional row filter. Rows flow one way on every
//! render: raw rows → filter → sort → paginate → view. Selection is keyed by
//! row identity ([`Row::key`]), never by position, so view changes cannot
//! corrupt it.
//!
//! # Example
//!
//! ```rust
//! use rowboat::prelude::*;
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
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//!     fn cell(&self, column: &str) -> CellValue {
//!         match column {
//!             "name" => self.name.as_str().into(),
//!             "cost" => self.cost.into(),
//!             _ => CellValue::Empty,
//!         }
//!     }
//! }
//!
//! let columns = vec![
//!     Column::new("name", "Vendor").sortable(true),
//!     Column::new("cost", "Cost").kind(CellKind::Number).sortable(true),
//! ];
//!
//! let mut table = DataTable::new(columns)
//!     .unwrap()
//!     .rows(vec![
//!         Vendor { id: 1, name: "Petals & Co".into(), cost: 1800.0 },
//!         Vendor { id: 2, name: "Golden Hour Photo".into(), cost: 3200.0 },
//!     ])
//!     .page_size(10);
//!
//! table.sort_by("cost");
//! println!("{}", table.view());
//! ```

use crate::column::{CellKind, Column};
use crate::filter::filter_rows;
use crate::paginator::Paginator;
use crate::row::Row;
use crate::selection::Selection;
use crate::sort::{SortState, sort_rows};
use crate::style::Styles;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Layout selection. Layout only; no data effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Aligned columns with a header row.
    Table,
    /// One labeled card per row.
    Grid,
    /// Table above the narrow breakpoint, grid below it.
    #[default]
    Auto,
}

/// Column set rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two columns share a key.
    #[error("duplicate column key `{0}`")]
    DuplicateColumn(String),
    /// An action column has no renderer to produce its cells.
    #[error("action column `{0}` requires a custom renderer")]
    MissingRenderer(String),
}

/// Callback fired when a row is activated.
pub type RowClickCallback<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Callback fired with the full selection after every selection change.
pub type RowSelectCallback<R> = Arc<dyn Fn(&[R]) + Send + Sync>;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_WIDTH: usize = 80;
const DEFAULT_NARROW_BREAKPOINT: usize = 60;
const MAX_COLUMN_WIDTH: usize = 28;
const CELL_GAP: &str = "  ";

/// Data table model.
#[derive(Clone)]
pub struct DataTable<R: Row> {
    /// Styles for rendering.
    pub styles: Styles,
    /// Singular noun for the status bar.
    pub item_name_singular: String,
    /// Plural noun for the status bar.
    pub item_name_plural: String,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    sort: SortState,
    paginator: Paginator,
    selection: Selection<R::Key>,
    filter: Option<String>,
    selection_enabled: bool,
    pagination_enabled: bool,
    view_mode: ViewMode,
    width: usize,
    narrow_breakpoint: usize,
    empty_text: String,
    show_status_bar: bool,
    on_row_click: Option<RowClickCallback<R>>,
    on_row_select: Option<RowSelectCallback<R>>,
}

impl<R: Row> DataTable<R> {
    /// Creates a table over the given column set.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] when two columns share a key
    /// and [`TableError::MissingRenderer`] when an action column has no
    /// renderer.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.key.clone()) {
                return Err(TableError::DuplicateColumn(col.key.clone()));
            }
            if col.kind == CellKind::Action && !col.has_renderer() {
                return Err(TableError::MissingRenderer(col.key.clone()));
            }
        }

        Ok(Self {
            styles: Styles::default(),
            item_name_singular: "item".to_string(),
            item_name_plural: "items".to_string(),
            columns,
            rows: Vec::new(),
            sort: SortState::new(),
            paginator: Paginator::new().per_page(DEFAULT_PAGE_SIZE),
            selection: Selection::new(),
            filter: None,
            selection_enabled: false,
            pagination_enabled: true,
            view_mode: ViewMode::Auto,
            width: DEFAULT_WIDTH,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            empty_text: "No items.".to_string(),
            show_status_bar: true,
            on_row_click: None,
            on_row_select: None,
        })
    }

    /// Sets the rows (builder pattern).
    #[must_use]
    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self.sync_pages();
        self
    }

    /// Sets the page size (builder pattern). Clamped to at least 1.
    #[must_use]
    pub fn page_size(mut self, n: usize) -> Self {
        self.paginator = Paginator::new().per_page(n);
        self.sync_pages();
        self
    }

    /// Enables or disables selection (builder pattern). Off by default.
    #[must_use]
    pub fn selection_enabled(mut self, enabled: bool) -> Self {
        self.selection_enabled = enabled;
        self
    }

    /// Enables or disables pagination (builder pattern). On by default.
    #[must_use]
    pub fn pagination_enabled(mut self, enabled: bool) -> Self {
        self.pagination_enabled = enabled;
        self
    }

    /// Sets the view mode (builder pattern).
    #[must_use]
    pub fn view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// Sets the widget width in terminal columns (builder pattern).
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }

    /// Sets the width below which the layout is considered narrow
    /// (builder pattern).
    #[must_use]
    pub fn narrow_breakpoint(mut self, w: usize) -> Self {
        self.narrow_breakpoint = w;
        self
    }

    /// Overrides the empty-state line (builder pattern).
    #[must_use]
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Shows or hides the status bar (builder pattern).
    #[must_use]
    pub fn show_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the row activation callback (builder pattern).
    #[must_use]
    pub fn on_row_click(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    /// Sets the selection callback (builder pattern). Receives the full
    /// selection, in dataset order, after every selection change.
    #[must_use]
    pub fn on_row_select(mut self, f: impl Fn(&[R]) + Send + Sync + 'static) -> Self {
        self.on_row_select = Some(Arc::new(f));
        self
    }

    // --- accessors ---

    /// Returns the raw rows in input order.
    #[must_use]
    pub fn get_rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the column set.
    #[must_use]
    pub fn get_columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Returns the sort state.
    #[must_use]
    pub const fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Returns the active filter term, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the current page, 1-indexed.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.paginator.display_page()
    }

    /// Returns the page count. Always at least 1.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get_page_size(&self) -> usize {
        self.paginator.get_per_page()
    }

    /// Returns the configured view mode.
    #[must_use]
    pub const fn get_view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Returns whether the widget is below its narrow breakpoint.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.width < self.narrow_breakpoint
    }

    /// Returns the filtered, sorted row set.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<R> {
        let filtered = self.filter.as_deref().map_or_else(
            || self.rows.clone(),
            |term| filter_rows(&self.rows, &self.columns, term),
        );
        sort_rows(&filtered, &self.sort)
    }

    /// Returns the rows on the current page.
    #[must_use]
    pub fn page_rows(&self) -> Vec<R> {
        let visible = self.visible_rows();
        if !self.pagination_enabled {
            return visible;
        }
        let (start, end) = self.paginator.slice_bounds(visible.len());
        visible[start..end].to_vec()
    }

    /// Returns whether a row is selected.
    #[must_use]
    pub fn is_selected(&self, key: &R::Key) -> bool {
        self.selection.contains(key)
    }

    /// Returns the number of selected rows.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Returns the selected rows in dataset order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<R> {
        self.rows
            .iter()
            .filter(|row| self.selection.contains(&row.key()))
            .cloned()
            .collect()
    }

    // --- interactions ---

    /// Activates a column header: the active column flips direction, a new
    /// column starts ascending. Unknown and non-sortable columns are a
    /// no-op.
    pub fn sort_by(&mut self, column: &str) {
        let Some(col) = self.columns.iter().find(|c| c.key == column) else {
            return;
        };
        if !col.sortable {
            return;
        }
        self.sort.toggle(column);
    }

    /// Clears the sort; rows return to input order.
    pub fn clear_sort(&mut self) {
        self.sort.clear();
    }

    /// Navigates to the next page; rejected on the last page.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    /// Navigates to the previous page; rejected on the first page.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    /// Jumps to a page (1-indexed), clamping to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.paginator.set_page(page.saturating_sub(1));
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, n: usize) {
        self.paginator = Paginator::new().per_page(n);
        self.sync_pages();
    }

    /// Applies a filter term, narrowing the effective row set. The current
    /// page clamps down if the set shrank; the selection is untouched.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.filter = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self.sync_pages();
    }

    /// Clears the filter.
    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.sync_pages();
    }

    /// Swaps in a wholly new dataset. The selection is cleared so it cannot
    /// reference rows no longer present; sort and filter state carry over.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.sync_pages();
        if !self.selection.is_empty() {
            self.selection.clear();
            self.emit_selection();
        }
    }

    /// Sets the widget width.
    pub fn set_width(&mut self, w: usize) {
        self.width = w;
    }

    /// Sets the view mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Flips selection of one row and emits the new selection. A no-op
    /// unless selection is enabled.
    pub fn toggle_row(&mut self, key: &R::Key) {
        if !self.selection_enabled {
            return;
        }
        self.selection.toggle(key.clone());
        self.emit_selection();
    }

    /// Selects every row on the visible page and emits. Rows on other pages
    /// are never touched.
    pub fn select_all_visible(&mut self) {
        if !self.selection_enabled {
            return;
        }
        let page = self.page_rows();
        if page.is_empty() {
            return;
        }
        self.selection.insert_all(page.iter().map(Row::key));
        self.emit_selection();
    }

    /// Select-all scoped to the visible page: if every row on the page is
    /// already selected, deselects exactly those rows; otherwise selects
    /// every row on the page. Rows on other pages are never touched.
    pub fn toggle_select_all(&mut self) {
        if !self.selection_enabled {
            return;
        }
        let page = self.page_rows();
        if page.is_empty() {
            return;
        }
        let keys: Vec<R::Key> = page.iter().map(Row::key).collect();
        if self.selection.all_selected(keys.iter()) {
            self.selection.remove_all(keys.iter());
        } else {
            self.selection.insert_all(keys);
        }
        self.emit_selection();
    }

    /// Empties the selection and emits, if anything was selected.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.emit_selection();
    }

    /// Fires the row activation callback for the row with the given key.
    pub fn click_row(&self, key: &R::Key) {
        if let Some(cb) = &self.on_row_click {
            if let Some(row) = self.rows.iter().find(|r| &r.key() == key) {
                cb(row);
            }
        }
    }

    fn emit_selection(&self) {
        if let Some(cb) = &self.on_row_select {
            cb(&self.selected_rows());
        }
    }

    fn sync_pages(&mut self) {
        let count = self.filter.as_deref().map_or(self.rows.len(), |term| {
            filter_rows(&self.rows, &self.columns, term).len()
        });
        self.paginator.sync_total_items(count);
    }

    // --- rendering ---

    /// Renders the widget.
    #[must_use]
    pub fn view(&self) -> String {
        let visible = self.visible_rows();
        let mut sections = Vec::new();

        if visible.is_empty() {
            sections.push(self.styles.empty.render(&self.empty_text));
        } else {
            let page = if self.pagination_enabled {
                let (start, end) = self.paginator.slice_bounds(visible.len());
                visible[start..end].to_vec()
            } else {
                visible.clone()
            };
            match self.resolved_view_mode() {
                ViewMode::Grid => sections.push(self.grid_view(&page)),
                _ => sections.push(self.table_view(&page)),
            }
        }

        if self.show_status_bar {
            sections.push(self.status_view(visible.len()));
        }

        if self.pagination_enabled && self.paginator.total_pages() > 1 {
            sections.push(self.styles.pagination.render(&self.paginator.view()));
        }

        sections.join("\n")
    }

    /// Resolves `Auto` against the narrow breakpoint.
    #[must_use]
    pub const fn resolved_view_mode(&self) -> ViewMode {
        match self.view_mode {
            ViewMode::Auto => {
                if self.is_narrow() {
                    ViewMode::Grid
                } else {
                    ViewMode::Table
                }
            }
            mode => mode,
        }
    }

    /// Columns shown at the current width.
    fn effective_columns(&self) -> Vec<&Column<R>> {
        self.columns
            .iter()
            .filter(|col| !(self.is_narrow() && col.hide_when_narrow))
            .collect()
    }

    fn marker(&self, selected: bool) -> &'static str {
        if selected { "[x]" } else { "[ ]" }
    }

    fn table_view(&self, page: &[R]) -> String {
        let columns = self.effective_columns();

        // Unstyled cell text, one vector per row, computed up front so the
        // column widths can be fitted before styling.
        let cell_texts: Vec<Vec<String>> = page
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| col.cell_text(&row.cell(&col.key), row))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let indicator = if col.sortable { 2 } else { 0 };
                let header = UnicodeWidthStr::width(col.label.as_str()) + indicator;
                let cells = cell_texts
                    .iter()
                    .map(|row| UnicodeWidthStr::width(row[i].as_str()))
                    .max()
                    .unwrap_or(0);
                header.max(cells).min(MAX_COLUMN_WIDTH)
            })
            .collect();

        let mut lines = Vec::with_capacity(page.len() + 1);
        lines.push(self.headers_view(&columns, &widths));

        for (row, texts) in page.iter().zip(&cell_texts) {
            lines.push(self.row_view(row, &columns, &widths, texts));
        }

        lines.join("\n")
    }

    fn headers_view(&self, columns: &[&Column<R>], widths: &[usize]) -> String {
        let mut cells = Vec::with_capacity(columns.len() + 1);

        if self.selection_enabled {
            cells.push(" ".repeat(3));
        }

        for (col, &width) in columns.iter().zip(widths) {
            if col.sortable {
                let label = fit(&col.label, width.saturating_sub(2));
                cells.push(format!(
                    "{} {}",
                    self.styles.header.render(&label),
                    self.styles.indicator.render(self.sort.indicator(&col.key)),
                ));
            } else {
                cells.push(self.styles.header.render(&fit(&col.label, width)));
            }
        }

        cells.join(CELL_GAP)
    }

    fn row_view(
        &self,
        row: &R,
        columns: &[&Column<R>],
        widths: &[usize],
        texts: &[String],
    ) -> String {
        let selected = self.selection_enabled && self.selection.contains(&row.key());
        let mut cells = Vec::with_capacity(columns.len() + 1);

        if self.selection_enabled {
            let marker = self.marker(selected);
            cells.push(if selected {
                self.styles.selected.render(marker)
            } else {
                self.styles.cell.render(marker)
            });
        }

        for ((col, &width), text) in columns.iter().zip(widths).zip(texts) {
            let truncated = truncate(text, width);
            let padding = " ".repeat(width - UnicodeWidthStr::width(truncated.as_str()));
            let styled = if selected {
                self.styles.selected.render(&truncated)
            } else if col.kind == CellKind::Badge && !truncated.is_empty() {
                self.styles.badge.render(&truncated)
            } else {
                self.styles.cell.render(&truncated)
            };
            cells.push(format!("{styled}{padding}"));
        }

        cells.join(CELL_GAP)
    }

    fn grid_view(&self, page: &[R]) -> String {
        let columns = self.effective_columns();
        let mut cards = Vec::with_capacity(page.len());

        for row in page {
            let selected = self.selection_enabled && self.selection.contains(&row.key());
            let mut lines = Vec::with_capacity(columns.len());

            for (i, col) in columns.iter().enumerate() {
                let text = col.cell_text(&row.cell(&col.key), row);
                let value = if col.kind == CellKind::Badge && !text.is_empty() {
                    self.styles.badge.render(&text)
                } else if selected {
                    self.styles.selected.render(&text)
                } else {
                    text
                };
                let label = self.styles.grid_label.render(&format!("{}:", col.label));

                let prefix = if i == 0 {
                    if self.selection_enabled {
                        let marker = self.marker(selected);
                        let styled = if selected {
                            self.styles.selected.render(marker)
                        } else {
                            self.styles.cell.render(marker)
                        };
                        format!("{styled} ")
                    } else {
                        String::new()
                    }
                } else if self.selection_enabled {
                    " ".repeat(4)
                } else {
                    String::new()
                };

                lines.push(format!("{prefix}{label} {value}"));
            }

            cards.push(lines.join("\n"));
        }

        cards.join("\n\n")
    }

    fn status_view(&self, visible: usize) -> String {
        let noun = if visible == 1 {
            &self.item_name_singular
        } else {
            &self.item_name_plural
        };
        let mut status = format!("{visible} {noun}");
        if self.selection_enabled && !self.selection.is_empty() {
            status.push_str(&format!(" · {} selected", self.selection.len()));
        }
        self.styles.status_bar.render(&status)
    }
}

// Manual Debug since callbacks and renderers don't implement Debug.
impl<R: Row> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows_len", &self.rows.len())
            .field("sort", &self.sort)
            .field("page", &self.paginator.display_page())
            .field("total_pages", &self.paginator.total_pages())
            .field("selection_len", &self.selection.len())
            .field("filter", &self.filter)
            .field("view_mode", &self.view_mode)
            .finish()
    }
}

/// Truncates to the given display width, adding an ellipsis when cut.
fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in s.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Truncates and right-pads to exactly the given display width.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    let pad = width.saturating_sub(UnicodeWidthStr::width(truncated.as_str()));
    format!("{truncated}{}", " ".repeat(pad))
}
