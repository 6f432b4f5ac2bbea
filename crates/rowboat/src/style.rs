//! Terminal styling for table rendering.
//!
//! A small composable [`Style`] on top of the `colored` crate, plus the
//! [`Styles`] bundle the table consults while rendering. Respects `NO_COLOR`
//! and non-tty output through `colored`'s global controls.
//!
//! # Example
//!
//! ```rust
//! use colored::Color;
//! use rowboat::style::Style;
//!
//! let header = Style::new().bold();
//! let muted = Style::new().foreground(Color::BrightBlack);
//! let _ = header.render("Vendor");
//! let _ = muted.render("3 items");
//! ```

use colored::{Color, Colorize};

/// A renderable text style.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    bold: bool,
    dimmed: bool,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Style {
    /// Creates an unstyled style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables bold (builder pattern).
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enables dimmed text (builder pattern).
    #[must_use]
    pub const fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    /// Sets the foreground color (builder pattern).
    #[must_use]
    pub const fn foreground(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color (builder pattern).
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Applies the style to a piece of text.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        if !self.bold && !self.dimmed && self.fg.is_none() && self.bg.is_none() {
            return text.to_string();
        }
        let mut out = text.normal();
        if self.bold {
            out = out.bold();
        }
        if self.dimmed {
            out = out.dimmed();
        }
        if let Some(fg) = self.fg {
            out = out.color(fg);
        }
        if let Some(bg) = self.bg {
            out = out.on_color(bg);
        }
        out.to_string()
    }
}

/// Styles consulted by the table renderer.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header row.
    pub header: Style,
    /// Normal cells.
    pub cell: Style,
    /// Selected rows.
    pub selected: Style,
    /// Badge pills.
    pub badge: Style,
    /// Sort indicators in the header.
    pub indicator: Style,
    /// Status bar beneath the rows.
    pub status_bar: Style,
    /// Page indicator.
    pub pagination: Style,
    /// Empty-state line.
    pub empty: Style,
    /// Field labels in grid view.
    pub grid_label: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(),
            cell: Style::new(),
            selected: Style::new().bold().foreground(Color::Magenta),
            badge: Style::new()
                .foreground(Color::White)
                .background(Color::BrightBlack),
            indicator: Style::new().dimmed(),
            status_bar: Style::new().foreground(Color::BrightBlack),
            pagination: Style::new().foreground(Color::BrightBlack),
            empty: Style::new().foreground(Color::BrightBlack),
            grid_label: Style::new().bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_is_passthrough() {
        assert_eq!(Style::new().render("abc"), "abc");
    }

    #[test]
    fn test_styled_text_keeps_content() {
        let rendered = Style::new().bold().foreground(Color::Cyan).render("abc");
        assert!(rendered.contains("abc"));
    }

    #[test]
    fn test_default_styles() {
        let styles = Styles::default();
        // Headers are bold by default; cells are plain.
        assert_eq!(styles.cell.render("x"), "x");
        assert!(styles.header.render("x").contains('x'));
    }
}
