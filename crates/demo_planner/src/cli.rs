//! Command-line interface for `demo_planner`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Render the built-in vendor list
//! demo_planner
//!
//! # Sort by cost, largest first, four rows per page
//! demo_planner --sort cost --descending --page-size 4
//!
//! # Card layout with a filter applied
//! demo_planner --view grid --filter booked
//!
//! # Load vendors from a JSON file
//! demo_planner --data vendors.json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rowboat::table::ViewMode;

/// Event-planner showcase for the rowboat data table widget.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "demo_planner",
    author,
    version,
    about = "Event-planner showcase for the rowboat data table widget"
)]
pub struct Cli {
    /// Rows per page
    #[arg(long, short = 'p', default_value_t = 4, env = "PLANNER_PAGE_SIZE")]
    pub page_size: usize,

    /// Layout: aligned table, card grid, or pick by width
    #[arg(long, short = 'v', value_enum, default_value_t = ViewArg::Auto)]
    pub view: ViewArg,

    /// Column to sort by (name, category, cost, booked)
    #[arg(long, short = 's', env = "PLANNER_SORT")]
    pub sort: Option<String>,

    /// Sort largest values first
    #[arg(long, requires = "sort")]
    pub descending: bool,

    /// Substring filter over text cells
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Vendor ids to pre-select (repeatable)
    #[arg(long = "select")]
    pub select: Vec<u32>,

    /// Path to a vendor JSON file
    ///
    /// Falls back to the built-in sample dataset when omitted
    #[arg(long, env = "PLANNER_DATA")]
    pub data: Option<PathBuf>,

    /// Widget width in terminal columns
    #[arg(long, default_value_t = 80, env = "PLANNER_WIDTH")]
    pub width: usize,

    /// Force color output off
    ///
    /// Respects the `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Layout flag mapped onto the widget's view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Aligned columns with a header row.
    Table,
    /// One labeled card per row.
    Grid,
    /// Table above the narrow breakpoint, grid below it.
    Auto,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Table => Self::Table,
            ViewArg::Grid => Self::Grid,
            ViewArg::Auto => Self::Auto,
        }
    }
}
