#![forbid(unsafe_code)]

//! # Demo Planner
//!
//! Event-planner showcase for the `rowboat` data table widget.
//!
//! Renders a vendor directory through the widget's full pipeline (filter,
//! sort, paginate, select) and prints each step, driven entirely by CLI
//! flags.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p demo_planner -- --sort cost --descending --select 1 --select 3
//! ```

mod cli;
mod data;

use clap::Parser;
use rowboat::column::{CellKind, Column};
use rowboat::table::DataTable;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use data::{Vendor, load_vendors, sample_vendors};

fn vendor_columns() -> Vec<Column<Vendor>> {
    vec![
        Column::new("name", "Vendor").sortable(true),
        Column::new("category", "Category").sortable(true).hide_when_narrow(true),
        Column::new("cost", "Cost")
            .kind(CellKind::Number)
            .sortable(true)
            .renderer(|value, _| format!("${value}")),
        Column::new("booked", "Booked")
            .kind(CellKind::Date)
            .sortable(true)
            .hide_when_narrow(true),
        Column::new("status", "Status").kind(CellKind::Badge),
        Column::new("ops", "Actions")
            .kind(CellKind::Action)
            .renderer(|_, vendor: &Vendor| format!("view #{}", vendor.id)),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let vendors = match &cli.data {
        Some(path) => load_vendors(path)?,
        None => sample_vendors(),
    };
    info!(count = vendors.len(), "loaded vendor directory");

    let mut table = DataTable::new(vendor_columns())?
        .rows(vendors)
        .page_size(cli.page_size)
        .view_mode(cli.view.into())
        .width(cli.width)
        .selection_enabled(true)
        .empty_text("No vendors match.")
        .on_row_click(|vendor: &Vendor| {
            info!(id = vendor.id, name = %vendor.name, "vendor activated");
        })
        .on_row_select(|selected: &[Vendor]| {
            let total: f64 = selected.iter().map(|v| v.cost).sum();
            info!(count = selected.len(), total, "selection changed");
        });
    table.item_name_singular = "vendor".to_string();
    table.item_name_plural = "vendors".to_string();

    if let Some(column) = &cli.sort {
        table.sort_by(column);
        if cli.descending {
            table.sort_by(column);
        }
        debug!(%column, descending = cli.descending, "sorted");
    }

    if let Some(term) = &cli.filter {
        table.set_filter(term.clone());
        debug!(%term, "filter applied");
    }

    for id in &cli.select {
        table.toggle_row(id);
    }

    println!("{}", table.view());

    // Walk the remaining pages so the whole directory is shown.
    while table.current_page() < table.total_pages() {
        table.next_page();
        println!();
        println!("{}", table.view());
    }

    Ok(())
}
