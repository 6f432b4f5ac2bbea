//! Minimal usage example: a vendor table sorted by cost.
//!
//! Run with: `cargo run -p rowboat --example vendors`

use rowboat::prelude::*;

#[derive(Clone)]
struct Vendor {
    id: u32,
    name: &'static str,
    cost: f64,
    status: &'static str,
}

impl Row for Vendor {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => self.name.into(),
            "cost" => self.cost.into(),
            "status" => CellValue::Badge(self.status.to_string()),
            _ => CellValue::Empty,
        }
    }
}

fn main() -> Result<(), TableError> {
    let columns = vec![
        Column::new("name", "Vendor").sortable(true),
        Column::new("cost", "Cost").kind(CellKind::Number).sortable(true),
        Column::new("status", "Status").kind(CellKind::Badge),
    ];

    let mut table = DataTable::new(columns)?
        .rows(vec![
            Vendor { id: 1, name: "Golden Hour Photo", cost: 3200.0, status: "booked" },
            Vendor { id: 2, name: "Petals & Co", cost: 1800.0, status: "quoted" },
            Vendor { id: 3, name: "Harvest Table Catering", cost: 9400.0, status: "booked" },
        ])
        .page_size(10)
        .view_mode(ViewMode::Table);

    table.sort_by("cost");
    println!("{}", table.view());

    Ok(())
}
