//! Vendor dataset: serde model, Row implementation, and the built-in sample.

use anyhow::Context;
use chrono::NaiveDate;
use rowboat::row::Row;
use rowboat::value::CellValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One vendor in the planning directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub cost: f64,
    #[serde(default)]
    pub booked: Option<NaiveDate>,
    pub status: String,
}

impl Row for Vendor {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "cost" => self.cost.into(),
            "booked" => self.booked.into(),
            "status" => CellValue::Badge(self.status.clone()),
            _ => CellValue::Empty,
        }
    }
}

/// Loads vendors from a JSON file (an array of vendor objects).
pub fn load_vendors(path: &Path) -> anyhow::Result<Vec<Vendor>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading vendor file {}", path.display()))?;
    let vendors: Vec<Vendor> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing vendor file {}", path.display()))?;
    Ok(vendors)
}

/// Built-in sample dataset used when no file is given.
pub fn sample_vendors() -> Vec<Vendor> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    vec![
        Vendor {
            id: 1,
            name: "Golden Hour Photo".into(),
            category: "photo".into(),
            cost: 3200.0,
            booked: date(2026, 2, 14),
            status: "booked".into(),
        },
        Vendor {
            id: 2,
            name: "Petals & Co".into(),
            category: "florist".into(),
            cost: 1800.0,
            booked: None,
            status: "quoted".into(),
        },
        Vendor {
            id: 3,
            name: "Harvest Table Catering".into(),
            category: "catering".into(),
            cost: 9400.0,
            booked: date(2026, 1, 30),
            status: "booked".into(),
        },
        Vendor {
            id: 4,
            name: "Brass & Ivory Quartet".into(),
            category: "music".into(),
            cost: 2100.0,
            booked: None,
            status: "contacted".into(),
        },
        Vendor {
            id: 5,
            name: "Juniper Events".into(),
            category: "planning".into(),
            cost: 4500.0,
            booked: date(2025, 11, 3),
            status: "booked".into(),
        },
        Vendor {
            id: 6,
            name: "Late Night Taco Cart".into(),
            category: "catering".into(),
            cost: 950.0,
            booked: None,
            status: "quoted".into(),
        },
        Vendor {
            id: 7,
            name: "Marquee & Lights Hire".into(),
            category: "rentals".into(),
            cost: 2700.0,
            booked: date(2026, 3, 2),
            status: "booked".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_unique_ids() {
        let vendors = sample_vendors();
        let mut ids: Vec<_> = vendors.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vendors.len());
    }

    #[test]
    fn test_row_cells() {
        let vendor = &sample_vendors()[0];
        assert_eq!(vendor.cell("name"), CellValue::from("Golden Hour Photo"));
        assert_eq!(vendor.cell("cost"), CellValue::Number(3200.0));
        assert!(vendor.cell("unknown").is_empty());
    }

    #[test]
    fn test_vendor_json_round_trip() {
        let vendors = sample_vendors();
        let json = serde_json::to_string(&vendors).expect("serialize");
        let parsed: Vec<Vendor> = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed.len(), vendors.len());
        assert_eq!(parsed[2].name, "Harvest Table Catering");
    }

    #[test]
    fn test_booked_field_is_optional_in_json() {
        let json = r#"[{"id":9,"name":"X","category":"misc","cost":1.0,"status":"quoted"}]"#;
        let parsed: Vec<Vendor> = serde_json::from_str(json).expect("parse");
        assert!(parsed[0].booked.is_none());
    }
}
