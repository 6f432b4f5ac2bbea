#![forbid(unsafe_code)]

//! Benchmarks for the data table widget.

use criterion::{
    BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use rowboat::column::{CellKind, Column};
use rowboat::row::Row;
use rowboat::sort::{SortState, sort_rows};
use rowboat::table::{DataTable, ViewMode};
use rowboat::value::CellValue;

/// Simple record for benchmarking.
#[derive(Clone)]
struct BenchRow {
    id: usize,
    name: String,
    zone: String,
    score: f64,
}

impl Row for BenchRow {
    type Key = usize;

    fn key(&self) -> usize {
        self.id
    }

    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => self.name.as_str().into(),
            "zone" => self.zone.as_str().into(),
            "score" => self.score.into(),
            _ => CellValue::Empty,
        }
    }
}

fn build_rows(count: usize) -> Vec<BenchRow> {
    (0..count)
        .map(|i| BenchRow {
            id: i,
            name: format!("Person {i}"),
            zone: {
                let zone = i % 8;
                format!("Zone {zone}")
            },
            score: ((i * 7) % 1000) as f64,
        })
        .collect()
}

fn build_columns() -> Vec<Column<BenchRow>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("zone", "Zone"),
        Column::new("score", "Score").kind(CellKind::Number).sortable(true),
    ]
}

fn build_table(count: usize) -> DataTable<BenchRow> {
    DataTable::new(build_columns())
        .expect("valid columns")
        .rows(build_rows(count))
        .page_size(20)
        .selection_enabled(true)
        .view_mode(ViewMode::Table)
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowboat/sort");

    for count in [10_usize, 100, 1000] {
        let rows = build_rows(count);
        let mut state = SortState::new();
        state.toggle("score");
        group.bench_with_input(BenchmarkId::new("by_number", count), &rows, |b, rows| {
            b.iter(|| black_box(sort_rows(rows, &state)));
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowboat/pipeline");

    let table = build_table(100);
    group.bench_function("page_rows_100", |b| b.iter(|| black_box(table.page_rows())));

    group.bench_function("view_100", |b| b.iter(|| black_box(table.view())));

    group.bench_function("interact_100", |b| {
        b.iter_batched(
            || table.clone(),
            |mut table| {
                table.sort_by("score");
                table.next_page();
                table.toggle_select_all();
                table.prev_page();
                black_box(table.view());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowboat/filter");

    let mut table = build_table(1000);
    group.bench_function("filter_1000", |b| {
        b.iter(|| {
            table.set_filter("Zone 3");
            let rows = black_box(table.visible_rows());
            table.clear_filter();
            rows
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_pipeline, bench_filter);
criterion_main!(benches);
