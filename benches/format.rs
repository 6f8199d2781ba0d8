// benches/format.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use table_scrape::{core::html::discover_tables, format_table, Table};

fn synthetic_table(rows: usize, cols: usize) -> Table {
    let headers = (0..cols).map(|c| format!("Column {c}")).collect();
    let rows = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| format!("row {r} col {c} with a fairly long description"))
                .collect()
        })
        .collect();
    Table::new(headers, rows)
}

fn synthetic_page(tables: usize, rows: usize) -> String {
    let mut html = String::from("<html><body>");
    for t in 0..tables {
        html.push_str(&format!("<h2>Table {t}</h2><table><tr><th>Name</th><th>Value</th></tr>"));
        for r in 0..rows {
            html.push_str(&format!("<tr><td><a href='#'>Player {r}</a></td><td>{r}</td></tr>"));
        }
        html.push_str("</table>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_format(c: &mut Criterion) {
    let small = synthetic_table(12, 5);
    let large = synthetic_table(5_000, 20);

    c.bench_function("format_small", |b| {
        b.iter(|| black_box(format_table(black_box(&small), 10, 30)).len())
    });

    c.bench_function("format_large", |b| {
        b.iter(|| black_box(format_table(black_box(&large), 10, 30)).len())
    });
}

fn bench_discover(c: &mut Criterion) {
    let page = synthetic_page(9, 200);

    c.bench_function("discover_tables", |b| {
        b.iter(|| discover_tables(black_box(&page)).map(|t| t.len()).unwrap_or(0))
    });
}

criterion_group!(benches, bench_format, bench_discover);
criterion_main!(benches);
