// src/core/html.rs
// Table discovery over a parsed HTML document.
// Cells come from <td> only; <th> cells anywhere in a table are its headers.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::join_fragments;
use crate::table::Table;

/// A table found in a document, plus the title shown above its preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredTable {
    pub title: Option<String>,
    pub table: Table,
}

struct Selectors {
    anchors: Selector,
    caption: Selector,
    th: Selector,
    tr: Selector,
    td: Selector,
}

impl Selectors {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            anchors: selector("table, h1, h2, h3, h4")?,
            caption: selector("caption")?,
            th: selector("th")?,
            tr: selector("tr")?,
            td: selector("td")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("Invalid selector '{css}': {e}").into())
}

/// Cell text: text nodes trimmed, empties dropped, joined with one space.
pub fn cell_text(el: ElementRef<'_>) -> String {
    join_fragments(el.text(), " ")
}

/// Title text: text nodes trimmed and concatenated.
fn title_text(el: ElementRef<'_>) -> Option<String> {
    Some(join_fragments(el.text(), "")).filter(|t| !t.is_empty())
}

fn extract_table(table: ElementRef<'_>, sel: &Selectors) -> Table {
    let headers: Vec<String> = table.select(&sel.th).map(cell_text).collect();

    let rows: Vec<Vec<String>> = table
        .select(&sel.tr)
        .map(|tr| tr.select(&sel.td).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    Table::new(headers, rows)
}

/// Find every `<table>` in `document`, in document order (nested tables included).
///
/// The title is the table's `<caption>` text if non-empty, else the text of the
/// nearest `h1`..`h4` that comes before the table in the document.
pub fn discover_tables(document: &str) -> Result<Vec<DiscoveredTable>, Box<dyn Error>> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(document);

    let mut found = Vec::new();
    let mut last_heading: Option<String> = None;

    for el in doc.select(&sel.anchors) {
        if el.value().name() != "table" {
            last_heading = title_text(el);
            continue;
        }

        let title = el
            .select(&sel.caption)
            .next()
            .and_then(title_text)
            .or_else(|| last_heading.clone());

        let table = extract_table(el, &sel);
        logd!(
            "Discovered table #{} ({} headers, {} rows, title {:?})",
            found.len() + 1,
            table.headers.len(),
            table.rows.len(),
            title
        );
        found.push(DiscoveredTable { title, table });
    }

    Ok(found)
}
