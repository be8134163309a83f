//! Table-row rendering and the display target seam.

use shelfview_inventory::InventoryRecord;

use crate::escape::escape_text;

/// Where rendered rows go.
///
/// Renders fully overwrite the target's row content; there is no
/// incremental update. The web layer reads the buffer back out, tests
/// assert on it directly.
pub trait DisplayTarget {
    /// Replace all previously displayed rows with `html`.
    fn replace_rows(&mut self, html: &str);
}

/// An owned HTML fragment acting as the display target.
#[derive(Debug, Clone, Default)]
pub struct HtmlBuffer {
    rows: String,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current `<tr>` fragment (empty string before the first render).
    pub fn rows(&self) -> &str {
        &self.rows
    }
}

impl DisplayTarget for HtmlBuffer {
    fn replace_rows(&mut self, html: &str) {
        self.rows.clear();
        self.rows.push_str(html);
    }
}

/// One `<tr>` per record, in sequence order, cells id / name / category /
/// qty / location. Every field is escaped before insertion.
pub fn render_rows(records: &[InventoryRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str("<tr>");
        push_cell(&mut out, &record.id);
        push_cell(&mut out, &record.name);
        push_cell(&mut out, &record.category);
        push_cell(&mut out, &record.qty.to_string());
        push_cell(&mut out, &record.location);
        out.push_str("</tr>\n");
    }
    out
}

fn push_cell(out: &mut String, text: &str) {
    out.push_str("<td>");
    out.push_str(&escape_text(text));
    out.push_str("</td>");
}
