//! Table regions are serialized by the table itself.

use crate::model::TableMarkdown;

/// Render a table region, keeping blank cells and cell text as extracted.
pub fn render_table<T: TableMarkdown + ?Sized>(table: &T) -> String {
    table.to_markdown(false)
}
