//! Table → text rendering.

use kvtable_core::Table;

/// Render a table to file text: one line per row, cells joined by a single
/// space, lines joined by `\n` with no trailing newline. An empty table
/// renders to the empty string; an empty row renders to a blank line.
pub fn render(table: &Table) -> String {
    table
        .rows()
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
