//! Text → Table parsing.
//!
//! Each line is scanned independently for non-overlapping cells, leftmost
//! first. A cell match is an opening paren, a (possibly empty) run of
//! non-comma characters, a comma, a (possibly empty) run of characters
//! without a closing paren, then the closing paren. Text between matches is
//! ignored, and a line with no matches contributes no row. This lenient
//! skip-what-doesn't-match policy is deliberate; parsing is total.

use kvtable_core::{Row, Table};
use tracing::debug;

/// Parse file text into a table. Never fails; malformed content degrades to
/// fewer cells or rows.
pub fn parse(text: &str) -> Table {
    let mut table = Table::new();

    if text.is_empty() {
        return table;
    }

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let row = parse_line(line);
        if !row.is_empty() {
            table.push_row(row);
        }
    }

    debug!(rows = table.row_count(), "parsed table from text");
    table
}

/// Extract every cell from one line, in left-to-right order of appearance.
pub fn parse_line(line: &str) -> Row {
    let bytes = line.as_bytes();
    let mut cells = Row::new();
    let mut at = 0;

    while at < bytes.len() {
        if bytes[at] == b'(' {
            if let Some(end) = match_cell(bytes, at) {
                // All delimiters are ASCII, so byte offsets are char
                // boundaries.
                cells.push(line[at..=end].to_string());
                at = end + 1;
                continue;
            }
        }
        at += 1;
    }

    cells
}

/// Try to match one cell starting at the `(` at `start`. Returns the byte
/// offset of the closing paren. The key runs to the first comma after the
/// paren and the value to the first closing paren after that comma, which is
/// exactly the greedy match of the cell grammar.
fn match_cell(bytes: &[u8], start: usize) -> Option<usize> {
    let comma = start + 1 + bytes[start + 1..].iter().position(|&b| b == b',')?;
    let close = comma + 1 + bytes[comma + 1..].iter().position(|&b| b == b')')?;
    Some(close)
}
