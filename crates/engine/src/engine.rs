//! The live table and its mutation operations.

use std::path::{Path, PathBuf};

use kvtable_codec::{parse, persist};
use kvtable_core::{cell, Error, Result, Row, Table};
use tracing::debug;

use crate::random::random_ascii;
use crate::search::search_report;

/// Length of the generated key and value of a synthesized cell.
pub const CELL_TEXT_LEN: usize = 3;

/// Owns the live table and the backing file path, and applies every
/// command: search, edit, append, sort, reset.
///
/// Mutating operations finish by rendering the table and overwriting the
/// backing file. When that write fails the error is returned but the
/// in-memory mutation stays applied, so memory and disk can diverge until
/// the next successful write.
///
/// Bounds checking is the caller's job: row and column indices passed to
/// [`edit_cell`](Self::edit_cell) and [`sort_row`](Self::sort_row) must be
/// valid for the current table.
pub struct TableEngine {
    table: Table,
    path: PathBuf,
}

impl TableEngine {
    /// Create an engine with an empty table, persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: Table::new(),
            path: path.into(),
        }
    }

    /// Replace the live table with the parse of `content`.
    pub fn load(&mut self, content: &str) {
        self.table = parse(content);
        debug!(rows = self.table.row_count(), "table loaded");
    }

    /// Borrow the live table. Callers observe in-place mutations.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The backing file path mutations persist to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the occurrence report for `term` over every cell.
    pub fn search(&self, term: &str) -> String {
        search_report(&self.table, term)
    }

    /// Rewrite the cell at (`row`, `col`) according to `mode`: `key`
    /// replaces the key segment, `value` the value segment, `both` replaces
    /// both; the keywords are case-insensitive. Any other mode is an error
    /// and the cell stays untouched with nothing persisted.
    pub fn edit_cell(
        &mut self,
        row: usize,
        col: usize,
        new_key: &str,
        new_value: &str,
        mode: &str,
    ) -> Result<()> {
        let raw = &self.table.row(row)[col];
        // Both parsed and engine-written cells split; fall back to empty
        // parts rather than propagate an impossible failure.
        let (old_key, old_value) = cell::split(raw).unwrap_or(("", ""));

        let rewritten = match mode.to_lowercase().as_str() {
            "key" => cell::compose(new_key, old_value),
            "value" => cell::compose(old_key, new_value),
            "both" => cell::compose(new_key, new_value),
            _ => return Err(Error::InvalidEditMode(mode.to_string())),
        };

        self.table.row_mut(row)[col] = rewritten;
        debug!(row, col, mode, "cell edited");
        self.persist()
    }

    /// Append one row of exactly `cells` freshly synthesized cells.
    /// `cells` must be at least 1; the caller validates that.
    pub fn add_row(&mut self, cells: usize) -> Result<()> {
        self.table.push_row(synthesize_row(cells));
        debug!(cells, "row appended");
        self.persist()
    }

    /// Sort the cells of `row` in place by their raw bracketed form.
    /// `order` is `asc` or `desc`, case-insensitive; any other keyword
    /// leaves the row unchanged and is not an error.
    pub fn sort_row(&mut self, row: usize, order: &str) -> Result<()> {
        match order.to_lowercase().as_str() {
            "asc" => self.table.row_mut(row).sort(),
            "desc" => self.table.row_mut(row).sort_by(|a, b| b.cmp(a)),
            _ => {}
        }
        debug!(row, order, "row sorted");
        self.persist()
    }

    /// Discard every row and rebuild `rows` × `columns` synthesized cells.
    /// Both dimensions must be at least 1; the caller validates that.
    pub fn reset(&mut self, rows: usize, columns: usize) -> Result<()> {
        self.table.clear();
        for _ in 0..rows {
            self.table.push_row(synthesize_row(columns));
        }
        debug!(rows, columns, "table reset");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        persist(&self.table, &self.path)
    }
}

fn synthesize_row(cells: usize) -> Row {
    (0..cells)
        .map(|_| {
            cell::compose(
                &random_ascii(CELL_TEXT_LEN),
                &random_ascii(CELL_TEXT_LEN),
            )
        })
        .collect()
}
