//! The in-memory table: an ordered list of ordered rows of raw cell strings.
//!
//! The table is a pure data holder. It knows nothing about the on-disk
//! grammar; parsing and rendering live in `kvtable-codec`, and all editing
//! policy lives in `kvtable-engine`. Row order and column order are both
//! meaningful: every operation addresses cells by (row index, column index).

/// One row of the table: an ordered list of raw bracketed cells.
pub type Row = Vec<String>;

/// The whole in-memory document.
///
/// Created empty; populated by the codec on load or by reset/append; rows
/// are mutated in place by edit/sort. Both the table and individual rows
/// may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row at the end.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Borrow the row at `index`.
    ///
    /// Panics if `index` is out of range; bounds checking is the caller's
    /// responsibility.
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Mutably borrow the row at `index`.
    ///
    /// Panics if `index` is out of range; bounds checking is the caller's
    /// responsibility.
    pub fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Discard every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.rows(), &[] as &[Row]);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut table = Table::new();
        table.push_row(vec!["(a,1)".to_string()]);
        table.push_row(vec!["(b,2)".to_string(), "(c,3)".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0), &["(a,1)"]);
        assert_eq!(table.row(1), &["(b,2)", "(c,3)"]);
    }

    #[test]
    fn test_row_mut_edits_in_place() {
        let mut table = Table::new();
        table.push_row(vec!["(a,1)".to_string(), "(b,2)".to_string()]);
        table.row_mut(0)[1] = "(z,9)".to_string();
        assert_eq!(table.row(0), &["(a,1)", "(z,9)"]);
    }

    #[test]
    fn test_clear_discards_all_rows() {
        let mut table = Table::new();
        table.push_row(vec!["(a,1)".to_string()]);
        table.push_row(Vec::new());
        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_row_is_allowed() {
        let mut table = Table::new();
        table.push_row(Vec::new());
        assert_eq!(table.row_count(), 1);
        assert!(table.row(0).is_empty());
    }
}
