//! File load and full-overwrite save.
//!
//! Every mutation persists by rewriting the whole backing file with the
//! rendered table. There is no append or patch path and no write-ahead
//! staging; the durability contract is at-most-once per mutation.

use std::fs;
use std::path::Path;

use kvtable_core::{Result, Table};
use tracing::debug;

use crate::render;

/// Read the backing file to a string.
pub fn load(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Render `table` and overwrite the file at `path` with it.
pub fn persist(table: &Table, path: &Path) -> Result<()> {
    let text = render(table);
    fs::write(path, &text)?;
    debug!(path = %path.display(), bytes = text.len(), "persisted table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");

        let mut table = Table::new();
        table.push_row(vec!["(a,1)".to_string(), "(b,2)".to_string()]);
        persist(&table, &path).unwrap();

        let content = load(&path).unwrap();
        assert_eq!(content, "(a,1) (b,2)");
        assert_eq!(parse(&content), table);
    }

    #[test]
    fn test_persist_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");

        let mut table = Table::new();
        table.push_row(vec!["(a,1)".to_string()]);
        persist(&table, &path).unwrap();

        table.clear();
        table.push_row(vec!["(z,9)".to_string()]);
        persist(&table, &path).unwrap();

        assert_eq!(load(&path).unwrap(), "(z,9)");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_persist_to_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // Directory path, not a file.
        assert!(persist(&Table::new(), dir.path()).is_err());
    }
}
