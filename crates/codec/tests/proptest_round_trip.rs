//! Property tests for the format codec.

use kvtable_codec::{parse, render};
use kvtable_core::{cell, Row, Table};
use proptest::prelude::*;

/// Cells that conform to the grammar and contain no newlines, so they
/// survive line splitting.
fn cell_strategy() -> impl Strategy<Value = String> {
    ("[^,\r\n]{0,6}", "[^)\r\n]{0,6}").prop_map(|(k, v)| cell::compose(&k, &v))
}

fn row_strategy() -> impl Strategy<Value = Row> {
    prop::collection::vec(cell_strategy(), 1..5)
}

fn table_strategy() -> impl Strategy<Value = Table> {
    prop::collection::vec(row_strategy(), 0..6).prop_map(|rows| {
        let mut table = Table::new();
        for row in rows {
            table.push_row(row);
        }
        table
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Parsing is total: any input produces a table, and every cell of that
    /// table conforms to the grammar.
    #[test]
    fn parse_never_fails_and_yields_conformant_cells(text in any::<String>()) {
        let table = parse(&text);
        for row in table.rows() {
            prop_assert!(!row.is_empty(), "parse produced an empty row");
            for c in row {
                prop_assert!(cell::conforms(c), "non-conformant cell {:?}", c);
            }
        }
    }

    /// Tables of non-empty rows of conformant cells survive a render/parse
    /// round trip unchanged.
    #[test]
    fn render_then_parse_is_identity(table in table_strategy()) {
        prop_assert_eq!(parse(&render(&table)), table);
    }

    /// Rendering what was parsed re-parses to the same table, whatever the
    /// original text looked like.
    #[test]
    fn parse_render_parse_is_stable(text in any::<String>()) {
        let once = parse(&text);
        let twice = parse(&render(&once));
        prop_assert_eq!(twice, once);
    }
}
