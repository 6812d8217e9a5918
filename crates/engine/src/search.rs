//! Occurrence search across the key and value fields of every cell.

use kvtable_core::{cell, Table};

/// Count occurrences of `term` in `text` with a forward scan that advances
/// the cursor by one character after each match, so overlapping occurrences
/// all count: `"aa"` in `"aaa"` counts 2.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    let Some(first) = term.chars().next() else {
        return 0;
    };
    // Advancing past the first character of a match always lands on a char
    // boundary.
    let step = first.len_utf8();

    let mut count = 0;
    let mut at = 0;
    while let Some(pos) = text[at..].find(term) {
        count += 1;
        at += pos + step;
    }
    count
}

/// Build the search report for `term` over the whole table.
///
/// Cells are visited in row-major then column-major order. Each cell with a
/// hit in its key, its value, or both contributes one newline-terminated
/// line; a table with no hits anywhere reports a single "not found" line.
pub fn search_report(table: &Table, term: &str) -> String {
    let mut report = String::new();
    let mut found = false;

    for (row_index, row) in table.rows().iter().enumerate() {
        for (col_index, raw) in row.iter().enumerate() {
            let Some((key, value)) = cell::split(raw) else {
                continue;
            };
            let key_hits = count_occurrences(key, term);
            let value_hits = count_occurrences(value, term);

            if key_hits > 0 && value_hits > 0 {
                report.push_str(&format!(
                    "{} <{}> at key and {} <{}> at value of [{},{}]\n",
                    key_hits, term, value_hits, term, row_index, col_index
                ));
                found = true;
            } else if key_hits > 0 {
                report.push_str(&format!(
                    "{} <{}> at key of [{},{}]\n",
                    key_hits, term, row_index, col_index
                ));
                found = true;
            } else if value_hits > 0 {
                report.push_str(&format!(
                    "{} <{}> at value of [{},{}]\n",
                    value_hits, term, row_index, col_index
                ));
                found = true;
            }
        }
    }

    if !found {
        report.push_str("No occurrences found in the table\n");
    }
    report
}
