//! Cell decomposition and recomposition.
//!
//! A cell is stored in its raw bracketed form `"(" KEY "," VALUE ")"` where
//! KEY contains no `,` and VALUE contains no `)`. Decomposition is transient:
//! operations that need KEY or VALUE split the raw string, work on the parts,
//! and recompose before storing.

/// Split a cell into its `(key, value)` parts.
///
/// Strips the outer parentheses and splits at the first comma. Returns
/// `None` when the string does not have the bracketed shape; engine-written
/// cells always do.
pub fn split(cell: &str) -> Option<(&str, &str)> {
    let inner = cell.strip_prefix('(')?.strip_suffix(')')?;
    inner.split_once(',')
}

/// Recompose a cell from its parts.
pub fn compose(key: &str, value: &str) -> String {
    format!("({},{})", key, value)
}

/// Whether a string conforms to the cell grammar: outer parentheses, a key
/// without commas, one comma, a value without closing parens.
pub fn conforms(cell: &str) -> bool {
    match split(cell) {
        Some((key, value)) => !key.contains(',') && !value.contains(')'),
        None => false,
    }
}
