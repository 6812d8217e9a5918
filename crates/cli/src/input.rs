//! Shape validation for prompted parameters.
//!
//! The engine assumes well-formed indices, so every numeric parameter is
//! validated here before anything reaches it: `row,col` positions for edit,
//! `ROWSxCOLUMNS` dimensions for reset, and bare indices or counts.

/// Parse a `row,col` cell position. Digits on both sides, no signs, no
/// spaces; anything else is rejected.
pub fn parse_position(text: &str) -> Option<(usize, usize)> {
    let (row, col) = text.split_once(',')?;
    Some((parse_index(row)?, parse_index(col)?))
}

/// Parse a `ROWSxCOLUMNS` dimension pair, e.g. `3x4`.
pub fn parse_dimensions(text: &str) -> Option<(usize, usize)> {
    let (rows, columns) = text.split_once('x')?;
    Some((parse_index(rows)?, parse_index(columns)?))
}

/// Parse a bare non-negative index or count.
pub fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_well_formed() {
        assert_eq!(parse_position("0,0"), Some((0, 0)));
        assert_eq!(parse_position("12,3"), Some((12, 3)));
    }

    #[test]
    fn test_position_rejects_bad_shapes() {
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("1"), None);
        assert_eq!(parse_position("1,"), None);
        assert_eq!(parse_position(",1"), None);
        assert_eq!(parse_position("1, 2"), None);
        assert_eq!(parse_position("1,2,3"), None);
        assert_eq!(parse_position("-1,2"), None);
        assert_eq!(parse_position("a,b"), None);
    }

    #[test]
    fn test_dimensions_well_formed() {
        assert_eq!(parse_dimensions("3x4"), Some((3, 4)));
        assert_eq!(parse_dimensions("1x1"), Some((1, 1)));
    }

    #[test]
    fn test_dimensions_rejects_bad_shapes() {
        assert_eq!(parse_dimensions("3,4"), None);
        assert_eq!(parse_dimensions("x4"), None);
        assert_eq!(parse_dimensions("3x"), None);
        assert_eq!(parse_dimensions("3 x 4"), None);
        assert_eq!(parse_dimensions("3x4x5"), None);
    }

    #[test]
    fn test_index_rejects_non_digits() {
        assert_eq!(parse_index("7"), Some(7));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("+7"), None);
        assert_eq!(parse_index("7a"), None);
    }
}
