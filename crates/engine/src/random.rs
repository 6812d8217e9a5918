//! Placeholder cell content.
//!
//! Freshly appended or regenerated cells are filled with random printable
//! ASCII. The grammar delimiters are excluded from the draw so generated
//! keys and values can never break the cell syntax.

use rand::Rng;

const ASCII_MIN: u8 = 33;
const ASCII_MAX: u8 = 126;

/// Produce `length` random printable ASCII characters from `[33,126]`,
/// excluding `(`, `)` and `,`. No uniqueness or determinism guarantees.
pub fn random_ascii(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(length);
    while out.len() < length {
        let ch = rng.gen_range(ASCII_MIN..=ASCII_MAX) as char;
        if matches!(ch, '(' | ')' | ',') {
            continue;
        }
        out.push(ch);
    }
    out
}
