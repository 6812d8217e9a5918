//! The table engine: search, edit, append, sort and reset over a live table.
//!
//! [`TableEngine`] exclusively owns the in-memory [`Table`](kvtable_core::Table)
//! for the process lifetime and remembers the backing file path. Every
//! mutating operation ends by rendering the table through `kvtable-codec`
//! and overwriting the backing file; a failed write is reported to the
//! caller while the in-memory mutation is kept.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod random;
mod search;

pub use engine::{TableEngine, CELL_TEXT_LEN};
pub use random::random_ascii;
pub use search::{count_occurrences, search_report};
