//! On-disk format codec for kvtable.
//!
//! The persisted format is plain text: one row per line, cells joined by a
//! single space, each cell a `(key,value)` bracketed token. The codec is a
//! stateless transform in both directions:
//!
//! - [`parse`] turns file text into a [`Table`](kvtable_core::Table) and
//!   never fails; anything that does not match the cell grammar is skipped.
//! - [`render`] turns a Table back into file text, reproducing blank lines
//!   for empty rows exactly.
//! - [`persist`] renders and overwrites the backing file in full.
//!
//! Round-trip: `parse(render(t)) == t` holds for tables whose rows are
//! non-empty and whose cells conform to the grammar. An empty row renders to
//! a blank line, which re-parses to no row at all, so empty rows do not
//! survive a round trip. That asymmetry is part of the observed format and
//! is kept as-is.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod parse;
mod persist;
mod render;

pub use parse::{parse, parse_line};
pub use persist::{load, persist};
pub use render::render;
