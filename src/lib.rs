//! kvtable — interactive editor for flat text files of `(key,value)` cells.
//!
//! A table file is plain text: one row per line, cells joined by spaces,
//! each cell a `(key,value)` bracketed token. This facade re-exports the
//! public API of the member crates:
//!
//! - `kvtable-core`: the [`Table`] data model and [`Error`] hierarchy
//! - `kvtable-codec`: [`parse`], [`render`] and [`persist`]
//! - `kvtable-engine`: the [`TableEngine`] with search/edit/add/sort/reset
//!
//! # Quick start
//!
//! ```
//! use kvtable::TableEngine;
//!
//! let mut engine = TableEngine::new("/tmp/kvtable-doc/table.txt");
//! engine.load("(x,1) (y,2)\n(m,n) (p,q)");
//!
//! assert_eq!(engine.table().row_count(), 2);
//! assert_eq!(engine.search("m"), "1 <m> at key of [1,0]\n");
//! ```
//!
//! The interactive menu lives in the `kvtable-cli` binary crate.

pub use kvtable_codec::{load, parse, parse_line, persist, render};
pub use kvtable_core::{cell, Error, Result, Row, Table};
pub use kvtable_engine::{count_occurrences, random_ascii, search_report, TableEngine, CELL_TEXT_LEN};
