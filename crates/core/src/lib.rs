//! Core types for kvtable
//!
//! This crate defines the foundational types used throughout the system:
//! - Table: ordered rows of raw cell strings, the whole in-memory document
//! - Row: one line of the persisted format, an ordered list of cells
//! - cell: decomposition/recomposition helpers for the `(key,value)` syntax
//! - Error: error type hierarchy
//!
//! No I/O and no parsing live here; this crate is a pure data model.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod error;
pub mod table;

pub use error::{Error, Result};
pub use table::{Row, Table};
