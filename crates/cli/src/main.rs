//! kvtable CLI — interactive editor for `(key,value)` table files.
//!
//! `kvtable [FILE]` loads a table file and drops into a menu loop. With no
//! argument a built-in default table is loaded and saves go to `default.txt`
//! in the working directory. Every mutating command overwrites the backing
//! file with the re-rendered table.

mod input;
mod menu;

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use kvtable_engine::TableEngine;

/// File name saves go to when no argument was given.
const DEFAULT_FILE: &str = "default.txt";

/// Built-in table used when no file argument was given.
const DEFAULT_TABLE: &str = include_str!("../resources/default.txt");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let (path, content) = match resolve_file(matches.get_one::<String>("file")) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error loading file: {}", e);
            process::exit(1);
        }
    };

    let mut engine = TableEngine::new(path);
    engine.load(&content);

    if let Err(e) = menu::run(&mut engine) {
        eprintln!("System Error: {}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("kvtable")
        .about("Interactive editor for flat text files of (key,value) cell tables")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Table file to load and persist to (built-in default when omitted)"),
        )
}

/// Resolve the optional file argument to (backing path, initial content).
///
/// No argument: the embedded default table, persisted to `default.txt`.
/// An argument must be a non-empty name of a readable file.
fn resolve_file(arg: Option<&String>) -> Result<(PathBuf, String)> {
    let Some(name) = arg else {
        return Ok((PathBuf::from(DEFAULT_FILE), DEFAULT_TABLE.to_string()));
    };

    if name.is_empty() {
        bail!("Filename cannot be empty.");
    }

    let path = PathBuf::from(name);
    let content = kvtable_codec::load(&path)
        .with_context(|| format!("File '{}' not found or not readable.", name))?;
    Ok((path, content))
}
