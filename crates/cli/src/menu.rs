//! The interactive menu loop.
//!
//! One command per iteration: show the menu, read a choice, prompt for the
//! command's parameters as separate line reads, validate their shape and
//! bounds, then call into the engine. Ctrl-C cancels the current prompt and
//! re-shows the menu; Ctrl-D exits.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use kvtable_core::{Error, Table};
use kvtable_engine::TableEngine;

use crate::input;

enum Prompt {
    Line(String),
    Cancelled,
    Eof,
}

/// Run the menu loop until the user exits.
pub fn run(engine: &mut TableEngine) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    print_table(engine.table());

    loop {
        print_menu();
        let choice = match prompt(&mut rl, "Choose an action: ") {
            Prompt::Line(line) => line,
            Prompt::Cancelled => continue,
            Prompt::Eof => break,
        };

        match choice.to_lowercase().as_str() {
            "search" => handle_search(&mut rl, engine),
            "edit" => handle_edit(&mut rl, engine),
            "print" => print_table(engine.table()),
            "add_row" => handle_add_row(&mut rl, engine),
            "sort" => handle_sort(&mut rl, engine),
            "reset" => handle_reset(&mut rl, engine),
            "x" => break,
            _ => println!("Invalid action. Please try again."),
        }
    }

    Ok(())
}

fn prompt(rl: &mut DefaultEditor, text: &str) -> Prompt {
    match rl.readline(text) {
        Ok(line) => Prompt::Line(line.trim().to_string()),
        Err(ReadlineError::Interrupted) => Prompt::Cancelled,
        Err(ReadlineError::Eof) => Prompt::Eof,
        Err(err) => {
            eprintln!("(error) {:?}", err);
            Prompt::Eof
        }
    }
}

/// Prompt for one parameter; `None` cancels the current command.
fn ask(rl: &mut DefaultEditor, text: &str) -> Option<String> {
    match prompt(rl, text) {
        Prompt::Line(line) => Some(line),
        Prompt::Cancelled | Prompt::Eof => None,
    }
}

fn handle_search(rl: &mut DefaultEditor, engine: &TableEngine) {
    let Some(term) = ask(rl, "Enter search term: ") else {
        return;
    };
    if term.is_empty() {
        println!("Search term cannot be empty. Please enter a valid search term.");
        return;
    }
    print!("{}", engine.search(&term));
}

fn handle_edit(rl: &mut DefaultEditor, engine: &mut TableEngine) {
    let Some(position) = ask(rl, "Enter cell position [row,column]: ") else {
        return;
    };
    let Some((row, col)) = input::parse_position(&position) else {
        println!("Invalid format.");
        return;
    };
    if row >= engine.table().row_count() {
        println!("Invalid row index");
        return;
    }
    if col >= engine.table().row(row).len() {
        println!("Invalid column index");
        return;
    }

    let Some(mode) = ask(rl, "Edit key, value or both? [key/value/both]: ") else {
        return;
    };
    let (new_key, new_value) = match mode.to_lowercase().as_str() {
        "key" => {
            let Some(key) = ask(rl, "Enter new key: ") else {
                return;
            };
            (key, String::new())
        }
        "value" => {
            let Some(value) = ask(rl, "Enter new value: ") else {
                return;
            };
            (String::new(), value)
        }
        "both" => {
            let Some(key) = ask(rl, "Enter new key: ") else {
                return;
            };
            let Some(value) = ask(rl, "Enter new value: ") else {
                return;
            };
            (key, value)
        }
        _ => {
            println!("Invalid edit mode. Please use 'key', 'value', or 'both'");
            return;
        }
    };

    match engine.edit_cell(row, col, &new_key, &new_value, &mode) {
        Ok(()) => print_table(engine.table()),
        Err(Error::InvalidEditMode(_)) => {
            println!("Invalid edit mode. Please use 'key', 'value', or 'both'");
        }
        Err(e) => report_save_error(&e),
    }
}

fn handle_add_row(rl: &mut DefaultEditor, engine: &mut TableEngine) {
    let Some(count) = ask(rl, "Number of cells to add: ") else {
        return;
    };
    let Some(cells) = input::parse_index(&count) else {
        println!("Invalid number format. Please enter a valid number.");
        return;
    };
    if cells == 0 {
        println!("Number of cells must be positive. Please enter a number greater than 0.");
        return;
    }

    match engine.add_row(cells) {
        Ok(()) => print_table(engine.table()),
        Err(e) => report_save_error(&e),
    }
}

fn handle_sort(rl: &mut DefaultEditor, engine: &mut TableEngine) {
    let Some(row_text) = ask(rl, "Enter row to sort: ") else {
        return;
    };
    let Some(row) = input::parse_index(&row_text) else {
        println!("Invalid number format. Please enter a valid row number.");
        return;
    };
    if row >= engine.table().row_count() {
        println!("Invalid row index.");
        return;
    }

    let Some(order) = ask(rl, "Sort order [asc/desc]: ") else {
        return;
    };
    if !order.eq_ignore_ascii_case("asc") && !order.eq_ignore_ascii_case("desc") {
        println!("Invalid order.");
        return;
    }

    match engine.sort_row(row, &order) {
        Ok(()) => print_table(engine.table()),
        Err(e) => report_save_error(&e),
    }
}

fn handle_reset(rl: &mut DefaultEditor, engine: &mut TableEngine) {
    let Some(dimensions) = ask(rl, "Enter table dimensions [ROWSxCOLUMNS]: ") else {
        return;
    };
    let Some((rows, columns)) = input::parse_dimensions(&dimensions) else {
        println!("Invalid format.");
        return;
    };
    if rows == 0 || columns == 0 {
        println!("Dimensions must be greater than 0.");
        return;
    }

    match engine.reset(rows, columns) {
        Ok(()) => print_table(engine.table()),
        Err(e) => report_save_error(&e),
    }
}

fn print_menu() {
    println!("\n=== MENU ===");
    println!("[ search ] - Search");
    println!("[ edit ] - Edit");
    println!("[ print ] - Print");
    println!("[ add_row ] - Add Row");
    println!("[ sort ] - Sort");
    println!("[ reset ] - Reset");
    println!("[ x ] - Exit");
}

fn print_table(table: &Table) {
    println!("\n--- Table Contents ---");
    for row in table.rows() {
        println!("{}", row.join(" "));
    }
}

fn report_save_error(err: &Error) {
    warn!(error = %err, "failed to persist table");
    println!("Error saving: {}", err);
}
