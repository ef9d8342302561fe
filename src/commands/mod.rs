//! Command layer: input parsing, handlers, and help text.
//!
//! This module is the boundary between raw console input and the core:
//! - **parser**: splits a line into a command name and arguments
//! - **handlers**: one function per command, returning the line to print
//!
//! The handlers never print; the REPL in `main.rs` owns all output.

pub mod handlers;
pub mod parser;

pub use handlers::{
    add_birthday, add_contact, birthdays, change_contact, delete_contact, show_all,
    show_birthday, show_phone,
};
pub use parser::{parse_input, ParsedCommand};

/// Supported commands with their usage lines, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("hello", "greet the bot"),
    ("add <name> <phone>", "add a contact or another phone"),
    ("change <name> <old> <new>", "replace a phone number"),
    ("phone <name>", "show a contact's phone numbers"),
    ("all", "show every contact"),
    ("add-birthday <name> <DD.MM.YYYY>", "set a birthday"),
    ("show-birthday <name>", "show a contact's birthday"),
    ("birthdays", "birthdays in the coming week"),
    ("delete <name>", "remove a contact"),
    ("help", "show this list"),
    ("close | exit", "quit"),
];

/// Render the supported-commands listing.
pub fn help_text() -> String {
    let width = COMMANDS
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);
    COMMANDS
        .iter()
        .map(|(usage, description)| format!("  {:width$}  {}", usage, description))
        .collect::<Vec<_>>()
        .join("\n")
}
