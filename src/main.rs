//! Contact Book - Main entry point
//!
//! Interactive read-eval-print loop: reads a command per line, dispatches to
//! the handlers in `commands`, and prints the result or the rendered error.

use anyhow::Result;
use contact_book::commands::{self, parse_input};
use contact_book::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only so stdout stays clean for the REPL)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact book with a {}-day birthday window",
        config.upcoming_window_days
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF on stdin: leave the loop the same way "exit" would
            println!("Good bye!");
            break;
        }

        let Some(parsed) = parse_input(&line) else {
            continue;
        };

        let output = match parsed.command.as_str() {
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => Ok("How can I help you?".to_string()),
            "add" => commands::add_contact(&parsed.args, &mut book),
            "change" => commands::change_contact(&parsed.args, &mut book),
            "phone" => commands::show_phone(&parsed.args, &book),
            "all" => commands::show_all(&book),
            "add-birthday" => commands::add_birthday(&parsed.args, &mut book),
            "show-birthday" => commands::show_birthday(&parsed.args, &book),
            "birthdays" => commands::birthdays(&book, config.upcoming_window_days),
            "delete" => commands::delete_contact(&parsed.args, &mut book),
            "help" => Ok(commands::help_text()),
            _ => Ok("Invalid command.".to_string()),
        };

        match output {
            Ok(message) => println!("{}", message),
            Err(e) => println!("{}", e),
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
