pub mod command;
pub mod run;

pub use run::run_app;

use std::io::{self, Write};

use crate::domain::contact::Contact;
use crate::errors::AppError;
use command::Command;

// OUTPUT FUNCTIONS
pub fn parse_command_from_menu() -> Result<Command, AppError> {
    println!("\n=== Address Book Menu ===");
    println!("1. Add Contact");
    println!("2. Search Contact");
    println!("3. List All Contacts");
    println!("4. Update Contact");
    println!("5. Delete Contact");
    println!("6. Exit");
    print!("> ");
    io::stdout().flush()?;

    let choice = get_input()?;
    Command::from_choice(&choice)
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    println!("\n{label}");
    print!("> ");
    io::stdout().flush()?;

    get_input()
}

/// Prompt where a blank answer means "keep the current value".
pub fn prompt_optional(label: &str) -> Result<Option<String>, AppError> {
    let input = prompt(label)?;
    if input.is_empty() {
        return Ok(None);
    }
    Ok(Some(input))
}

pub fn display_contact(name: &str, contact: &Contact) -> String {
    let output = format!(
        "Name: {}\n  Phone: {}\n  Email: {}\n  Address: {}",
        name, contact.phone, contact.email, contact.address
    );
    output
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        // stdin is closed; surfaced so the menu loop can wind down
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(input.trim().to_string())
}
