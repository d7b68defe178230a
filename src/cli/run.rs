use clap::Parser;
use std::io::ErrorKind;

use super::command::{Cli, Command};
use super::{display_contact, parse_command_from_menu, prompt, prompt_optional};
use crate::domain::{book::AddressBook, contact::Contact};
use crate::errors::AppError;
use crate::store::json::JsonStore;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let store = JsonStore::new(&cli.path);
    let mut book = AddressBook::new(Box::new(store))?;

    println!("\n--- Address Book ---");

    loop {
        let command = match parse_command_from_menu() {
            Ok(command) => command,
            Err(AppError::ParseCommand(choice)) => {
                println!("Invalid choice '{choice}'. Please try again.");
                continue;
            }
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };

        match command {
            Command::AddContact => {
                let name = prompt("Enter name:")?;
                let phone = prompt("Enter phone number:")?;
                let email = prompt("Enter email:")?;
                let address = prompt("Enter address:")?;

                match book.add(&name, Contact::new(phone, email, address)) {
                    Ok(()) => println!("Contact {name} added successfully."),
                    Err(e @ AppError::AlreadyExists(_)) => println!("{e}."),
                    Err(e) => return Err(e),
                }
            }
            Command::SearchContact => {
                let name = prompt("Enter name to search:")?;

                match book.search(&name) {
                    Ok(contact) => println!("{}", display_contact(&name, contact)),
                    Err(e @ AppError::NotFound(_)) => println!("{e}."),
                    Err(e) => return Err(e),
                }
            }
            Command::ListContacts => match book.list() {
                Some(contacts) => {
                    for (name, contact) in contacts {
                        println!("{}", display_contact(name, contact));
                        println!("{}", "-".repeat(20));
                    }
                }
                None => println!("No contacts found."),
            },
            Command::UpdateContact => {
                let name = prompt("Enter name to update:")?;
                let phone = prompt_optional("Enter new phone number (leave blank to keep current):")?;
                let email = prompt_optional("Enter new email (leave blank to keep current):")?;
                let address = prompt_optional("Enter new address (leave blank to keep current):")?;

                match book.update(&name, phone, email, address) {
                    Ok(()) => println!("Contact {name} updated successfully."),
                    Err(e @ AppError::NotFound(_)) => println!("{e}."),
                    Err(e) => return Err(e),
                }
            }
            Command::DeleteContact => {
                let name = prompt("Enter name to delete:")?;

                match book.delete(&name) {
                    Ok(()) => println!("Contact {name} deleted successfully."),
                    Err(e @ AppError::NotFound(_)) => println!("{e}."),
                    Err(e) => return Err(e),
                }
            }
            Command::Exit => {
                println!("\nBye!");
                break;
            }
        }
    }

    Ok(())
}
