use clap::Parser;

use crate::errors::AppError;
use crate::store::json::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple Address Book")]
pub struct Cli {
    /// Path to the backing contacts file
    #[arg(long, env = "ADDRESS_BOOK_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub path: String,
}

#[derive(Debug)]
pub enum Command {
    AddContact,
    SearchContact,
    ListContacts,
    UpdateContact,
    DeleteContact,
    Exit,
}

impl Command {
    pub fn from_choice(choice: &str) -> Result<Self, AppError> {
        match choice {
            "1" => Ok(Command::AddContact),
            "2" => Ok(Command::SearchContact),
            "3" => Ok(Command::ListContacts),
            "4" => Ok(Command::UpdateContact),
            "5" => Ok(Command::DeleteContact),
            "6" => Ok(Command::Exit),
            _ => Err(AppError::ParseCommand(choice.to_string())),
        }
    }
}
