pub use crate::cli::{command, run_app};
pub use crate::domain::{book::AddressBook, contact::Contact};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, json::JsonStore};
