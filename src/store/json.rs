use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const DEFAULT_STORAGE_PATH: &str = "./address_book.json";

pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<BTreeMap<String, Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(BTreeMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(BTreeMap::new());
        }

        // Anything that is not an object of name -> contact fields counts
        // as undecodable and the book starts empty.
        match serde_json::from_str(&data) {
            Ok(contacts) => {
                log::debug!("loaded contacts from {}", self.path.display());
                Ok(contacts)
            }
            Err(e) => {
                log::warn!(
                    "could not decode {}: {}; starting with an empty book",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, contacts: &BTreeMap<String, Contact>) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = serde_json::to_string_pretty(&contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(data.as_bytes())?;

        log::debug!(
            "saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}
