pub mod json;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub trait ContactStore {
    fn load(&self) -> Result<BTreeMap<String, Contact>, AppError>;

    fn save(&self, contacts: &BTreeMap<String, Contact>) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
