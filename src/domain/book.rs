use std::collections::BTreeMap;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::ContactStore;

pub struct AddressBook {
    pub contacts: BTreeMap<String, Contact>,
    pub store: Box<dyn ContactStore>,
}

impl AddressBook {
    pub fn new(store: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut book = Self {
            contacts: BTreeMap::new(),
            store,
        };
        book.load()?;
        Ok(book)
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.contacts = self.store.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.store.save(&self.contacts)
    }

    /// Inserts a new contact under `name`. A name that is already taken is
    /// rejected without touching the book or the backing file.
    pub fn add(&mut self, name: &str, contact: Contact) -> Result<(), AppError> {
        if self.contacts.contains_key(name) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }

        self.contacts.insert(name.to_string(), contact);
        self.save()
    }

    pub fn search(&self, name: &str) -> Result<&Contact, AppError> {
        self.contacts
            .get(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    /// Full listing of (name, contact) pairs, or `None` for an empty book.
    pub fn list(&self) -> Option<Vec<(&String, &Contact)>> {
        if self.contacts.is_empty() {
            return None;
        }
        Some(self.contacts.iter().collect())
    }

    /// Replaces only the fields that were supplied; `None` keeps the
    /// current value.
    pub fn update(
        &mut self,
        name: &str,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<(), AppError> {
        let contact = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        if let Some(phone) = phone {
            contact.phone = phone;
        }
        if let Some(email) = email {
            contact.email = email;
        }
        if let Some(address) = address {
            contact.address = address;
        }

        self.save()
    }

    pub fn delete(&mut self, name: &str) -> Result<(), AppError> {
        if self.contacts.remove(name).is_none() {
            return Err(AppError::NotFound(name.to_string()));
        }

        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::json::JsonStore;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn book_in(dir: &TempDir) -> Result<AddressBook, AppError> {
        let store = JsonStore::new(dir.path().join("contacts.json"));
        AddressBook::new(Box::new(store))
    }

    fn alice() -> Contact {
        Contact::new(
            "555-1111".to_string(),
            "a@x.com".to_string(),
            "1 Main St".to_string(),
        )
    }

    #[test]
    fn add_then_search_returns_stored_fields() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        book.add("Alice", alice())?;

        let found = book.search("Alice")?;
        assert_eq!(found.phone, "555-1111");
        assert_eq!(found.email, "a@x.com");
        assert_eq!(found.address, "1 Main St");
        Ok(())
    }

    #[test]
    fn add_rejects_duplicate_and_keeps_existing() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        book.add("Alice", alice())?;

        let second = Contact::new(
            "555-9999".to_string(),
            "other@x.com".to_string(),
            "9 Other Rd".to_string(),
        );
        let result = book.add("Alice", second);

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
        assert_eq!(book.search("Alice")?.phone, "555-1111");
        Ok(())
    }

    #[test]
    fn update_with_no_fields_changes_nothing() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        book.add("Alice", alice())?;
        book.update("Alice", None, None, None)?;

        assert_eq!(book.search("Alice")?, &alice());
        Ok(())
    }

    #[test]
    fn update_changes_only_supplied_fields() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        book.add("Alice", alice())?;
        book.update("Alice", None, Some("alice@x.com".to_string()), None)?;

        let found = book.search("Alice")?;
        assert_eq!(found.phone, "555-1111");
        assert_eq!(found.email, "alice@x.com");
        assert_eq!(found.address, "1 Main St");
        Ok(())
    }

    #[test]
    fn update_missing_name_is_rejected() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        let result = book.update("Ghost", Some("000".to_string()), None, None);

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(book.list().is_none());
        Ok(())
    }

    #[test]
    fn delete_then_search_reports_not_found() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        book.add("Alice", alice())?;
        book.delete("Alice")?;

        assert!(matches!(book.search("Alice"), Err(AppError::NotFound(_))));
        assert!(matches!(book.delete("Alice"), Err(AppError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn list_signals_empty_book() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        assert!(book.list().is_none());

        book.add("Alice", alice())?;

        let listed = book.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, "Alice");
        Ok(())
    }

    #[test]
    fn reload_from_same_file_reproduces_mapping() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut book = book_in(&dir)?;

        book.add("Alice", alice())?;
        book.add(
            "Bob",
            Contact::new(
                "555-2222".to_string(),
                "b@x.com".to_string(),
                "2 Side St".to_string(),
            ),
        )?;

        let reloaded = book_in(&dir)?;
        assert_eq!(reloaded.contacts, book.contacts);
        Ok(())
    }

    #[test]
    fn corrupted_file_loads_as_empty_book() -> Result<(), AppError> {
        let dir = tempdir()?;
        fs::write(dir.path().join("contacts.json"), "{ not json")?;

        let book = book_in(&dir)?;
        assert!(book.list().is_none());
        Ok(())
    }
}
