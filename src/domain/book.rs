use super::*;
use super::contact::{ValidationReq, validate_name, validate_number};
use super::search;
use std::num::IntErrorKind;
use tracing::{debug, info, warn};

/// The in-memory contact sequence and the storage it is persisted to.
///
/// A contact is identified by its position; removing one shifts every
/// later contact down by one.
pub struct ContactBook {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    /// Loads the book from `storage`. A storage that cannot be read yields an empty book.
    pub fn open(storage: Box<dyn ContactStore>) -> Self {
        let contacts = storage.load().unwrap_or_else(|err| {
            warn!(medium = storage.medium(), error = %err, "could not load contacts, starting empty");
            Vec::new()
        });
        info!(count = contacts.len(), medium = storage.medium(), "contact book loaded");

        Self { contacts, storage }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Writes the whole sequence back to storage.
    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.contacts)?;
        debug!(count = self.contacts.len(), "contacts saved");
        Ok(())
    }

    /// Validates and appends a contact. Does not persist.
    pub fn add(&mut self, name: &str, number: &str) -> Result<&Contact, AppError> {
        let name = name.trim();
        let number = number.trim();

        if !validate_name(name) {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }
        if !validate_number(number)? {
            return Err(AppError::Validation(ValidationReq::number_req()));
        }

        self.contacts.push(Contact::new(name, number));
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    pub fn find(&self, query: &str) -> Vec<&Contact> {
        search::filter_contacts(&self.contacts, query)
    }

    /// Parses a positional ID and checks it against the current length.
    ///
    /// An integer too large for `i64` is still an integer, so it is out of range.
    pub fn resolve_index(&self, raw: &str) -> Result<usize, AppError> {
        let raw = raw.trim();
        let index = match raw.parse::<i64>() {
            Ok(index) => index,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    return Err(AppError::OutOfRange(raw.to_string()));
                }
                _ => return Err(err.into()),
            },
        };

        match usize::try_from(index) {
            Ok(idx) if idx < self.contacts.len() => Ok(idx),
            _ => Err(AppError::OutOfRange(raw.to_string())),
        }
    }

    /// Removes and returns the contact at `index`. Does not persist.
    pub fn delete(&mut self, index: usize) -> Result<Contact, AppError> {
        if index < self.contacts.len() {
            Ok(self.contacts.remove(index))
        } else {
            Err(AppError::NotFound("Contact".to_string()))
        }
    }

    /// Replaces the non-empty fields of the contact at `index`.
    ///
    /// An invalid number rejects the whole update before anything is changed.
    /// Returns whether any field was supplied. Does not persist.
    pub fn update(&mut self, index: usize, new_name: &str, new_number: &str) -> Result<bool, AppError> {
        let new_name = new_name.trim();
        let new_number = new_number.trim();

        if !new_number.is_empty() && !validate_number(new_number)? {
            return Err(AppError::Validation(ValidationReq::number_update_req()));
        }

        let contact = self
            .contacts
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        let mut changed = false;
        if !new_name.is_empty() {
            contact.name = new_name.to_string();
            changed = true;
        }
        if !new_number.is_empty() {
            contact.number = new_number.to_string();
            changed = true;
        }

        Ok(changed)
    }
}
