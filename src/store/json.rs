use super::*;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_PATH: &str = "storage.json";

/// Contacts kept as a pretty-printed JSON array of `{name, number}` objects.
#[derive(Debug, Clone)]
pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(data: &str) -> Vec<Contact> {
        let value: Value = match serde_json::from_str(data) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "storage file is not valid JSON, ignoring it");
                return Vec::new();
            }
        };

        let Value::Array(entries) = value else {
            warn!("storage file does not hold a list, ignoring it");
            return Vec::new();
        };

        let total = entries.len();
        let contacts: Vec<Contact> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(record) => Contact::from_record(record),
                _ => None,
            })
            .collect();

        if contacts.len() < total {
            debug!(dropped = total - contacts.len(), "skipped incomplete records");
        }
        contacts
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            // Not UTF-8, so not something we wrote
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), "storage file is not UTF-8, ignoring it");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self::decode(&data))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        contacts.serialize(&mut serializer)?;

        create_file_parent(&self.path)?;
        fs::write(&self.path, buffer)?;

        Ok(())
    }

    fn medium(&self) -> &str {
        "json"
    }
}
