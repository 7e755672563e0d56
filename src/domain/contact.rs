use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

// Non-empty and made of decimal digits only, no '+' or separators
static DIGITS: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^\d+$"));

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Contact {
    pub name: String,
    pub number: String,

    /// Keys found in the file beside `name` and `number`, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Имя не может быть пустым!".to_string()
    }

    pub fn number_req() -> String {
        "Номер обязателен и должен содержать только цифры!".to_string()
    }

    pub fn number_update_req() -> String {
        "Номер должен содержать только цифры! Изменение отменено.".to_string()
    }
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            number: number.into(),
            extra: Map::new(),
        }
    }

    /// Builds a contact from one persisted JSON object.
    ///
    /// Returns `None` unless both `name` and `number` keys are present. Their
    /// values are not validated: a legacy entry with a non-digit number is
    /// kept as is, and a non-string value is kept as its JSON text.
    pub fn from_record(mut record: Map<String, Value>) -> Option<Self> {
        let name = record.remove("name")?;
        let number = record.remove("number")?;

        Some(Contact {
            name: value_text(name),
            number: value_text(number),
            extra: record,
        })
    }

    /// Fields a search query is matched against, in display order.
    pub fn searchable_fields(&self) -> [&str; 2] {
        [&self.name, &self.number]
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_number(number: &str) -> Result<bool, AppError> {
    let re = DIGITS.as_ref().map_err(|err| AppError::Regex(err.clone()))?;
    Ok(re.is_match(number.trim()))
}
