use super::*;

/// True when `needle` occurs in the lowercased text of any searchable field.
///
/// `needle` is expected to be lowercased by the caller already.
pub fn matches(contact: &Contact, needle: &str) -> bool {
    contact
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();

    contacts
        .iter()
        .filter(|contact| matches(contact, &needle))
        .collect()
}
