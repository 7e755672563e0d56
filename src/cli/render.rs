use crate::cli::messages;
use crate::domain::Contact;

const RULE_WIDTH: usize = 45;

/// Formats contacts as a table numbered from 0 in iteration order.
pub fn contact_table<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let rows: Vec<String> = contacts
        .into_iter()
        .enumerate()
        .map(|(i, c)| format!("{:<4} | {:<20} | {:<15}", i, c.name, c.number))
        .collect();

    if rows.is_empty() {
        return messages::EMPTY_LIST.to_string();
    }

    let mut table = format!("{:<4} | {:<20} | {:<15}\n", "ID", "Имя", "Номер");
    table.push_str(&"-".repeat(RULE_WIDTH));
    for row in rows {
        table.push('\n');
        table.push_str(&row);
    }
    table
}
