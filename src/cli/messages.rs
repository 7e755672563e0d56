//! Everything the phone book says to the user.

use crate::errors::AppError;

pub const BANNER: &str = "\n=== ТЕЛЕФОННАЯ КНИГА ===\n\
Команды:\n  \
add           - добавить контакт\n  \
list          - список всех\n  \
find <text>   - поиск\n  \
delete <id>   - удалить по ID\n  \
update <id>   - изменить по ID\n  \
exit          - выход\n\
===============================\n";

pub const PROMPT: &str = "\n> ";
pub const ASK_NAME: &str = "Введите Имя: ";
pub const ASK_NUMBER: &str = "Введите Номер: ";
pub const ASK_QUERY: &str = "Поиск: ";
pub const ASK_DELETE_ID: &str = "Введите ID контакта для удаления: ";
pub const ASK_UPDATE_ID: &str = "Введите ID контакта для изменения: ";
pub const ASK_NEW_NAME: &str = "Новое имя (Enter чтобы оставить): ";
pub const ASK_NEW_NUMBER: &str = "Новый номер (Enter чтобы оставить): ";

pub const EMPTY_LIST: &str = "Список контактов пуст.";
pub const EMPTY_BOOK: &str = "Телефонная книга пуста. Искать негде.";
pub const EMPTY_QUERY: &str = "Пустой запрос.";
pub const NOTHING_FOUND: &str = "Ничего не найдено.";
pub const SAVED: &str = "Контакт сохранен.";
pub const UPDATED: &str = "Контакт успешно обновлен.";
pub const NO_CHANGES: &str = "Изменений нет.";
pub const UNKNOWN_COMMAND: &str = "Неизвестная команда.";
pub const GOODBYE: &str = "Пока!";
pub const LEAVING: &str = "\nВыход...";

pub fn found(count: usize) -> String {
    format!("\nНайдено совпадений: {}", count)
}

pub fn deleted(name: &str) -> String {
    format!("Контакт '{}' удален.", name)
}

pub fn editing(name: &str, number: &str) -> String {
    format!("Редактируем: {} | {}", name, number)
}

pub fn error_line(err: &AppError) -> String {
    let detail = match err {
        AppError::ParseInt(_) => "ID должен быть числом!".to_string(),
        AppError::OutOfRange(_) | AppError::NotFound(_) => "Неверный ID.".to_string(),
        other => other.to_string(),
    };
    format!("Ошибка: {}", detail)
}

pub fn save_failure(err: &AppError) -> String {
    if err.is_permission_denied() {
        "Ошибка: Нет прав на запись в этот файл.".to_string()
    } else {
        format!("Ошибка: Не удалось сохранить файл: {}", err)
    }
}
