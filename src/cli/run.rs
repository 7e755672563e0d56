use crate::{
    cli::{
        command::{Cli, Command, Commands},
        messages, render, signal,
    },
    domain::ContactBook,
    errors::AppError,
    store::JsonStore,
    task::Task,
    telemetry,
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Whether the loop keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The interactive loop over one contact book.
pub struct Session<R, W> {
    book: ContactBook,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: ContactBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn into_parts(self) -> (ContactBook, W) {
        (self.book, self.output)
    }

    /// Runs until `exit` or end of input. Ctrl-C is handled by `signal`.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "{}", messages::BANNER)?;

        loop {
            let Some(line) = self.prompt(messages::PROMPT)? else {
                return self.leave().map(|_| ());
            };

            let Some(command) = Command::parse(&line) else {
                continue;
            };
            debug!(?command, "dispatching");

            if self.dispatch(command)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow, AppError> {
        match command {
            Command::Add => self.add(),
            Command::List => self.list(),
            Command::Find(query) => self.find(query),
            Command::Delete(target) => self.delete(target),
            Command::Update(target) => self.update(target),
            Command::Exit => {
                writeln!(self.output, "{}", messages::GOODBYE)?;
                Ok(Flow::Quit)
            }
            Command::Unknown(word) => {
                debug!(word = %word, "unknown command");
                writeln!(self.output, "{}", messages::UNKNOWN_COMMAND)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> Result<Flow, AppError> {
        let Some(name) = self.prompt(messages::ASK_NAME)? else {
            return self.leave();
        };
        let Some(number) = self.prompt(messages::ASK_NUMBER)? else {
            return self.leave();
        };

        match self.book.add(&name, &number).map(|_| ()) {
            Ok(_) => {
                self.persist()?;
                writeln!(self.output, "{}", messages::SAVED)?;
            }
            Err(err) => {
                debug!(error = %err, "contact rejected");
                writeln!(self.output, "{}", messages::error_line(&err))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "{}", render::contact_table(self.book.contacts()))?;
        Ok(Flow::Continue)
    }

    fn find(&mut self, query: Option<String>) -> Result<Flow, AppError> {
        if self.book.is_empty() {
            writeln!(self.output, "{}", messages::EMPTY_BOOK)?;
            return Ok(Flow::Continue);
        }

        let query = match query {
            Some(query) => query,
            None => match self.prompt(messages::ASK_QUERY)? {
                Some(query) => query,
                None => return self.leave(),
            },
        };

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            writeln!(self.output, "{}", messages::EMPTY_QUERY)?;
            return Ok(Flow::Continue);
        }

        let results = self.book.find(&needle);
        if results.is_empty() {
            writeln!(self.output, "{}", messages::NOTHING_FOUND)?;
        } else {
            writeln!(self.output, "{}", messages::found(results.len()))?;
            writeln!(self.output, "{}", render::contact_table(results))?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self, target: Option<String>) -> Result<Flow, AppError> {
        let Some(raw) = self.target_or_prompt(target, messages::ASK_DELETE_ID)? else {
            return self.leave();
        };

        let removed = self
            .book
            .resolve_index(&raw)
            .and_then(|index| self.book.delete(index));

        match removed {
            Ok(contact) => {
                self.persist()?;
                writeln!(self.output, "{}", messages::deleted(&contact.name))?;
            }
            Err(err) => writeln!(self.output, "{}", messages::error_line(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self, target: Option<String>) -> Result<Flow, AppError> {
        let Some(raw) = self.target_or_prompt(target, messages::ASK_UPDATE_ID)? else {
            return self.leave();
        };

        let index = match self.book.resolve_index(&raw) {
            Ok(index) => index,
            Err(err) => {
                writeln!(self.output, "{}", messages::error_line(&err))?;
                return Ok(Flow::Continue);
            }
        };

        let current = &self.book.contacts()[index];
        writeln!(
            self.output,
            "{}",
            messages::editing(&current.name, &current.number)
        )?;

        let Some(new_name) = self.prompt(messages::ASK_NEW_NAME)? else {
            return self.leave();
        };
        let Some(new_number) = self.prompt(messages::ASK_NEW_NUMBER)? else {
            return self.leave();
        };

        match self.book.update(index, &new_name, &new_number) {
            Ok(true) => {
                self.persist()?;
                writeln!(self.output, "{}", messages::UPDATED)?;
            }
            Ok(false) => writeln!(self.output, "{}", messages::NO_CHANGES)?,
            Err(err) => writeln!(self.output, "{}", messages::error_line(&err))?,
        }
        Ok(Flow::Continue)
    }

    /// Saves the book. A failed save is reported, memory keeps the change.
    fn persist(&mut self) -> Result<(), AppError> {
        if let Err(err) = self.book.save() {
            warn!(error = %err, "saving contacts failed");
            writeln!(self.output, "{}", messages::save_failure(&err))?;
        }
        Ok(())
    }

    fn target_or_prompt(
        &mut self,
        target: Option<String>,
        question: &str,
    ) -> Result<Option<String>, AppError> {
        match target {
            Some(target) => Ok(Some(target)),
            None => self.prompt(question),
        }
    }

    /// Shows `question` and reads one trimmed line. `None` means input is over.
    fn prompt(&mut self, question: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(err) => Err(err.into()),
        }
    }

    fn leave(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "{}", messages::LEAVING)?;
        Ok(Flow::Quit)
    }
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::init();

    match cli.command {
        Some(Commands::Task { title, done }) => run_task(title, done),
        None => {
            let store = JsonStore::new(cli.storage_path);
            let book = ContactBook::open(Box::new(store));

            signal::leave_on_interrupt()?;

            // Stdout stays unlocked between writes so the interrupt thread can print.
            let stdin = io::stdin();
            let mut session = Session::new(book, stdin.lock(), io::stdout());
            session.run()
        }
    }
}

fn run_task(title: String, done: bool) -> Result<(), AppError> {
    let mut task = Task::new(title)?;

    if done {
        let outcome = task.complete();
        println!("{}", outcome.message(&task));
    }
    println!("{}", task);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;
    use crate::store::MemStore;
    use std::io::Cursor;

    fn run_with(contacts: Vec<Contact>, input: &str) -> Result<(String, MemStore, Vec<Contact>), AppError> {
        let store = MemStore::with_contacts(contacts);
        let book = ContactBook::open(Box::new(store.clone()));

        let mut session = Session::new(book, Cursor::new(input.to_string()), Vec::new());
        session.run()?;

        let (book, output) = session.into_parts();
        let text = String::from_utf8(output).expect("output is UTF-8");
        Ok((text, store, book.contacts().to_vec()))
    }

    #[test]
    fn banner_and_exit() -> Result<(), AppError> {
        let (out, store, _) = run_with(vec![], "exit\nlist\n")?;

        assert!(out.starts_with("\n=== ТЕЛЕФОННАЯ КНИГА ==="));
        assert!(out.trim_end().ends_with("Пока!"));
        assert!(!out.contains("Список контактов пуст."));
        assert_eq!(store.save_count(), 0);
        Ok(())
    }

    #[test]
    fn end_of_input_says_goodbye() -> Result<(), AppError> {
        let (out, _, _) = run_with(vec![], "\n\n")?;

        assert!(out.ends_with("\nВыход...\n"));
        Ok(())
    }

    #[test]
    fn unknown_command_is_reported() -> Result<(), AppError> {
        let (out, _, _) = run_with(vec![], "jump\nexit\n")?;

        assert!(out.contains("Неизвестная команда."));
        Ok(())
    }

    #[test]
    fn add_persists_and_confirms() -> Result<(), AppError> {
        let (out, store, contacts) = run_with(vec![], "add\n Ann \n123\nexit\n")?;

        assert!(out.contains("Введите Имя: Введите Номер: Контакт сохранен."));
        assert_eq!(contacts, vec![Contact::new("Ann", "123")]);
        assert_eq!(store.data(), contacts);
        assert_eq!(store.save_count(), 1);
        Ok(())
    }

    #[test]
    fn add_with_empty_name_is_rejected() -> Result<(), AppError> {
        let (out, store, contacts) = run_with(vec![], "add\n\n123\nexit\n")?;

        assert!(out.contains("Ошибка: Имя не может быть пустым!"));
        assert!(contacts.is_empty());
        assert_eq!(store.save_count(), 0);
        Ok(())
    }

    #[test]
    fn add_with_letters_in_number_is_rejected() -> Result<(), AppError> {
        let (out, _, contacts) = run_with(vec![], "add\nAnn\n12ab\nexit\n")?;

        assert!(out.contains("Ошибка: Номер обязателен и должен содержать только цифры!"));
        assert!(contacts.is_empty());
        Ok(())
    }

    #[test]
    fn add_then_delete_reports_name() -> Result<(), AppError> {
        let (out, store, contacts) = run_with(vec![], "add\nAnn\n123\ndelete 0\nexit\n")?;

        assert!(out.contains("Контакт 'Ann' удален."));
        assert!(contacts.is_empty());
        assert!(store.data().is_empty());
        assert_eq!(store.save_count(), 2);
        Ok(())
    }

    #[test]
    fn delete_prompts_for_id_and_checks_it() -> Result<(), AppError> {
        let contacts = vec![Contact::new("Ann", "123")];
        let (out, store, left) = run_with(contacts, "delete\nabc\ndelete 5\ndelete -1\nexit\n")?;

        assert!(out.contains("Введите ID контакта для удаления: Ошибка: ID должен быть числом!"));
        assert_eq!(out.matches("Ошибка: Неверный ID.").count(), 2);
        assert_eq!(left.len(), 1);
        assert_eq!(store.save_count(), 0);
        Ok(())
    }

    #[test]
    fn list_shows_table() -> Result<(), AppError> {
        let contacts = vec![Contact::new("Ann", "123")];
        let (out, _, _) = run_with(contacts, "list\nexit\n")?;

        assert!(out.contains("0    | Ann                  | 123            "));
        Ok(())
    }

    #[test]
    fn find_is_case_insensitive_and_renumbers() -> Result<(), AppError> {
        let contacts = vec![Contact::new("Bob", "456"), Contact::new("Ann", "123")];
        let (out, _, _) = run_with(contacts, "find AN\nexit\n")?;

        assert!(out.contains("\nНайдено совпадений: 1\n"));
        assert!(out.contains("0    | Ann"));
        assert!(!out.contains("Bob                  |"));
        Ok(())
    }

    #[test]
    fn find_short_circuits() -> Result<(), AppError> {
        let (out, _, _) = run_with(vec![], "find ann\nexit\n")?;
        assert!(out.contains("Телефонная книга пуста. Искать негде."));

        let contacts = vec![Contact::new("Ann", "123")];
        let (out, _, _) = run_with(contacts, "find\n   \nfind zed\nexit\n")?;
        assert!(out.contains("Поиск: Пустой запрос."));
        assert!(out.contains("Ничего не найдено."));
        Ok(())
    }

    #[test]
    fn update_replaces_supplied_fields() -> Result<(), AppError> {
        let contacts = vec![Contact::new("Ann", "123")];
        let (out, store, left) = run_with(contacts, "update 0\nAnna\n\nexit\n")?;

        assert!(out.contains("Редактируем: Ann | 123"));
        assert!(out.contains("Контакт успешно обновлен."));
        assert_eq!(left, vec![Contact::new("Anna", "123")]);
        assert_eq!(store.save_count(), 1);
        Ok(())
    }

    #[test]
    fn update_with_bad_number_aborts() -> Result<(), AppError> {
        let contacts = vec![Contact::new("Ann", "123")];
        let (out, store, left) = run_with(contacts, "update\n0\nAnna\n12x\nexit\n")?;

        assert!(out.contains("Ошибка: Номер должен содержать только цифры! Изменение отменено."));
        assert_eq!(left, vec![Contact::new("Ann", "123")]);
        assert_eq!(store.save_count(), 0);
        Ok(())
    }

    #[test]
    fn update_without_changes() -> Result<(), AppError> {
        let contacts = vec![Contact::new("Ann", "123")];
        let (out, store, _) = run_with(contacts, "update 0\n\n\nexit\n")?;

        assert!(out.contains("Изменений нет."));
        assert_eq!(store.save_count(), 0);
        Ok(())
    }

    #[test]
    fn end_of_input_inside_prompt_leaves_without_change() -> Result<(), AppError> {
        let (out, store, contacts) = run_with(vec![], "add\nAnn\n")?;

        assert!(out.ends_with("\nВыход...\n"));
        assert!(contacts.is_empty());
        assert_eq!(store.save_count(), 0);
        Ok(())
    }

    #[test]
    fn failed_save_is_reported_and_memory_keeps_change() -> Result<(), AppError> {
        let store = MemStore::failing(std::io::ErrorKind::PermissionDenied);
        let book = ContactBook::open(Box::new(store));
        let mut session = Session::new(book, Cursor::new("add\nAnn\n123\nexit\n"), Vec::new());

        session.run()?;

        assert_eq!(session.book().contacts(), &[Contact::new("Ann", "123")]);
        let (_, output) = session.into_parts();
        let out = String::from_utf8(output).expect("output is UTF-8");
        assert!(out.contains("Ошибка: Нет прав на запись в этот файл.\nКонтакт сохранен."));
        Ok(())
    }
}
