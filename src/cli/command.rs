use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::json::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Interactive phone book")]
pub struct Cli {
    /// JSON file holding the contacts
    #[arg(long, env = "PHONEBOOK_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: PathBuf,

    /// Without a subcommand the interactive phone book starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a task and print it
    Task {
        /// Task title, must not be blank
        title: String,

        /// Mark the task as done before printing it
        #[arg(long)]
        done: bool,
    },
}

/// One line of input to the interactive loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Find(Option<String>),
    Delete(Option<String>),
    Update(Option<String>),
    Exit,
    Unknown(String),
}

impl Command {
    /// Splits a line into a command word and the rest of the line.
    ///
    /// Returns `None` for a blank line. The command word is case-insensitive.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let word = parts.next()?.to_lowercase();
        let arg = parts
            .next()
            .map(|rest| rest.trim_start().to_string())
            .filter(|rest| !rest.is_empty());

        let command = match word.as_str() {
            "add" => Command::Add,
            "list" => Command::List,
            "find" => Command::Find(arg),
            "delete" => Command::Delete(arg),
            "update" => Command::Update(arg),
            "exit" => Command::Exit,
            _ => Command::Unknown(word),
        };
        Some(command)
    }
}
