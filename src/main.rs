use phonebook::prelude::run_app;
use std::process::exit;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Ошибка: {}", err);
        exit(1);
    }
}
