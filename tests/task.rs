use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_new_task() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["task", "Работать"])
        .assert()
        .success()
        .stdout("[New] Работать\n");

    Ok(())
}

#[test]
fn completes_task() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["task", "Работать", "--done"])
        .assert()
        .success()
        .stdout("Задача 'Работать' успешно выполнена!\n[Done] Работать\n");

    Ok(())
}

#[test]
fn blank_title_fails() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["task", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Ошибка: Название задачи не может быть пустым",
        ));

    Ok(())
}
