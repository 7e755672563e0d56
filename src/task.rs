use crate::errors::AppError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    New,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::New => write!(f, "New"),
            TaskStatus::Done => write!(f, "Done"),
        }
    }
}

/// What `Task::complete` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Completed,
    AlreadyDone,
}

impl Completion {
    pub fn message(&self, task: &Task) -> String {
        match self {
            Completion::Completed => format!("Задача '{}' успешно выполнена!", task.title()),
            Completion::AlreadyDone => {
                format!("Спокойно, задача '{}' уже была выполнена.", task.title())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    status: TaskStatus,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Result<Self, AppError> {
        let title = title.into();
        validate_title(&title)?;

        Ok(Self {
            title,
            status: TaskStatus::New,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Replaces the title. A blank title is rejected and the old one kept.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), AppError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn complete(&mut self) -> Completion {
        if self.status == TaskStatus::Done {
            return Completion::AlreadyDone;
        }
        self.status = TaskStatus::Done;
        Completion::Completed
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.title)
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation(
            "Название задачи не может быть пустым".to_string(),
        ));
    }
    Ok(())
}
