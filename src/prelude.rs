pub use crate::cli::{Session, command, render, run_app};
pub use crate::domain::{
    book::ContactBook,
    contact::{self, Contact},
    search::filter_contacts,
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStore, MemStore};
pub use crate::task::{Completion, Task, TaskStatus};
