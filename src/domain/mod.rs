pub mod book;
pub mod contact;
pub mod search;

use crate::errors::AppError;
use crate::store::ContactStore;

pub use book::ContactBook;
pub use contact::Contact;
