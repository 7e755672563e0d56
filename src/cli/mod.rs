pub mod command;
pub mod messages;
pub mod render;
pub mod run;
pub mod signal;

pub use run::{Session, run_app};
