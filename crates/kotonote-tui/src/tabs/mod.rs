//! Tab implementations

pub mod add;
pub mod notebook;
pub mod quiz;

pub use add::{AddKeyResult, AddTab};
pub use notebook::{NotebookAction, NotebookTab};
pub use quiz::{QuizAction, QuizTab};
