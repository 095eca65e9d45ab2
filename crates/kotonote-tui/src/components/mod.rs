//! Reusable TUI components

pub mod confirm_dialog;
pub mod input_field;
pub mod toast;

pub use confirm_dialog::{ConfirmDialog, ConfirmResult};
pub use input_field::InputField;
pub use toast::{Toast, ToastManager};
