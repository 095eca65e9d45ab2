//! kotonote-core - Core library for kotonote
//!
//! Provides the sentence model, store adapters (local JSON file, remote
//! sheet), the per-session notebook cache, and configuration.

pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;

pub use config::{AppConfig, Backend, ColorScheme};
pub use error::{CoreError, DegradedState};
pub use model::{Entry, RecordSeq, SentenceRecord};
pub use session::NotebookSession;
pub use store::{JsonFileStore, SentenceStore, SheetStore};
