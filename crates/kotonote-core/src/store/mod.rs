//! Store adapters over row-oriented backing stores
//!
//! A store holds the durable copy of the notebook as an ordered sequence
//! of rows. Rows are addressed by their zero-based position in that
//! sequence; the adapters translate to whatever the backend natively
//! understands. The mapping is only correct while the caller's view and
//! the store row order have never diverged - there is no defense against
//! a concurrent writer.

mod json_file;
mod sheet;

pub use json_file::JsonFileStore;
pub use sheet::{SheetStore, ROW_OFFSET};

use crate::error::CoreError;
use crate::model::SentenceRecord;
use async_trait::async_trait;

/// Contract every backing store implements
///
/// All three operations propagate failures; none retries. Validation of
/// record contents happens in the session layer before `append` is
/// reached.
#[async_trait]
pub trait SentenceStore: Send + Sync + std::fmt::Debug {
    /// Full ordered read of the notebook.
    ///
    /// A store that has never been written to returns an empty list, not
    /// an error.
    async fn read_all(&self) -> Result<Vec<SentenceRecord>, CoreError>;

    /// Append one record after the current last row.
    async fn append(&self, record: &SentenceRecord) -> Result<(), CoreError>;

    /// Remove the row at the given zero-based position.
    ///
    /// Callers guard the position against their in-memory list before
    /// calling; the store only translates and deletes.
    async fn delete_at(&self, position: usize) -> Result<(), CoreError>;

    /// Short label for log lines and the UI header
    fn describe(&self) -> String;
}
