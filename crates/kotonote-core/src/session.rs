//! Session cache over a sentence store
//!
//! One `NotebookSession` lives for one user session. It mirrors the
//! backing store in memory so views never pay a round trip, and it is
//! the only writer during its lifetime: every mutation commits to the
//! store first and touches the cache only on success, so `Ok` means both
//! sides converged and `Err` means neither changed.

use crate::error::{CoreError, DegradedState};
use crate::model::{Entry, RecordSeq, SentenceRecord};
use crate::store::SentenceStore;
use rand::Rng;
use tracing::{debug, info, warn};

/// In-memory mirror of the backing store, scoped to one session.
///
/// Owned by the frontend and passed `&mut` through the request-handling
/// path; there is no ambient shared state and no lock.
pub struct NotebookSession {
    store: Box<dyn SentenceStore>,

    /// Cached ordered list; `None` until first access
    entries: Option<Vec<Entry>>,

    /// Next identity to hand out when a record enters the cache
    next_seq: RecordSeq,

    /// Availability after the initial population attempt
    degraded: DegradedState,
}

impl NotebookSession {
    pub fn new(store: Box<dyn SentenceStore>) -> Self {
        Self {
            store,
            entries: None,
            next_seq: RecordSeq::new(1),
            degraded: DegradedState::default(),
        }
    }

    /// Label of the underlying store, for the UI header
    pub fn store_label(&self) -> String {
        self.store.describe()
    }

    pub fn degraded_state(&self) -> &DegradedState {
        &self.degraded
    }

    /// The current list, reading the store in full on first access and
    /// reusing the cached copy afterwards.
    pub async fn entries(&mut self) -> Result<&[Entry], CoreError> {
        if self.entries.is_none() {
            let records = self.store.read_all().await?;
            debug!(count = records.len(), store = %self.store.describe(), "Session cache populated");
            self.adopt(records);
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    /// Like [`entries`](Self::entries), but a failed initial read leaves
    /// the session running on an empty list and records the reason.
    /// Frontends call this once at startup so a dead store degrades to a
    /// visible banner instead of a crash; later mutations still fail
    /// loudly.
    pub async fn entries_or_degraded(&mut self) -> &[Entry] {
        if self.entries.is_none() {
            match self.store.read_all().await {
                Ok(records) => {
                    debug!(count = records.len(), "Session cache populated");
                    self.adopt(records);
                }
                Err(e) => {
                    warn!(error = %e, store = %self.store.describe(), "Initial read failed, starting degraded");
                    self.degraded = DegradedState::Unavailable {
                        reason: e.to_string(),
                    };
                    self.adopt(Vec::new());
                }
            }
        }
        self.entries.as_deref().unwrap_or_default()
    }

    /// Drop the cached list so the next access re-reads the store.
    pub fn invalidate(&mut self) {
        debug!("Session cache invalidated");
        self.entries = None;
        self.degraded = DegradedState::default();
    }

    fn adopt(&mut self, records: Vec<SentenceRecord>) {
        let entries = records
            .into_iter()
            .map(|record| {
                let seq = self.next_seq;
                self.next_seq = self.next_seq.next();
                Entry { seq, record }
            })
            .collect();
        self.entries = Some(entries);
    }

    /// Validate and append a sentence pair.
    ///
    /// The store confirms first; the cache is only extended on success,
    /// so there is never a locally visible row the store does not hold.
    pub async fn add(
        &mut self,
        source_text: &str,
        target_text: &str,
    ) -> Result<RecordSeq, CoreError> {
        let source_text = source_text.trim();
        let target_text = target_text.trim();

        if source_text.is_empty() {
            return Err(CoreError::EmptyField { field: "source" });
        }
        if target_text.is_empty() {
            return Err(CoreError::EmptyField { field: "target" });
        }

        // Populate before writing so the appended position is consistent
        self.entries().await?;

        let record = SentenceRecord::new(source_text, target_text);
        self.store.append(&record).await?;

        let seq = self.next_seq;
        self.next_seq = self.next_seq.next();
        self.entries
            .as_mut()
            .expect("cache populated above")
            .push(Entry { seq, record });

        info!(%seq, "Sentence added");
        Ok(seq)
    }

    /// Remove the record at a zero-based position.
    ///
    /// The guard runs before anything is touched: a position that no
    /// longer exists is refused instead of deleting whatever shifted
    /// into it. Returns the removed record for the confirmation message.
    pub async fn remove_at(&mut self, position: usize) -> Result<SentenceRecord, CoreError> {
        let len = self.entries().await?.len();
        if position >= len {
            return Err(CoreError::PositionMismatch { position, len });
        }

        self.store.delete_at(position).await?;

        let entry = self
            .entries
            .as_mut()
            .expect("cache populated above")
            .remove(position);

        info!(seq = %entry.seq, position, "Sentence removed");
        Ok(entry.record)
    }

    /// Remove a record by its session identity.
    ///
    /// This is what interactive views call: selection state held across
    /// frames stays valid even after earlier rows were deleted, because
    /// the seq is resolved to its current position at the moment of the
    /// delete.
    pub async fn remove_by_seq(&mut self, seq: RecordSeq) -> Result<SentenceRecord, CoreError> {
        let position = self
            .position_of(seq)
            .await?
            .ok_or(CoreError::RecordGone)?;
        self.remove_at(position).await
    }

    /// Current position of a seq, or `None` if it left the list
    pub async fn position_of(&mut self, seq: RecordSeq) -> Result<Option<usize>, CoreError> {
        Ok(self
            .entries()
            .await?
            .iter()
            .position(|entry| entry.seq == seq))
    }

    /// Uniform random draw over the current list, for quiz mode.
    ///
    /// Callers populate the cache first; an unpopulated or empty session
    /// yields `None`.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Option<&Entry> {
        let entries = self.entries.as_deref()?;
        if entries.is_empty() {
            return None;
        }
        let index = rng.random_range(0..entries.len());
        entries.get(index)
    }

    /// The cached list without touching the store; empty until the
    /// first populated access. Render paths use this so drawing a frame
    /// can never trigger I/O.
    pub fn cached(&self) -> &[Entry] {
        self.entries.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.as_deref().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
