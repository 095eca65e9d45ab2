//! Data model for sentence notes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single sentence pair, immutable once created.
///
/// On disk (and in the sheet columns) the fields keep the historical
/// short keys `jp` / `kr`, so notebooks written by earlier iterations of
/// the app load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Sentence in the language being studied
    #[serde(rename = "jp")]
    pub source_text: String,

    /// Meaning in the reader's language
    #[serde(rename = "kr")]
    pub target_text: String,
}

impl SentenceRecord {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Newtype for a session-scoped record identity - zero-cost type safety
///
/// Assigned monotonically when a record enters the session cache. Never
/// persisted: the backing stores stay positional, the seq only keeps UI
/// selection state from addressing a row that has shifted underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordSeq(u64);

impl RecordSeq {
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The seq that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for RecordSeq {
    fn from(seq: u64) -> Self {
        Self(seq)
    }
}

/// A cached record together with its session identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub seq: RecordSeq,
    pub record: SentenceRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_short_keys() {
        let record = SentenceRecord::new("こんにちは", "안녕하세요");
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"jp\""));
        assert!(json.contains("\"kr\""));
        assert!(!json.contains("source_text"));
    }

    #[test]
    fn test_record_roundtrip() {
        let record = SentenceRecord::new("勉強します", "공부합니다");
        let json = serde_json::to_string(&record).unwrap();
        let back: SentenceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_seq_ordering() {
        let first = RecordSeq::new(1);
        let second = first.next();

        assert!(second > first);
        assert_eq!(second.value(), 2);
        assert_eq!(second.to_string(), "#2");
    }
}
