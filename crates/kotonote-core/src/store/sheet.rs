//! Remote spreadsheet store
//!
//! Talks to a row-oriented JSON proxy in front of the spreadsheet (the
//! kind of service that exposes a sheet as GET/POST/DELETE over rows).
//! Row numbering is the sheet's own: 1-based, row 1 is the header
//! `jp | kr`, data starts at row 2. The adapter owns the translation
//! from zero-based list positions to that addressing.
//!
//! Endpoints:
//!   GET    {base}/rows        -> {"values": [["jp","kr"], ["...","..."], ...]}
//!   POST   {base}/rows        <- {"values": ["...", "..."]}   (appends one row)
//!   DELETE {base}/rows/{row}  (1-based row number, header included)

use crate::error::CoreError;
use crate::model::SentenceRecord;
use crate::store::SentenceStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Distance between a zero-based list position and its 1-based sheet row:
/// one for the numbering base, one for the header row.
pub const ROW_OFFSET: usize = 2;

/// Column labels written to row 1 on first use
const SHEET_HEADER: [&str; 2] = ["jp", "kr"];

#[derive(Debug, Deserialize)]
struct RowsResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    values: [&'a str; 2],
}

/// Store adapter over a remote sheet proxy
#[derive(Debug)]
pub struct SheetStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SheetStore {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Sheet row addressed by a zero-based list position
    pub fn row_for_position(position: usize) -> usize {
        position + ROW_OFFSET
    }

    fn rows_url(&self) -> String {
        format!("{}/rows", self.base_url)
    }

    fn row_url(&self, row: usize) -> String {
        format!("{}/rows/{}", self.base_url, row)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    fn connectivity(operation: &str, e: reqwest::Error) -> CoreError {
        CoreError::Connectivity {
            message: format!("{operation}: {e}"),
            source: Some(e),
        }
    }

    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        let response = self
            .authorize(self.client.get(self.rows_url()))
            .send()
            .await
            .map_err(|e| Self::connectivity("read", e))?;

        if !response.status().is_success() {
            return Err(CoreError::SheetApi {
                operation: "read".to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: RowsResponse = response
            .json()
            .await
            .map_err(|e| Self::connectivity("read", e))?;

        Ok(body.values)
    }

    async fn append_cells(&self, cells: [&str; 2]) -> Result<(), CoreError> {
        let response = self
            .authorize(self.client.post(self.rows_url()))
            .json(&AppendRequest { values: cells })
            .send()
            .await
            .map_err(|e| Self::connectivity("append", e))?;

        if !response.status().is_success() {
            return Err(CoreError::SheetApi {
                operation: "append".to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    /// First-run bootstrap: a blank sheet gets the header row before any
    /// data is written, so data rows always start at row 2.
    pub async fn ensure_header(&self) -> Result<(), CoreError> {
        let rows = self.fetch_rows().await?;
        if rows.is_empty() {
            info!(sheet = %self.base_url, "Blank sheet, writing header row");
            self.append_cells(SHEET_HEADER).await?;
        }
        Ok(())
    }

    /// Convert raw sheet rows (header included) into records
    fn parse_rows(rows: Vec<Vec<String>>) -> Result<Vec<SentenceRecord>, CoreError> {
        rows.into_iter()
            .enumerate()
            .skip(1) // header row
            .map(|(index, mut cells)| {
                if cells.len() < 2 {
                    return Err(CoreError::MalformedRow {
                        row: index + 1,
                        cells: cells.len(),
                    });
                }
                let target_text = cells.swap_remove(1);
                let source_text = cells.swap_remove(0);
                Ok(SentenceRecord {
                    source_text,
                    target_text,
                })
            })
            .collect()
    }
}

#[async_trait]
impl SentenceStore for SheetStore {
    async fn read_all(&self) -> Result<Vec<SentenceRecord>, CoreError> {
        let rows = self.fetch_rows().await?;
        let records = Self::parse_rows(rows)?;
        debug!(sheet = %self.base_url, count = records.len(), "Sheet read");
        Ok(records)
    }

    async fn append(&self, record: &SentenceRecord) -> Result<(), CoreError> {
        self.append_cells([&record.source_text, &record.target_text])
            .await
    }

    async fn delete_at(&self, position: usize) -> Result<(), CoreError> {
        let row = Self::row_for_position(position);
        let response = self
            .authorize(self.client.delete(self.row_url(row)))
            .send()
            .await
            .map_err(|e| Self::connectivity("delete", e))?;

        if !response.status().is_success() {
            return Err(CoreError::SheetApi {
                operation: "delete".to_string(),
                status: response.status().as_u16(),
            });
        }

        debug!(sheet = %self.base_url, position, row, "Sheet row deleted");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sheet:{}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_position_zero_maps_to_row_two() {
        assert_eq!(SheetStore::row_for_position(0), 2);
        assert_eq!(SheetStore::row_for_position(4), 6);
    }

    #[test]
    fn test_parse_skips_header_row() {
        let parsed = SheetStore::parse_rows(rows(&[
            &["jp", "kr"],
            &["ありがとう", "감사합니다"],
            &["すみません", "죄송합니다"],
        ]))
        .unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].source_text, "ありがとう");
        assert_eq!(parsed[1].target_text, "죄송합니다");
    }

    #[test]
    fn test_parse_header_only_sheet_is_empty() {
        let parsed = SheetStore::parse_rows(rows(&[&["jp", "kr"]])).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_blank_sheet_is_empty() {
        let parsed = SheetStore::parse_rows(Vec::new()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let err = SheetStore::parse_rows(rows(&[&["jp", "kr"], &["ひとつだけ"]])).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRow { row: 2, cells: 1 }));
    }

    #[test]
    fn test_parse_ignores_extra_cells() {
        let parsed =
            SheetStore::parse_rows(rows(&[&["jp", "kr"], &["はい", "네", "stray note"]])).unwrap();
        assert_eq!(parsed[0].target_text, "네");
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let store = SheetStore::new("https://rows.example.com/v1/abc/", None);
        assert_eq!(store.rows_url(), "https://rows.example.com/v1/abc/rows");
        assert_eq!(store.row_url(2), "https://rows.example.com/v1/abc/rows/2");
    }
}
