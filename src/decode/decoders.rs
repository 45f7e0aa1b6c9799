//! Decoder implementations

use super::types::{DecodeOutcome, ListingRecord, PageDecoder, PageMeta, PageResult};
use crate::error::{Error, Result};
use serde::Deserialize;

/// Wire shape of a listings page
#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default = "default_pages")]
    pages: i64,
    #[serde(default)]
    found: u64,
    #[serde(default)]
    items: Option<Vec<ListingRecord>>,
}

fn default_pages() -> i64 {
    1
}

// ============================================================================
// JSON Page Decoder
// ============================================================================

/// Decoder for the JSON listings payload
///
/// `{ "pages": int, "found": int, "items": [ { "salary": {...} | null }, ... ] }`
///
/// A `salary` that is neither an object nor `null` makes the whole page
/// malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPageDecoder;

impl JsonPageDecoder {
    /// Create a new JSON page decoder
    pub fn new() -> Self {
        Self
    }
}

impl PageDecoder for JsonPageDecoder {
    fn decode(&self, page: u32, body: &str) -> Result<DecodeOutcome> {
        let raw: RawPage = serde_json::from_str(body)
            .map_err(|e| Error::decode(page, format!("Failed to parse JSON: {e}"), body))?;

        let items = match raw.items {
            Some(items) if !items.is_empty() => items,
            _ => return Ok(DecodeOutcome::EndOfData),
        };

        let total_pages = u32::try_from(raw.pages.max(1)).unwrap_or(u32::MAX);

        Ok(DecodeOutcome::Page(PageResult {
            items,
            meta: PageMeta {
                total_pages,
                found: raw.found,
            },
        }))
    }
}
