//! Cursor-based pagination over an ordered list.
//!
//! A cursor is an opaque, URL-safe base64 token naming the last item of a
//! page. Passing it back as `after` yields the items following that item.
//!
//! - No `after`: the first page.
//! - `after` naming an item that is not in the list: the first page.
//! - `after` naming the last item: an empty page.
//! - `page_size == 0`: an empty page.

use crate::error::{LaunchpadError, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const CURSOR_PREFIX: &str = "launch:";

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor of the last item, empty when the page is empty
    pub cursor: String,
    pub has_more: bool,
}

pub fn encode_cursor(id: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{}{}", CURSOR_PREFIX, id))
}

pub fn decode_cursor(cursor: &str) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| LaunchpadError::InvalidCursor(cursor.to_string()))?;
    let decoded =
        String::from_utf8(bytes).map_err(|_| LaunchpadError::InvalidCursor(cursor.to_string()))?;
    decoded
        .strip_prefix(CURSOR_PREFIX)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| LaunchpadError::InvalidCursor(cursor.to_string()))
}

/// Slice `items` into the page following `after`.
///
/// `key` extracts the identifier a cursor refers to.
pub fn paginate<T, F>(items: &[T], page_size: usize, after: Option<&str>, key: F) -> Result<Page<T>>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let start = match after {
        Some(cursor) => {
            let id = decode_cursor(cursor)?;
            match items.iter().position(|item| key(item) == id) {
                Some(index) => index + 1,
                None => {
                    tracing::debug!(cursor = %cursor, "Cursor not found, returning first page");
                    0
                }
            }
        }
        None => 0,
    };

    let end = start.saturating_add(page_size).min(items.len());
    let page: Vec<T> = if start < end {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let cursor = page.last().map(|item| encode_cursor(key(item)));
    let has_more = match (page.last(), items.last()) {
        (Some(last_on_page), Some(last_overall)) => key(last_on_page) != key(last_overall),
        _ => false,
    };

    Ok(Page {
        items: page,
        cursor: cursor.unwrap_or_default(),
        has_more,
    })
}
