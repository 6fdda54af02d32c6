// Instagram — comments via the mobile web API.
//
// There is no public comments API for personal accounts, so this connector
// does what the established scrapers do: decode the post shortcode into the
// numeric media id (the shortcode is that id in URL-safe base64), then call
// the mobile web endpoint with a logged-in `sessionid` cookie.

use anyhow::{Context, Result};
use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::records::{CommentRecord, Platform};

const MEDIA_API_URL: &str = "https://i.instagram.com/api/v1/media";

/// App id the Instagram web client sends; required by the mobile API.
const IG_APP_ID: &str = "936619743392459";

/// URL-safe base64 alphabet used by Instagram shortcodes.
const SHORTCODE_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Decode a post shortcode into the numeric media id.
/// Returns None if the shortcode contains characters outside the alphabet.
pub fn shortcode_to_media_id(shortcode: &str) -> Option<u64> {
    if shortcode.is_empty() {
        return None;
    }
    let mut id: u64 = 0;
    for ch in shortcode.chars() {
        let idx = SHORTCODE_ALPHABET.find(ch)? as u64;
        id = id.checked_mul(64)?.checked_add(idx)?;
    }
    Some(id)
}

/// Fetch up to `max_comments` comments for a post shortcode.
pub async fn fetch_comments(
    client: &reqwest::Client,
    session_id: &str,
    shortcode: &str,
    max_comments: usize,
) -> Result<Vec<CommentRecord>> {
    let media_id = shortcode_to_media_id(shortcode)
        .with_context(|| format!("Invalid Instagram shortcode: {shortcode}"))?;

    let url = format!("{MEDIA_API_URL}/{media_id}/comments/");

    let response = client
        .get(&url)
        .header("Cookie", format!("sessionid={session_id}"))
        .header("X-IG-App-ID", IG_APP_ID)
        .send()
        .await
        .context("Instagram comments request failed")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Instagram API returned {}: {}", status, body);
    }

    let page: MediaCommentsResponse = response
        .json()
        .await
        .context("Failed to parse Instagram comments response")?;

    let comments: Vec<CommentRecord> = page
        .comments
        .iter()
        .take(max_comments)
        .map(|c| CommentRecord {
            author: c
                .user
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_default(),
            text: c.text.clone().unwrap_or_default(),
            published_at: format_timestamp(c.created_at),
            platform: Platform::Instagram,
        })
        .collect();

    debug!(media_id, shortcode, "Fetched Instagram comments page");
    info!(count = comments.len(), "Collected Instagram comments");

    Ok(comments)
}

/// Render a Unix timestamp as RFC 3339, or empty when absent/invalid.
fn format_timestamp(created_at: Option<i64>) -> String {
    created_at
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

#[derive(Deserialize)]
struct MediaCommentsResponse {
    #[serde(default)]
    comments: Vec<MediaComment>,
}

#[derive(Deserialize)]
struct MediaComment {
    text: Option<String>,
    created_at: Option<i64>,
    user: Option<MediaUser>,
}

#[derive(Deserialize)]
struct MediaUser {
    username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcode_decodes_base64() {
        // 'B' is index 1, 'a' is index 26: 1 * 64 + 26 = 90
        assert_eq!(shortcode_to_media_id("B"), Some(1));
        assert_eq!(shortcode_to_media_id("Ba"), Some(90));
        assert_eq!(shortcode_to_media_id("A"), Some(0));
    }

    #[test]
    fn shortcode_rejects_invalid_chars() {
        assert_eq!(shortcode_to_media_id("abc!"), None);
        assert_eq!(shortcode_to_media_id(""), None);
        assert_eq!(shortcode_to_media_id("а"), None); // Cyrillic а
    }

    #[test]
    fn shortcode_overflow_is_none_not_panic() {
        assert_eq!(shortcode_to_media_id("__________________"), None);
    }

    #[test]
    fn timestamp_renders_rfc3339() {
        let rendered = format_timestamp(Some(1_700_000_000));
        assert!(rendered.starts_with("2023-11-14T"));
        assert_eq!(format_timestamp(None), "");
    }
}
