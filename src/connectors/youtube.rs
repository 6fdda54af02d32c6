// YouTube Data API v3 — top-level comment threads for a video.
//
// API key auth; `commentThreads` returns up to 100 threads per page with
// a `nextPageToken` cursor.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::records::{CommentRecord, Platform};

const COMMENT_THREADS_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";

/// Fetch up to `max_comments` top-level comments for a video, handling
/// pagination automatically. Comments come back in the API's own order
/// (newest-first by default) and that order is preserved.
pub async fn fetch_comments(
    client: &reqwest::Client,
    api_key: &str,
    video_id: &str,
    max_comments: usize,
) -> Result<Vec<CommentRecord>> {
    let mut comments = Vec::new();
    let mut page_token: Option<String> = None;

    let page_size = max_comments.min(100).to_string();

    loop {
        let mut params: Vec<(&str, &str)> = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("textFormat", "plainText"),
            ("maxResults", &page_size),
            ("key", api_key),
        ];
        if let Some(ref token) = page_token {
            params.push(("pageToken", token));
        }

        let response = client
            .get(COMMENT_THREADS_URL)
            .query(&params)
            .send()
            .await
            .context("YouTube commentThreads request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube API returned {}: {}", status, body);
        }

        let page: CommentThreadsResponse = response
            .json()
            .await
            .context("Failed to parse YouTube commentThreads response")?;

        for item in &page.items {
            let snippet = &item.snippet.top_level_comment.snippet;
            comments.push(CommentRecord {
                author: snippet.author_display_name.clone().unwrap_or_default(),
                text: snippet.text_display.clone().unwrap_or_default(),
                published_at: snippet.published_at.clone().unwrap_or_default(),
                platform: Platform::Youtube,
            });
            if comments.len() >= max_comments {
                break;
            }
        }

        debug!(
            page_items = page.items.len(),
            total_collected = comments.len(),
            "Fetched page of YouTube comments"
        );

        if comments.len() >= max_comments {
            break;
        }
        page_token = page.next_page_token;
        if page_token.is_none() || page.items.is_empty() {
            break;
        }
    }

    info!(count = comments.len(), video_id, "Collected YouTube comments");

    Ok(comments)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    author_display_name: Option<String>,
    text_display: Option<String>,
    published_at: Option<String>,
}
