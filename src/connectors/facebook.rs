// Facebook Graph API — comments on a post or other object.
//
// The object identifier can be a numeric id or a full post URL; the Graph
// API resolves URLs server-side, which is why the resolver passes Facebook
// URLs through verbatim. Pagination follows `paging.next`, which is a
// complete URL with the cursor baked in.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::records::{CommentRecord, Platform};

const GRAPH_URL: &str = "https://graph.facebook.com/v18.0";

/// Fetch up to `max_comments` comments for a Graph API object.
pub async fn fetch_comments(
    client: &reqwest::Client,
    access_token: &str,
    object: &str,
    max_comments: usize,
) -> Result<Vec<CommentRecord>> {
    let mut comments = Vec::new();

    let page_size = max_comments.min(100).to_string();
    let first_url = format!("{GRAPH_URL}/{object}/comments");
    let mut next_url: Option<String> = None;
    let mut first_page = true;

    loop {
        let request = if first_page {
            client.get(&first_url).query(&[
                ("access_token", access_token),
                ("fields", "from,message,created_time"),
                ("limit", &page_size),
            ])
        } else {
            match next_url {
                // paging.next already carries the token and cursor
                Some(ref url) => client.get(url),
                None => break,
            }
        };
        first_page = false;

        let response = request
            .send()
            .await
            .context("Facebook Graph API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Facebook Graph API returned {}: {}", status, body);
        }

        let page: CommentsResponse = response
            .json()
            .await
            .context("Failed to parse Facebook comments response")?;

        for item in &page.data {
            comments.push(CommentRecord {
                author: item
                    .from
                    .as_ref()
                    .map(|f| f.name.clone())
                    .unwrap_or_default(),
                text: item.message.clone().unwrap_or_default(),
                published_at: item.created_time.clone().unwrap_or_default(),
                platform: Platform::Facebook,
            });
            if comments.len() >= max_comments {
                break;
            }
        }

        debug!(
            page_items = page.data.len(),
            total_collected = comments.len(),
            "Fetched page of Facebook comments"
        );

        if comments.len() >= max_comments || page.data.is_empty() {
            break;
        }
        next_url = page.paging.and_then(|p| p.next);
        if next_url.is_none() {
            break;
        }
    }

    info!(count = comments.len(), "Collected Facebook comments");

    Ok(comments)
}

#[derive(Deserialize)]
struct CommentsResponse {
    #[serde(default)]
    data: Vec<GraphComment>,
    paging: Option<Paging>,
}

#[derive(Deserialize)]
struct GraphComment {
    from: Option<GraphUser>,
    message: Option<String>,
    created_time: Option<String>,
}

#[derive(Deserialize)]
struct GraphUser {
    name: String,
}

#[derive(Deserialize)]
struct Paging {
    next: Option<String>,
}
