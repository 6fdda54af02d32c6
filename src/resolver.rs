// URL resolver — platform detection and object-id extraction.
//
// Everything here is pure and total: malformed input yields None, never a
// panic or an error. The caller decides what a missing id means.

use url::Url;

use crate::records::Platform;

const YOUTUBE_HOSTS: [&str; 4] = ["www.youtube.com", "youtube.com", "youtu.be", "m.youtube.com"];
const FACEBOOK_HOSTS: [&str; 3] = ["www.facebook.com", "facebook.com", "m.facebook.com"];
const INSTAGRAM_HOSTS: [&str; 2] = ["www.instagram.com", "instagram.com"];

/// Detect the platform from a URL's host. Matching is case-insensitive
/// against the fixed host sets above; anything else is None.
pub fn resolve_platform(url: &str) -> Option<Platform> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    if YOUTUBE_HOSTS.contains(&host.as_str()) {
        Some(Platform::Youtube)
    } else if FACEBOOK_HOSTS.contains(&host.as_str()) {
        Some(Platform::Facebook)
    } else if INSTAGRAM_HOSTS.contains(&host.as_str()) {
        Some(Platform::Instagram)
    } else {
        None
    }
}

/// Extract the platform-specific object identifier from a URL.
pub fn extract_id(platform: Platform, url: &str) -> Option<String> {
    match platform {
        Platform::Youtube => extract_youtube_video_id(url),
        Platform::Facebook => extract_facebook_object(url),
        Platform::Instagram => extract_instagram_shortcode(url),
    }
}

/// Extract a YouTube video id. Supports watch URLs (`?v=`), the youtu.be
/// short form, and path-style URLs (shorts, live, embed) where the id is
/// the last path segment.
fn extract_youtube_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    if !YOUTUBE_HOSTS.contains(&host.as_str()) {
        return None;
    }

    if host == "youtu.be" {
        return first_segment(&parsed);
    }

    if parsed.path() == "/watch" {
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|v| !v.is_empty());
    }

    last_segment(&parsed)
}

/// Facebook identifier extraction is a deliberate passthrough: the Graph
/// API resolves a full post URL to an object id on its side, so we only
/// validate the host and return the URL verbatim.
fn extract_facebook_object(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    if !FACEBOOK_HOSTS.contains(&host.as_str()) {
        return None;
    }
    Some(url.to_string())
}

/// Extract an Instagram shortcode — the second path segment of
/// `/p/<code>`, `/reel/<code>`, or `/tv/<code>` URLs.
fn extract_instagram_shortcode(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    if !INSTAGRAM_HOSTS.contains(&host.as_str()) {
        return None;
    }

    let segments: Vec<&str> = parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() >= 2 {
        Some(segments[1].to_string())
    } else {
        None
    }
}

/// First non-empty path segment, if any.
fn first_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Last non-empty path segment, if any.
fn last_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .next_back()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_uses_query_param() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?v=ABC123"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn watch_url_with_empty_v_yields_none() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?v="),
            None
        );
    }

    #[test]
    fn short_host_uses_path() {
        assert_eq!(
            extract_youtube_video_id("https://youtu.be/XYZ"),
            Some("XYZ".to_string())
        );
        assert_eq!(extract_youtube_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn shorts_url_uses_last_segment() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/shorts/QQ9"),
            Some("QQ9".to_string())
        );
    }

    #[test]
    fn malformed_url_is_none_not_panic() {
        assert_eq!(extract_youtube_video_id("not a url"), None);
        assert_eq!(resolve_platform("::::"), None);
        assert_eq!(extract_id(Platform::Instagram, ""), None);
    }
}
