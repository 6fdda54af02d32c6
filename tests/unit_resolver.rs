// Unit tests for the URL resolver.
//
// Tests the pure, total resolver functions: host-set platform detection
// (case-insensitive, unknown hosts → None) and per-platform id extraction
// including every URL shape the resolver supports.

use otklik::records::Platform;
use otklik::resolver::{extract_id, resolve_platform};

// ============================================================
// resolve_platform — host sets
// ============================================================

#[test]
fn youtube_hosts_resolve() {
    for url in [
        "https://www.youtube.com/watch?v=abc",
        "https://youtube.com/watch?v=abc",
        "https://m.youtube.com/watch?v=abc",
        "https://youtu.be/abc",
    ] {
        assert_eq!(resolve_platform(url), Some(Platform::Youtube), "{url}");
    }
}

#[test]
fn facebook_hosts_resolve() {
    for url in [
        "https://www.facebook.com/user/posts/1",
        "https://facebook.com/user/posts/1",
        "https://m.facebook.com/user/posts/1",
    ] {
        assert_eq!(resolve_platform(url), Some(Platform::Facebook), "{url}");
    }
}

#[test]
fn instagram_hosts_resolve() {
    for url in [
        "https://www.instagram.com/p/Cabc123/",
        "https://instagram.com/p/Cabc123/",
    ] {
        assert_eq!(resolve_platform(url), Some(Platform::Instagram), "{url}");
    }
}

#[test]
fn host_matching_is_case_insensitive() {
    assert_eq!(
        resolve_platform("https://WWW.YOUTUBE.COM/watch?v=abc"),
        Some(Platform::Youtube)
    );
    assert_eq!(
        resolve_platform("https://Instagram.Com/p/Cabc/"),
        Some(Platform::Instagram)
    );
}

#[test]
fn unknown_hosts_are_none() {
    for url in [
        "https://vimeo.com/12345",
        "https://twitter.com/user/status/1",
        "https://notyoutube.com/watch?v=abc",
        "https://youtube.com.evil.example/watch?v=abc",
    ] {
        assert_eq!(resolve_platform(url), None, "{url}");
    }
}

#[test]
fn garbage_input_is_none_never_panics() {
    for url in ["", "not a url", "::::", "http://", "ftp:/half"] {
        assert_eq!(resolve_platform(url), None, "{url:?}");
    }
}

// ============================================================
// extract_id — YouTube
// ============================================================

#[test]
fn youtube_watch_url_round_trip() {
    assert_eq!(
        extract_id(Platform::Youtube, "https://www.youtube.com/watch?v=ABC123"),
        Some("ABC123".to_string())
    );
}

#[test]
fn youtube_short_url_round_trip() {
    assert_eq!(
        extract_id(Platform::Youtube, "https://youtu.be/XYZ"),
        Some("XYZ".to_string())
    );
}

#[test]
fn youtube_watch_with_extra_params() {
    assert_eq!(
        extract_id(
            Platform::Youtube,
            "https://www.youtube.com/watch?t=30&v=ABC123&list=PL1"
        ),
        Some("ABC123".to_string())
    );
}

#[test]
fn youtube_path_styles_use_last_segment() {
    assert_eq!(
        extract_id(Platform::Youtube, "https://www.youtube.com/shorts/S1"),
        Some("S1".to_string())
    );
    assert_eq!(
        extract_id(Platform::Youtube, "https://www.youtube.com/live/L1/"),
        Some("L1".to_string())
    );
    assert_eq!(
        extract_id(Platform::Youtube, "https://www.youtube.com/embed/E1"),
        Some("E1".to_string())
    );
}

#[test]
fn youtube_missing_id_is_none() {
    assert_eq!(
        extract_id(Platform::Youtube, "https://www.youtube.com/watch"),
        None
    );
    assert_eq!(extract_id(Platform::Youtube, "https://youtu.be/"), None);
    assert_eq!(
        extract_id(Platform::Youtube, "https://vimeo.com/watch?v=ABC123"),
        None,
        "wrong host must not yield an id"
    );
}

// ============================================================
// extract_id — Facebook (verbatim passthrough)
// ============================================================

#[test]
fn facebook_url_passes_through_verbatim() {
    let url = "https://www.facebook.com/somepage/posts/123456";
    assert_eq!(extract_id(Platform::Facebook, url), Some(url.to_string()));
}

#[test]
fn facebook_wrong_host_is_none() {
    assert_eq!(
        extract_id(Platform::Facebook, "https://fakebook.com/posts/1"),
        None
    );
}

// ============================================================
// extract_id — Instagram shortcode
// ============================================================

#[test]
fn instagram_post_reel_and_tv() {
    for (url, code) in [
        ("https://www.instagram.com/p/Cxyz987/", "Cxyz987"),
        ("https://www.instagram.com/reel/Rabc/", "Rabc"),
        ("https://www.instagram.com/tv/Tdef/", "Tdef"),
    ] {
        assert_eq!(
            extract_id(Platform::Instagram, url),
            Some(code.to_string()),
            "{url}"
        );
    }
}

#[test]
fn instagram_too_few_segments_is_none() {
    assert_eq!(
        extract_id(Platform::Instagram, "https://www.instagram.com/p/"),
        None
    );
    assert_eq!(
        extract_id(Platform::Instagram, "https://www.instagram.com/"),
        None
    );
}
