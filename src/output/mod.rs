// Output formatting — terminal preview display.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// when something was cut off.
///
/// Works on char boundaries, not bytes — comment text is mostly Cyrillic
/// and a byte slice would panic mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(truncate_chars("привет", 10), "привет");
    }

    #[test]
    fn long_text_truncated_on_char_boundary() {
        assert_eq!(truncate_chars("привет мир", 6), "привет...");
    }
}
