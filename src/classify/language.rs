// Language detection via lingua, restricted to the languages the reply
// templates distinguish.
//
// The detector is built once (it loads language models eagerly) and shared
// read-only. English is included as the "anything else" bucket: comments
// that aren't confidently Russian or Kazakh — emoji strings, translit,
// code-switched text — all land in Mixed.

use lingua::{Language as Lingua, LanguageDetector as LinguaDetector, LanguageDetectorBuilder};

use super::traits::LanguageDetector;
use crate::records::Language;

pub struct CommentLanguageDetector {
    detector: LinguaDetector,
}

impl CommentLanguageDetector {
    pub fn new() -> Self {
        let detector =
            LanguageDetectorBuilder::from_languages(&[Lingua::Russian, Lingua::Kazakh, Lingua::English])
                .build();
        Self { detector }
    }
}

impl Default for CommentLanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for CommentLanguageDetector {
    fn detect(&self, text: &str) -> Language {
        match self.detector.detect_language_of(text) {
            Some(Lingua::Russian) => Language::Ru,
            Some(Lingua::Kazakh) => Language::Kk,
            // English, or nothing detected (empty / ambiguous text)
            _ => Language::Mixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_text_detected() {
        let detector = CommentLanguageDetector::new();
        assert_eq!(
            detector.detect("Спасибо за отличное видео, очень понравилось"),
            Language::Ru
        );
    }

    #[test]
    fn english_maps_to_mixed() {
        let detector = CommentLanguageDetector::new();
        assert_eq!(
            detector.detect("This is a great video, thanks for sharing"),
            Language::Mixed
        );
    }

    #[test]
    fn empty_and_junk_never_panic() {
        let detector = CommentLanguageDetector::new();
        // Whatever these return, they must return *something* from the enum.
        for text in ["", "   ", "👍👍👍", "12345"] {
            let lang = detector.detect(text);
            assert!(matches!(lang, Language::Ru | Language::Kk | Language::Mixed));
        }
    }
}
