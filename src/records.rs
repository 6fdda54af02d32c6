// Core record types — the flat rows that flow through the pipeline.
//
// A CommentRecord is what a connector hands back; an EnrichedRecord is the
// same row with the classification fields appended. Records are never
// mutated after enrichment and live only for the duration of one analysis
// request — the xlsx report is the only thing that outlives them.

use serde::{Deserialize, Serialize};

/// Toxicity scores strictly above this are flagged as toxic.
pub const TOXICITY_THRESHOLD: f64 = 0.5;

/// The platform a comment was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Facebook,
    Instagram,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected comment language. Anything the detector doesn't confidently
/// place in Russian or Kazakh (including detector failure) is `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    Kk,
    Mixed,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kk => "kk",
            Language::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way sentiment. Display labels are localized for the report,
/// matching the audience the moderator serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Localized label used in the report's тональность column.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "позитивная",
            Sentiment::Neutral => "нейтральная",
            Sentiment::Negative => "негативная",
        }
    }

    /// Map a raw model label to a sentiment. Unrecognized labels default
    /// to Neutral rather than failing the record.
    pub fn from_model_label(label: &str) -> Self {
        match label {
            "positive" | "Positive" => Sentiment::Positive,
            "negative" | "Negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// Coarse category of a comment's communicative purpose. This is a closed
/// set — the zero-shot classifier ranks exactly these four candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Question,
    Feedback,
    Complaint,
    Gratitude,
}

impl Intent {
    /// All candidates, in the order they are scored by the zero-shot model.
    pub const CANDIDATES: [Intent; 4] = [
        Intent::Question,
        Intent::Feedback,
        Intent::Complaint,
        Intent::Gratitude,
    ];

    /// Localized candidate label — both the zero-shot hypothesis filler and
    /// the report's тип column value.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Question => "вопрос",
            Intent::Feedback => "отзыв",
            Intent::Complaint => "жалоба",
            Intent::Gratitude => "благодарность",
        }
    }
}

/// One platform comment, exactly as fetched. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub author: String,
    pub text: String,
    /// ISO-8601 / RFC 3339 where the platform provides it, otherwise the
    /// platform-native timestamp string verbatim.
    pub published_at: String,
    pub platform: Platform,
}

/// A comment record plus the classification fields the pipeline derives
/// from its text.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub comment: CommentRecord,
    pub language: Language,
    pub toxicity: f64,
    pub is_toxic: bool,
    pub sentiment: Sentiment,
    pub intent: Intent,
}

impl EnrichedRecord {
    /// Assemble an enriched record. `is_toxic` is derived, never set directly.
    pub fn new(
        comment: CommentRecord,
        language: Language,
        toxicity: f64,
        sentiment: Sentiment,
        intent: Intent,
    ) -> Self {
        Self {
            comment,
            language,
            toxicity,
            is_toxic: toxicity > TOXICITY_THRESHOLD,
            sentiment,
            intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> CommentRecord {
        CommentRecord {
            author: "tester".to_string(),
            text: text.to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            platform: Platform::Youtube,
        }
    }

    #[test]
    fn is_toxic_strictly_above_threshold() {
        let at = EnrichedRecord::new(
            comment("x"),
            Language::Ru,
            0.5,
            Sentiment::Neutral,
            Intent::Feedback,
        );
        assert!(!at.is_toxic, "exactly 0.5 is not toxic");

        let above = EnrichedRecord::new(
            comment("x"),
            Language::Ru,
            0.5001,
            Sentiment::Neutral,
            Intent::Feedback,
        );
        assert!(above.is_toxic);
    }

    #[test]
    fn sentiment_unrecognized_label_defaults_to_neutral() {
        assert_eq!(Sentiment::from_model_label("weird"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_model_label(""), Sentiment::Neutral);
        assert_eq!(Sentiment::from_model_label("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_model_label("Negative"), Sentiment::Negative);
    }

    #[test]
    fn intent_candidates_cover_all_variants() {
        assert_eq!(Intent::CANDIDATES.len(), 4);
        let labels: Vec<&str> = Intent::CANDIDATES.iter().map(|i| i.label()).collect();
        assert_eq!(labels, ["вопрос", "отзыв", "жалоба", "благодарность"]);
    }

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Youtube).unwrap();
        assert_eq!(json, "\"youtube\"");
    }
}
