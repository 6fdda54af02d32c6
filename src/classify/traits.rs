// Classifier traits — one per enrichment field.
//
// Toxicity, sentiment and intent are fallible: a model failure propagates
// and fails the whole request. Language detection is deliberately total —
// any detector miss degrades to Mixed instead of erroring. That asymmetry
// is intended: a wrong language only picks a different reply template,
// while a silently wrong toxicity score would corrupt the report.

use anyhow::Result;
use async_trait::async_trait;

use crate::records::{Intent, Language, Sentiment};

/// Score a text for toxicity, returning a probability in [0, 1].
#[async_trait]
pub trait ToxicityScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<f64>;
}

/// Classify a text into three-way sentiment.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Sentiment>;
}

/// Rank the fixed intent candidates and return the top one.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Intent>;
}

/// Detect a text's language. Total: never fails, never panics.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Language;
}
