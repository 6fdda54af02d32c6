// Enrichment pipeline: comment records in, enriched records out.
//
// The Pipeline is an explicit, injectable context — the classifiers are
// loaded once at process start and passed around, never stashed in
// process-wide globals. Records don't interact, so enrichment fans out
// across a buffered stream; `buffered` (not `buffer_unordered`) keeps
// output order matching input order.

use anyhow::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::Path;
use tracing::info;

use crate::classify::download;
use crate::classify::intent::ZeroShotIntentClassifier;
use crate::classify::language::CommentLanguageDetector;
use crate::classify::sentiment::OnnxSentimentClassifier;
use crate::classify::toxicity::OnnxToxicityScorer;
use crate::classify::traits::{
    IntentClassifier, LanguageDetector, SentimentClassifier, ToxicityScorer,
};
use crate::records::{CommentRecord, EnrichedRecord};

/// Default number of records enriched concurrently.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// The classification context — one instance per process, shared read-only.
pub struct Pipeline {
    pub language: Box<dyn LanguageDetector>,
    pub toxicity: Box<dyn ToxicityScorer>,
    pub sentiment: Box<dyn SentimentClassifier>,
    pub intent: Box<dyn IntentClassifier>,
}

impl Pipeline {
    /// Build the default pipeline from the ONNX models under `model_dir`.
    pub fn from_models(model_dir: &Path) -> Result<Self> {
        let toxicity = OnnxToxicityScorer::load(&download::toxicity_model_dir(model_dir))?;
        let sentiment = OnnxSentimentClassifier::load(&download::sentiment_model_dir(model_dir))?;
        let intent = ZeroShotIntentClassifier::load(&download::nli_model_dir(model_dir))?;

        info!("Loaded classification models from {}", model_dir.display());

        Ok(Self {
            language: Box::new(CommentLanguageDetector::new()),
            toxicity: Box::new(toxicity),
            sentiment: Box::new(sentiment),
            intent: Box::new(intent),
        })
    }

    /// Enrich one comment record. Language detection is total; any other
    /// classifier failure propagates and fails the whole request.
    pub async fn enrich_one(&self, comment: CommentRecord) -> Result<EnrichedRecord> {
        let language = self.language.detect(&comment.text);
        let toxicity = self.toxicity.score(&comment.text).await?;
        let sentiment = self.sentiment.classify(&comment.text).await?;
        let intent = self.intent.classify(&comment.text).await?;

        Ok(EnrichedRecord::new(
            comment, language, toxicity, sentiment, intent,
        ))
    }

    /// Enrich a batch of comment records, preserving input order.
    ///
    /// An empty input returns an empty output without touching any model.
    /// Otherwise records are enriched independently, up to `concurrency`
    /// in flight at once, and output[i] always derives from input[i].
    pub async fn enrich(
        &self,
        comments: Vec<CommentRecord>,
        concurrency: usize,
    ) -> Result<Vec<EnrichedRecord>> {
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let count = comments.len();
        let enriched: Vec<EnrichedRecord> = stream::iter(comments)
            .map(|comment| self.enrich_one(comment))
            .buffered(concurrency.max(1))
            .try_collect()
            .await?;

        info!(count = count, "Enriched comment batch");

        Ok(enriched)
    }
}
