// Local ONNX toxicity scorer (toxic-bert ONNX export).
//
// Runs entirely on the local CPU — no API calls, no rate limits. The model
// is a multi-head toxic-comment classifier; the first head is the overall
// `toxic` judgment, and its sigmoid is the probability the pipeline reports.
//
// Model heads, in output order:
// toxic, severe_toxic, obscene, threat, insult, identity_hate

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tokenizers::EncodeInput;
use tracing::debug;

use super::session::ClassifierSession;
use super::sigmoid;
use super::traits::ToxicityScorer;

/// Token window cap — comments longer than this are truncated before
/// inference.
const MAX_TOKENS: usize = 256;

/// Index of the overall `toxic` head in the model output.
const TOXIC_INDEX: usize = 0;

/// BERT pad token id.
const PAD_ID: i64 = 0;

pub struct OnnxToxicityScorer {
    session: ClassifierSession,
}

impl OnnxToxicityScorer {
    /// Load the toxicity model and tokenizer from the given directory.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let session = ClassifierSession::load(model_dir, PAD_ID, true)?;
        Ok(Self { session })
    }
}

#[async_trait]
impl ToxicityScorer for OnnxToxicityScorer {
    async fn score(&self, text: &str) -> Result<f64> {
        let input = EncodeInput::Single(text.to_string().into());
        let rows = self.session.logits(vec![input], MAX_TOKENS).await?;

        let toxicity = sigmoid(rows[0][TOXIC_INDEX]);

        debug!(
            toxicity = toxicity,
            text_preview = %crate::output::truncate_chars(text, 50),
            "Scored text"
        );

        Ok(toxicity)
    }
}
