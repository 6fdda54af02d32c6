// Three-way sentiment classifier (twitter-xlm-roberta-base-sentiment,
// ONNX export).
//
// Multilingual, which matters here: the comment stream mixes Russian,
// Kazakh and everything in between. Only a bounded prefix of the text is
// classified — sentiment rarely changes after the first few hundred
// characters, and the cap keeps inference cost flat.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tokenizers::EncodeInput;
use tracing::debug;

use super::session::ClassifierSession;
use super::traits::SentimentClassifier;
use super::{argmax, softmax};
use crate::records::Sentiment;

/// Classify at most this many characters from the front of the text.
const MAX_CHARS: usize = 512;

/// Token window cap after tokenization.
const MAX_TOKENS: usize = 512;

/// Model label order (id2label of the sentiment head).
const LABEL_ORDER: [&str; 3] = ["negative", "neutral", "positive"];

/// XLM-RoBERTa pad token id.
const PAD_ID: i64 = 1;

pub struct OnnxSentimentClassifier {
    session: ClassifierSession,
}

impl OnnxSentimentClassifier {
    /// Load the sentiment model and tokenizer from the given directory.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let session = ClassifierSession::load(model_dir, PAD_ID, false)?;
        Ok(Self { session })
    }
}

#[async_trait]
impl SentimentClassifier for OnnxSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        // Char-based prefix, not a byte slice — multi-byte Cyrillic text
        // would panic on an unaligned byte boundary.
        let prefix: String = text.chars().take(MAX_CHARS).collect();

        let input = EncodeInput::Single(prefix.into());
        let rows = self.session.logits(vec![input], MAX_TOKENS).await?;
        let probs = softmax(&rows[0]);
        let label = LABEL_ORDER[argmax(&probs)];
        let sentiment = Sentiment::from_model_label(label);

        debug!(
            sentiment = label,
            text_preview = %crate::output::truncate_chars(text, 50),
            "Classified sentiment"
        );

        Ok(sentiment)
    }
}
