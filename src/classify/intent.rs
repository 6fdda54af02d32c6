// Zero-shot intent classifier over a multilingual NLI model
// (mDeBERTa-v3-base-mnli-xnli, ONNX export).
//
// Zero-shot classification is NLI in a trench coat: each candidate label
// becomes a hypothesis ("Этот пример — жалоба."), the comment is the
// premise, and the entailment logits across candidates are softmaxed to
// rank them. Single-label mode — exactly one intent per comment.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tokenizers::EncodeInput;
use tracing::debug;

use super::session::ClassifierSession;
use super::traits::IntentClassifier;
use super::{argmax, softmax};
use crate::records::Intent;

/// Hypothesis template, in the candidates' language.
const HYPOTHESIS_TEMPLATE: &str = "Этот пример — {}.";

/// Index of the entailment logit in the NLI head.
/// mDeBERTa-mnli-xnli label order: entailment, neutral, contradiction.
const ENTAILMENT_INDEX: usize = 0;

/// Premise/hypothesis pairs are truncated to this many tokens.
const MAX_TOKENS: usize = 512;

/// DeBERTa pad token id.
const PAD_ID: i64 = 0;

pub struct ZeroShotIntentClassifier {
    session: ClassifierSession,
}

impl ZeroShotIntentClassifier {
    /// Load the NLI model and tokenizer from the given directory.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let session = ClassifierSession::load(model_dir, PAD_ID, true)?;
        Ok(Self { session })
    }
}

#[async_trait]
impl IntentClassifier for ZeroShotIntentClassifier {
    async fn classify(&self, text: &str) -> Result<Intent> {
        // One premise/hypothesis pair per candidate, scored in a single
        // batched forward pass.
        let pairs: Vec<EncodeInput<'static>> = Intent::CANDIDATES
            .iter()
            .map(|candidate| {
                let hypothesis = HYPOTHESIS_TEMPLATE.replace("{}", candidate.label());
                EncodeInput::Dual(text.to_string().into(), hypothesis.into())
            })
            .collect();

        let rows = self.session.logits(pairs, MAX_TOKENS).await?;

        let entailment_logits: Vec<f64> =
            rows.iter().map(|row| row[ENTAILMENT_INDEX]).collect();
        let probs = softmax(&entailment_logits);
        let intent = Intent::CANDIDATES[argmax(&probs)];

        debug!(
            intent = intent.label(),
            text_preview = %crate::output::truncate_chars(text, 50),
            "Classified intent"
        );

        Ok(intent)
    }
}
