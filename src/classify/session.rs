// Shared ONNX session plumbing for the text classifiers.
//
// All three classifiers (toxicity, sentiment, intent) are transformer
// sequence classifiers with the same shape of work: tokenize, pad to the
// batch max, run one forward pass, read back a row of logits per input.
// This wrapper owns that plumbing; the classifier modules own the meaning
// of the logits.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{EncodeInput, Tokenizer};
use tracing::debug;

/// A loaded ONNX sequence classifier. Session and tokenizer sit behind
/// Arc so inference can move into spawn_blocking ('static requirement);
/// the Mutex is needed because ort::Session::run takes &mut self.
pub(crate) struct ClassifierSession {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    /// Token id used for right-padding (0 for BERT/DeBERTa, 1 for RoBERTa).
    pad_id: i64,
    /// BERT-family models take a third `token_type_ids` input; RoBERTa
    /// exports don't.
    uses_token_type_ids: bool,
}

impl ClassifierSession {
    /// Load `model_quantized.onnx` and `tokenizer.json` from the given
    /// directory. Call `download::download_model()` first if they're missing.
    pub fn load(model_dir: &Path, pad_id: i64, uses_token_type_ids: bool) -> Result<Self> {
        let model_path = model_dir.join("model_quantized.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() || !tokenizer_path.exists() {
            anyhow::bail!(
                "Classifier files not found in {}\nRun `otklik download-model` to download them.",
                model_dir.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        debug!("Loaded ONNX classifier from {}", model_dir.display());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            pad_id,
            uses_token_type_ids,
        })
    }

    /// Tokenize the inputs (single texts or text pairs), truncate each to
    /// `max_tokens`, run one forward pass, and return one row of logits
    /// per input.
    ///
    /// The CPU-bound tokenization and inference are offloaded to
    /// spawn_blocking so they don't block the tokio runtime.
    pub async fn logits(
        &self,
        inputs: Vec<EncodeInput<'static>>,
        max_tokens: usize,
    ) -> Result<Vec<Vec<f64>>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let pad_id = self.pad_id;
        let uses_token_type_ids = self.uses_token_type_ids;

        tokio::task::spawn_blocking(move || {
            let encodings: Vec<_> = inputs
                .into_iter()
                .map(|input| {
                    tokenizer
                        .encode(input, true)
                        .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
                })
                .collect::<Result<Vec<_>>>()?;

            let batch_size = encodings.len();
            let max_len = encodings
                .iter()
                .map(|e| e.get_ids().len().min(max_tokens))
                .max()
                .unwrap_or(0);

            // Flat input tensors, right-padded to max_len. Shape: [batch, max_len]
            let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
            let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
            let mut token_type_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

            for enc in &encodings {
                // Truncated token window — caps inference cost on long comments
                let seq_len = enc.get_ids().len().min(max_tokens);
                let ids = &enc.get_ids()[..seq_len];
                let mask = &enc.get_attention_mask()[..seq_len];
                let type_ids = &enc.get_type_ids()[..seq_len];

                input_ids_flat.extend(ids.iter().map(|&id| id as i64));
                attention_mask_flat.extend(mask.iter().map(|&m| m as i64));
                token_type_ids_flat.extend(type_ids.iter().map(|&t| t as i64));

                for _ in seq_len..max_len {
                    input_ids_flat.push(pad_id);
                    attention_mask_flat.push(0);
                    token_type_ids_flat.push(0);
                }
            }

            let shape = [batch_size as i64, max_len as i64];

            let input_ids_tensor = Tensor::from_array((shape, input_ids_flat))
                .context("Failed to create input_ids tensor")?;
            let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat))
                .context("Failed to create attention_mask tensor")?;

            let logits_data = {
                let mut session = session
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

                let outputs = if uses_token_type_ids {
                    let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids_flat))
                        .context("Failed to create token_type_ids tensor")?;
                    session
                        .run(ort::inputs! {
                            "input_ids" => input_ids_tensor,
                            "attention_mask" => attention_mask_tensor,
                            "token_type_ids" => token_type_ids_tensor
                        })
                        .context("ONNX inference failed")?
                } else {
                    session
                        .run(ort::inputs! {
                            "input_ids" => input_ids_tensor,
                            "attention_mask" => attention_mask_tensor
                        })
                        .context("ONNX inference failed")?
                };

                // Output shape: [batch, n_labels] — raw logits
                let (_out_shape, data) = outputs[0]
                    .try_extract_tensor::<f32>()
                    .context("Failed to extract output tensor")?;

                data.to_vec()
            };

            let n_labels = logits_data.len() / batch_size;
            let rows = logits_data
                .chunks(n_labels)
                .map(|row| row.iter().map(|&l| l as f64).collect())
                .collect();

            Ok(rows)
        })
        .await
        .context("spawn_blocking panicked")?
    }
}
