// Reply drafting — language-conditioned prompt templates fed to a hosted
// generative model.
//
// The mapping is stateless: (text, language) → prompt → first candidate
// from the model, capped at a fixed output length. No retries, no caching;
// a model failure propagates to the caller like any other classifier error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::Language;

/// Default hosted text-generation endpoint.
pub const DEFAULT_RESPONDER_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/blenderbot-400M-distill";

/// Cap on generated reply length, in tokens.
pub const MAX_REPLY_TOKENS: u32 = 80;

/// Build the generation prompt for a comment. The instruction language
/// follows the detected comment language; anything that isn't Russian or
/// Kazakh gets the English instruction.
pub fn prompt_for(text: &str, language: Language) -> String {
    match language {
        Language::Kk => format!("Жауап бер қазақ тілінде, қысқа әрі сыпайы түрде: {text}"),
        Language::Ru => format!("Ответь на русском языке, вежливо и профессионально: {text}"),
        Language::Mixed => format!("Answer in English politely and helpfully: {text}"),
    }
}

/// Draft a short reply to a comment in the given language.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn reply(&self, text: &str, language: Language) -> Result<String>;
}

/// Hosted-inference reply generator (Hugging Face Inference API shape:
/// POST the prompt, read back a list of generated candidates).
pub struct HostedReplyGenerator {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl HostedReplyGenerator {
    pub fn new(endpoint: String, api_token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_token,
        }
    }
}

#[async_trait]
impl ReplyGenerator for HostedReplyGenerator {
    async fn reply(&self, text: &str, language: Language) -> Result<String> {
        let prompt = prompt_for(text, language);

        let request = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_REPLY_TOKENS,
                num_return_sequences: 1,
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if !self.api_token.is_empty() {
            builder = builder.bearer_auth(&self.api_token);
        }

        let response = builder
            .send()
            .await
            .context("Reply generation request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Generation endpoint returned {}: {}", status, body);
        }

        let candidates: Vec<GeneratedCandidate> = response
            .json()
            .await
            .context("Failed to parse generation response")?;

        let reply = candidates
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .context("Generation endpoint returned no candidates")?;

        debug!(
            language = %language,
            reply_preview = %crate::output::truncate_chars(&reply, 50),
            "Drafted reply"
        );

        Ok(reply)
    }
}

#[derive(Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    num_return_sequences: u32,
}

#[derive(Deserialize)]
struct GeneratedCandidate {
    generated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kazakh_template_for_kk() {
        let prompt = prompt_for("", Language::Kk);
        assert!(prompt.starts_with("Жауап бер қазақ тілінде"));
    }

    #[test]
    fn russian_template_for_ru() {
        let prompt = prompt_for("hi", Language::Ru);
        assert!(prompt.starts_with("Ответь на русском языке"));
        assert!(prompt.ends_with("hi"));
    }

    #[test]
    fn english_template_for_everything_else() {
        let prompt = prompt_for("hi", Language::Mixed);
        assert!(prompt.starts_with("Answer in English"));
    }
}
