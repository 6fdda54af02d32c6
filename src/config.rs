use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy. Credentials are
/// opaque strings — the pipeline never inspects them, it only hands
/// them to the matching connector.
pub struct Config {
    pub youtube_api_key: String,
    pub facebook_access_token: String,
    /// Instagram web session cookie (`sessionid`). The mobile web comment
    /// endpoint requires a logged-in session.
    pub instagram_session_id: String,
    /// Hugging Face Inference API token for reply generation.
    pub hf_api_token: String,
    /// Hosted text-generation endpoint for the responder.
    pub responder_url: String,
    /// Cap on how many comments to fetch per request.
    pub max_comments: usize,
    /// Directory containing the ONNX classifier files.
    pub model_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the platform credentials — those
    /// are checked by the `require_*` guards right before the operation
    /// that needs them.
    pub fn load() -> Result<Self> {
        let max_comments = env::var("MAX_COMMENTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let model_dir = env::var("OTKLIK_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::classify::download::default_model_dir());

        Ok(Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            facebook_access_token: env::var("FACEBOOK_ACCESS_TOKEN").unwrap_or_default(),
            instagram_session_id: env::var("IG_SESSION_ID").unwrap_or_default(),
            hf_api_token: env::var("HF_API_TOKEN").unwrap_or_default(),
            responder_url: env::var("OTKLIK_RESPONDER_URL")
                .unwrap_or_else(|_| crate::responder::DEFAULT_RESPONDER_URL.to_string()),
            max_comments,
            model_dir,
        })
    }

    /// Check that the YouTube Data API key is configured.
    pub fn require_youtube(&self) -> Result<()> {
        if self.youtube_api_key.is_empty() {
            anyhow::bail!("YOUTUBE_API_KEY not set. Add it to your .env file.");
        }
        Ok(())
    }

    /// Check that the Facebook Graph API token is configured.
    pub fn require_facebook(&self) -> Result<()> {
        if self.facebook_access_token.is_empty() {
            anyhow::bail!("FACEBOOK_ACCESS_TOKEN not set. Add it to your .env file.");
        }
        Ok(())
    }

    /// Check that the Instagram session cookie is configured.
    pub fn require_instagram(&self) -> Result<()> {
        if self.instagram_session_id.is_empty() {
            anyhow::bail!("IG_SESSION_ID not set. Add it to your .env file.");
        }
        Ok(())
    }

    /// Check that the ONNX classifier files are present on disk.
    /// Call this before building the pipeline.
    pub fn require_models(&self) -> Result<()> {
        if !crate::classify::download::models_present(&self.model_dir) {
            anyhow::bail!(
                "ONNX classifier files not found in {}\n\
                 Run `otklik download-model` to download them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}
