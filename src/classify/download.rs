// Model download helper for the ONNX classifiers.
//
// Downloads three quantized models from HuggingFace:
// 1. toxic-bert — toxicity scoring
// 2. twitter-xlm-roberta-base-sentiment — three-way sentiment
// 3. mDeBERTa-v3-base-mnli-xnli — zero-shot intent via NLI
//
// Files are stored in a platform-appropriate directory
// (~/.local/share/otklik/models/ on Linux) so they persist across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

const MODEL_FILE: &str = "model_quantized.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";

/// One downloadable classifier: display name, HF repo base URL, and the
/// subdirectory it lands in under the model dir.
struct ModelSpec {
    name: &'static str,
    base_url: &'static str,
    subdir: &'static str,
    approx_size: &'static str,
}

const MODELS: [ModelSpec; 3] = [
    ModelSpec {
        name: "toxicity (toxic-bert)",
        base_url: "https://huggingface.co/Xenova/toxic-bert/resolve/main",
        subdir: "toxic",
        approx_size: "~110 MB",
    },
    ModelSpec {
        name: "sentiment (twitter-xlm-roberta-base-sentiment)",
        base_url: "https://huggingface.co/Xenova/twitter-xlm-roberta-base-sentiment/resolve/main",
        subdir: "sentiment",
        approx_size: "~280 MB",
    },
    ModelSpec {
        name: "intent NLI (mDeBERTa-v3-base-mnli-xnli)",
        base_url: "https://huggingface.co/Xenova/mDeBERTa-v3-base-mnli-xnli/resolve/main",
        subdir: "nli",
        approx_size: "~280 MB",
    },
];

/// Returns the default directory for storing model files.
/// Uses the platform data directory: ~/.local/share/otklik/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("otklik")
        .join("models")
}

pub fn toxicity_model_dir(base: &Path) -> PathBuf {
    base.join("toxic")
}

pub fn sentiment_model_dir(base: &Path) -> PathBuf {
    base.join("sentiment")
}

pub fn nli_model_dir(base: &Path) -> PathBuf {
    base.join("nli")
}

/// Check whether every classifier has both its files on disk.
pub fn models_present(dir: &Path) -> bool {
    MODELS.iter().all(|spec| {
        let subdir = dir.join(spec.subdir);
        subdir.join(MODEL_FILE).exists() && subdir.join(TOKENIZER_FILE).exists()
    })
}

/// Download all three classifier models.
///
/// Shows progress bars for large files. Skips files that already exist.
/// Creates directories as needed.
pub async fn download_model(dir: &Path) -> Result<()> {
    for spec in &MODELS {
        println!("\n{} ({}):", spec.name, spec.approx_size);

        let subdir = dir.join(spec.subdir);
        std::fs::create_dir_all(&subdir)
            .with_context(|| format!("Failed to create model directory: {}", subdir.display()))?;

        let tokenizer_path = subdir.join(TOKENIZER_FILE);
        if tokenizer_path.exists() {
            info!(model = spec.subdir, "Tokenizer already exists, skipping");
            println!("  {TOKENIZER_FILE} (already exists)");
        } else {
            println!("  Downloading {TOKENIZER_FILE}...");
            download_file(
                &format!("{}/{}", spec.base_url, TOKENIZER_FILE),
                &tokenizer_path,
                false,
            )
            .await?;
        }

        let model_path = subdir.join(MODEL_FILE);
        if model_path.exists() {
            info!(model = spec.subdir, "Model already exists, skipping");
            println!("  {MODEL_FILE} (already exists)");
        } else {
            println!("  Downloading {MODEL_FILE}...");
            download_file(
                &format!("{}/onnx/{}", spec.base_url, MODEL_FILE),
                &model_path,
                true,
            )
            .await?;
        }
    }

    Ok(())
}

/// Download a single file from a URL to a local path.
/// If `show_progress` is true, display a progress bar.
async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let total_size = response.content_length();

    let pb = if show_progress {
        let pb = if let Some(size) = total_size {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        };
        Some(pb)
    } else {
        None
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    if let Some(ref pb) = pb {
        pb.set_position(bytes.len() as u64);
    }

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_dir_is_under_otklik() {
        let dir = default_model_dir();
        let path_str = dir.to_string_lossy();
        assert!(
            path_str.contains("otklik") && path_str.contains("models"),
            "Expected path containing otklik/models, got: {path_str}"
        );
    }

    #[test]
    fn model_subdirs_are_distinct() {
        let base = PathBuf::from("/tmp/otklik-models");
        let dirs = [
            toxicity_model_dir(&base),
            sentiment_model_dir(&base),
            nli_model_dir(&base),
        ];
        for (i, a) in dirs.iter().enumerate() {
            for b in &dirs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn models_present_false_when_empty() {
        let dir = std::env::temp_dir().join("otklik-test-nonexistent");
        assert!(!models_present(&dir));
    }

    #[test]
    fn models_present_true_when_all_files_exist() {
        let dir = std::env::temp_dir().join("otklik-models-test");
        for sub in ["toxic", "sentiment", "nli"] {
            let subdir = dir.join(sub);
            std::fs::create_dir_all(&subdir).unwrap();
            std::fs::write(subdir.join(MODEL_FILE), b"fake").unwrap();
            std::fs::write(subdir.join(TOKENIZER_FILE), b"fake").unwrap();
        }

        assert!(models_present(&dir));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
