use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use otklik::classify;
use otklik::config::Config;
use otklik::connectors;
use otklik::output::terminal::{self, PreviewRow};
use otklik::pipeline::{Pipeline, DEFAULT_CONCURRENCY};
use otklik::records::{Language, Platform};
use otklik::report;
use otklik::resolver;
use otklik::responder::{HostedReplyGenerator, ReplyGenerator};

/// Otklik: comment classification and reply drafting for
/// YouTube / Facebook / Instagram.
///
/// Fetches the comments under a post or video, classifies each one
/// (language, toxicity, sentiment, intent), drafts replies for a preview
/// subset, and exports an xlsx report.
#[derive(Parser)]
#[command(name = "otklik", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the comments under a post or video URL
    Analyze {
        /// Link to the post or video
        url: String,

        /// Platform override (default: detect from the URL host)
        #[arg(long, value_enum, default_value = "auto")]
        platform: PlatformArg,

        /// Max comments to fetch (default: MAX_COMMENTS env var or 100)
        #[arg(long)]
        max_comments: Option<usize>,

        /// How many comments get a drafted reply in the preview
        #[arg(long, default_value = "5")]
        previews: usize,

        /// Number of comments to classify in parallel
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,

        /// Where to write the xlsx report
        #[arg(long, default_value = "report.xlsx")]
        out: String,
    },

    /// Show the platform and object id a URL resolves to
    Resolve {
        /// Link to inspect
        url: String,
    },

    /// Draft a single reply to a comment text
    Reply {
        /// The comment text to reply to
        text: String,

        /// Detected comment language (ru, kk, or mixed)
        #[arg(long, default_value = "mixed")]
        language: String,
    },

    /// Download the ONNX classifier models (~670 MB total)
    DownloadModel,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    Auto,
    Youtube,
    Facebook,
    Instagram,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("otklik=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            url,
            platform,
            max_comments,
            previews,
            concurrency,
            out,
        } => {
            let config = Config::load()?;

            let platform = match platform {
                PlatformArg::Auto => resolver::resolve_platform(&url)
                    .context("Could not detect a supported platform from this URL")?,
                PlatformArg::Youtube => Platform::Youtube,
                PlatformArg::Facebook => Platform::Facebook,
                PlatformArg::Instagram => Platform::Instagram,
            };

            let id = resolver::extract_id(platform, &url)
                .with_context(|| format!("Could not extract a {platform} object id from this URL"))?;

            info!(platform = %platform, id = %id, "Resolved analysis target");

            let client = reqwest::Client::new();
            let max = max_comments.unwrap_or(config.max_comments);

            println!("Fetching up to {max} comments from {platform}...");

            let comments = match platform {
                Platform::Youtube => {
                    config.require_youtube()?;
                    connectors::youtube::fetch_comments(&client, &config.youtube_api_key, &id, max)
                        .await?
                }
                Platform::Facebook => {
                    config.require_facebook()?;
                    connectors::facebook::fetch_comments(
                        &client,
                        &config.facebook_access_token,
                        &id,
                        max,
                    )
                    .await?
                }
                Platform::Instagram => {
                    config.require_instagram()?;
                    connectors::instagram::fetch_comments(
                        &client,
                        &config.instagram_session_id,
                        &id,
                        max,
                    )
                    .await?
                }
            };

            if comments.is_empty() {
                println!("No comments found.");
                return Ok(());
            }

            config.require_models()?;
            let pipeline = Pipeline::from_models(&config.model_dir)?;

            println!("Classifying {} comments...", comments.len());
            let enriched = pipeline.enrich(comments, concurrency).await?;

            // Draft replies for the preview subset only — generation is the
            // slowest stage and the report doesn't carry replies.
            let generator =
                HostedReplyGenerator::new(config.responder_url.clone(), config.hf_api_token.clone());

            let mut preview_rows = Vec::new();
            for record in enriched.iter().take(previews) {
                let reply = generator.reply(&record.comment.text, record.language).await?;
                preview_rows.push(PreviewRow {
                    record: record.clone(),
                    reply,
                });
            }

            terminal::display_preview(&preview_rows);

            let buffer = report::build_workbook(&enriched)?;
            std::fs::write(&out, &buffer)
                .with_context(|| format!("Failed to write report to {out}"))?;

            let toxic = enriched.iter().filter(|r| r.is_toxic).count();
            terminal::display_summary(enriched.len(), toxic, &out);
        }

        Commands::Resolve { url } => {
            match resolver::resolve_platform(&url) {
                Some(platform) => {
                    println!("Platform: {}", platform.to_string().bold());
                    match resolver::extract_id(platform, &url) {
                        Some(id) => println!("Object id: {id}"),
                        None => println!("Object id: {}", "not found in this URL".yellow()),
                    }
                }
                None => println!("{}", "Unknown platform.".yellow()),
            }
        }

        Commands::Reply { text, language } => {
            let config = Config::load()?;

            let language = match language.as_str() {
                "ru" => Language::Ru,
                "kk" => Language::Kk,
                _ => Language::Mixed,
            };

            let generator =
                HostedReplyGenerator::new(config.responder_url.clone(), config.hf_api_token.clone());
            let reply = generator.reply(&text, language).await?;

            println!("{reply}");
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            let model_dir = &config.model_dir;

            println!("Downloading ONNX classifier models...");
            println!("  Destination: {}", model_dir.display());

            classify::download::download_model(model_dir).await?;

            println!("\n{}", "Models downloaded successfully.".bold());
            println!("You can now run `otklik analyze <url>`.");
        }
    }

    Ok(())
}
