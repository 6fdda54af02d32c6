// Colored terminal output for the analysis preview.
//
// This module handles all terminal-specific formatting: colors, the
// preview table, per-row reply display. main.rs delegates here.

use colored::Colorize;

use crate::records::{EnrichedRecord, Sentiment};

/// One preview row: the enriched record plus its drafted reply.
pub struct PreviewRow {
    pub record: EnrichedRecord,
    pub reply: String,
}

/// Display the preview table for the first few enriched comments.
pub fn display_preview(rows: &[PreviewRow]) {
    if rows.is_empty() {
        println!("No comments to preview.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Preview ({} comments) ===", rows.len()).bold()
    );
    println!();

    for (i, row) in rows.iter().enumerate() {
        let record = &row.record;
        let text = super::truncate_chars(&record.comment.text, 140);

        let toxicity_str = format!("tox: {:.2}", record.toxicity);
        let toxicity_colored = if record.is_toxic {
            toxicity_str.red().bold()
        } else {
            toxicity_str.green()
        };

        println!("  {}. @{} \"{}\"", i + 1, record.comment.author, text);
        println!(
            "     [{}]  {}  {}  {}",
            toxicity_colored,
            colorize_sentiment(record.sentiment),
            record.intent.label().cyan(),
            record.language.as_str().dimmed(),
        );
        println!("     reply: {}", row.reply.dimmed());
        println!();
    }

    let toxic = rows.iter().filter(|r| r.record.is_toxic).count();
    if toxic > 0 {
        println!("  {} {} toxic comments in preview", "!".red().bold(), toxic);
    }
}

/// Summary line after the full batch is enriched.
pub fn display_summary(total: usize, toxic: usize, report_path: &str) {
    println!("\n{}", "Analysis complete.".bold());
    println!("  Comments analyzed: {total}");
    if toxic > 0 {
        println!("  Flagged toxic:     {}", toxic.to_string().red());
    } else {
        println!("  Flagged toxic:     0");
    }
    println!("  Report saved to:   {report_path}");
}

/// Colorize a localized sentiment label.
fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.label().green(),
        Sentiment::Neutral => sentiment.label().normal(),
        Sentiment::Negative => sentiment.label().yellow(),
    }
}
