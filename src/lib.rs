// Otklik: comment classification and reply drafting for social platforms.
//
// This is the library root. Each module corresponds to one stage of the
// analysis flow: resolve the URL, fetch comments, classify them, draft
// replies, present and export the result.

pub mod classify;
pub mod config;
pub mod connectors;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod report;
pub mod resolver;
pub mod responder;
