// Platform connectors — thin HTTP calls that map each platform's comment
// API response into flat CommentRecords.
//
// Connectors own nothing beyond the request/response mapping: pagination
// up to the caller's cap, field extraction, timestamp normalization. All
// classification happens downstream in the pipeline.

pub mod facebook;
pub mod instagram;
pub mod youtube;
