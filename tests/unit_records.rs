// Unit tests for the record types and their serialized shape.

use otklik::records::{
    CommentRecord, EnrichedRecord, Intent, Language, Platform, Sentiment, TOXICITY_THRESHOLD,
};

fn sample() -> EnrichedRecord {
    EnrichedRecord::new(
        CommentRecord {
            author: "asel".to_string(),
            text: "Рақмет!".to_string(),
            published_at: "2024-03-10T08:30:00Z".to_string(),
            platform: Platform::Instagram,
        },
        Language::Kk,
        0.12,
        Sentiment::Positive,
        Intent::Gratitude,
    )
}

#[test]
fn enums_serialize_to_lowercase_tags() {
    assert_eq!(serde_json::to_string(&Platform::Facebook).unwrap(), "\"facebook\"");
    assert_eq!(serde_json::to_string(&Language::Mixed).unwrap(), "\"mixed\"");
    assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
    assert_eq!(serde_json::to_string(&Intent::Question).unwrap(), "\"question\"");
}

#[test]
fn enriched_record_flattens_the_comment() {
    let json = serde_json::to_value(sample()).unwrap();

    // Comment fields sit at the top level alongside the derived ones
    assert_eq!(json["author"], "asel");
    assert_eq!(json["platform"], "instagram");
    assert_eq!(json["language"], "kk");
    assert_eq!(json["is_toxic"], false);
}

#[test]
fn toxicity_threshold_is_exclusive() {
    let mut record = sample();
    record = EnrichedRecord::new(
        record.comment,
        record.language,
        TOXICITY_THRESHOLD,
        record.sentiment,
        record.intent,
    );
    assert!(!record.is_toxic);
}

#[test]
fn localized_labels_match_the_report_vocabulary() {
    assert_eq!(Sentiment::Positive.label(), "позитивная");
    assert_eq!(Sentiment::Neutral.label(), "нейтральная");
    assert_eq!(Sentiment::Negative.label(), "негативная");

    assert_eq!(Intent::Question.label(), "вопрос");
    assert_eq!(Intent::Feedback.label(), "отзыв");
    assert_eq!(Intent::Complaint.label(), "жалоба");
    assert_eq!(Intent::Gratitude.label(), "благодарность");
}

#[test]
fn platform_display_matches_serde_tag() {
    for platform in [Platform::Youtube, Platform::Facebook, Platform::Instagram] {
        let tag = serde_json::to_string(&platform).unwrap();
        assert_eq!(tag, format!("\"{platform}\""));
    }
}
