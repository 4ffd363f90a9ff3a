use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Intent, Sentiment, SentimentResult};

/// Words and phrases signalling patient anxiety; each entry counts at most
/// once regardless of how often it occurs
const ANXIOUS_INDICATORS: [&str; 10] = [
    "worried",
    "concerned",
    "anxious",
    "nervous",
    "scared",
    "afraid",
    "troubling",
    "distressing",
    "uneasy",
    "apprehensive",
];

/// Words and phrases signalling the patient feels reassured
const REASSURED_INDICATORS: [&str; 10] = [
    "better",
    "relief",
    "good",
    "great",
    "thank",
    "appreciate",
    "encouraging",
    "positive",
    "improving",
    "glad",
];

const BASELINE_CONFIDENCE: f64 = 0.7;
const MIN_CONFIDENCE: f64 = 0.6;
const MAX_CONFIDENCE: f64 = 0.95;
const CONFIDENCE_PER_INDICATOR: f64 = 0.1;

lazy_static! {
    /// Intent rules in priority order; derived independently of the
    /// sentiment outcome
    static ref INTENT_RULES: Vec<(Regex, Intent)> = vec![
        (
            Regex::new(r"(?i)worried|concern|hope").unwrap(),
            Intent::SeekingReassurance,
        ),
        (
            Regex::new(r"(?i)how.*feel|status|progress").unwrap(),
            Intent::ProvidingMedicalHistory,
        ),
        (
            Regex::new(r"(?i)thank|appreciate|grateful").unwrap(),
            Intent::ExpressingGratitude,
        ),
    ];
}

/// Classify the sentiment and intent of a transcript
///
/// Scores the text against the two opposing lexicons; the higher count wins
/// and scales confidence, a tie (including zero matches on both sides) is
/// Neutral at the fixed baseline.
pub fn classify_sentiment(transcript: &str) -> SentimentResult {
    let lower = transcript.to_lowercase();

    let anxious_count = indicator_count(&lower, &ANXIOUS_INDICATORS);
    let reassured_count = indicator_count(&lower, &REASSURED_INDICATORS);

    let (sentiment, confidence) = if anxious_count > reassured_count {
        (Sentiment::Anxious, scaled_confidence(anxious_count))
    } else if reassured_count > anxious_count {
        (Sentiment::Reassured, scaled_confidence(reassured_count))
    } else {
        (Sentiment::Neutral, BASELINE_CONFIDENCE)
    };

    let intent = INTENT_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(transcript))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::ReportingSymptoms);

    SentimentResult {
        sentiment,
        intent,
        confidence: round_to_hundredths(confidence),
    }
}

/// Number of lexicon entries that occur anywhere in the lowercased text
fn indicator_count(lower: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|word| lower.contains(*word)).count()
}

/// More matching indicators raise confidence, capped at 0.95
fn scaled_confidence(count: usize) -> f64 {
    MAX_CONFIDENCE.min(MIN_CONFIDENCE + CONFIDENCE_PER_INDICATOR * count as f64)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
