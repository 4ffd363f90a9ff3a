use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall emotional tone of the patient side of the dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Anxious,
    Reassured,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Anxious => "Anxious",
            Sentiment::Reassured => "Reassured",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the patient is trying to accomplish in the dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Seeking reassurance")]
    SeekingReassurance,
    #[serde(rename = "Providing medical history")]
    ProvidingMedicalHistory,
    #[serde(rename = "Expressing gratitude")]
    ExpressingGratitude,
    #[serde(rename = "Reporting symptoms")]
    ReportingSymptoms,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SeekingReassurance => "Seeking reassurance",
            Intent::ProvidingMedicalHistory => "Providing medical history",
            Intent::ExpressingGratitude => "Expressing gratitude",
            Intent::ReportingSymptoms => "Reporting symptoms",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment classification for a single transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub intent: Intent,
    /// In [0.6, 0.95] when a lexicon signal fired, 0.7 baseline otherwise;
    /// rounded to two decimal places
    pub confidence: f64,
}
