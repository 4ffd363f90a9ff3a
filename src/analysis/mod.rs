pub mod entities;
pub mod rules;
pub mod sentiment;
pub mod soap;

pub use entities::extract_medical_entities;
pub use sentiment::classify_sentiment;
pub use soap::generate_soap_note;

use crate::models::AnalysisReport;

/// Run all three analyzers over one transcript and combine the results
///
/// The components are independent pure functions of the text; nothing is
/// shared between them, so they could run in any order (the SOAP synthesizer
/// reuses some of the same textual cues as the entity extractor but through
/// its own rule tables).
pub fn analyze_transcript(transcript: &str, patient_name: &str) -> AnalysisReport {
    AnalysisReport {
        medical_analysis: extract_medical_entities(transcript),
        sentiment_analysis: classify_sentiment(transcript),
        soap_note: generate_soap_note(transcript, patient_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whiplash_labels_agree_across_components() {
        let report = analyze_transcript(
            "The whiplash still bothers me after the car accident.",
            "Patient",
        );
        assert_eq!(report.medical_analysis.diagnosis, "Whiplash injury");
        assert!(report.soap_note.assessment.diagnosis.contains("Whiplash"));
    }

    #[test]
    fn test_entity_and_assessment_diagnoses_can_diverge() {
        // Separate rule tables over the same text: the extractor sees a
        // muscle strain while the assessment generalizes to soft tissue.
        // Observed behavior, deliberately not unified.
        let report = analyze_transcript("Probably just a muscle strain.", "Patient");
        assert_eq!(report.medical_analysis.diagnosis, "Muscle strain");
        assert_eq!(report.soap_note.assessment.diagnosis, "Soft tissue injury");
    }

    #[test]
    fn test_results_always_carry_symptoms_and_treatment() {
        for text in ["", "hello", "whiplash and physiotherapy and painkillers"] {
            let report = analyze_transcript(text, "Patient");
            assert!(!report.medical_analysis.symptoms.is_empty());
            assert!(!report.medical_analysis.treatment.is_empty());

            let confidence = report.sentiment_analysis.confidence;
            assert!((0.6..=0.95).contains(&confidence));
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let text = "I'm worried the neck pain from the accident won't improve, \
                    even after 10 physiotherapy sessions.";
        assert_eq!(
            analyze_transcript(text, "Patient"),
            analyze_transcript(text, "Patient")
        );
    }
}
