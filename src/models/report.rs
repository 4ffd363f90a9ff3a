use serde::{Deserialize, Serialize};

use super::{MedicalEntityResult, SentimentResult, SoapNote};

/// Combined output of the three analyzers for one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub medical_analysis: MedicalEntityResult,
    pub sentiment_analysis: SentimentResult,
    pub soap_note: SoapNote,
}

#[cfg(test)]
mod tests {
    use crate::analysis::analyze_transcript;

    #[test]
    fn test_report_serializes_with_boundary_keys() {
        let report = analyze_transcript("I have neck pain after the accident.", "Patient");
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("medicalAnalysis").is_some());
        assert!(json.get("sentimentAnalysis").is_some());
        assert!(json.get("soapNote").is_some());
        assert!(json["medicalAnalysis"].get("currentStatus").is_some());
    }
}
