use serde::{Deserialize, Serialize};

/// Structured medical entities derived from a single transcript
///
/// Wire format uses camelCase keys (`currentStatus`); persisted and display
/// records keep the snake_case field naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalEntityResult {
    /// Distinct symptom phrases in first-occurrence order, never empty
    pub symptoms: Vec<String>,
    /// Single diagnosis label, empty when no rule matched
    pub diagnosis: String,
    /// Distinct treatment phrases, never empty
    pub treatment: Vec<String>,
    /// Current status label, empty when no rule matched
    pub current_status: String,
    /// Prognosis label, empty when no rule matched
    pub prognosis: String,
    /// Matched entries from the controlled keyword vocabulary, in listed order
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_status_serializes_camel_case() {
        let result = MedicalEntityResult {
            symptoms: vec!["neck".to_string()],
            diagnosis: "Whiplash injury".to_string(),
            treatment: vec!["Physiotherapy sessions".to_string()],
            current_status: "Improving".to_string(),
            prognosis: String::new(),
            keywords: vec![],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("currentStatus").is_some());
        assert!(json.get("current_status").is_none());
        assert_eq!(json["currentStatus"], "Improving");
    }
}
