use serde::{Deserialize, Serialize};

/// Patient-reported section of the note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subjective {
    pub chief_complaint: String,
    pub history_of_present_illness: String,
}

/// Examiner-observed section of the note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub physical_exam: String,
    pub observations: String,
}

/// Clinical judgment section of the note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub diagnosis: String,
    pub severity: String,
}

/// Treatment and follow-up section of the note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub treatment: String,
    pub follow_up: String,
}

/// SOAP-format clinical note synthesized from a transcript
///
/// Every field carries a deterministic fallback string; no field is ever
/// left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoapNote {
    pub subjective: Subjective,
    pub objective: Objective,
    pub assessment: Assessment,
    pub plan: Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_serialize_with_snake_case_fields() {
        let note = SoapNote {
            subjective: Subjective {
                chief_complaint: "Neck and back pain".to_string(),
                history_of_present_illness: "Patient presents for evaluation".to_string(),
            },
            objective: Objective {
                physical_exam: "exam".to_string(),
                observations: "obs".to_string(),
            },
            assessment: Assessment {
                diagnosis: "Soft tissue injury".to_string(),
                severity: "Moderate".to_string(),
            },
            plan: Plan {
                treatment: "rest".to_string(),
                follow_up: "4-6 weeks".to_string(),
            },
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["subjective"]["chief_complaint"], "Neck and back pain");
        assert_eq!(json["plan"]["follow_up"], "4-6 weeks");
    }
}
