use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Assessment, Objective, Plan, SoapNote, Subjective};

use super::rules::{LabelRule, first_label};

lazy_static! {
    static ref CHIEF_COMPLAINT_RULES: Vec<LabelRule> = vec![
        LabelRule::new(r"(?i)neck.*pain|back.*pain", "Neck and back pain"),
        LabelRule::new(r"(?i)pain|discomfort|hurt", "Pain and discomfort"),
    ];

    /// Severity rules: the improvement check runs before the escalation
    /// check, so the milder label wins when both phrasings appear
    static ref SEVERITY_RULES: Vec<LabelRule> = vec![
        LabelRule::new(r"(?i)better|improving|occasional", "Mild, improving"),
        LabelRule::new(r"(?i)severe|intense|constant", "Moderate to severe"),
    ];

    /// Assessment diagnosis uses its own rule table, separate from the
    /// entity extractor's; the two can legitimately disagree
    static ref ASSESSMENT_DIAGNOSIS_RULES: Vec<LabelRule> = vec![
        LabelRule::new(r"(?i)whiplash", "Whiplash injury with associated lower back strain"),
        LabelRule::new(r"(?i)strain|injury", "Soft tissue injury"),
    ];

    static ref ACCIDENT_RE: Regex = Regex::new(r"(?i)accident|collision|crash").unwrap();
    static ref SYMPTOM_DURATION_RE: Regex = Regex::new(r"(?i)(\d+)\s+(weeks|months)").unwrap();
    static ref THERAPY_RE: Regex = Regex::new(r"(?i)physiotherapy|treatment").unwrap();
    static ref IMPROVEMENT_RE: Regex = Regex::new(r"(?i)occasional|better|improving").unwrap();
    static ref FULL_MOTION_RE: Regex = Regex::new(r"(?i)full range of motion|full.*movement").unwrap();
    static ref NORMAL_FINDINGS_RE: Regex = Regex::new(r"(?i)good condition|normal|no signs").unwrap();
    static ref PHYSIO_PLAN_RE: Regex = Regex::new(r"(?i)physiotherapy").unwrap();
    static ref RECOVERY_PERIOD_RE: Regex = Regex::new(r"(?i)full recovery|six months").unwrap();
}

/// Synthesize a SOAP clinical note from a transcript
///
/// Pure and total; every field falls back to a fixed string when no cue is
/// present. `patient_name` is accepted for interface symmetry and reserved
/// for future templating; it does not affect any current field.
pub fn generate_soap_note(transcript: &str, _patient_name: &str) -> SoapNote {
    let lower = transcript.to_lowercase();

    SoapNote {
        subjective: build_subjective(transcript, &lower),
        objective: build_objective(transcript, &lower),
        assessment: build_assessment(transcript, &lower),
        plan: build_plan(transcript),
    }
}

fn build_subjective(transcript: &str, lower: &str) -> Subjective {
    let chief_complaint = first_label(&CHIEF_COMPLAINT_RULES, transcript)
        .unwrap_or("Follow-up after injury")
        .to_string();

    // Independent cues, stitched together in a fixed clause order
    let mut history_parts: Vec<String> = Vec::new();
    if ACCIDENT_RE.is_match(transcript) {
        history_parts.push("Patient involved in motor vehicle accident".to_string());
    }
    if let Some(caps) = SYMPTOM_DURATION_RE.captures(transcript) {
        history_parts.push(format!("experienced symptoms for {} {}", &caps[1], &caps[2]));
    }
    if THERAPY_RE.is_match(transcript) {
        history_parts.push("received physiotherapy treatment".to_string());
    }
    if IMPROVEMENT_RE.is_match(lower) {
        history_parts.push("now reporting improvement with occasional symptoms".to_string());
    }

    let history_of_present_illness = if history_parts.is_empty() {
        "Patient presents for evaluation".to_string()
    } else {
        history_parts.join(", ")
    };

    Subjective {
        chief_complaint,
        history_of_present_illness,
    }
}

fn build_objective(transcript: &str, lower: &str) -> Objective {
    let physical_exam = if FULL_MOTION_RE.is_match(transcript) {
        "Full range of motion in cervical and lumbar spine, no tenderness detected"
    } else {
        "Physical examination performed, patient assessed for mobility and pain"
    };

    let observations = if NORMAL_FINDINGS_RE.is_match(lower) {
        "Patient appears in normal health, normal gait, no visible distress"
    } else {
        "Patient cooperative and responsive during examination"
    };

    Objective {
        physical_exam: physical_exam.to_string(),
        observations: observations.to_string(),
    }
}

fn build_assessment(transcript: &str, lower: &str) -> Assessment {
    let diagnosis = first_label(&ASSESSMENT_DIAGNOSIS_RULES, transcript)
        .unwrap_or("Post-traumatic musculoskeletal pain")
        .to_string();

    let severity = first_label(&SEVERITY_RULES, lower)
        .unwrap_or("Moderate")
        .to_string();

    Assessment {
        diagnosis,
        severity,
    }
}

fn build_plan(transcript: &str) -> Plan {
    let treatment = if PHYSIO_PLAN_RE.is_match(transcript) {
        "Continue physiotherapy as needed, use analgesics for pain relief as required"
    } else {
        "Rest, pain management, consider physiotherapy referral"
    };

    let follow_up = if RECOVERY_PERIOD_RE.is_match(transcript) {
        "Patient to return if pain worsens or persists beyond expected recovery period"
    } else {
        "Follow-up in 4-6 weeks or sooner if symptoms worsen"
    };

    Plan {
        treatment: treatment.to_string(),
        follow_up: follow_up.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chief_complaint_priority() {
        let note = generate_soap_note("My neck and the pain in my back.", "Patient");
        assert_eq!(note.subjective.chief_complaint, "Neck and back pain");

        let note = generate_soap_note("Some discomfort when sitting.", "Patient");
        assert_eq!(note.subjective.chief_complaint, "Pain and discomfort");

        let note = generate_soap_note("Routine checkup.", "Patient");
        assert_eq!(note.subjective.chief_complaint, "Follow-up after injury");
    }

    #[test]
    fn test_history_joins_fired_clauses_in_order() {
        let note = generate_soap_note(
            "After the car crash I had symptoms for 3 weeks, then physiotherapy, \
             and I'm feeling better now.",
            "Patient",
        );
        assert_eq!(
            note.subjective.history_of_present_illness,
            "Patient involved in motor vehicle accident, \
             experienced symptoms for 3 weeks, \
             received physiotherapy treatment, \
             now reporting improvement with occasional symptoms"
        );
    }

    #[test]
    fn test_history_fallback_when_no_clause_fires() {
        let note = generate_soap_note("Hello doctor.", "Patient");
        assert_eq!(
            note.subjective.history_of_present_illness,
            "Patient presents for evaluation"
        );
    }

    #[test]
    fn test_physical_exam_detects_full_motion() {
        let note = generate_soap_note("She has full range of motion again.", "Patient");
        assert_eq!(
            note.objective.physical_exam,
            "Full range of motion in cervical and lumbar spine, no tenderness detected"
        );

        let note = generate_soap_note("Limited mobility on the left side.", "Patient");
        assert_eq!(
            note.objective.physical_exam,
            "Physical examination performed, patient assessed for mobility and pain"
        );
    }

    #[test]
    fn test_observations_detect_normal_findings() {
        let note = generate_soap_note("Everything looks normal today.", "Patient");
        assert_eq!(
            note.objective.observations,
            "Patient appears in normal health, normal gait, no visible distress"
        );

        let note = generate_soap_note("Patient winces when turning.", "Patient");
        assert_eq!(
            note.objective.observations,
            "Patient cooperative and responsive during examination"
        );
    }

    #[test]
    fn test_assessment_diagnosis_priority() {
        let note = generate_soap_note("Classic whiplash presentation.", "Patient");
        assert_eq!(
            note.assessment.diagnosis,
            "Whiplash injury with associated lower back strain"
        );

        let note = generate_soap_note("A minor strain, nothing more.", "Patient");
        assert_eq!(note.assessment.diagnosis, "Soft tissue injury");

        let note = generate_soap_note("Aches with no clear cause.", "Patient");
        assert_eq!(note.assessment.diagnosis, "Post-traumatic musculoskeletal pain");
    }

    #[test]
    fn test_severity_milder_label_wins_tie() {
        // Both improvement and escalation language present
        let note = generate_soap_note(
            "The pain was severe at first but it is getting better.",
            "Patient",
        );
        assert_eq!(note.assessment.severity, "Mild, improving");

        let note = generate_soap_note("The pain is constant and intense.", "Patient");
        assert_eq!(note.assessment.severity, "Moderate to severe");

        let note = generate_soap_note("Some pain when lifting.", "Patient");
        assert_eq!(note.assessment.severity, "Moderate");
    }

    #[test]
    fn test_plan_treatment_and_follow_up() {
        let note = generate_soap_note(
            "Keep up the physiotherapy; expect a full recovery.",
            "Patient",
        );
        assert_eq!(
            note.plan.treatment,
            "Continue physiotherapy as needed, use analgesics for pain relief as required"
        );
        assert_eq!(
            note.plan.follow_up,
            "Patient to return if pain worsens or persists beyond expected recovery period"
        );

        let note = generate_soap_note("Take it easy for a while.", "Patient");
        assert_eq!(
            note.plan.treatment,
            "Rest, pain management, consider physiotherapy referral"
        );
        assert_eq!(
            note.plan.follow_up,
            "Follow-up in 4-6 weeks or sooner if symptoms worsen"
        );
    }

    #[test]
    fn test_patient_name_does_not_change_output() {
        let text = "Whiplash after a crash, physiotherapy helping, feeling better.";
        assert_eq!(
            generate_soap_note(text, "Patient"),
            generate_soap_note(text, "Ms. Reyes")
        );
    }
}
