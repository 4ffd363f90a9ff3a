use lazy_static::lazy_static;
use regex::Regex;

use crate::models::MedicalEntityResult;

use super::rules::{LabelRule, PhraseSet, first_label};

lazy_static! {
    /// Symptom pattern groups, scanned in order:
    /// 1. generic "[pain-word] in my/the [body part]" template, capturing the body part
    /// 2. named two-word symptom phrases
    /// 3. general distress phrases
    static ref SYMPTOM_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:pain|discomfort|ache|hurt|sore)(?:\s+in)?(?:\s+(?:my|the))?\s+(\w+)")
            .unwrap(),
        Regex::new(r"(?i)(neck pain|back pain|headache|stiffness|tenderness)").unwrap(),
        Regex::new(r"(?i)(trouble sleeping|difficulty|impact|shock)").unwrap(),
    ];

    /// Diagnosis is single-valued: first matching rule wins, later rules are
    /// never allowed to overwrite it
    static ref DIAGNOSIS_RULES: Vec<LabelRule> = vec![
        LabelRule::new(r"(?i)whiplash", "Whiplash injury"),
        LabelRule::new(r"(?i)strain", "Muscle strain"),
        LabelRule::new(r"(?i)injury", "Soft tissue injury"),
    ];

    static ref STATUS_RULES: Vec<LabelRule> = vec![
        LabelRule::new(r"(?i)occasional|sometimes|now and then", "Occasional discomfort"),
        LabelRule::new(r"(?i)better|improving|improved", "Improving"),
        LabelRule::new(r"(?i)still|persistent", "Ongoing symptoms"),
    ];

    static ref PHYSIOTHERAPY_RE: Regex = Regex::new(r"(?i)physiotherapy|physical therapy").unwrap();
    static ref SESSION_COUNT_RE: Regex = Regex::new(r"(?i)(\d+)\s+(?:sessions?|treatments?)").unwrap();
    static ref PAIN_MEDICATION_RE: Regex =
        Regex::new(r"(?i)painkiller|analgesic|medication|pain relief").unwrap();
    static ref REST_ADVICE_RE: Regex = Regex::new(r"(?i)rest|advice").unwrap();
    static ref FULL_RECOVERY_RE: Regex = Regex::new(r"(?i)full recovery").unwrap();
    static ref RECOVERY_WINDOW_RE: Regex =
        Regex::new(r"(?i)(?:within|in)\s+(\w+\s+(?:weeks|months))").unwrap();
    static ref NO_COMPLICATIONS_RE: Regex = Regex::new(r"(?i)no long-term|no lasting").unwrap();
}

/// Controlled vocabulary scanned for keywords, matched as case-insensitive
/// literal substrings in listed order
const KEYWORD_VOCABULARY: [&str; 8] = [
    "whiplash injury",
    "physiotherapy",
    "car accident",
    "neck pain",
    "back pain",
    "full recovery",
    "range of motion",
    "seatbelt",
];

const DEFAULT_SYMPTOMS: [&str; 2] = ["Neck pain", "Back pain"];
const DEFAULT_TREATMENT: &str = "Medical evaluation";

/// Extract structured medical entities from a transcript
///
/// Pure and total: any input (including empty text) produces a result, with
/// documented fallbacks where no rule fires. Symptoms, treatment, and
/// keywords accumulate every matching signal; diagnosis, status, and
/// prognosis are single-valued with strict first-match priority so
/// contradictory clinical labels cannot be emitted.
pub fn extract_medical_entities(transcript: &str) -> MedicalEntityResult {
    let lower = transcript.to_lowercase();

    MedicalEntityResult {
        symptoms: extract_symptoms(transcript),
        diagnosis: first_label(&DIAGNOSIS_RULES, transcript)
            .unwrap_or_default()
            .to_string(),
        treatment: extract_treatment(transcript),
        current_status: first_label(&STATUS_RULES, &lower)
            .unwrap_or_default()
            .to_string(),
        prognosis: extract_prognosis(transcript, &lower),
        keywords: extract_keywords(&lower),
    }
}

fn extract_symptoms(transcript: &str) -> Vec<String> {
    let mut symptoms = PhraseSet::new();

    for pattern in SYMPTOM_PATTERNS.iter() {
        for caps in pattern.captures_iter(transcript) {
            // Prefer the captured phrase (e.g. the body part); fall back to
            // the whole matched span for patterns without a useful group
            let phrase = caps
                .get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str())
                .unwrap_or_default();
            if !phrase.is_empty() {
                symptoms.insert(phrase);
            }
        }
    }

    if symptoms.is_empty() {
        return DEFAULT_SYMPTOMS.iter().map(|s| s.to_string()).collect();
    }
    symptoms.into_vec()
}

fn extract_treatment(transcript: &str) -> Vec<String> {
    let mut treatment = PhraseSet::new();

    if PHYSIOTHERAPY_RE.is_match(transcript) {
        match SESSION_COUNT_RE.captures(transcript) {
            Some(caps) => treatment.insert(&format!("{} physiotherapy sessions", &caps[1])),
            None => treatment.insert("Physiotherapy sessions"),
        };
    }

    if PAIN_MEDICATION_RE.is_match(transcript) {
        treatment.insert("Painkillers");
    }

    // Rest advice only counts when nothing stronger was mentioned
    if treatment.is_empty() && REST_ADVICE_RE.is_match(transcript) {
        treatment.insert("Rest and medical advice");
    }

    if treatment.is_empty() {
        return vec![DEFAULT_TREATMENT.to_string()];
    }
    treatment.into_vec()
}

fn extract_prognosis(transcript: &str, lower: &str) -> String {
    if FULL_RECOVERY_RE.is_match(transcript) {
        return match RECOVERY_WINDOW_RE.captures(transcript) {
            Some(caps) => format!("Full recovery expected within {}", &caps[1]),
            None => "Full recovery expected".to_string(),
        };
    }
    if NO_COMPLICATIONS_RE.is_match(lower) {
        return "No long-term complications expected".to_string();
    }
    String::new()
}

fn extract_keywords(lower: &str) -> Vec<String> {
    let mut keywords = PhraseSet::new();
    for keyword in KEYWORD_VOCABULARY {
        if lower.contains(keyword) {
            keywords.insert(keyword);
        }
    }
    keywords.into_vec()
}
