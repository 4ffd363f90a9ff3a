use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AnalysisReport;

/// Write the combined analysis as pretty-printed JSON
pub fn write_report_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, report).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable report document combining the three derived records with
/// the raw transcript
pub struct ReportDocument<'a> {
    report: &'a AnalysisReport,
    transcript: &'a str,
    patient_name: &'a str,
}

impl<'a> ReportDocument<'a> {
    pub fn new(report: &'a AnalysisReport, transcript: &'a str, patient_name: &'a str) -> Self {
        Self {
            report,
            transcript,
            patient_name,
        }
    }

    /// Format the report as plain text with one section per artifact
    pub fn format(&self) -> String {
        let medical = &self.report.medical_analysis;
        let sentiment = &self.report.sentiment_analysis;
        let note = &self.report.soap_note;

        let mut output = String::new();

        output.push_str("Medical Transcript Analysis\n");
        output.push_str("===========================\n");
        output.push_str(&format!("Patient: {}\n\n", self.patient_name));

        output.push_str("Medical Summary\n");
        output.push_str("---------------\n");
        output.push_str(&format!("Symptoms: {}\n", medical.symptoms.join(", ")));
        output.push_str(&format!("Diagnosis: {}\n", or_unspecified(&medical.diagnosis)));
        output.push_str(&format!("Treatment: {}\n", medical.treatment.join(", ")));
        output.push_str(&format!(
            "Current status: {}\n",
            or_unspecified(&medical.current_status)
        ));
        output.push_str(&format!("Prognosis: {}\n", or_unspecified(&medical.prognosis)));
        output.push_str(&format!("Keywords: {}\n\n", medical.keywords.join(", ")));

        output.push_str("Sentiment\n");
        output.push_str("---------\n");
        output.push_str(&format!(
            "{} ({:.2} confidence), intent: {}\n\n",
            sentiment.sentiment, sentiment.confidence, sentiment.intent
        ));

        output.push_str("SOAP Note\n");
        output.push_str("---------\n");
        output.push_str(&format!(
            "Subjective:\n  Chief complaint: {}\n  History: {}\n",
            note.subjective.chief_complaint, note.subjective.history_of_present_illness
        ));
        output.push_str(&format!(
            "Objective:\n  Physical exam: {}\n  Observations: {}\n",
            note.objective.physical_exam, note.objective.observations
        ));
        output.push_str(&format!(
            "Assessment:\n  Diagnosis: {}\n  Severity: {}\n",
            note.assessment.diagnosis, note.assessment.severity
        ));
        output.push_str(&format!(
            "Plan:\n  Treatment: {}\n  Follow-up: {}\n\n",
            note.plan.treatment, note.plan.follow_up
        ));

        output.push_str("Transcript\n");
        output.push_str("----------\n");
        output.push_str(&wrap_text(self.transcript.trim(), 80));
        output.push('\n');

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() { "Not recorded" } else { value }
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len + word.len() + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word.len();
    }

    result
}
