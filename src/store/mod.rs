use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow, ensure};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{MedicalEntityResult, SentimentResult, SoapNote};

/// Stored transcript row; derived records are keyed by `id`
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub transcript: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence interface for transcripts and their derived records
///
/// The transcript write is the primary operation and generates the record
/// identifier. The three derived inserts are secondary: callers treat their
/// failures as non-fatal and log them instead of aborting the request.
pub trait RecordStore: Send + Sync {
    /// Persist the raw transcript and return its generated identifier
    fn insert_transcript(&self, patient_name: &str, transcript: &str) -> Result<Uuid>;

    fn insert_medical_analysis(
        &self,
        transcript_id: Uuid,
        result: &MedicalEntityResult,
    ) -> Result<()>;

    fn insert_sentiment(&self, transcript_id: Uuid, result: &SentimentResult) -> Result<()>;

    fn insert_soap_note(&self, transcript_id: Uuid, note: &SoapNote) -> Result<()>;
}

/// In-process store backed by hash maps; good enough for a single server
/// process and for tests
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    transcripts: HashMap<Uuid, TranscriptRecord>,
    medical_analyses: HashMap<Uuid, MedicalEntityResult>,
    sentiment_analyses: HashMap<Uuid, SentimentResult>,
    soap_notes: HashMap<Uuid, SoapNote>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self, id: Uuid) -> Option<TranscriptRecord> {
        self.lock().ok()?.transcripts.get(&id).cloned()
    }

    pub fn medical_analysis(&self, id: Uuid) -> Option<MedicalEntityResult> {
        self.lock().ok()?.medical_analyses.get(&id).cloned()
    }

    pub fn sentiment(&self, id: Uuid) -> Option<SentimentResult> {
        self.lock().ok()?.sentiment_analyses.get(&id).cloned()
    }

    pub fn soap_note(&self, id: Uuid) -> Option<SoapNote> {
        self.lock().ok()?.soap_notes.get(&id).cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| anyhow!("record store lock poisoned"))
    }
}

impl RecordStore for MemoryStore {
    fn insert_transcript(&self, patient_name: &str, transcript: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let record = TranscriptRecord {
            id,
            patient_name: patient_name.to_string(),
            transcript: transcript.to_string(),
            created_at: Utc::now(),
        };
        self.lock()?.transcripts.insert(id, record);
        Ok(id)
    }

    fn insert_medical_analysis(
        &self,
        transcript_id: Uuid,
        result: &MedicalEntityResult,
    ) -> Result<()> {
        let mut inner = self.lock()?;
        ensure!(
            inner.transcripts.contains_key(&transcript_id),
            "unknown transcript id {transcript_id}"
        );
        inner.medical_analyses.insert(transcript_id, result.clone());
        Ok(())
    }

    fn insert_sentiment(&self, transcript_id: Uuid, result: &SentimentResult) -> Result<()> {
        let mut inner = self.lock()?;
        ensure!(
            inner.transcripts.contains_key(&transcript_id),
            "unknown transcript id {transcript_id}"
        );
        inner.sentiment_analyses.insert(transcript_id, result.clone());
        Ok(())
    }

    fn insert_soap_note(&self, transcript_id: Uuid, note: &SoapNote) -> Result<()> {
        let mut inner = self.lock()?;
        ensure!(
            inner.transcripts.contains_key(&transcript_id),
            "unknown transcript id {transcript_id}"
        );
        inner.soap_notes.insert(transcript_id, note.clone());
        Ok(())
    }
}
