pub mod analysis;
pub mod io;
pub mod models;
pub mod server;
pub mod store;

pub use analysis::{
    analyze_transcript, classify_sentiment, extract_medical_entities, generate_soap_note,
};
pub use io::{ReportDocument, read_transcript_file, write_report_json};
pub use models::{
    AnalysisReport, Assessment, Intent, MedicalEntityResult, Objective, Plan, Sentiment,
    SentimentResult, SoapNote, Subjective,
};
pub use server::{AppState, build_router, serve};
pub use store::{MemoryStore, RecordStore, TranscriptRecord};
