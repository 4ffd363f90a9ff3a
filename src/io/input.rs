use std::path::Path;

use anyhow::{Context, Result, ensure};

/// Read a transcript text file for analysis
///
/// Mirrors the transport boundary's validation: an empty or whitespace-only
/// file is rejected here rather than fed to the pipeline.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    ensure!(
        !content.trim().is_empty(),
        "Transcript is required: {:?} is empty",
        path
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_transcript_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Doctor: how is the neck pain?").unwrap();

        let content = read_transcript_file(file.path()).unwrap();
        assert!(content.contains("neck pain"));
    }

    #[test]
    fn test_rejects_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n").unwrap();

        let err = read_transcript_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Transcript is required"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_transcript_file(Path::new("/nonexistent/visit.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
