// File: src/persistence.rs
use crate::core::types::CandidateSet;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    Bincode,
}

/// Writes the candidate set atomically: a temp file in the target directory
/// is filled and then renamed over `path`.
pub fn save_report(candidates: &CandidateSet, path: &Path, format: ReportFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format {
            ReportFormat::Json => serde_json::to_writer_pretty(&mut writer, candidates)?,
            ReportFormat::Bincode => bincode::serialize_into(&mut writer, candidates)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_report(path: &Path, format: ReportFormat) -> Result<CandidateSet> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let candidates: CandidateSet = match format {
        ReportFormat::Json => serde_json::from_reader(reader)?,
        ReportFormat::Bincode => bincode::deserialize_from(reader)?,
    };
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::CryptanalysisEngine;

    #[test]
    fn reports_survive_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = CryptanalysisEngine::new()
            .analyze("Khoor, Zruog! Ыйшх", true)
            .unwrap();
        for (name, format) in [("report.json", ReportFormat::Json), ("report.bin", ReportFormat::Bincode)] {
            let path = dir.path().join("nested").join(name);
            save_report(&candidates, &path, format).unwrap();
            assert_eq!(load_report(&path, format).unwrap(), candidates);
        }
    }

    #[test]
    fn missing_report_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report(&dir.path().join("absent.json"), ReportFormat::Json).unwrap_err();
        assert!(matches!(err, crate::error::CryptanalysisError::Io(_)));
    }
}
