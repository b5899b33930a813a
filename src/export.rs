//! Export the tip collection to a file
//!
//! JSON uses the same `{"tips": [...]}` layout as the tips file, so an export
//! can be used directly as a store. CSV has one row per tip under an
//! `id,title,content,category` header. Both are written atomically.

use crate::cli::ExportFormat;
use crate::store::atomic::write_atomic;
use crate::store::{Tip, TipDocument};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSV_HEADER: [&str; 4] = ["id", "title", "content", "category"];

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode tips as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode tips as CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render `tips` in the given format
///
/// # Errors
///
/// Returns `ExportError` if encoding fails.
pub fn render(tips: &[Tip], format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => {
            let document = TipDocument::new(tips.to_vec());
            Ok(serde_json::to_vec_pretty(&document)?)
        }
        ExportFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            writer.write_record(CSV_HEADER)?;
            for tip in tips {
                writer.serialize(tip)?;
            }
            writer
                .into_inner()
                .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
        }
    }
}

/// Write `tips` to `path`, returning the number of tips written
///
/// # Errors
///
/// Returns `ExportError` if encoding or the atomic write fails.
pub fn export(tips: &[Tip], path: &Path, format: ExportFormat) -> Result<usize, ExportError> {
    let bytes = render(tips, format)?;
    write_atomic(path, &bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = tips.len(), ?format, "Exported tips");
    Ok(tips.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_tips;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_has_header_and_rows() {
        let tips = vec![
            Tip::new(1, "Export directory", "CSV, with quotes \"inside\"", "Automation"),
            Tip::new(2, "Second", "Plain", "Testing"),
        ];

        let csv = String::from_utf8(render(&tips, ExportFormat::Csv).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "id,title,content,category");
        assert_eq!(lines[1], "1,Export directory,\"CSV, with quotes \"\"inside\"\"\",Automation");
        assert_eq!(lines[2], "2,Second,Plain,Testing");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_empty_collection_keeps_header() {
        let csv = String::from_utf8(render(&[], ExportFormat::Csv).unwrap()).unwrap();
        assert_eq!(csv, "id,title,content,category\n");
    }

    #[test]
    fn test_json_export_is_a_tip_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("tips.json");

        let written = export(&sample_tips(), &path, ExportFormat::Json).unwrap();

        let document: TipDocument = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, sample_tips().len());
        assert_eq!(document.tips, sample_tips());
    }

    #[test]
    fn test_export_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = export(&sample_tips(), &blocker.join("out.csv"), ExportFormat::Csv).unwrap_err();

        assert!(matches!(err, ExportError::Write { .. }));
    }
}
