//! CSV export of an [`AnalysisResult`].
//!
//! Produces UTF-8 CSV with the display column names as the header row,
//! optionally prefixed with the UTF-8 byte-order mark so spreadsheet
//! applications detect the encoding and render the Thai column correctly.

use std::path::Path;

use anyhow::Context;

use crate::llm::{AnalysisResult, NOT_AVAILABLE};

use super::headers;

/// Default name of the exported artifact.
pub const DEFAULT_FILE_NAME: &str = "spanish_text_analysis.csv";

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialise `result` to CSV bytes, BOM-prefixed when `with_bom` is set.
pub fn to_csv_bytes(result: &AnalysisResult, with_bom: bool) -> Result<Vec<u8>, csv::Error> {
    let with_base_form = result.has_base_forms();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers(result))?;

    for record in &result.records {
        let mut row: Vec<&str> = vec![&record.word];
        if with_base_form {
            row.push(record.base_form.as_deref().unwrap_or(NOT_AVAILABLE));
        }
        row.extend([
            record.ipa.as_str(),
            record.english_translation.as_str(),
            record.thai_translation.as_str(),
            record.part_of_speech.as_str(),
        ]);
        writer.write_record(row)?;
    }

    let body = writer.into_inner().map_err(|e| e.into_error())?;

    if with_bom {
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
        bytes.extend_from_slice(UTF8_BOM);
        bytes.extend_from_slice(&body);
        Ok(bytes)
    } else {
        Ok(body)
    }
}

/// Write `result` as a CSV file at `path`.
pub fn write_csv_file(result: &AnalysisResult, path: &Path, with_bom: bool) -> anyhow::Result<()> {
    let bytes = to_csv_bytes(result, with_bom)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
