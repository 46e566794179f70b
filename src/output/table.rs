//! Terminal table rendering via `comfy-table`.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::llm::{AnalysisResult, NOT_AVAILABLE};

use super::headers;

/// Render `result` as a terminal table.
///
/// The caller prints the returned [`Table`] with `Display`.
pub fn render_table(result: &AnalysisResult) -> Table {
    let with_base_form = result.has_base_forms();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers(result));

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
        table.add_row(row);
    }

    table
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
