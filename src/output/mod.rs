//! Rendering and export of a decoded [`AnalysisResult`].
//!
//! * [`table::render_table`] — terminal table via `comfy-table`.
//! * [`csv`] — UTF-8 (optionally BOM-prefixed) CSV export.
//!
//! Both share the same column set: `Word, [Base Form,] IPA,
//! English Translation, Thai Translation, Part of Speech`. The Base Form
//! column appears only when at least one record carries a base form.

pub mod csv;
pub mod table;

use crate::llm::AnalysisResult;

pub use self::csv::{to_csv_bytes, write_csv_file, DEFAULT_FILE_NAME};
pub use table::render_table;

/// Column headers for a result, with the optional Base Form column decided
/// by the records themselves.
pub(crate) fn headers(result: &AnalysisResult) -> Vec<&'static str> {
    let mut headers = vec!["Word"];
    if result.has_base_forms() {
        headers.push("Base Form");
    }
    headers.extend(["IPA", "English Translation", "Thai Translation", "Part of Speech"]);
    headers
}
