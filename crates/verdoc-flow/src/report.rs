//! Result view shown once verification completes.

use serde::{Deserialize, Serialize};

use crate::types::SelectedFile;

/// Heading of the result view.
pub const RESULT_HEADING: &str = "Document Verified Successfully";

/// Sub-heading of the result view.
pub const RESULT_MESSAGE: &str = "Your document has passed all security checks.";

/// Label of the control that restarts the flow.
pub const UPLOAD_ANOTHER_LABEL: &str = "Upload Another Document";

/// Data rendered into the result view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    /// File name as selected.
    pub file_name: String,
    /// Size in kilobytes with two decimals, e.g. `"2048.00 KB"`.
    pub size_label: String,
    /// MIME type as reported by the browser.
    pub mime_type: String,
}

impl ResultView {
    /// Build the view for a verified file.
    #[must_use]
    pub fn for_file(file: &SelectedFile) -> Self {
        Self {
            file_name: file.name.clone(),
            size_label: format_size_kb(file.size_bytes),
            mime_type: file.mime_type.clone(),
        }
    }
}

/// Format a byte count as kilobytes (1 KB = 1024 bytes) with two
/// decimals and a `" KB"` suffix.
///
/// Rounds half away from zero. Works on integer hundredths so ties
/// such as 128 bytes (0.125 KB) always round up to `"0.13 KB"`.
#[must_use]
pub fn format_size_kb(size_bytes: u64) -> String {
    let hundredths = (u128::from(size_bytes) * 100 + 512) / 1024;
    format!("{}.{:02} KB", hundredths / 100, hundredths % 100)
}
