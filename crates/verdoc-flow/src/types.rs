//! Shared types for the verdoc upload flow.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::step::{Step, StepIndicator};

/// MIME types accepted by the default configuration.
pub const DEFAULT_ALLOWED_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// Default upper bound on file size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Configuration for the upload flow.
///
/// Set once at startup and never mutated afterwards. The
/// [`Default`] impl holds the values the web application ships with;
/// there is no runtime configuration surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// MIME types a selected file may have.
    pub allowed_types: BTreeSet<String>,

    /// Largest accepted file size in bytes (inclusive).
    pub max_file_size_bytes: u64,

    /// Delay between simulated progress ticks in milliseconds.
    pub progress_tick_interval_ms: u32,

    /// Percentage points added to the progress bar on each tick.
    ///
    /// A step of zero is treated as one so the simulation always
    /// terminates.
    pub progress_step: u8,

    /// Delay between reaching 100% and showing the result, in
    /// milliseconds.
    pub finalize_delay_ms: u32,
}

impl UploadConfig {
    /// Whether `mime_type` is one of the allowed types.
    #[must_use]
    pub fn is_allowed_type(&self, mime_type: &str) -> bool {
        self.allowed_types.contains(mime_type)
    }

    /// [`progress_tick_interval_ms`](Self::progress_tick_interval_ms) as a [`Duration`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.progress_tick_interval_ms))
    }

    /// [`finalize_delay_ms`](Self::finalize_delay_ms) as a [`Duration`].
    #[must_use]
    pub fn finalize_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.finalize_delay_ms))
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_ALLOWED_TYPES
                .iter()
                .map(|t| (*t).to_owned())
                .collect(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            progress_tick_interval_ms: 50,
            progress_step: 2,
            finalize_delay_ms: 500,
        }
    }
}

/// Metadata of a file chosen by the user.
///
/// Only what the platform file handle reports is kept; the file
/// contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name as reported by the browser (no path).
    pub name: String,
    /// MIME type as reported by the browser. Empty when unknown.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl SelectedFile {
    /// Create a new file description.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// Current phase of the upload flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    /// Waiting for a file.
    #[default]
    Idle,
    /// Simulated upload in progress.
    Uploading {
        /// Progress percentage, `0..=100`.
        progress: u8,
        /// The accepted file, shown once verification completes.
        file: SelectedFile,
    },
    /// Verification finished; the result view is showing.
    Complete {
        /// The verified file.
        file: SelectedFile,
    },
}

impl FlowState {
    /// Whether an upload is currently running.
    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }

    /// Progress percentage while uploading, `None` otherwise.
    #[must_use]
    pub const fn progress(&self) -> Option<u8> {
        match self {
            Self::Uploading { progress, .. } => Some(*progress),
            Self::Idle | Self::Complete { .. } => None,
        }
    }

    /// The step indicator position that corresponds to this state.
    #[must_use]
    pub const fn step(&self) -> StepIndicator {
        match self {
            Self::Idle => StepIndicator::at(Step::Upload),
            Self::Uploading { .. } => StepIndicator::at(Step::Verify),
            Self::Complete { .. } => StepIndicator::at(Step::Results),
        }
    }
}

/// Reasons a selected file is rejected.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFile {
    /// The MIME type is not in [`UploadConfig::allowed_types`].
    #[error("Please upload a PDF, JPEG, or PNG file")]
    UnsupportedType {
        /// The rejected MIME type.
        mime_type: String,
    },

    /// The file is larger than [`UploadConfig::max_file_size_bytes`].
    #[error("File size exceeds {} limit", size_limit_label(.max_bytes))]
    TooLarge {
        /// Size of the rejected file.
        size_bytes: u64,
        /// The configured limit.
        max_bytes: u64,
    },
}

/// Short label for a size limit: `"10MB"`, `"512KB"` or `"1000 bytes"`.
///
/// Picks the largest binary unit that divides the limit exactly.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn size_limit_label(max_bytes: &u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    match *max_bytes {
        0 => "0 bytes".to_owned(),
        n if n % MIB == 0 => format!("{}MB", n / MIB),
        n if n % KIB == 0 => format!("{}KB", n / KIB),
        n => format!("{n} bytes"),
    }
}

/// Errors reported to the user when a selection cannot start an upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The selection contained no files.
    #[error("No file selected")]
    NoFileSelected,

    /// The first selected file failed validation.
    #[error(transparent)]
    InvalidFile(#[from] InvalidFile),
}
