//! verdoc-flow: the upload flow of the verdoc widget (sans-IO).
//!
//! Validates a selected document, drives a simulated progress
//! indicator, and produces the static verification result:
//!
//! idle -> uploading (0..=100%) -> settle delay -> complete
//!
//! This crate has **no browser dependencies** -- the controller
//! returns [`Effect`]s describing what the UI should do, including the
//! timers it should start and cancel. All DOM and timer interaction
//! lives in `verdoc-io`.

pub mod controller;
pub mod progress;
pub mod report;
pub mod step;
pub mod types;
pub mod validate;

pub use controller::{
    Effect, Effects, FlowEvents, ScheduledTask, Surface, TaskId, TaskKind, UploadFlowController,
};
pub use progress::ProgressPhase;
pub use report::{ResultView, format_size_kb};
pub use step::{Step, StepIndicator};
pub use types::{FlowState, InvalidFile, SelectedFile, UploadConfig, UploadError};
pub use validate::{check_selection, validate};
