//! Dioxus UI components for verdoc.
//!
//! Provides the page-wide drop guard, the drop zone with file picker, the progress panel, the
//! verification result panel, the step bar, and the widget that wires
//! them to the upload flow.

mod drop_guard;
mod progress;
mod results;
mod steps;
mod upload;
mod widget;

pub use drop_guard::DropGuard;
pub use progress::ProgressPanel;
pub use results::ResultPanel;
pub use steps::StepBar;
pub use upload::UploadZone;
pub use widget::VerifyWidget;
