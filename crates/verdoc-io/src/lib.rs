//! verdoc-io: Browser I/O and Dioxus component library.
//!
//! Applies the effects produced by `verdoc-flow` to the page: runs the
//! progress timers, shows blocking notifications, and provides the
//! upload zone, progress panel, result panel, and step bar components.

pub mod components;
pub mod driver;
pub mod notify;
pub mod view;

pub use components::{DropGuard, ProgressPanel, ResultPanel, StepBar, UploadZone, VerifyWidget};
pub use driver::{FlowDriver, use_flow_driver};
pub use view::{HostCommand, ViewModel};
