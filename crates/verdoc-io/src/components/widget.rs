//! The complete upload widget.

use dioxus::prelude::*;
use verdoc_flow::{SelectedFile, Surface, UploadConfig};

use crate::components::{ProgressPanel, ResultPanel, StepBar, UploadZone};
use crate::driver::use_flow_driver;

/// Props for the [`VerifyWidget`] component.
#[derive(Props, Clone, PartialEq)]
pub struct VerifyWidgetProps {
    /// Flow configuration. Read once, on first render.
    #[props(default)]
    config: UploadConfig,
}

/// Step bar plus either the drop zone or the progress/result surface.
#[component]
pub fn VerifyWidget(props: VerifyWidgetProps) -> Element {
    let driver = use_flow_driver(props.config);
    let view = driver.view();

    rsx! {
        section { class: "verify-widget",
            StepBar { indicator: view.step }

            if view.surface == Surface::Intake {
                UploadZone {
                    picker_generation: view.picker_generation,
                    on_select: move |files: Vec<SelectedFile>| driver.select(&files),
                }
            } else {
                div { class: "progress-container",
                    if let Some(ref results) = view.results {
                        ResultPanel {
                            view: results.clone(),
                            on_restart: move |()| driver.restart(),
                        }
                    } else {
                        ProgressPanel {
                            progress: view.progress,
                            width: view.progress_width(),
                            status: view.status.clone(),
                            on_reset: move |()| driver.reset(),
                        }
                    }
                }
            }
        }
    }
}
