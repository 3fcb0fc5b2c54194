//! Simulated verification progress bar.

use dioxus::prelude::*;

/// Props for the [`ProgressPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProgressPanelProps {
    /// Fill percentage, `0..=100`.
    progress: u8,
    /// Fill width, e.g. `"42%"`.
    width: String,
    /// Status line under the bar.
    status: String,
    /// Called when "Start Over" is clicked.
    on_reset: EventHandler<()>,
}

/// Progress bar with a status line and a reset control.
#[component]
pub fn ProgressPanel(props: ProgressPanelProps) -> Element {
    rsx! {
        div { class: "progress-panel",
            div {
                class: "progress-track",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{props.progress}",
                div {
                    class: "progress-bar",
                    style: "width: {props.width}",
                }
            }
            p { class: "progress-status", "{props.status}" }
            button {
                class: "reset-btn",
                onclick: move |_| props.on_reset.call(()),
                "Start Over"
            }
        }
    }
}
