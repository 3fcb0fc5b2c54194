//! Three-step progress indicator above the widget.

use dioxus::prelude::*;
use verdoc_flow::{Step, StepIndicator};

/// Props for the [`StepBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StepBarProps {
    /// Which step is current.
    indicator: StepIndicator,
}

/// Row of numbered step markers. Markers up to and including the
/// current step carry the `active` class.
#[component]
pub fn StepBar(props: StepBarProps) -> Element {
    let current = props.indicator.current();

    rsx! {
        ol { class: "steps",
            for (step, active) in props.indicator.markers() {
                {render_marker(step, active, step == current)}
            }
        }
    }
}

/// Render a single step marker.
fn render_marker(step: Step, active: bool, is_current: bool) -> Element {
    let class = if active { "step active" } else { "step" };
    let aria_current = if is_current { "step" } else { "false" };
    let number = step.index() + 1;

    rsx! {
        li {
            class: "{class}",
            "aria-current": "{aria_current}",
            span { class: "step-number", "{number}" }
            span { class: "step-label", "{step}" }
        }
    }
}
