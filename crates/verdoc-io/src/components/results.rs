//! Verification result view.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdCircleCheck;
use verdoc_flow::ResultView;
use verdoc_flow::report::{RESULT_HEADING, RESULT_MESSAGE, UPLOAD_ANOTHER_LABEL};

/// Props for the [`ResultPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// File details to show.
    view: ResultView,
    /// Called when "Upload Another Document" is clicked.
    on_restart: EventHandler<()>,
}

/// Success message with the verified file's name, size, and type.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let view = &props.view;

    rsx! {
        div { class: "verification-results",
            div { class: "result-icon",
                Icon { icon: LdCircleCheck, width: 56, height: 56 }
            }
            h3 { "{RESULT_HEADING}" }
            p { "{RESULT_MESSAGE}" }
            div { class: "results-details",
                p { strong { "File Name: " } "{view.file_name}" }
                p { strong { "File Size: " } "{view.size_label}" }
                p { strong { "File Type: " } "{view.mime_type}" }
            }
            button {
                class: "upload-another-btn",
                onclick: move |_| props.on_restart.call(()),
                "{UPLOAD_ANOTHER_LABEL}"
            }
        }
    }
}
