use dioxus::prelude::*;
use verdoc_flow::UploadConfig;
use verdoc_io::{DropGuard, VerifyWidget};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// A page header around the upload widget. All flow state lives inside
/// [`VerifyWidget`]; the configuration is fixed at startup. The whole
/// page sits in a [`DropGuard`] so a stray drop never replaces it.
fn app() -> Element {
    rsx! {
        // Static stylesheet for the widget and page chrome.
        style { dangerous_inner_html: include_str!("../assets/verdoc.css") }

        DropGuard { class: "page",
            header { class: "page-header",
                h1 { class: "title-brand", "verdoc" }
                p { class: "subtitle",
                    "Upload a document to check it before you submit it"
                }
            }

            main { class: "page-main",
                VerifyWidget { config: UploadConfig::default() }
            }

            footer { class: "page-footer",
                p { "Files never leave your browser." }
            }
        }
    }
}
