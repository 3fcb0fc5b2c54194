//! Document drop zone with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use verdoc_flow::SelectedFile;

/// Extensions offered by the file picker. Validation itself goes by
/// MIME type.
const PICKER_ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

/// Describe picked or dropped files by name, MIME type, and size.
fn describe(files: &[FileData]) -> Vec<SelectedFile> {
    files
        .iter()
        .map(|f| SelectedFile::new(f.name(), f.content_type().unwrap_or_default(), f.size()))
        .collect()
}

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Called with every file of a pick or drop, possibly none.
    on_select: EventHandler<Vec<SelectedFile>>,
    /// Changing this remounts the file input, clearing its selection.
    picker_generation: u32,
}

/// A drag-and-drop zone with a "Browse Files" button.
///
/// The zone highlights while a drag hovers over it. Both paths hand
/// the file descriptions to `on_select` without reading any contents.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut dragging = use_signal(|| false);

    let handle_files = move |evt: FormEvent| {
        props.on_select.call(describe(&evt.files()));
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        dragging.set(false);
        props.on_select.call(describe(&evt.files()));
    };

    let zone_class = if dragging() {
        "upload-area dragging"
    } else {
        "upload-area"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            div { class: "upload-icon",
                Icon { icon: LdUpload, width: 48, height: 48 }
            }

            h3 { "Drag & drop your document here" }
            p { class: "upload-or", "or" }

            label { class: "browse-btn",
                input {
                    key: "{props.picker_generation}",
                    r#type: "file",
                    accept: PICKER_ACCEPT,
                    class: "hidden",
                    onchange: handle_files,
                }
                "Browse Files"
            }

            p { class: "upload-hint",
                "Supported formats: PDF, JPEG, PNG (max 10MB)"
            }
        }
    }
}
