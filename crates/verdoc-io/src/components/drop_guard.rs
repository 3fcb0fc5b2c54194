//! Page-wide guard against the browser's default file drop handling.

use dioxus::prelude::*;

/// Props for the [`DropGuard`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropGuardProps {
    /// Extra classes for the wrapping element.
    #[props(default)]
    class: String,
    children: Element,
}

/// Wraps its children and cancels every drag event that reaches it.
///
/// Without this, a file released outside the [`UploadZone`] is opened
/// by the browser in place of the page. The zone stops propagation of
/// its own drops, so files dropped on it never reach the guard.
///
/// [`UploadZone`]: crate::components::UploadZone
#[component]
pub fn DropGuard(props: DropGuardProps) -> Element {
    rsx! {
        div {
            class: "{props.class}",
            ondragenter: move |evt| evt.prevent_default(),
            ondragover: move |evt| evt.prevent_default(),
            ondragleave: move |evt| evt.prevent_default(),
            ondrop: move |evt| evt.prevent_default(),
            {props.children}
        }
    }
}
