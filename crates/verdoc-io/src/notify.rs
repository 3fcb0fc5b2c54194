//! Blocking user notifications and console warnings.
//!
//! Rejections are reported with `window.alert()`. When the browser
//! window is unavailable the notification is skipped and a console
//! warning is logged instead; nothing here is fatal.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;

/// Errors that can occur when showing a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for NotifyError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Show `message` in a blocking `window.alert()` dialog.
///
/// # Errors
///
/// Returns [`NotifyError::JsError`] if there is no global window or the
/// browser refuses to show the dialog.
pub fn alert(message: &str) -> Result<(), NotifyError> {
    let window =
        web_sys::window().ok_or_else(|| NotifyError::JsError("no global window".into()))?;
    window.alert_with_message(message)?;
    Ok(())
}

/// Notify the user, falling back to a console warning.
pub fn notify(message: &str) {
    if let Err(e) = alert(message) {
        warn(&format!("notification skipped ({e}): {message}"));
    }
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
