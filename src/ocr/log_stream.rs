use serde::Serialize;
use tauri::{AppHandle, Emitter};

/// Event the Status Window listens on for log lines.
pub const LOG_EVENT: &str = "ocr-log";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogLineEvent {
    line: String,
}

/// Append-only log owned by the Status Window.
///
/// Producers push lines; the webview renders them in arrival order and
/// never hands them back. Emitting goes through the Tauri event system,
/// which marshals onto the webview's event loop, so the worker never
/// touches UI state directly. Lines are mirrored to the debug log for
/// terminal runs.
#[derive(Clone)]
pub struct LogStream {
    app_handle: AppHandle,
}

impl LogStream {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }

    pub fn line(&self, text: impl Into<String>) {
        let line = text.into();
        log::debug!("-> {line}");
        let _ = self.app_handle.emit(LOG_EVENT, LogLineEvent { line });
    }
}
