use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tauri::async_runtime::JoinHandle;
use tauri::{AppHandle, Emitter};

use crate::config::RunConfig;

use super::state::RunPhase;
use super::worker;

/// Event the Status Window listens on for phase transitions.
pub const PHASE_EVENT: &str = "ocr-phase";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhaseChangedEvent {
    phase: RunPhase,
}

/// Drives one OCR run on a single background task and reports to the
/// webview through events.
///
/// There is no cancellation: the task either runs to completion or is
/// abandoned when the process exits. Closing the window mid-run leaves
/// an in-flight container child unmanaged.
#[derive(Clone)]
pub struct OcrController {
    app_handle: AppHandle,
    phase: Arc<Mutex<Option<RunPhase>>>,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl OcrController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            phase: Arc::new(Mutex::new(None)),
            worker: Arc::new(Mutex::new(None)),
        }
    }

    /// Spawn the background worker for `pdf_file`. A webview reload
    /// re-signals readiness; the run must not restart, so a second call
    /// is a no-op. The handle is retained but never joined.
    pub fn start(&self, config: RunConfig, pdf_file: PathBuf) {
        let mut guard = self.worker.lock().unwrap();
        if guard.is_some() {
            return;
        }

        let controller = self.clone();
        *guard = Some(tauri::async_runtime::spawn(worker::run_pipeline(
            controller, config, pdf_file,
        )));
    }

    pub fn current_phase(&self) -> Option<RunPhase> {
        *self.phase.lock().unwrap()
    }

    pub(crate) fn app_handle(&self) -> &AppHandle {
        &self.app_handle
    }

    /// Record and broadcast a phase transition.
    pub(crate) fn set_phase(&self, phase: RunPhase) {
        *self.phase.lock().unwrap() = Some(phase);
        let _ = self.app_handle.emit(PHASE_EVENT, PhaseChangedEvent { phase });
    }
}
