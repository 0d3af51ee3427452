use serde::Serialize;
use tauri::State;

use crate::AppState;

use super::state::RunPhase;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub pdf_file: String,
    pub image_tag: String,
}

/// Signal that the Status Window has registered its event listeners.
/// Starts the orchestrator; log lines emitted earlier would be lost.
#[tauri::command]
pub fn frontend_ready(state: State<'_, AppState>) {
    state
        .ocr
        .start(state.config.clone(), state.pdf_file.clone());
}

/// Header data for the Status Window.
#[tauri::command]
pub fn run_summary(state: State<'_, AppState>) -> Result<RunSummary, String> {
    let pdf_file = state
        .pdf_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| state.pdf_file.display().to_string());

    Ok(RunSummary {
        pdf_file,
        image_tag: state.config.image_tag(),
    })
}

/// Latest orchestrator phase, `None` until the worker has started.
#[tauri::command]
pub fn current_phase(state: State<'_, AppState>) -> Result<Option<RunPhase>, String> {
    Ok(state.ocr.current_phase())
}
