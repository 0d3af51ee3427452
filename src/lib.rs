mod config;
mod container;
mod ocr;

use std::path::PathBuf;

use anyhow::Context;
use log::info;
use tauri::{Manager, RunEvent};

use config::RunConfig;
use ocr::commands::{current_phase, frontend_ready, run_summary};
use ocr::OcrController;

pub(crate) struct AppState {
    pub(crate) config: RunConfig,
    pub(crate) pdf_file: PathBuf,
    pub(crate) ocr: OcrController,
}

pub fn run(pdf_file: PathBuf) {
    // Default to info; RUST_LOG overrides (debug mirrors the window log)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("ocrdock starting up for {}", pdf_file.display());

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            let result = (|| -> anyhow::Result<()> {
                let config = RunConfig::default();

                if let Some(window) = app.get_webview_window("main") {
                    let name = pdf_file
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| pdf_file.display().to_string());
                    window
                        .set_title(&format!("{name} - OCRmyPDF (Docker)"))
                        .context("failed to set window title")?;
                }

                // The worker starts when the webview reports its event
                // listeners are in place (`frontend_ready`), so no log
                // line can be emitted before the window can show it.
                let controller = OcrController::new(app.handle().clone());

                app.manage(AppState {
                    config,
                    pdf_file,
                    ocr: controller,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            frontend_ready,
            run_summary,
            current_phase
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app_handle, event| {
        // The build descriptor is removed however the UI loop ends,
        // not just on a successful run.
        if let RunEvent::Exit = event {
            container::descriptor::cleanup();
        }
    });
}
