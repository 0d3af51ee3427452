//! The orchestrator: one background task that probes the environment,
//! resolves the image, validates the input, and runs the containerized
//! OCR, pushing every line of output to the Status Window.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tauri_plugin_opener::OpenerExt;

use crate::config::RunConfig;
use crate::container::{self, RUNTIME_PROGRAM};

use super::controller::OcrController;
use super::job::OcrJob;
use super::log_stream::LogStream;
use super::state::{PhaseError, RunPhase};

/// Pause between the final log line and the completion dialog, so the
/// window paints the result before the modal takes focus.
const COMPLETION_DIALOG_DELAY: Duration = Duration::from_millis(100);

pub async fn run_pipeline(controller: OcrController, config: RunConfig, pdf_file: PathBuf) {
    let log = LogStream::new(controller.app_handle().clone());
    log.line("Initializing...");

    match run_phases(&controller, &log, &config, &pdf_file).await {
        Ok(output_path) => {
            controller.set_phase(RunPhase::Succeeded);
            info!("ocr run succeeded: {}", output_path.display());

            tokio::time::sleep(COMPLETION_DIALOG_DELAY).await;
            show_completion_dialog(&controller);
        }
        Err(err) => {
            controller.set_phase(RunPhase::Failed);
            info!("ocr run failed: {err}");
        }
    }
}

/// The linear phase sequence. Each phase logs its own outcome; the
/// first error short-circuits and the window stays open on the log.
async fn run_phases(
    controller: &OcrController,
    log: &LogStream,
    config: &RunConfig,
    pdf_file: &Path,
) -> Result<PathBuf, PhaseError> {
    let app = controller.app_handle();

    controller.set_phase(RunPhase::Probing);
    probe_runtime(controller, log, config)?;

    controller.set_phase(RunPhase::ResolvingImage);
    container::ensure_image(app, log, config).await?;

    controller.set_phase(RunPhase::ValidatingInput);
    let job = validate_input(log, pdf_file, config)?;

    controller.set_phase(RunPhase::Running);
    run_ocr(controller, log, config, &job).await?;

    Ok(job.output_path)
}

fn probe_runtime(
    controller: &OcrController,
    log: &LogStream,
    config: &RunConfig,
) -> Result<(), PhaseError> {
    if container::runtime_available() {
        log.line("Docker found.");
        return Ok(());
    }

    log.line("Docker not found. Opening download page...");
    if let Err(err) = controller
        .app_handle()
        .opener()
        .open_url(config.runtime_download_url, None::<&str>)
    {
        log.line(format!("Could not open browser: {err}"));
    }
    Err(PhaseError::RuntimeMissing)
}

fn validate_input(
    log: &LogStream,
    pdf_file: &Path,
    config: &RunConfig,
) -> Result<OcrJob, PhaseError> {
    OcrJob::prepare(pdf_file, config.output_suffix).map_err(|err| {
        log.line("Invalid PDF file.");
        err
    })
}

async fn run_ocr(
    controller: &OcrController,
    log: &LogStream,
    config: &RunConfig,
    job: &OcrJob,
) -> Result<(), PhaseError> {
    let tag = config.image_tag();
    log.line(format!("Running OCR on: {}", job.input_name));

    let code = container::stream_process(
        controller.app_handle(),
        log,
        RUNTIME_PROGRAM,
        &job.run_args(&tag, config.ocr_language),
        &format!("OCR using {tag}"),
    )
    .await;

    if code == 0 {
        log.line(format!(
            "✅ OCR complete.\nOutput saved as:\n{}",
            job.output_path.display()
        ));
        Ok(())
    } else {
        log.line("❌ OCR failed.");
        Err(PhaseError::OcrFailed(code))
    }
}

/// Modal acknowledgment shown on success; acknowledging it exits the
/// application. The dialog plugin presents on the UI thread.
fn show_completion_dialog(controller: &OcrController) {
    let app_handle = controller.app_handle().clone();
    controller
        .app_handle()
        .dialog()
        .message("OCR terminé avec succès.")
        .title("Terminé")
        .kind(MessageDialogKind::Info)
        .show(move |_| app_handle.exit(0));
}
