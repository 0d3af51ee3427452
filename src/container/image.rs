//! On-demand image build.

use std::path::{Path, PathBuf};

use tauri::AppHandle;
use tauri_plugin_shell::ShellExt;

use crate::config::RunConfig;
use crate::ocr::{LogStream, PhaseError};

use super::{descriptor, process, RUNTIME_PROGRAM};

pub(crate) fn inspect_args(tag: &str) -> Vec<String> {
    vec!["image".into(), "inspect".into(), tag.into()]
}

pub(crate) fn build_args(tag: &str) -> Vec<String> {
    vec!["build".into(), "-t".into(), tag.into(), ".".into()]
}

/// Make sure the OCR image exists, building it from the descriptor when
/// the tag is missing.
///
/// Presence is decided by tag alone: an existing image is reused as-is,
/// with no staleness or content check. Rebuilding is slow enough that a
/// stale image is the accepted tradeoff.
pub async fn ensure_image(
    app: &AppHandle,
    log: &LogStream,
    config: &RunConfig,
) -> Result<(), PhaseError> {
    let tag = config.image_tag();
    log.line(format!("Checking for Docker image: {tag}"));

    if image_present(app, &tag).await {
        log.line(format!("Image {tag} found. Skipping build."));
        return Ok(());
    }

    log.line(format!("Image {tag} not found. Building now..."));

    match descriptor::materialize(Path::new(config.dockerfile_name), config.dockerfile_content) {
        Ok(true) => descriptor::register_cleanup(PathBuf::from(config.dockerfile_name)),
        Ok(false) => {}
        Err(err) => {
            log.line(format!("Could not write {}: {err}", config.dockerfile_name));
            return Err(PhaseError::BuildFailed(process::LAUNCH_FAILURE_CODE));
        }
    }

    let code = process::stream_process(
        app,
        log,
        RUNTIME_PROGRAM,
        &build_args(&tag),
        &format!("Building Image {tag}"),
    )
    .await;

    if code == 0 {
        Ok(())
    } else {
        log.line("Docker build failed.");
        Err(PhaseError::BuildFailed(code))
    }
}

/// `image inspect` succeeds iff the tag exists locally. Its output is
/// captured and discarded; a failure to launch counts as absent and the
/// subsequent build surfaces the real problem.
async fn image_present(app: &AppHandle, tag: &str) -> bool {
    app.shell()
        .command(RUNTIME_PROGRAM)
        .args(inspect_args(tag))
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_argv_targets_the_tag() {
        assert_eq!(
            inspect_args("ocrmypdf-spanish:1.0"),
            vec!["image", "inspect", "ocrmypdf-spanish:1.0"]
        );
    }

    #[test]
    fn build_argv_uses_the_working_directory_as_context() {
        assert_eq!(
            build_args("ocrmypdf-spanish:1.0"),
            vec!["build", "-t", "ocrmypdf-spanish:1.0", "."]
        );
    }
}
