//! Child process launch and line relay.

use tauri::AppHandle;
use tauri_plugin_shell::process::CommandEvent;
use tauri_plugin_shell::ShellExt;

use crate::ocr::LogStream;

/// Sentinel exit code when the child could not be launched or read.
pub const LAUNCH_FAILURE_CODE: i32 = -1;

/// Run `program` with `args`, relaying every output line to the log
/// stream, and return the child's exit code.
///
/// stdout and stderr are merged into a single stream of newline-split
/// events; lines reach the window in the order the child emitted them.
/// Launch and read failures are logged as a single line and mapped to
/// [`LAUNCH_FAILURE_CODE`] so the caller's sequence can finish and
/// report its status.
pub async fn stream_process(
    app: &AppHandle,
    log: &LogStream,
    program: &str,
    args: &[String],
    label: &str,
) -> i32 {
    log.line(format!("--- {label} ---"));

    let command = app.shell().command(program).args(args);
    let (mut events, _child) = match command.spawn() {
        Ok(spawned) => spawned,
        Err(err) => {
            log.line(format!("Error running {label}: {err}"));
            return LAUNCH_FAILURE_CODE;
        }
    };

    let mut exit_code = LAUNCH_FAILURE_CODE;
    while let Some(event) = events.recv().await {
        match event {
            CommandEvent::Stdout(line) | CommandEvent::Stderr(line) => {
                log.line(String::from_utf8_lossy(&line).trim().to_string());
            }
            CommandEvent::Error(err) => {
                log.line(format!("Error running {label}: {err}"));
            }
            CommandEvent::Terminated(status) => {
                exit_code = status.code.unwrap_or(LAUNCH_FAILURE_CODE);
            }
            _ => {}
        }
    }

    exit_code
}
