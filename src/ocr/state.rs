use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phases of one OCR run, in execution order. Each phase is a
/// precondition for the next; the first failure jumps straight to
/// `Failed`. No phase is retried.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RunPhase {
    Probing,
    ResolvingImage,
    ValidatingInput,
    Running,
    Succeeded,
    Failed,
}

impl RunPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Succeeded | RunPhase::Failed)
    }
}

/// Terminal failure of one orchestrator phase. Every variant has
/// already been reported to the log stream by the time it is returned;
/// the orchestrator only maps it to the `Failed` phase.
#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("container runtime not found")]
    RuntimeMissing,
    #[error("image build exited with status {0}")]
    BuildFailed(i32),
    #[error("input is not an existing PDF file")]
    InvalidInput,
    #[error("ocr run exited with status {0}")]
    OcrFailed(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_two_phases_are_terminal() {
        assert!(RunPhase::Succeeded.is_terminal());
        assert!(RunPhase::Failed.is_terminal());
        for phase in [
            RunPhase::Probing,
            RunPhase::ResolvingImage,
            RunPhase::ValidatingInput,
            RunPhase::Running,
        ] {
            assert!(!phase.is_terminal());
        }
    }

    #[test]
    fn phases_serialize_camel_case_for_the_webview() {
        assert_eq!(
            serde_json::to_string(&RunPhase::ResolvingImage).unwrap(),
            "\"resolvingImage\""
        );
        assert_eq!(
            serde_json::to_string(&RunPhase::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn build_failure_carries_the_exit_status() {
        assert_eq!(
            PhaseError::BuildFailed(2).to_string(),
            "image build exited with status 2"
        );
    }
}
