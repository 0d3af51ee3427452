//! Container runtime lookup.

/// Executable name of the container runtime expected on PATH.
pub const RUNTIME_PROGRAM: &str = "docker";

/// True iff the container runtime resolves on the system PATH.
/// No side effects, no version check.
pub fn runtime_available() -> bool {
    which::which(RUNTIME_PROGRAM).is_ok()
}
