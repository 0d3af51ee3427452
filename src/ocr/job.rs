//! Path derivation for one OCR run.

use std::ffi::OsStr;
use std::path::{self, Path, PathBuf};

use super::state::PhaseError;

/// Where the input directory is mounted inside the container.
pub const MOUNT_POINT: &str = "/data";

/// Input/output paths derived from the single input file. Both files
/// live in the same directory, which becomes the container mount.
#[derive(Debug, Clone)]
pub struct OcrJob {
    pub output_path: PathBuf,
    pub mount_dir: PathBuf,
    pub input_name: String,
    pub output_name: String,
}

impl OcrJob {
    /// Validate `input` and derive the paths for one run. The input
    /// must exist as a file and carry a `.pdf` extension in any case.
    pub fn prepare(input: &Path, output_suffix: &str) -> Result<Self, PhaseError> {
        if !input.is_file() || !is_pdf(input) {
            return Err(PhaseError::InvalidInput);
        }

        let input_path = path::absolute(input).map_err(|_| PhaseError::InvalidInput)?;
        let output_path = derive_output_path(&input_path, output_suffix);
        let mount_dir = input_path
            .parent()
            .map(Path::to_path_buf)
            .ok_or(PhaseError::InvalidInput)?;
        let input_name = file_name_of(&input_path);
        let output_name = file_name_of(&output_path);

        Ok(Self {
            output_path,
            mount_dir,
            input_name,
            output_name,
        })
    }

    /// Argument vector for the containerized run: remove the container
    /// after exit, mount the input directory, and hand the entrypoint
    /// the language flag plus mount-relative file names.
    pub fn run_args(&self, tag: &str, language: &str) -> Vec<String> {
        vec![
            "run".into(),
            "--rm".into(),
            "-v".into(),
            format!("{}:{MOUNT_POINT}", self.mount_dir.display()),
            tag.into(),
            "-l".into(),
            language.into(),
            format!("{MOUNT_POINT}/{}", self.input_name),
            format!("{MOUNT_POINT}/{}", self.output_name),
        ]
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Insert `suffix` between the file stem and the extension.
fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    match input.extension().and_then(OsStr::to_str) {
        Some(ext) => input.with_file_name(format!("{stem}{suffix}.{ext}")),
        None => input.with_file_name(format!("{stem}{suffix}")),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn output_path_inserts_the_suffix_before_the_extension() {
        assert_eq!(
            derive_output_path(Path::new("/tmp/doc.pdf"), "_text"),
            PathBuf::from("/tmp/doc_text.pdf")
        );
        assert_eq!(
            derive_output_path(Path::new("/tmp/scan.PDF"), "_text"),
            PathBuf::from("/tmp/scan_text.PDF")
        );
    }

    #[test]
    fn run_argv_mounts_the_parent_and_uses_relative_names() {
        let job = OcrJob {
            output_path: PathBuf::from("/tmp/doc_text.pdf"),
            mount_dir: PathBuf::from("/tmp"),
            input_name: "doc.pdf".into(),
            output_name: "doc_text.pdf".into(),
        };

        assert_eq!(
            job.run_args("ocrmypdf-spanish:1.0", "spa"),
            vec![
                "run",
                "--rm",
                "-v",
                "/tmp:/data",
                "ocrmypdf-spanish:1.0",
                "-l",
                "spa",
                "/data/doc.pdf",
                "/data/doc_text.pdf",
            ]
        );
    }

    #[test]
    fn prepare_accepts_any_extension_case() {
        let dir = tempdir().unwrap();
        let upper = dir.path().join("SCAN.PDF");
        fs::write(&upper, b"%PDF-").unwrap();

        let job = OcrJob::prepare(&upper, "_text").unwrap();
        assert_eq!(job.input_name, "SCAN.PDF");
        assert_eq!(job.output_name, "SCAN_text.PDF");
        assert_eq!(job.mount_dir, dir.path());
    }

    #[test]
    fn prepare_rejects_missing_files_and_other_extensions() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("doc.pdf");
        assert!(matches!(
            OcrJob::prepare(&missing, "_text"),
            Err(PhaseError::InvalidInput)
        ));

        let text = dir.path().join("notes.txt");
        fs::write(&text, b"hello").unwrap();
        assert!(matches!(
            OcrJob::prepare(&text, "_text"),
            Err(PhaseError::InvalidInput)
        ));
    }
}
