#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: drag and drop a PDF onto this executable.";

/// Accept exactly one positional argument, the PDF path.
fn pdf_arg(mut args: impl Iterator<Item = OsString>) -> Option<PathBuf> {
    match (args.next(), args.next()) {
        (Some(path), None) => Some(PathBuf::from(path)),
        _ => None,
    }
}

fn main() -> ExitCode {
    match pdf_arg(env::args_os().skip(1)) {
        Some(pdf_file) => {
            ocrdock_lib::run(pdf_file);
            ExitCode::SUCCESS
        }
        None => {
            println!("{USAGE}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = OsString> {
        values
            .iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn accepts_exactly_one_argument() {
        assert_eq!(
            pdf_arg(args(&["/tmp/doc.pdf"])),
            Some(PathBuf::from("/tmp/doc.pdf"))
        );
    }

    #[test]
    fn rejects_zero_arguments() {
        assert_eq!(pdf_arg(args(&[])), None);
    }

    #[test]
    fn rejects_extra_arguments() {
        assert_eq!(pdf_arg(args(&["a.pdf", "b.pdf"])), None);
    }
}
