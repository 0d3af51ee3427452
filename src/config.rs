//! Fixed configuration for one run.
//!
//! Image identity, the build descriptor, and the OCR language never
//! change at runtime. They live in one struct constructed at startup so
//! every consumer receives them explicitly instead of reading globals.

/// Content of the generated build descriptor: an ocrmypdf toolchain
/// with Spanish language data, ocrmypdf as the container entrypoint.
pub const DOCKERFILE_CONTENT: &str = "\
FROM ubuntu:22.04
ENV DEBIAN_FRONTEND=noninteractive

RUN apt-get update && apt-get install -y \\
    ocrmypdf \\
    tesseract-ocr \\
    tesseract-ocr-spa \\
    ghostscript \\
    qpdf \\
    unpaper \\
    && apt-get clean && rm -rf /var/lib/apt/lists/*

ENTRYPOINT [\"ocrmypdf\"]";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub image_base: &'static str,
    pub image_version: &'static str,
    pub dockerfile_name: &'static str,
    pub dockerfile_content: &'static str,
    pub ocr_language: &'static str,
    pub output_suffix: &'static str,
    pub runtime_download_url: &'static str,
}

impl RunConfig {
    /// `name:version` reference for the image this app builds and runs.
    pub fn image_tag(&self) -> String {
        format!("{}:{}", self.image_base, self.image_version)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            image_base: "ocrmypdf-spanish",
            image_version: "1.0",
            dockerfile_name: "Dockerfile",
            dockerfile_content: DOCKERFILE_CONTENT,
            ocr_language: "spa",
            output_suffix: "_text",
            runtime_download_url: "https://www.docker.com/products/docker-desktop/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_tag_is_base_and_version() {
        assert_eq!(RunConfig::default().image_tag(), "ocrmypdf-spanish:1.0");
    }

    #[test]
    fn descriptor_declares_the_ocr_toolchain() {
        assert!(DOCKERFILE_CONTENT.starts_with("FROM ubuntu:22.04"));
        assert!(DOCKERFILE_CONTENT.contains("ocrmypdf"));
        assert!(DOCKERFILE_CONTENT.contains("tesseract-ocr-spa"));
        assert!(DOCKERFILE_CONTENT.ends_with("ENTRYPOINT [\"ocrmypdf\"]"));
    }
}
