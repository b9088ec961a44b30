//! Per-file dispatch and directory traversal.
//!
//! All per-file outcomes are terminal console lines; extraction and API
//! failures are reported and contained so that traversal of the remaining
//! files always continues.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::OcrConfig;
use crate::error::Result;
use crate::extract::{ExtractedText, ImageExtractor, PdfExtractor};
use crate::ocr::OcrProvider;
use crate::validate::{ValidationClient, ValidationOutcome};

/// How many characters of extracted text to show in the console preview.
const PREVIEW_CHARS: usize = 200;

/// Supported input kinds, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" => Some(FileKind::Image),
            "pdf" => Some(FileKind::Pdf),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "PDF",
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of the text, with the truncation marker
/// appended unconditionally.
pub fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

/// Process a single file: dispatch by extension, extract, report, validate.
///
/// Every outcome is printed; nothing is returned to the caller and no failure
/// escapes, so sibling files are never affected.
pub async fn process_file(
    path: &Path,
    ocr_provider: &OcrProvider,
    config: &OcrConfig,
    client: &ValidationClient,
) {
    let Some(kind) = FileKind::from_path(path) else {
        println!("[SKIP] Unsupported file type: {}", path.display());
        return;
    };

    let extracted = match extract(path, kind, ocr_provider, config).await {
        Ok(extracted) => extracted,
        Err(e) => {
            eprintln!(
                "[ERROR] Could not process {} {}: {e}",
                kind.label(),
                path.display()
            );
            ExtractedText {
                text: String::new(),
                pages: 0,
            }
        }
    };

    if extracted.is_empty() {
        println!("[INFO] No text extracted.");
        return;
    }

    let base_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(
        file = %base_name,
        pages = extracted.pages,
        words = extracted.word_count(),
        "Extraction complete"
    );
    println!(
        "\nExtracted text from {}:\n{}\n",
        base_name,
        preview(&extracted.text)
    );

    match client.validate(&extracted.text).await {
        Ok(ValidationOutcome::Passed) => println!("✅ Validation successful! Status: 200"),
        Ok(ValidationOutcome::Rejected(code)) => {
            println!("❌ Validation failed. Status: {code}")
        }
        Err(e) => eprintln!("[ERROR] API request failed: {e}"),
    }
}

async fn extract(
    path: &Path,
    kind: FileKind,
    ocr_provider: &OcrProvider,
    config: &OcrConfig,
) -> Result<ExtractedText> {
    match kind {
        FileKind::Image => {
            let bytes = tokio::fs::read(path).await?;
            ImageExtractor::extract(&bytes, ocr_provider, config).await
        }
        FileKind::Pdf => PdfExtractor::extract(path, ocr_provider, config).await,
    }
}

/// Recursively process every file under the root, one at a time, in
/// filesystem traversal order.
pub async fn process_folder(
    root: &Path,
    ocr_provider: &OcrProvider,
    config: &OcrConfig,
    client: &ValidationClient,
) {
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                process_file(entry.path(), ocr_provider, config, client).await;
            }
            Ok(_) => {}
            Err(e) => eprintln!("[ERROR] Could not read directory entry: {e}"),
        }
    }
}
