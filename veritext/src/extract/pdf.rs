use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::ExtractedText;
use crate::config::OcrConfig;
use crate::error::{Result, VeritextError};
use crate::ocr::OcrProvider;

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text from a PDF by rasterizing each page and OCRing it.
    ///
    /// Pages are rendered with poppler's `pdftoppm` at the configured DPI and
    /// processed in page order. Non-blank page texts are joined with a single
    /// newline; the result is trimmed as a whole.
    pub async fn extract(
        path: &Path,
        ocr_provider: &OcrProvider,
        config: &OcrConfig,
    ) -> Result<ExtractedText> {
        let path = path.to_path_buf();
        let dpi = config.pdf_render_dpi;

        // pdftoppm and the page-file reads are blocking I/O.
        let page_images =
            tokio::task::spawn_blocking(move || rasterize_pages(&path, dpi))
                .await
                .map_err(|e| VeritextError::Render(format!("Render task panicked: {e}")))??;

        let page_count = page_images.len();
        debug!(pages = page_count, "Rasterized PDF");

        let mut page_texts = Vec::with_capacity(page_count);
        for image_bytes in &page_images {
            let text = ocr_provider.ocr(image_bytes).await?;
            page_texts.push(text);
        }

        Ok(ExtractedText {
            text: join_pages(&page_texts),
            pages: page_count,
        })
    }
}

/// Render every page of the PDF to a grayscale PNG, returning the encoded
/// page images in page order.
fn rasterize_pages(path: &Path, dpi: u32) -> Result<Vec<Vec<u8>>> {
    let dir = tempfile::tempdir().map_err(|e| {
        VeritextError::Render(format!("Failed to create render directory: {e}"))
    })?;
    let prefix = dir.path().join("page");

    let output = Command::new("pdftoppm")
        .arg("-r")
        .arg(dpi.to_string())
        .arg("-gray")
        .arg("-png")
        .arg(path)
        .arg(&prefix)
        .output()
        .map_err(|e| VeritextError::Render(format!("pdftoppm is unavailable: {e}")))?;

    if !output.status.success() {
        return Err(VeritextError::Render(format!(
            "pdftoppm failed with status {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let mut page_files: Vec<PathBuf> = std::fs::read_dir(dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
        .collect();
    sort_by_page_number(&mut page_files);

    page_files
        .iter()
        .map(|p| std::fs::read(p).map_err(VeritextError::from))
        .collect()
}

/// Order page files by the numeric page suffix pdftoppm appends
/// (`page-1.png`, `page-2.png`, ... `page-10.png`).
fn sort_by_page_number(files: &mut [PathBuf]) {
    files.sort_by_key(|p| page_number(p).unwrap_or(usize::MAX));
}

fn page_number(path: &Path) -> Option<usize> {
    let stem = path.file_stem()?.to_str()?;
    let digits = stem.rsplit('-').next()?;
    digits.parse().ok()
}

/// Join per-page OCR texts with a single newline, skipping blank pages.
fn join_pages(page_texts: &[String]) -> String {
    page_texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_with_newline_separator() {
        let pages = vec!["Page1".to_string(), "Page2".to_string()];
        assert_eq!(join_pages(&pages), "Page1\nPage2");
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let pages = vec![
            "First".to_string(),
            "   ".to_string(),
            String::new(),
            "Last".to_string(),
        ];
        assert_eq!(join_pages(&pages), "First\nLast");
    }

    #[test]
    fn test_join_pages_all_blank_is_empty() {
        let pages = vec![String::new(), "  \n ".to_string()];
        assert_eq!(join_pages(&pages), "");
    }

    #[test]
    fn test_join_pages_trims_page_texts() {
        let pages = vec!["  Page1  ".to_string(), "\nPage2\n".to_string()];
        assert_eq!(join_pages(&pages), "Page1\nPage2");
    }

    #[test]
    fn test_sort_by_page_number_is_numeric() {
        let mut files = vec![
            PathBuf::from("/tmp/x/page-10.png"),
            PathBuf::from("/tmp/x/page-2.png"),
            PathBuf::from("/tmp/x/page-1.png"),
        ];
        sort_by_page_number(&mut files);
        assert_eq!(
            files,
            vec![
                PathBuf::from("/tmp/x/page-1.png"),
                PathBuf::from("/tmp/x/page-2.png"),
                PathBuf::from("/tmp/x/page-10.png"),
            ]
        );
    }

    #[test]
    fn test_page_number_handles_zero_padding() {
        assert_eq!(page_number(Path::new("/tmp/x/page-01.png")), Some(1));
        assert_eq!(page_number(Path::new("/tmp/x/page-12.png")), Some(12));
        assert_eq!(page_number(Path::new("/tmp/x/notapage.png")), None);
    }
}
