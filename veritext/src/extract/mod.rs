//! Text extraction from supported input files.
//!
//! Images go straight through OCR preprocessing and the OCR engine; PDFs are
//! rasterized page by page with poppler's `pdftoppm` and each page image is
//! OCRed in page order.

pub mod image;
pub mod pdf;

pub use image::ImageExtractor;
pub use pdf::PdfExtractor;

/// Text pulled out of a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Number of pages that were OCRed (always 1 for single images).
    pub pages: usize,
}

impl ExtractedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
