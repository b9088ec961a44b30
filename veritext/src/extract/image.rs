use super::ExtractedText;
use crate::config::OcrConfig;
use crate::error::Result;
use crate::ocr::{preprocess_image, OcrProvider};

pub struct ImageExtractor;

impl ImageExtractor {
    /// Extract text from an image using OCR.
    ///
    /// # Arguments
    /// * `bytes` - Raw image bytes (PNG, JPEG, etc.)
    /// * `ocr_provider` - OCR provider instance for text extraction
    /// * `config` - OCR configuration for preprocessing
    pub async fn extract(
        bytes: &[u8],
        ocr_provider: &OcrProvider,
        config: &OcrConfig,
    ) -> Result<ExtractedText> {
        let processed = preprocess_image(bytes, config)?;
        let text = ocr_provider.ocr(&processed).await?;

        Ok(ExtractedText { text, pages: 1 })
    }
}
