use thiserror::Error;

#[derive(Error, Debug)]
pub enum VeritextError {
    #[error("Processing error: {0}")]
    Processing(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("PDF render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, VeritextError>;
