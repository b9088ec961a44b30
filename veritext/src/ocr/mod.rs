//! OCR (Optical Character Recognition) Module
//!
//! Image text extraction for the veritext pipeline, backed by a local
//! Tesseract engine via leptess.
//!
//! The provider degrades gracefully: when Tesseract cannot be initialized the
//! backend is marked unavailable and every OCR call returns an error, which
//! the pipeline reports per file without aborting the run.

mod preprocessing;
mod provider;

pub use preprocessing::preprocess_image;
pub use provider::OcrProvider;
