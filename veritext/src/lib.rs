pub mod config;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod pipeline;
pub mod validate;
