use crate::config::OcrConfig;
use crate::error::{Result, VeritextError};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

/// Preprocess image bytes for OCR.
///
/// Validates dimensions against the configured limits, downscales oversized
/// images while keeping the aspect ratio, converts to grayscale, and
/// re-encodes as PNG for the OCR engine.
///
/// The minimum dimension defaults low (10px) so thin cropped text strips
/// still get OCRed; raise `OCR_MIN_DIMENSION` to reject small scans earlier.
pub fn preprocess_image(bytes: &[u8], config: &OcrConfig) -> Result<Vec<u8>> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| VeritextError::Processing(format!("Failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| VeritextError::Processing(format!("Failed to decode image: {e}")))?;

    let (width, height) = img.dimensions();
    if width < config.min_image_dimension || height < config.min_image_dimension {
        return Err(VeritextError::Processing(format!(
            "Image too small: {}x{}, minimum {}x{}",
            width, height, config.min_image_dimension, config.min_image_dimension
        )));
    }

    let img = resize_if_needed(img, config.max_image_dimension);
    let img = img.grayscale();

    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| VeritextError::Processing(format!("Failed to encode image: {e}")))?;

    Ok(output)
}

/// Resize the image if it exceeds the maximum dimension, keeping aspect ratio.
fn resize_if_needed(img: DynamicImage, max_dim: u32) -> DynamicImage {
    let (width, height) = img.dimensions();

    if width <= max_dim && height <= max_dim {
        return img;
    }

    let ratio = if width > height {
        max_dim as f32 / width as f32
    } else {
        max_dim as f32 / height as f32
    };

    let new_width = (width as f32 * ratio) as u32;
    let new_height = (height as f32 * ratio) as u32;

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}
