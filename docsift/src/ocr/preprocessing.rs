use crate::config::OcrConfig;
use crate::error::{DocsiftError, Result};
use crate::models::FormatFamily;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

/// Decode image bytes and normalise them for the OCR engine.
///
/// 1. Decodes with format sniffing (falls back to the content, not the name)
/// 2. Rejects images below the configured minimum dimension
/// 3. Downscales images above the maximum dimension, keeping aspect ratio
/// 4. Converts to grayscale and stretches contrast
///
/// Returns PNG bytes.
pub fn preprocess_image(bytes: &[u8], config: &OcrConfig) -> Result<Vec<u8>> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DocsiftError::decode(FormatFamily::Image, format!("read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| DocsiftError::decode(FormatFamily::Image, format!("decode image: {e}")))?;

    let (width, height) = img.dimensions();
    if width < config.min_image_dimension || height < config.min_image_dimension {
        return Err(DocsiftError::decode(
            FormatFamily::Image,
            format!(
                "image too small: {}x{}, minimum {}x{}",
                width, height, config.min_image_dimension, config.min_image_dimension
            ),
        ));
    }

    let img = resize_if_needed(img, config.max_image_dimension);
    let gray = enhance_contrast(img.to_luma8());

    let mut output = Vec::new();
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| DocsiftError::decode(FormatFamily::Image, format!("encode image: {e}")))?;

    Ok(output)
}

/// Lanczos3 downscale so neither side exceeds `max_dim`.
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

    let new_width = ((width as f32 * ratio) as u32).max(1);
    let new_height = ((height as f32 * ratio) as u32).max(1);

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

/// Histogram stretch: darkest pixel maps to 0, lightest to 255.
fn enhance_contrast(gray: image::GrayImage) -> image::GrayImage {
    let (min_val, max_val) = gray
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));

    // flat image
    if max_val <= min_val {
        return gray;
    }

    let range = (max_val - min_val) as f32;
    image::GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let value = gray.get_pixel(x, y)[0];
        let normalized = (value - min_val) as f32 / range;
        image::Luma([(normalized * 255.0) as u8])
    })
}
