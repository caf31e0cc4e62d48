use crate::error::AppError;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType};
use std::path::Path;

/// Longest edge sent to the backend
pub const MAX_UPLOAD_EDGE: u32 = 1024;
/// JPEG quality used for uploads
pub const UPLOAD_JPEG_QUALITY: u8 = 80;

/// Reads a picked or captured photo and returns it as plain base64 JPEG
/// (no `data:` prefix), downscaled to fit [`MAX_UPLOAD_EDGE`]
pub fn encode_image_file(path: &Path) -> Result<String, AppError> {
    let data = std::fs::read(path).map_err(|e| {
        AppError::ImageProcessing(format!("Failed to read {}: {}", path.display(), e))
    })?;
    encode_image_bytes(&data)
}

pub fn encode_image_bytes(data: &[u8]) -> Result<String, AppError> {
    let img = image::load_from_memory(data)?;
    let jpeg = to_upload_jpeg(&img)?;
    log::debug!(
        "Encoded {}x{} image into {} JPEG bytes",
        img.width(),
        img.height(),
        jpeg.len()
    );
    Ok(base64::engine::general_purpose::STANDARD.encode(jpeg))
}

/// Wraps an encoded upload into a `data:` URL for showing it in an `img`
pub fn jpeg_data_url(encoded: &str) -> String {
    format!("data:image/jpeg;base64,{}", encoded)
}

fn to_upload_jpeg(img: &DynamicImage) -> Result<Vec<u8>, AppError> {
    let (w, h) =
        calculate_resize_dimensions(img.width(), img.height(), MAX_UPLOAD_EDGE, MAX_UPLOAD_EDGE);
    let resized = if (w, h) == (img.width(), img.height()) {
        img.to_rgb8()
    } else {
        img.resize_exact(w, h, FilterType::Triangle).to_rgb8()
    };

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, UPLOAD_JPEG_QUALITY).encode(
        resized.as_raw(),
        resized.width(),
        resized.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}

/// Resize an image maintaining aspect ratio
fn calculate_resize_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    let ratio =
        (original_width as f32 / max_width as f32).max(original_height as f32 / max_height as f32);

    if ratio > 1.0 {
        let new_width = ((original_width as f32 / ratio) as u32).max(1);
        let new_height = ((original_height as f32 / ratio) as u32).max(1);
        (new_width, new_height)
    } else {
        (original_width, original_height)
    }
}
