//! Portrait ingestion.
//!
//! Uploaded images are downscaled so their longest edge fits the sheet,
//! re-encoded as JPEG, and embedded on the character as a data URL.
//! Images already small enough are never upscaled.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;

use crate::error::TableResult;

/// The longest edge a stored portrait may have, in pixels.
pub const MAX_EDGE: u32 = 400;

/// JPEG quality of the stored portrait.
const JPEG_QUALITY: u8 = 70;

/// Decode an uploaded image, cap its longest edge at [`MAX_EDGE`]
/// preserving aspect ratio, and return it as a
/// `data:image/jpeg;base64,...` string.
pub fn encode_portrait(bytes: &[u8]) -> TableResult<String> {
    let decoded = image::load_from_memory(bytes)?;
    let scaled = if decoded.width().max(decoded.height()) > MAX_EDGE {
        decoded.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        decoded
    };

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = scaled.to_rgb8();
    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgba};

    use super::*;

    /// A PNG with the given dimensions, as raw bytes.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128u8, 255u8])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// Decode the JPEG payload of a data URL back into an image.
    fn decode_data_url(url: &str) -> image::DynamicImage {
        let payload = url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let jpeg = BASE64.decode(payload).unwrap();
        image::load_from_memory(&jpeg).unwrap()
    }

    #[test]
    fn large_portrait_is_capped_preserving_aspect() {
        let url = encode_portrait(&png_bytes(800, 400)).unwrap();
        let img = decode_data_url(&url);
        assert_eq!((img.width(), img.height()), (400, 200));
    }

    #[test]
    fn tall_portrait_caps_the_height() {
        let url = encode_portrait(&png_bytes(200, 1000)).unwrap();
        let img = decode_data_url(&url);
        assert_eq!(img.height(), 400);
        assert!(img.width() <= 80);
    }

    #[test]
    fn small_portrait_is_not_upscaled() {
        let url = encode_portrait(&png_bytes(100, 50)).unwrap();
        let img = decode_data_url(&url);
        assert_eq!((img.width(), img.height()), (100, 50));
    }

    #[test]
    fn garbage_bytes_error() {
        assert!(encode_portrait(b"not an image").is_err());
    }
}
