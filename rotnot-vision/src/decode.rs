//! Image decoding helpers for the HTTP surface

use crate::error::{Result, VisionError};
use image::DynamicImage;

/// Decode raw image bytes into a pixel buffer.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(VisionError::Decode("No image data provided".to_string()));
    }

    image::load_from_memory(bytes)
        .map_err(|e| VisionError::Decode(format!("Could not decode image: {}", e)))
}

/// Decode a base64-encoded image, tolerating a data-URL prefix
/// (`data:image/png;base64,...`).
pub fn decode_base64_image(data: &str) -> Result<DynamicImage> {
    if data.is_empty() {
        return Err(VisionError::Decode("No image data provided".to_string()));
    }

    let payload = match data.split_once(',') {
        Some((_, rest)) => rest,
        None => data,
    };

    let bytes = base64::decode(payload)
        .map_err(|e| VisionError::Decode(format!("Invalid base64 encoding: {}", e)))?;

    decode_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_image_valid_png() {
        let image = decode_image(&png_bytes()).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn test_decode_image_garbage() {
        let err = decode_image(b"not an image").unwrap_err();
        match err {
            VisionError::Decode(msg) => assert!(msg.contains("Could not decode image")),
            _ => panic!("Expected Decode error"),
        }
    }

    #[test]
    fn test_decode_image_empty() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_base64_plain() {
        let encoded = base64::encode(png_bytes());
        assert!(decode_base64_image(&encoded).is_ok());
    }

    #[test]
    fn test_decode_base64_data_url_prefix() {
        let encoded = format!("data:image/png;base64,{}", base64::encode(png_bytes()));
        assert!(decode_base64_image(&encoded).is_ok());
    }

    #[test]
    fn test_decode_base64_invalid() {
        let err = decode_base64_image("%%%not-base64%%%").unwrap_err();
        match err {
            VisionError::Decode(msg) => assert!(msg.contains("Invalid base64")),
            _ => panic!("Expected Decode error"),
        }
    }
}
