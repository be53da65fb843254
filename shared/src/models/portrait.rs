//! Embedded profile images
//!
//! Employee portraits are carried inline as `data:` URLs, the same shape a
//! browser file reader produces. This module validates and (de)constructs
//! that representation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::ImageFormat;
use thiserror::Error;

/// Maximum decoded image size (5MB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image formats
const SUPPORTED_FORMATS: &[ImageFormat] =
    &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP];

/// Portrait validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortraitError {
    #[error("image is not a base64 data URL")]
    MalformedDataUrl,

    #[error("image payload is not valid base64")]
    InvalidBase64,

    #[error("image size should be less than 5MB")]
    TooLarge { size: usize },

    #[error("only JPEG, PNG and WebP images are accepted")]
    UnsupportedFormat,
}

/// Decode and validate a `data:image/...;base64,` URL.
///
/// Returns the decoded payload bytes. The size cap is checked before the
/// format sniff, so an oversized file reports the size error even when its
/// content is a perfectly valid image.
pub fn decode(data_url: &str) -> Result<Vec<u8>, PortraitError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(PortraitError::MalformedDataUrl)?;
    let (_mime, payload) = rest
        .split_once(";base64,")
        .ok_or(PortraitError::MalformedDataUrl)?;
    let bytes = BASE64
        .decode(payload)
        .map_err(|_| PortraitError::InvalidBase64)?;
    sniff(&bytes)?;
    Ok(bytes)
}

/// Validate raw image bytes and wrap them as a data URL.
///
/// Used when attaching a portrait from a local file.
pub fn encode(bytes: &[u8]) -> Result<String, PortraitError> {
    let format = sniff(bytes)?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        BASE64.encode(bytes)
    ))
}

/// Size cap + magic-byte format check
fn sniff(bytes: &[u8]) -> Result<ImageFormat, PortraitError> {
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(PortraitError::TooLarge { size: bytes.len() });
    }
    let format = image::guess_format(bytes).map_err(|_| PortraitError::UnsupportedFormat)?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(PortraitError::UnsupportedFormat);
    }
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::new(1, 1);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn round_trips_a_valid_png() {
        let bytes = tiny_png();
        let url = encode(&bytes).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode(&url).unwrap(), bytes);
    }

    #[test]
    fn rejects_oversized_image_with_size_error() {
        // A 6MB buffer with a PNG signature: the size check fires first.
        let mut bytes = tiny_png();
        bytes.resize(6 * 1024 * 1024, 0);
        assert!(matches!(
            encode(&bytes),
            Err(PortraitError::TooLarge { size }) if size == 6 * 1024 * 1024
        ));
    }

    #[test]
    fn rejects_unsupported_format() {
        // GIF magic bytes: a real image format, just not an accepted one.
        let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00";
        assert_eq!(encode(gif), Err(PortraitError::UnsupportedFormat));
    }

    #[test]
    fn rejects_non_data_urls() {
        assert_eq!(
            decode("https://example.com/a.png"),
            Err(PortraitError::MalformedDataUrl)
        );
        assert_eq!(
            decode("data:image/png;base64,@@@not-base64@@@"),
            Err(PortraitError::InvalidBase64)
        );
    }
}
