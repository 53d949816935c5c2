// SPDX-License-Identifier: MPL-2.0
//! Display path for untrusted image URLs.
//!
//! Bytes from an arbitrary source are fully decoded here and re-emitted as
//! raw RGBA. The toolkit's own image decoder only ever receives pixels, never
//! the original container.

use crate::error::Result;

/// Fully decoded RGBA pixels.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decodes untrusted container bytes into raw RGBA.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
    let image = image_rs::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Fetches an untrusted image URL and decodes it.
pub async fn fetch(url: String) -> Result<DecodedImage> {
    let bytes = super::fetch_bytes(&url).await?;
    decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([0, 128, 255, 255]));
        let mut bytes = Vec::new();
        image_rs::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("Failed to encode test PNG");
        bytes
    }

    #[test]
    fn decodes_valid_png_to_rgba() {
        let decoded = decode(&encoded_png(3, 2)).expect("valid PNG should decode");
        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[0, 128, 255, 255]);
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = decode(b"not an image at all").unwrap_err();
        assert!(matches!(err, crate::error::Error::Image(_)));
    }

    #[test]
    fn rejects_truncated_container() {
        let mut bytes = encoded_png(8, 8);
        bytes.truncate(bytes.len() / 2);
        assert!(decode(&bytes).is_err());
    }
}
