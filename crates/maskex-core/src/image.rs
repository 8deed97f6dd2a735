//! RGBA image buffer used throughout the crate.

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An RGBA image with interleaved f32 channel data in the 0.0-1.0 range.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGBA data (f32, 0.0-1.0 range), row-major
    pub data: Vec<f32>,
}

impl RgbaImage {
    /// Create an image from existing channel data.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid image dimensions: {}x{}", width, height));
        }

        let expected_len = (width as usize) * (height as usize) * CHANNELS;
        if data.len() != expected_len {
            return Err(format!(
                "Image buffer size mismatch: expected {}, got {}",
                expected_len,
                data.len()
            ));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a fully transparent image (all channels zero).
    pub fn transparent(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid image dimensions: {}x{}", width, height));
        }

        let len = (width as usize) * (height as usize) * CHANNELS;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Create an image from 8-bit interleaved RGBA bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, String> {
        let expected_len = (width as usize) * (height as usize) * CHANNELS;
        if bytes.len() != expected_len {
            return Err(format!(
                "RGBA8 buffer size mismatch: expected {}, got {}",
                expected_len,
                bytes.len()
            ));
        }

        let data: Vec<f32> = bytes.iter().map(|&v| v as f32 / 255.0).collect();
        Self::new(width, height, data)
    }

    /// Convert to 8-bit interleaved RGBA bytes, clamping to the 0.0-1.0 range.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Borrow the RGBA channels of the pixel at (x, y).
    ///
    /// Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS;
        &self.data[idx..idx + CHANNELS]
    }
}

/// Resize an image to a target height, preserving the aspect ratio.
///
/// Uses bilinear sampling. The output width is derived from the source
/// aspect ratio and never drops below one pixel.
pub fn resize_to_height(image: &RgbaImage, target_height: u32) -> Result<RgbaImage, String> {
    if target_height == 0 {
        return Err("Target height must be at least 1".to_string());
    }

    if target_height == image.height {
        return Ok(image.clone());
    }

    let aspect = image.width as f32 / image.height as f32;
    let target_width = ((aspect * target_height as f32).round() as u32).max(1);

    let src_w = image.width as usize;
    let mut data =
        Vec::with_capacity((target_width as usize) * (target_height as usize) * CHANNELS);

    for y in 0..target_height {
        // Map output pixel centers back into source coordinates
        let sy = (y as f32 + 0.5) * image.height as f32 / target_height as f32 - 0.5;
        let sy = sy.clamp(0.0, (image.height - 1) as f32);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(image.height as usize - 1);
        let fy = sy - y0 as f32;

        for x in 0..target_width {
            let sx = (x as f32 + 0.5) * image.width as f32 / target_width as f32 - 0.5;
            let sx = sx.clamp(0.0, (image.width - 1) as f32);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f32;

            let idx00 = (y0 * src_w + x0) * CHANNELS;
            let idx01 = (y0 * src_w + x1) * CHANNELS;
            let idx10 = (y1 * src_w + x0) * CHANNELS;
            let idx11 = (y1 * src_w + x1) * CHANNELS;

            for c in 0..CHANNELS {
                let top = image.data[idx00 + c] * (1.0 - fx) + image.data[idx01 + c] * fx;
                let bottom = image.data[idx10 + c] * (1.0 - fx) + image.data[idx11 + c] * fx;
                data.push(top * (1.0 - fy) + bottom * fy);
            }
        }
    }

    RgbaImage::new(target_width, target_height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(RgbaImage::new(0, 4, vec![]).is_err());
        assert!(RgbaImage::new(4, 0, vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_bad_buffer_length() {
        assert!(RgbaImage::new(2, 2, vec![0.0; 15]).is_err());
        assert!(RgbaImage::new(2, 2, vec![0.0; 16]).is_ok());
    }

    #[test]
    fn test_rgba8_roundtrip() {
        let bytes: Vec<u8> = vec![255, 0, 0, 255, 0, 0, 255, 128];
        let image = RgbaImage::from_rgba8(2, 1, &bytes).unwrap();

        assert!((image.pixel(0, 0)[0] - 1.0).abs() < 1e-6);
        assert!((image.pixel(1, 0)[2] - 1.0).abs() < 1e-6);
        assert_eq!(image.to_rgba8(), bytes);
    }

    #[test]
    fn test_resize_preserves_aspect() {
        let image = RgbaImage::transparent(200, 100).unwrap();
        let resized = resize_to_height(&image, 50).unwrap();
        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);

        // Extreme downscale never collapses to zero width
        let tall = RgbaImage::transparent(1, 100).unwrap();
        let resized = resize_to_height(&tall, 10).unwrap();
        assert_eq!(resized.width, 1);
    }

    #[test]
    fn test_resize_same_height_is_identity() {
        let mut image = RgbaImage::transparent(3, 2).unwrap();
        image.data[0] = 0.7;
        let resized = resize_to_height(&image, 2).unwrap();
        assert_eq!(resized, image);
    }

    #[test]
    fn test_resize_uniform_image_stays_uniform() {
        let width = 8;
        let height = 6;
        let data = vec![0.25; width * height * CHANNELS];
        let image = RgbaImage::new(width as u32, height as u32, data).unwrap();

        let resized = resize_to_height(&image, 3).unwrap();
        assert!(resized.data.iter().all(|&v| (v - 0.25).abs() < 1e-6));
    }
}
