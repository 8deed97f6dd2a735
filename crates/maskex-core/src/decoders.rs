//! Image decoders
//!
//! PNG decoding into the RGBA float buffer. Alpha is preserved when the
//! source carries it; opaque alpha is synthesized otherwise.

use std::path::Path;

use crate::image::RgbaImage;
use crate::verbose_println;

/// Decode an image from a file path.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => decode_png(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// Decode a PNG file
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Allocate buffer for image data
    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;

    // Get the actual bytes used
    let bytes = &buf[..frame_info.buffer_size()];

    verbose_println!(
        "[maskex] Decoded PNG: {}x{}, {:?} {:?}",
        width,
        height,
        color_type,
        bit_depth
    );

    // Convert to f32 RGBA
    let data = match (color_type, bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            decode_gray8(bytes, width, height)?
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            decode_gray16(bytes, width, height)?
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            decode_gray_alpha8(bytes, width, height)?
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => decode_rgb8(bytes, width, height)?,
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => decode_rgb16(bytes, width, height)?,
        (png::ColorType::Rgba, png::BitDepth::Eight) => decode_rgba8(bytes, width, height)?,
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => decode_rgba16(bytes, width, height)?,
        (png::ColorType::Indexed, _) => {
            return Err("Indexed PNG not supported".to_string());
        }
        _ => {
            return Err(format!(
                "Unsupported PNG format: {:?} with bit depth {:?}",
                color_type, bit_depth
            ));
        }
    };

    RgbaImage::new(width, height, data)
}

fn check_len(bytes: &[u8], expected: usize) -> Result<(), String> {
    if bytes.len() != expected {
        return Err(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected,
            bytes.len()
        ));
    }
    Ok(())
}

/// Decode 8-bit grayscale, expanding to opaque RGBA
fn decode_gray8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height) as usize)?;

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for &gray in bytes {
        let val = gray as f32 / 255.0;
        data.push(val);
        data.push(val);
        data.push(val);
        data.push(1.0);
    }

    Ok(data)
}

/// Decode 16-bit grayscale, expanding to opaque RGBA
fn decode_gray16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height * 2) as usize)?;

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    // PNG 16-bit is big-endian
    for chunk in bytes.chunks_exact(2) {
        let gray16 = u16::from_be_bytes([chunk[0], chunk[1]]);
        let val = gray16 as f32 / 65535.0;
        data.push(val);
        data.push(val);
        data.push(val);
        data.push(1.0);
    }

    Ok(data)
}

/// Decode 8-bit grayscale+alpha
fn decode_gray_alpha8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height * 2) as usize)?;

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for ga in bytes.chunks_exact(2) {
        let val = ga[0] as f32 / 255.0;
        data.push(val);
        data.push(val);
        data.push(val);
        data.push(ga[1] as f32 / 255.0);
    }

    Ok(data)
}

/// Decode 8-bit RGB, synthesizing opaque alpha
fn decode_rgb8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height * 3) as usize)?;

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for rgb in bytes.chunks_exact(3) {
        data.push(rgb[0] as f32 / 255.0);
        data.push(rgb[1] as f32 / 255.0);
        data.push(rgb[2] as f32 / 255.0);
        data.push(1.0);
    }

    Ok(data)
}

/// Decode 16-bit RGB, synthesizing opaque alpha
fn decode_rgb16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height * 3 * 2) as usize)?;

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    // PNG 16-bit is big-endian
    for rgb in bytes.chunks_exact(6) {
        let r = u16::from_be_bytes([rgb[0], rgb[1]]);
        let g = u16::from_be_bytes([rgb[2], rgb[3]]);
        let b = u16::from_be_bytes([rgb[4], rgb[5]]);
        data.push(r as f32 / 65535.0);
        data.push(g as f32 / 65535.0);
        data.push(b as f32 / 65535.0);
        data.push(1.0);
    }

    Ok(data)
}

/// Decode 8-bit RGBA
fn decode_rgba8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height * 4) as usize)?;

    Ok(bytes.iter().map(|&v| v as f32 / 255.0).collect())
}

/// Decode 16-bit RGBA
fn decode_rgba16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<f32>, String> {
    check_len(bytes, (width * height * 4 * 2) as usize)?;

    // PNG 16-bit is big-endian
    Ok(bytes
        .chunks_exact(2)
        .map(|chunk| {
            let val16 = u16::from_be_bytes([chunk[0], chunk[1]]);
            val16 as f32 / 65535.0
        })
        .collect())
}
