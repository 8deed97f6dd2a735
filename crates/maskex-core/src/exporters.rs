//! Mask exporters
//!
//! Generated masks save as 8-bit RGBA PNG, the only format whose alpha
//! channel carries the classification result losslessly enough for reuse
//! as a texture mask.

use std::path::Path;

use crate::image::RgbaImage;

/// Export an image to an RGBA8 PNG file.
pub fn export_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;

    png_writer
        .write_image_data(&image.to_rgba8())
        .map_err(|e| format!("Failed to write PNG image: {}", e))?;

    png_writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG stream: {}", e))
}
