//! Per-pixel HSV-distance mask classification.

use crate::color::rgb_to_hsv;
use crate::image::RgbaImage;
use crate::models::{MaskDefinition, PickedColor};

use super::parallel::{fill_pixels, for_each_pixel_pair};

/// Generate a mask image for one definition.
///
/// Every pixel of the output is either the source pixel (optionally
/// desaturated to its value channel) or fully transparent, depending on
/// whether its weighted HSV distance to any rule's reference color falls
/// within that rule's threshold. Rules are applied in order as full passes
/// over the image, so the last matching rule decides a pixel's output.
///
/// `reuse` may carry a previously generated buffer to overwrite in place;
/// a buffer of mismatched dimensions is dropped and reallocated.
///
/// A definition with an empty name produces no output (`Ok(None)`).
/// Malformed rules are rejected before any pixel work.
pub fn generate_mask(
    source: &RgbaImage,
    reuse: Option<RgbaImage>,
    definition: &MaskDefinition,
    desaturate: bool,
) -> Result<Option<RgbaImage>, String> {
    if !definition.is_active() {
        return Ok(None);
    }

    if source.width == 0 || source.height == 0 {
        return Err(format!(
            "Invalid source dimensions: {}x{}",
            source.width, source.height
        ));
    }

    definition.validate()?;

    let mut target = match reuse {
        Some(t) if t.width == source.width && t.height == source.height => t,
        _ => RgbaImage::transparent(source.width, source.height)?,
    };

    // Clear the target: unmatched pixels stay fully transparent.
    fill_pixels(&mut target.data, [0.0, 0.0, 0.0, 0.0]);

    for rule in &definition.picked_colors {
        apply_rule(source, &mut target, rule, desaturate);
    }

    Ok(Some(target))
}

/// Apply one rule as a full pass over the image.
///
/// Matched pixels are overwritten; unmatched pixels keep whatever earlier
/// rules left in place.
fn apply_rule(source: &RgbaImage, target: &mut RgbaImage, rule: &PickedColor, desaturate: bool) {
    let reference = rgb_to_hsv(rule.color[0], rule.color[1], rule.color[2]);
    let threshold_sq = rule.threshold * rule.threshold;

    for_each_pixel_pair(&source.data, &mut target.data, |src, out| {
        let hsv = rgb_to_hsv(src[0], src[1], src[2]);

        // Weighted squared distance, no sqrt per pixel. Hue is a plain
        // scalar difference: no wraparound at the 0/1 seam.
        let dh = (reference.h - hsv.h) * rule.h_coeff;
        let ds = (reference.s - hsv.s) * rule.s_coeff;
        let dv = (reference.v - hsv.v) * rule.v_coeff;
        let distance = dh * dh + ds * ds + dv * dv;

        if distance <= threshold_sq {
            if desaturate {
                out[0] = hsv.v;
                out[1] = hsv.v;
                out[2] = hsv.v;
                out[3] = src[3];
            } else {
                out.copy_from_slice(src);
            }
        }
    });
}
