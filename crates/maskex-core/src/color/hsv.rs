//! HSV (Hue-Saturation-Value) color space conversions

/// HSV color representation
/// - H (hue): 0.0-1.0 (fraction of the full hue circle)
/// - S (saturation): 0.0-1.0
/// - V (value): 0.0-1.0
///
/// Hue is kept in the 0-1 range so that all three channels share the same
/// scale when computing weighted distances between colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Convert RGB to HSV
///
/// Input: RGB values in range 0.0-1.0
/// Output: HSV with all components in 0.0-1.0
#[inline]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Value
    let v = max;

    // Achromatic case
    if delta < 1e-6 {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    // Saturation
    let s = delta / max;

    // Hue, in sixths of the circle
    let h6 = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < 1e-6 {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv {
        h: (h6 / 6.0) % 1.0,
        s,
        v,
    }
}

/// Convert HSV to RGB
///
/// Input: HSV with all components in 0.0-1.0
/// Output: RGB values in range 0.0-1.0
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
    let Hsv { h, s, v } = hsv;
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    // Achromatic case
    if s < 1e-6 {
        return (v, v, v);
    }

    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
