//! Color space conversions
//!
//! Provides RGB <-> HSV conversion used by the pixel classifier.

mod hsv;

#[cfg(test)]
mod tests;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
