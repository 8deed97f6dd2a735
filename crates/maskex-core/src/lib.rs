//! Maskex Core Library
//!
//! Core functionality for extracting alpha masks from an image by
//! classifying pixels against picked reference colors in HSV space.

pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod image;
pub mod mask;
pub mod models;
pub mod presets;

// Re-export commonly used types
pub use color::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use image::{resize_to_height, RgbaImage};
pub use mask::{generate_mask, MaskSetCache};
pub use models::{MaskDefinition, MaskSet, PickedColor};
