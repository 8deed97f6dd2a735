//! Mask generation
//!
//! The pixel classifier and the incremental cache that sits on top of it:
//! - `classifier`: per-rule HSV-distance classification over an image
//! - `cache`: change detection and selective regeneration across edits
//! - `parallel`: threshold-dispatched pixel iteration helpers

mod cache;
mod classifier;
mod parallel;


/// Minimum number of pixels to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

pub use cache::MaskSetCache;
pub use classifier::generate_mask;
