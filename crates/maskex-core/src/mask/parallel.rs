//! Parallelization helpers for per-pixel operations
//!
//! Abstracts the pattern of conditionally executing parallel or sequential
//! code based on pixel count, so the classifier reads the same either way.

use rayon::prelude::*;

use super::PARALLEL_THRESHOLD;
use crate::image::CHANNELS;

/// Apply `f` to every (source pixel, output pixel) pair.
///
/// Both slices hold interleaved RGBA channels and must be the same length.
/// Dispatches to rayon when the pixel count reaches `PARALLEL_THRESHOLD`,
/// otherwise runs sequentially. Pixels are independent, so the result is
/// identical on either path.
pub(crate) fn for_each_pixel_pair<F>(source: &[f32], output: &mut [f32], f: F)
where
    F: Fn(&[f32], &mut [f32]) + Sync,
{
    let num_pixels = output.len() / CHANNELS;

    if num_pixels >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(CHANNELS)
            .zip(source.par_chunks_exact(CHANNELS))
            .for_each(|(out, src)| f(src, out));
    } else {
        for (out, src) in output
            .chunks_exact_mut(CHANNELS)
            .zip(source.chunks_exact(CHANNELS))
        {
            f(src, out);
        }
    }
}

/// Fill every pixel with the given RGBA channels.
pub(crate) fn fill_pixels(output: &mut [f32], value: [f32; CHANNELS]) {
    let num_pixels = output.len() / CHANNELS;

    if num_pixels >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(CHANNELS)
            .for_each(|out| out.copy_from_slice(&value));
    } else {
        for out in output.chunks_exact_mut(CHANNELS) {
            out.copy_from_slice(&value);
        }
    }
}
