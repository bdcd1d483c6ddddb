//! Parallel bulk operations using Rayon.
//!
//! Buffers are split into [`CHUNK_SIZE`] slices that run the sequential entry
//! points on the Rayon pool, so results are identical to the sequential
//! versions.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_formats::{L16, Rgba32};
//! use pixfmt_ops::parallel;
//!
//! let src = vec![Rgba32::new(255, 255, 255, 255); 1920 * 4];
//! let mut dst = vec![L16::default(); src.len()];
//! parallel::convert(&src, &mut dst).unwrap();
//! assert!(dst.iter().all(|p| p.l == 65535));
//! ```

use pixfmt_core::{Result, ensure_min_len, ensure_same_len};
use rayon::prelude::*;
use tracing::trace;

use crate::PixelOps;
use crate::composite::Blender;
use crate::convert::CHUNK_SIZE;

/// Parallel [`crate::convert`].
pub fn convert<S: PixelOps, D: PixelOps>(source: &[S], destination: &mut [D]) -> Result<()> {
    ensure_same_len("destination", source.len(), destination.len())?;
    trace!(from = S::NAME, to = D::NAME, count = source.len(), "parallel convert");

    destination
        .par_chunks_mut(CHUNK_SIZE)
        .zip(source.par_chunks(CHUNK_SIZE))
        .try_for_each(|(dst, src)| crate::convert(src, dst))
}

/// Parallel [`Blender::blend`].
pub fn blend<P: PixelOps, S: PixelOps>(
    blender: &Blender,
    destination: &mut [P],
    background: &[P],
    source: &[S],
    amount: f32,
) -> Result<()> {
    let count = destination.len();
    ensure_min_len("background", count, background.len())?;
    ensure_min_len("source", count, source.len())?;
    trace!(?blender, count, "parallel blend");

    destination
        .par_chunks_mut(CHUNK_SIZE)
        .zip(background[..count].par_chunks(CHUNK_SIZE))
        .zip(source[..count].par_chunks(CHUNK_SIZE))
        .try_for_each(|((dst, bg), src)| blender.blend(dst, bg, src, amount))
}

/// Parallel [`Blender::blend_per_pixel`].
pub fn blend_per_pixel<P: PixelOps, S: PixelOps>(
    blender: &Blender,
    destination: &mut [P],
    background: &[P],
    source: &[S],
    amounts: &[f32],
) -> Result<()> {
    let count = destination.len();
    ensure_min_len("background", count, background.len())?;
    ensure_min_len("source", count, source.len())?;
    ensure_min_len("amounts", count, amounts.len())?;
    trace!(?blender, count, "parallel blend_per_pixel");

    destination
        .par_chunks_mut(CHUNK_SIZE)
        .zip(background[..count].par_chunks(CHUNK_SIZE))
        .zip(source[..count].par_chunks(CHUNK_SIZE))
        .zip(amounts[..count].par_chunks(CHUNK_SIZE))
        .try_for_each(|(((dst, bg), src), a)| blender.blend_per_pixel(dst, bg, src, a))
}
