//! Vectorized strategies for 8-bit formats.
//!
//! An "Rgba32-compatible" format is one whose scaled and native vectors
//! coincide and whose `from_scaled_vector4(v)` equals
//! `from_rgba32(Rgba32::from_scaled_vector4(v))`: the byte-order formats,
//! `L8`, `La16` and `A8`. For those, bulk vector conversion can go through a
//! stack buffer of [`Rgba32`] and the `wide` byte/float kernels in
//! [`pixfmt_core::simd`], which run the scalar quantization law lane by lane.

use std::marker::PhantomData;

use pixfmt_core::{PixelConversionModifiers, Result, Vector4, ensure_same_len, simd};
use pixfmt_formats::{Pixel, Rgba32};
use tracing::trace;

use crate::operations::{PixelOperations, apply_modifiers, undo_modifiers};

/// Pixels staged per [`Rgba32`] stack buffer.
const STAGING_LEN: usize = 256;

/// Strategy for formats that convert losslessly through [`Rgba32`].
pub struct RgbaCompatibleOperations<P>(PhantomData<fn() -> P>);

impl<P> RgbaCompatibleOperations<P> {
    /// Creates the strategy.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> Default for RgbaCompatibleOperations<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pixel> PixelOperations<P> for RgbaCompatibleOperations<P> {
    fn to_vector4(
        &self,
        source: &[P],
        destination: &mut [Vector4],
        modifiers: PixelConversionModifiers,
    ) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(format = P::NAME, count = source.len(), ?modifiers, "to_vector4 (simd)");

        let mut staging = [Rgba32::default(); STAGING_LEN];
        for (src, dst) in source
            .chunks(STAGING_LEN)
            .zip(destination.chunks_mut(STAGING_LEN))
        {
            let staging = &mut staging[..src.len()];
            for (t, s) in staging.iter_mut().zip(src) {
                *t = s.to_rgba32();
            }
            simd::rgba_bytes_to_vectors(bytemuck::cast_slice(&*staging), dst)?;
        }
        apply_modifiers(destination, modifiers);
        Ok(())
    }

    fn from_vector4_destructive(
        &self,
        source: &mut [Vector4],
        destination: &mut [P],
        modifiers: PixelConversionModifiers,
    ) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(format = P::NAME, count = source.len(), ?modifiers, "from_vector4 (simd)");

        undo_modifiers(source, modifiers);
        let mut staging = [Rgba32::default(); STAGING_LEN];
        for (src, dst) in source
            .chunks(STAGING_LEN)
            .zip(destination.chunks_mut(STAGING_LEN))
        {
            let staging = &mut staging[..src.len()];
            simd::vectors_to_rgba_bytes(src, bytemuck::cast_slice_mut(staging))?;
            for (d, t) in dst.iter_mut().zip(staging.iter()) {
                *d = P::from_rgba32(*t);
            }
        }
        Ok(())
    }
}

/// Strategy for [`Rgba32`] itself: the pixel buffer is already the byte
/// stream the kernels consume.
#[derive(Default)]
pub struct Rgba32Operations;

impl Rgba32Operations {
    /// Creates the strategy.
    pub const fn new() -> Self {
        Self
    }
}

impl PixelOperations<Rgba32> for Rgba32Operations {
    fn to_vector4(
        &self,
        source: &[Rgba32],
        destination: &mut [Vector4],
        modifiers: PixelConversionModifiers,
    ) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(count = source.len(), ?modifiers, "Rgba32 to_vector4 (simd)");

        simd::rgba_bytes_to_vectors(bytemuck::cast_slice(source), destination)?;
        apply_modifiers(destination, modifiers);
        Ok(())
    }

    fn from_vector4_destructive(
        &self,
        source: &mut [Vector4],
        destination: &mut [Rgba32],
        modifiers: PixelConversionModifiers,
    ) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(count = source.len(), ?modifiers, "Rgba32 from_vector4 (simd)");

        undo_modifiers(source, modifiers);
        simd::vectors_to_rgba_bytes(source, bytemuck::cast_slice_mut(destination))
    }

    fn to_rgba32(&self, source: &[Rgba32], destination: &mut [Rgba32]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        destination.copy_from_slice(source);
        Ok(())
    }

    fn from_rgba32(&self, source: &[Rgba32], destination: &mut [Rgba32]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        destination.copy_from_slice(source);
        Ok(())
    }
}
