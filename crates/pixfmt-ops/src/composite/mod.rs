//! Porter-Duff compositing with color blend modes.
//!
//! A [`Blender`] is the pair ([`ColorBlendingMode`], [`AlphaCompositionMode`])
//! resolved once into a monomorphized per-pixel kernel. Batch entry points
//! unpack backdrop and source through the bulk dispatcher into bounded scaled
//! vector buffers, run the kernel, and pack into the destination format.
//!
//! # Per-pixel law
//!
//! 1. Source alpha is multiplied by the opacity (clamped to `[0, 1]`, NaN is 0).
//! 2. If the effective source alpha is zero, the result is the backdrop
//!    (except for [`AlphaCompositionMode::Clear`], which is always transparent
//!    black, and [`AlphaCompositionMode::Xor`] over a transparent backdrop,
//!    which is transparent black too).
//! 3. The blend mode mixes backdrop and source colors.
//! 4. The operator weights backdrop, source and the blended color by their
//!    coverage and un-premultiplies by the resulting alpha.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::Vector4;
//! use pixfmt_ops::composite::{AlphaCompositionMode, ColorBlendingMode, get_blender};
//!
//! let blender = get_blender(ColorBlendingMode::Normal, AlphaCompositionMode::SrcOver);
//! let red = Vector4::new(1.0, 0.0, 0.0, 1.0);
//! let green = Vector4::new(0.0, 1.0, 0.0, 1.0);
//! let mixed = blender.blend_vector(red, green, 0.5);
//! assert!((mixed - Vector4::new(0.5, 0.5, 0.0, 1.0)).abs().max_element() < 1e-6);
//! ```

mod modes;
mod options;
mod porter_duff;

use std::fmt;

use pixfmt_core::numerics::clamp_unit;
use pixfmt_core::{PixelConversionModifiers, Result, Vector4, ensure_min_len};
use pixfmt_formats::Pixel;
#[allow(unused_imports)]
use tracing::{debug, trace};

pub use modes::{AlphaCompositionMode, ColorBlendingMode};
pub use options::BlendOptions;

use crate::PixelOps;
use crate::convert::CHUNK_SIZE;
use porter_duff::{BlendKernel, resolve_kernel};

/// Resolves the blender for a mode pair.
///
/// Every one of the 108 combinations is valid.
pub fn get_blender(color: ColorBlendingMode, alpha: AlphaCompositionMode) -> Blender {
    Blender {
        color,
        alpha,
        kernel: resolve_kernel(color, alpha),
    }
}

/// Opacity for one element of a batch.
#[derive(Clone, Copy)]
enum Amounts<'a> {
    Uniform(f32),
    PerPixel(&'a [f32]),
}

impl Amounts<'_> {
    #[inline]
    fn at(&self, index: usize) -> f32 {
        match self {
            Self::Uniform(amount) => *amount,
            Self::PerPixel(amounts) => clamp_unit(amounts[index]),
        }
    }

    fn slice(self, start: usize, len: usize) -> Self {
        match self {
            Self::Uniform(_) => self,
            Self::PerPixel(amounts) => Self::PerPixel(&amounts[start..start + len]),
        }
    }
}

/// A resolved blend mode and composition operator.
#[derive(Clone, Copy)]
pub struct Blender {
    color: ColorBlendingMode,
    alpha: AlphaCompositionMode,
    kernel: BlendKernel,
}

impl Blender {
    /// The color blend mode.
    pub fn color_blending_mode(&self) -> ColorBlendingMode {
        self.color
    }

    /// The composition operator.
    pub fn alpha_composition_mode(&self) -> AlphaCompositionMode {
        self.alpha
    }

    /// Blends one pair of scaled canonical vectors.
    #[inline]
    pub fn blend_vector(&self, backdrop: Vector4, source: Vector4, amount: f32) -> Vector4 {
        (self.kernel)(backdrop, source, clamp_unit(amount))
    }

    /// Blends one pixel, returning the result in the backdrop's format.
    #[inline]
    pub fn blend_pixel<P: Pixel, S: Pixel>(&self, backdrop: P, source: S, amount: f32) -> P {
        P::from_scaled_vector4(self.blend_vector(
            backdrop.to_scaled_vector4(),
            source.to_scaled_vector4(),
            amount,
        ))
    }

    /// Blends `source` onto `background` with one opacity, writing
    /// `destination`.
    ///
    /// `background` and `source` must be at least as long as `destination`;
    /// extra elements are ignored.
    pub fn blend<P: PixelOps, S: PixelOps>(
        &self,
        destination: &mut [P],
        background: &[P],
        source: &[S],
        amount: f32,
    ) -> Result<()> {
        self.blend_pixels(destination, background, source, Amounts::Uniform(clamp_unit(amount)))
    }

    /// Like [`blend`](Self::blend) with one opacity per destination pixel.
    pub fn blend_per_pixel<P: PixelOps, S: PixelOps>(
        &self,
        destination: &mut [P],
        background: &[P],
        source: &[S],
        amounts: &[f32],
    ) -> Result<()> {
        ensure_min_len("amounts", destination.len(), amounts.len())?;
        self.blend_pixels(destination, background, source, Amounts::PerPixel(amounts))
    }

    /// Blends `source` onto `destination` in place.
    pub fn blend_in_place<P: PixelOps, S: PixelOps>(
        &self,
        destination: &mut [P],
        source: &[S],
        amount: f32,
    ) -> Result<()> {
        let count = destination.len();
        ensure_min_len("source", count, source.len())?;
        trace!(
            color = %self.color,
            alpha = %self.alpha,
            backdrop = P::NAME,
            source = S::NAME,
            count,
            "blend_in_place"
        );

        let amount = clamp_unit(amount);
        let (mut backdrop, mut src) = chunk_buffers(count);
        for (dst, s) in destination
            .chunks_mut(CHUNK_SIZE)
            .zip(source.chunks(CHUNK_SIZE))
        {
            let n = dst.len();
            let (backdrop, src) = (&mut backdrop[..n], &mut src[..n]);
            P::operations().to_vector4(dst, backdrop, PixelConversionModifiers::SCALE)?;
            S::operations().to_vector4(&s[..n], src, PixelConversionModifiers::SCALE)?;
            for (b, s) in backdrop.iter_mut().zip(src.iter()) {
                *b = (self.kernel)(*b, *s, amount);
            }
            P::operations().from_vector4_destructive(backdrop, dst, PixelConversionModifiers::SCALE)?;
        }
        Ok(())
    }

    /// Blends scaled canonical vectors with one opacity.
    pub fn blend_vectors(
        &self,
        destination: &mut [Vector4],
        background: &[Vector4],
        source: &[Vector4],
        amount: f32,
    ) -> Result<()> {
        self.blend_vector_slices(destination, background, source, Amounts::Uniform(clamp_unit(amount)))
    }

    /// Blends scaled canonical vectors with one opacity per element.
    pub fn blend_vectors_per_pixel(
        &self,
        destination: &mut [Vector4],
        background: &[Vector4],
        source: &[Vector4],
        amounts: &[f32],
    ) -> Result<()> {
        ensure_min_len("amounts", destination.len(), amounts.len())?;
        self.blend_vector_slices(destination, background, source, Amounts::PerPixel(amounts))
    }

    fn blend_vector_slices(
        &self,
        destination: &mut [Vector4],
        background: &[Vector4],
        source: &[Vector4],
        amounts: Amounts<'_>,
    ) -> Result<()> {
        let count = destination.len();
        ensure_min_len("background", count, background.len())?;
        ensure_min_len("source", count, source.len())?;
        trace!(color = %self.color, alpha = %self.alpha, count, "blend_vectors");

        for (i, ((d, b), s)) in destination
            .iter_mut()
            .zip(background)
            .zip(source)
            .enumerate()
        {
            *d = (self.kernel)(*b, *s, amounts.at(i));
        }
        Ok(())
    }

    fn blend_pixels<P: PixelOps, S: PixelOps>(
        &self,
        destination: &mut [P],
        background: &[P],
        source: &[S],
        amounts: Amounts<'_>,
    ) -> Result<()> {
        let count = destination.len();
        ensure_min_len("background", count, background.len())?;
        ensure_min_len("source", count, source.len())?;
        trace!(
            color = %self.color,
            alpha = %self.alpha,
            backdrop = P::NAME,
            source = S::NAME,
            count,
            "blend"
        );

        let backdrop_ops = P::operations();
        let source_ops = S::operations();
        let (mut backdrop, mut src) = chunk_buffers(count);
        for (chunk, dst) in destination.chunks_mut(CHUNK_SIZE).enumerate() {
            let start = chunk * CHUNK_SIZE;
            let n = dst.len();
            let (backdrop, src) = (&mut backdrop[..n], &mut src[..n]);
            backdrop_ops.to_vector4(
                &background[start..start + n],
                backdrop,
                PixelConversionModifiers::SCALE,
            )?;
            source_ops.to_vector4(&source[start..start + n], src, PixelConversionModifiers::SCALE)?;

            let amounts = amounts.slice(start, n);
            for (i, (b, s)) in backdrop.iter_mut().zip(src.iter()).enumerate() {
                *b = (self.kernel)(*b, *s, amounts.at(i));
            }
            backdrop_ops.from_vector4_destructive(backdrop, dst, PixelConversionModifiers::SCALE)?;
        }
        Ok(())
    }
}

/// Two scratch buffers sized for at most one chunk.
fn chunk_buffers(count: usize) -> (Vec<Vector4>, Vec<Vector4>) {
    let len = count.min(CHUNK_SIZE);
    (vec![Vector4::ZERO; len], vec![Vector4::ZERO; len])
}

impl fmt::Debug for Blender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blender")
            .field("color", &self.color)
            .field("alpha", &self.alpha)
            .finish()
    }
}

impl PartialEq for Blender {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.alpha == other.alpha
    }
}

impl Eq for Blender {}
