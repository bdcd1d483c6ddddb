//! Per-format bulk operations.
//!
//! [`PixelOperations`] is the batch boundary: it is resolved once per buffer
//! as a trait object, and every provided method runs a monomorphic loop over
//! the format's [`Pixel`] codec. A format can install a specialized strategy
//! (see [`crate::rgba_compatible`]) as long as it produces exactly what the
//! per-element loop would.
//!
//! # Modifiers
//!
//! `to_vector4` unpacks (scaled when [`PixelConversionModifiers::SCALE`] is
//! set), then expands sRGB, then premultiplies. `from_vector4_destructive`
//! undoes these in reverse order before packing.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{PixelConversionModifiers, Vector4};
//! use pixfmt_formats::{Bgra5551, Pixel, Rgba32};
//! use pixfmt_ops::PixelOps;
//!
//! let pixels = [Rgba32::new(255, 0, 0, 255); 4];
//! let mut vectors = [Vector4::ZERO; 4];
//! Rgba32::operations()
//!     .to_vector4(&pixels, &mut vectors, PixelConversionModifiers::SCALE)
//!     .unwrap();
//!
//! let mut packed = [Bgra5551::default(); 4];
//! Bgra5551::operations()
//!     .from_vector4_destructive(&mut vectors, &mut packed, PixelConversionModifiers::SCALE)
//!     .unwrap();
//! assert_eq!(packed[0].packed(), 0xFC00);
//! ```

use std::marker::PhantomData;

use pixfmt_core::{
    PixelConversionModifiers, PixelTypeInfo, Result, Vector4, companding, ensure_min_len,
    ensure_same_len, vector,
};
use pixfmt_formats::{Bgr24, Bgra32, L8, Pixel, Rgb24, Rgba32};
use tracing::trace;

/// Extra destination slots [`PixelOperations::pack_from_rgb_planes`] requires
/// beyond the plane length.
pub const PLANAR_PADDING: usize = 3;

/// Bulk conversions for one pixel format.
///
/// Every method validates buffer lengths before touching any element and
/// fails with a length error on mismatch. All methods have a correct default
/// body; implementors override only where they can do better.
pub trait PixelOperations<P: Pixel>: Send + Sync {
    /// Metadata of the format these operations serve.
    fn type_info(&self) -> PixelTypeInfo {
        P::TYPE_INFO
    }

    /// Unpacks `source` into canonical vectors.
    fn to_vector4(
        &self,
        source: &[P],
        destination: &mut [Vector4],
        modifiers: PixelConversionModifiers,
    ) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(format = P::NAME, count = source.len(), ?modifiers, "to_vector4");

        if modifiers.is_scaled() {
            for (d, s) in destination.iter_mut().zip(source) {
                *d = s.to_scaled_vector4();
            }
        } else {
            for (d, s) in destination.iter_mut().zip(source) {
                *d = s.to_vector4();
            }
        }
        apply_modifiers(destination, modifiers);
        Ok(())
    }

    /// Packs canonical vectors into `destination`.
    ///
    /// `source` is used as scratch space: its contents are unspecified
    /// afterwards and must not be reused.
    fn from_vector4_destructive(
        &self,
        source: &mut [Vector4],
        destination: &mut [P],
        modifiers: PixelConversionModifiers,
    ) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(format = P::NAME, count = source.len(), ?modifiers, "from_vector4");

        undo_modifiers(source, modifiers);
        if modifiers.is_scaled() {
            for (d, s) in destination.iter_mut().zip(source.iter()) {
                *d = P::from_scaled_vector4(*s);
            }
        } else {
            for (d, s) in destination.iter_mut().zip(source.iter()) {
                *d = P::from_vector4(*s);
            }
        }
        Ok(())
    }

    /// [`to_vector4`](Self::to_vector4) with [`PixelConversionModifiers::SCALE`].
    fn to_scaled_vector4(&self, source: &[P], destination: &mut [Vector4]) -> Result<()> {
        self.to_vector4(source, destination, PixelConversionModifiers::SCALE)
    }

    /// Destructive inverse of [`to_scaled_vector4`](Self::to_scaled_vector4).
    fn from_scaled_vector4(&self, source: &mut [Vector4], destination: &mut [P]) -> Result<()> {
        self.from_vector4_destructive(source, destination, PixelConversionModifiers::SCALE)
    }

    /// Scaled, alpha-premultiplied vectors.
    fn to_premultiplied_vector4(&self, source: &[P], destination: &mut [Vector4]) -> Result<()> {
        self.to_vector4(
            source,
            destination,
            PixelConversionModifiers::PREMULTIPLY.with_scale(),
        )
    }

    /// Destructive inverse of
    /// [`to_premultiplied_vector4`](Self::to_premultiplied_vector4).
    fn from_premultiplied_vector4(
        &self,
        source: &mut [Vector4],
        destination: &mut [P],
    ) -> Result<()> {
        self.from_vector4_destructive(
            source,
            destination,
            PixelConversionModifiers::PREMULTIPLY.with_scale(),
        )
    }

    /// Scaled vectors with the sRGB curve removed (linear light).
    fn to_companded_vector4(&self, source: &[P], destination: &mut [Vector4]) -> Result<()> {
        self.to_vector4(source, destination, PixelConversionModifiers::SRGB_COMPAND)
    }

    /// Destructive inverse of [`to_companded_vector4`](Self::to_companded_vector4).
    fn from_companded_vector4(&self, source: &mut [Vector4], destination: &mut [P]) -> Result<()> {
        self.from_vector4_destructive(source, destination, PixelConversionModifiers::SRGB_COMPAND)
    }

    /// Converts to [`Rgba32`].
    fn to_rgba32(&self, source: &[P], destination: &mut [Rgba32]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(format = P::NAME, count = source.len(), "to_rgba32");
        for (d, s) in destination.iter_mut().zip(source) {
            *d = s.to_rgba32();
        }
        Ok(())
    }

    /// Converts from [`Rgba32`].
    fn from_rgba32(&self, source: &[Rgba32], destination: &mut [P]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        trace!(format = P::NAME, count = source.len(), "from_rgba32");
        for (d, s) in destination.iter_mut().zip(source) {
            *d = P::from_rgba32(*s);
        }
        Ok(())
    }

    /// Converts to [`Bgra32`].
    fn to_bgra32(&self, source: &[P], destination: &mut [Bgra32]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = Bgra32::from_rgba32(s.to_rgba32());
        }
        Ok(())
    }

    /// Converts from [`Bgra32`].
    fn from_bgra32(&self, source: &[Bgra32], destination: &mut [P]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = P::from_bgra32(*s);
        }
        Ok(())
    }

    /// Converts to [`Rgb24`], dropping alpha.
    fn to_rgb24(&self, source: &[P], destination: &mut [Rgb24]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = Rgb24::from_rgba32(s.to_rgba32());
        }
        Ok(())
    }

    /// Converts from [`Rgb24`] with full opacity.
    fn from_rgb24(&self, source: &[Rgb24], destination: &mut [P]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = P::from_rgb24(*s);
        }
        Ok(())
    }

    /// Converts to [`Bgr24`], dropping alpha.
    fn to_bgr24(&self, source: &[P], destination: &mut [Bgr24]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = Bgr24::from_rgba32(s.to_rgba32());
        }
        Ok(())
    }

    /// Converts from [`Bgr24`] with full opacity.
    fn from_bgr24(&self, source: &[Bgr24], destination: &mut [P]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = P::from_bgr24(*s);
        }
        Ok(())
    }

    /// Converts to 8-bit luminance.
    fn to_l8(&self, source: &[P], destination: &mut [L8]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = L8::from_rgba32(s.to_rgba32());
        }
        Ok(())
    }

    /// Converts from 8-bit luminance.
    fn from_l8(&self, source: &[L8], destination: &mut [P]) -> Result<()> {
        ensure_same_len("destination", source.len(), destination.len())?;
        for (d, s) in destination.iter_mut().zip(source) {
            *d = P::from_l8(*s);
        }
        Ok(())
    }

    /// Converts from raw `RGBA` bytes, four per pixel.
    fn from_rgba32_bytes(&self, source: &[u8], destination: &mut [P]) -> Result<()> {
        ensure_same_len("source bytes", destination.len() * 4, source.len())?;
        self.from_rgba32(bytemuck::cast_slice(source), destination)
    }

    /// Converts to raw `RGBA` bytes, four per pixel.
    fn to_rgba32_bytes(&self, source: &[P], destination: &mut [u8]) -> Result<()> {
        ensure_same_len("destination bytes", source.len() * 4, destination.len())?;
        self.to_rgba32(source, bytemuck::cast_slice_mut(destination))
    }

    /// Converts from raw `BGRA` bytes, four per pixel.
    fn from_bgra32_bytes(&self, source: &[u8], destination: &mut [P]) -> Result<()> {
        ensure_same_len("source bytes", destination.len() * 4, source.len())?;
        self.from_bgra32(bytemuck::cast_slice(source), destination)
    }

    /// Converts to raw `BGRA` bytes, four per pixel.
    fn to_bgra32_bytes(&self, source: &[P], destination: &mut [u8]) -> Result<()> {
        ensure_same_len("destination bytes", source.len() * 4, destination.len())?;
        self.to_bgra32(source, bytemuck::cast_slice_mut(destination))
    }

    /// Converts from raw `RGB` bytes, three per pixel.
    fn from_rgb24_bytes(&self, source: &[u8], destination: &mut [P]) -> Result<()> {
        ensure_same_len("source bytes", destination.len() * 3, source.len())?;
        self.from_rgb24(bytemuck::cast_slice(source), destination)
    }

    /// Converts to raw `RGB` bytes, three per pixel.
    fn to_rgb24_bytes(&self, source: &[P], destination: &mut [u8]) -> Result<()> {
        ensure_same_len("destination bytes", source.len() * 3, destination.len())?;
        self.to_rgb24(source, bytemuck::cast_slice_mut(destination))
    }

    /// Converts from raw `BGR` bytes, three per pixel.
    fn from_bgr24_bytes(&self, source: &[u8], destination: &mut [P]) -> Result<()> {
        ensure_same_len("source bytes", destination.len() * 3, source.len())?;
        self.from_bgr24(bytemuck::cast_slice(source), destination)
    }

    /// Converts to raw `BGR` bytes, three per pixel.
    fn to_bgr24_bytes(&self, source: &[P], destination: &mut [u8]) -> Result<()> {
        ensure_same_len("destination bytes", source.len() * 3, destination.len())?;
        self.to_bgr24(source, bytemuck::cast_slice_mut(destination))
    }

    /// Interleaves three 8-bit planes into pixels with full opacity.
    ///
    /// The planes must have equal length `n`, and `destination` must hold at
    /// least `n + PLANAR_PADDING` pixels. Only the first `n` are written.
    fn pack_from_rgb_planes(
        &self,
        red: &[u8],
        green: &[u8],
        blue: &[u8],
        destination: &mut [P],
    ) -> Result<()> {
        let count = red.len();
        ensure_same_len("green plane", count, green.len())?;
        ensure_same_len("blue plane", count, blue.len())?;
        ensure_min_len("destination", count + PLANAR_PADDING, destination.len())?;
        trace!(format = P::NAME, count, "pack_from_rgb_planes");

        let planes = red.iter().zip(green).zip(blue);
        for (d, ((&r, &g), &b)) in destination.iter_mut().zip(planes) {
            *d = P::from_rgb24(Rgb24::new(r, g, b));
        }
        Ok(())
    }

    /// Splits pixels into three planes of `[0, 255]` floats.
    ///
    /// The planes must have equal length of at least `source.len()`.
    fn unpack_into_rgb_planes(
        &self,
        red: &mut [f32],
        green: &mut [f32],
        blue: &mut [f32],
        source: &[P],
    ) -> Result<()> {
        let len = red.len();
        ensure_same_len("green plane", len, green.len())?;
        ensure_same_len("blue plane", len, blue.len())?;
        ensure_min_len("red plane", source.len(), len)?;
        trace!(format = P::NAME, count = source.len(), "unpack_into_rgb_planes");

        for (i, s) in source.iter().enumerate() {
            let rgb = Rgb24::from_rgba32(s.to_rgba32());
            red[i] = rgb.r as f32;
            green[i] = rgb.g as f32;
            blue[i] = rgb.b as f32;
        }
        Ok(())
    }
}

/// Applies the post-unpack modifiers: sRGB expansion, then premultiplication.
pub(crate) fn apply_modifiers(vectors: &mut [Vector4], modifiers: PixelConversionModifiers) {
    if modifiers.is_companded() {
        companding::expand_slice(vectors);
    }
    if modifiers.is_premultiplied() {
        vector::premultiply_slice(vectors);
    }
}

/// Reverses [`apply_modifiers`] ahead of packing.
pub(crate) fn undo_modifiers(vectors: &mut [Vector4], modifiers: PixelConversionModifiers) {
    if modifiers.is_premultiplied() {
        vector::unpremultiply_slice(vectors);
    }
    if modifiers.is_companded() {
        companding::compress_slice(vectors);
    }
}

/// The per-element strategy, valid for every format.
pub struct DefaultOperations<P>(PhantomData<fn() -> P>);

impl<P> DefaultOperations<P> {
    /// Creates the strategy.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> Default for DefaultOperations<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pixel> PixelOperations<P> for DefaultOperations<P> {}
