//! Grayscale formats.
//!
//! Packing projects red, green and blue through the Rec.709 luma weights
//! after each has been quantized to the target depth, so an 8-bit luma taken
//! from a vector is the same as one taken from the equivalent [`Rgba32`].
//! Unpacking replicates the single channel into red, green and blue.

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::{
    downscale_16_to_8, luminance_8, luminance_16, quantize_unorm, unorm_to_f32,
};
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::pixel::{rgba32_siblings, rgba64_siblings};
use crate::{Pixel, Rgba32, Rgba64};

#[inline]
fn luma_8_of(v: Vector4) -> u8 {
    luminance_8(
        quantize_unorm(v.x, 255) as u8,
        quantize_unorm(v.y, 255) as u8,
        quantize_unorm(v.z, 255) as u8,
    )
}

#[inline]
fn luma_16_of(v: Vector4) -> u16 {
    luminance_16(
        quantize_unorm(v.x, 65535) as u16,
        quantize_unorm(v.y, 65535) as u16,
        quantize_unorm(v.z, 65535) as u16,
    )
}

/// 8-bit luminance.
///
/// ```rust
/// use pixfmt_formats::{L8, Pixel, Rgba32};
///
/// assert_eq!(L8::from_rgba32(Rgba32::rgb(255, 255, 255)).l, 255);
/// assert_eq!(L8::new(128).to_rgba32(), Rgba32::rgb(128, 128, 128));
/// ```
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct L8 {
    /// Luminance
    pub l: u8,
}

impl L8 {
    /// Creates a pixel from a luminance byte.
    #[inline]
    pub const fn new(l: u8) -> Self {
        Self { l }
    }
}

impl Pixel for L8 {
    type Packed = u8;

    const NAME: &'static str = "L8";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        8,
        &[8],
        PixelColorType::LUMINANCE,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let l = unorm_to_f32(self.l as u32, 255);
        Vector4::new(l, l, l, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(luma_8_of(v))
    }

    #[inline]
    fn packed(self) -> u8 {
        self.l
    }

    #[inline]
    fn from_packed(packed: u8) -> Self {
        Self::new(packed)
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::rgb(self.l, self.l, self.l)
    }

    #[inline]
    fn from_rgba32(s: Rgba32) -> Self {
        Self::new(luminance_8(s.r, s.g, s.b))
    }

    rgba32_siblings!();
}

/// 8-bit luminance with 8-bit alpha.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct La16 {
    /// Luminance
    pub l: u8,
    /// Alpha
    pub a: u8,
}

impl La16 {
    /// Creates a pixel from luminance and alpha bytes.
    #[inline]
    pub const fn new(l: u8, a: u8) -> Self {
        Self { l, a }
    }
}

impl Pixel for La16 {
    type Packed = u16;

    const NAME: &'static str = "La16";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[8, 8],
        PixelColorType::LUMINANCE_ALPHA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let l = unorm_to_f32(self.l as u32, 255);
        Vector4::new(l, l, l, unorm_to_f32(self.a as u32, 255))
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(luma_8_of(v), quantize_unorm(v.w, 255) as u8)
    }

    #[inline]
    fn packed(self) -> u16 {
        u16::from_le_bytes([self.l, self.a])
    }

    #[inline]
    fn from_packed(packed: u16) -> Self {
        let [l, a] = packed.to_le_bytes();
        Self { l, a }
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::new(self.l, self.l, self.l, self.a)
    }

    #[inline]
    fn from_rgba32(s: Rgba32) -> Self {
        Self::new(luminance_8(s.r, s.g, s.b), s.a)
    }

    rgba32_siblings!();
}

/// 16-bit luminance.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct L16 {
    /// Luminance
    pub l: u16,
}

impl L16 {
    /// Creates a pixel from a 16-bit luminance value.
    #[inline]
    pub const fn new(l: u16) -> Self {
        Self { l }
    }
}

impl Pixel for L16 {
    type Packed = u16;

    const NAME: &'static str = "L16";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[16],
        PixelColorType::LUMINANCE,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let l = unorm_to_f32(self.l as u32, 65535);
        Vector4::new(l, l, l, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(luma_16_of(v))
    }

    #[inline]
    fn packed(self) -> u16 {
        self.l
    }

    #[inline]
    fn from_packed(packed: u16) -> Self {
        Self::new(packed)
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        let l = downscale_16_to_8(self.l);
        Rgba32::rgb(l, l, l)
    }

    #[inline]
    fn from_rgba64(s: Rgba64) -> Self {
        Self::new(luminance_16(s.r, s.g, s.b))
    }

    rgba64_siblings!();
}

/// 16-bit luminance with 16-bit alpha.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct La32 {
    /// Luminance
    pub l: u16,
    /// Alpha
    pub a: u16,
}

impl La32 {
    /// Creates a pixel from 16-bit luminance and alpha.
    #[inline]
    pub const fn new(l: u16, a: u16) -> Self {
        Self { l, a }
    }
}

impl Pixel for La32 {
    type Packed = u32;

    const NAME: &'static str = "La32";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[16, 16],
        PixelColorType::LUMINANCE_ALPHA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let l = unorm_to_f32(self.l as u32, 65535);
        Vector4::new(l, l, l, unorm_to_f32(self.a as u32, 65535))
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(luma_16_of(v), quantize_unorm(v.w, 65535) as u16)
    }

    #[inline]
    fn packed(self) -> u32 {
        self.l as u32 | (self.a as u32) << 16
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self::new(packed as u16, (packed >> 16) as u16)
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        let l = downscale_16_to_8(self.l);
        Rgba32::new(l, l, l, downscale_16_to_8(self.a))
    }

    #[inline]
    fn from_rgba64(s: Rgba64) -> Self {
        Self::new(luminance_16(s.r, s.g, s.b), s.a)
    }

    rgba64_siblings!();
}
