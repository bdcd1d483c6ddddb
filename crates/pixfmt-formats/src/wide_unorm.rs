//! 16-bit unsigned normalized formats.
//!
//! [`Rgba64`] is the hub for 16-bit sibling conversions: 8-bit sources widen
//! by `v * 257`, which equals quantizing `v / 255` to 16 bits.

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::{downscale_16_to_8, quantize_unorm, unorm_to_f32, upscale_8_to_16};
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::pixel::rgba64_siblings;
use crate::{
    Abgr32, Argb32, Bgr24, Bgra32, L8, L16, La16, La32, Pixel, Rgb24, Rgba32,
};

#[inline]
fn q16(v: f32) -> u16 {
    quantize_unorm(v, 65535) as u16
}

#[inline]
fn f16n(v: u16) -> f32 {
    unorm_to_f32(v as u32, 65535)
}

/// Four 16-bit unsigned normalized channels.
///
/// ```rust
/// use pixfmt_formats::{Pixel, Rgba32, Rgba64};
///
/// let p = Rgba64::from_rgba32(Rgba32::new(255, 0, 1, 128));
/// assert_eq!(p, Rgba64::new(65535, 0, 257, 32896));
/// assert_eq!(p.to_rgba32(), Rgba32::new(255, 0, 1, 128));
/// ```
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba64 {
    /// Red
    pub r: u16,
    /// Green
    pub g: u16,
    /// Blue
    pub b: u16,
    /// Alpha
    pub a: u16,
}

impl Rgba64 {
    /// Creates a pixel from 16-bit channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a pixel from 8-bit channels, widening each.
    #[inline]
    pub const fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            upscale_8_to_16(r),
            upscale_8_to_16(g),
            upscale_8_to_16(b),
            upscale_8_to_16(a),
        )
    }

    #[inline]
    const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }
}

impl Pixel for Rgba64 {
    type Packed = u64;

    const NAME: &'static str = "Rgba64";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        64,
        &[16, 16, 16, 16],
        PixelColorType::RGBA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(f16n(self.r), f16n(self.g), f16n(self.b), f16n(self.a))
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(q16(v.x), q16(v.y), q16(v.z), q16(v.w))
    }

    #[inline]
    fn packed(self) -> u64 {
        self.r as u64 | (self.g as u64) << 16 | (self.b as u64) << 32 | (self.a as u64) << 48
    }

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self::new(
            packed as u16,
            (packed >> 16) as u16,
            (packed >> 32) as u16,
            (packed >> 48) as u16,
        )
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::from_rgba64(self)
    }

    #[inline]
    fn from_rgba32(s: Rgba32) -> Self {
        Self::from_bytes(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_bgra32(s: Bgra32) -> Self {
        Self::from_bytes(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_argb32(s: Argb32) -> Self {
        Self::from_bytes(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_abgr32(s: Abgr32) -> Self {
        Self::from_bytes(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_rgb24(s: Rgb24) -> Self {
        Self::from_bytes(s.r, s.g, s.b, 255)
    }

    #[inline]
    fn from_bgr24(s: Bgr24) -> Self {
        Self::from_bytes(s.r, s.g, s.b, 255)
    }

    #[inline]
    fn from_l8(s: L8) -> Self {
        Self::from_bytes(s.l, s.l, s.l, 255)
    }

    #[inline]
    fn from_l16(s: L16) -> Self {
        Self::opaque(s.l, s.l, s.l)
    }

    #[inline]
    fn from_la16(s: La16) -> Self {
        Self::from_bytes(s.l, s.l, s.l, s.a)
    }

    #[inline]
    fn from_la32(s: La32) -> Self {
        Self::new(s.l, s.l, s.l, s.a)
    }

    #[inline]
    fn from_rgb48(s: Rgb48) -> Self {
        Self::opaque(s.r, s.g, s.b)
    }

    #[inline]
    fn from_rgba64(s: Rgba64) -> Self {
        s
    }
}

/// Three 16-bit unsigned normalized channels. Alpha reads as opaque.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb48 {
    /// Red
    pub r: u16,
    /// Green
    pub g: u16,
    /// Blue
    pub b: u16,
}

impl Rgb48 {
    /// Creates a pixel from 16-bit channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

impl Pixel for Rgb48 {
    type Packed = u64;

    const NAME: &'static str = "Rgb48";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        48,
        &[16, 16, 16],
        PixelColorType::RGB,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(f16n(self.r), f16n(self.g), f16n(self.b), 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(q16(v.x), q16(v.y), q16(v.z))
    }

    #[inline]
    fn packed(self) -> u64 {
        self.r as u64 | (self.g as u64) << 16 | (self.b as u64) << 32
    }

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self::new(packed as u16, (packed >> 16) as u16, (packed >> 32) as u16)
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::rgb(
            downscale_16_to_8(self.r),
            downscale_16_to_8(self.g),
            downscale_16_to_8(self.b),
        )
    }

    #[inline]
    fn from_rgba64(s: Rgba64) -> Self {
        Self::new(s.r, s.g, s.b)
    }

    rgba64_siblings!();
}

/// Two 16-bit unsigned normalized components. Blue reads as 0, alpha as 1.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rg32(u32);

impl Rg32 {
    /// Packs two normalized components.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, 0.0, 1.0))
    }
}

impl Pixel for Rg32 {
    type Packed = u32;

    const NAME: &'static str = "Rg32";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[16, 16],
        PixelColorType::RED.union(PixelColorType::GREEN),
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(f16n(self.0 as u16), f16n((self.0 >> 16) as u16), 0.0, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(q16(v.x) as u32 | (q16(v.y) as u32) << 16)
    }

    #[inline]
    fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }
}
