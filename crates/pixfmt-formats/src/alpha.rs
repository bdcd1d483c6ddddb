//! Alpha-only format.

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::{quantize_unorm, unorm_to_f32};
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::pixel::rgba32_siblings;
use crate::{Pixel, Rgba32};

/// 8-bit alpha with no color. Color channels read back as zero.
///
/// ```rust
/// use pixfmt_formats::{A8, Pixel};
/// use pixfmt_core::Vector4;
///
/// assert_eq!(A8::from_vector4(Vector4::new(1.0, 1.0, 1.0, 0.5)).a, 128);
/// assert_eq!(A8::new(255).to_vector4(), Vector4::new(0.0, 0.0, 0.0, 1.0));
/// ```
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A8 {
    /// Alpha
    pub a: u8,
}

impl A8 {
    /// Creates a pixel from an alpha byte.
    #[inline]
    pub const fn new(a: u8) -> Self {
        Self { a }
    }
}

impl Pixel for A8 {
    type Packed = u8;

    const NAME: &'static str = "A8";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        8,
        &[8],
        PixelColorType::ALPHA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(0.0, 0.0, 0.0, unorm_to_f32(self.a as u32, 255))
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(quantize_unorm(v.w, 255) as u8)
    }

    #[inline]
    fn packed(self) -> u8 {
        self.a
    }

    #[inline]
    fn from_packed(packed: u8) -> Self {
        Self::new(packed)
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::new(0, 0, 0, self.a)
    }

    #[inline]
    fn from_rgba32(s: Rgba32) -> Self {
        Self::new(s.a)
    }

    rgba32_siblings!();
}
