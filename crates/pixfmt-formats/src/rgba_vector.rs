//! Full precision float format.

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::clamp_unit;
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::Pixel;

/// Four `f32` channels clamped to `[0, 1]` on pack.
///
/// The packed value is the four bit patterns with red in the low 32 bits.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbaVector {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl RgbaVector {
    /// Creates a pixel, clamping each channel.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_vector4(Vector4::new(r, g, b, a))
    }
}

impl Pixel for RgbaVector {
    type Packed = u128;

    const NAME: &'static str = "RgbaVector";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        128,
        &[32, 32, 32, 32],
        PixelColorType::RGBA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(self.r, self.g, self.b, self.a)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self {
            r: clamp_unit(v.x),
            g: clamp_unit(v.y),
            b: clamp_unit(v.z),
            a: clamp_unit(v.w),
        }
    }

    #[inline]
    fn packed(self) -> u128 {
        self.r.to_bits() as u128
            | (self.g.to_bits() as u128) << 32
            | (self.b.to_bits() as u128) << 64
            | (self.a.to_bits() as u128) << 96
    }

    #[inline]
    fn from_packed(packed: u128) -> Self {
        Self {
            r: f32::from_bits(packed as u32),
            g: f32::from_bits((packed >> 32) as u32),
            b: f32::from_bits((packed >> 64) as u32),
            a: f32::from_bits((packed >> 96) as u32),
        }
    }
}
