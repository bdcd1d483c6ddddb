//! IEEE-754 binary16 formats.
//!
//! Each channel is encoded independently with [`half::f16`]. Inputs are
//! clamped to the finite half range and NaN is stored as 0. The scaled vector
//! maps `[-1, 1]` to `[0, 1]`.

use bytemuck::{Pod, Zeroable};
use half::f16;
use pixfmt_core::numerics::sanitize;
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::Pixel;

const HALF_MAX: f32 = 65504.0;

#[inline]
fn pack_half(v: f32) -> u64 {
    f16::from_f32(sanitize(v).clamp(-HALF_MAX, HALF_MAX)).to_bits() as u64
}

#[inline]
fn unpack_half(packed: u64, shift: u32) -> f32 {
    f16::from_bits((packed >> shift) as u16).to_f32()
}

#[inline]
fn to_unit(v: f32) -> f32 {
    (v + 1.0) / 2.0
}

#[inline]
fn from_unit(v: f32) -> f32 {
    v * 2.0 - 1.0
}

/// One half-precision component. Green and blue read as 0, alpha as 1.
///
/// ```rust
/// use pixfmt_formats::{HalfSingle, Pixel};
///
/// assert_eq!(HalfSingle::new(1.0).packed(), 15360);
/// assert_eq!(HalfSingle::new(-1.0).packed(), 48128);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfSingle(u16);

impl HalfSingle {
    /// Packs one component.
    #[inline]
    pub fn new(x: f32) -> Self {
        Self(pack_half(x) as u16)
    }

    /// Unpacks the component.
    #[inline]
    pub fn to_f32(self) -> f32 {
        unpack_half(self.0 as u64, 0)
    }
}

impl Pixel for HalfSingle {
    type Packed = u16;

    const NAME: &'static str = "HalfSingle";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[16],
        PixelColorType::RED,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(self.to_f32(), 0.0, 0.0, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        Vector4::new(to_unit(self.to_f32()), 0.0, 0.0, 1.0)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::new(from_unit(v.x))
    }

    #[inline]
    fn packed(self) -> u16 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u16) -> Self {
        Self(packed)
    }
}

/// Two half-precision components, x in the low half. Blue reads as 0, alpha as 1.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfVector2(u32);

impl HalfVector2 {
    /// Packs two components.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self((pack_half(x) | pack_half(y) << 16) as u32)
    }
}

impl Pixel for HalfVector2 {
    type Packed = u32;

    const NAME: &'static str = "HalfVector2";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[16, 16],
        PixelColorType::RED.union(PixelColorType::GREEN),
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u64;
        Vector4::new(unpack_half(p, 0), unpack_half(p, 16), 0.0, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x, v.y)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        let v = self.to_vector4();
        Vector4::new(to_unit(v.x), to_unit(v.y), 0.0, 1.0)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::new(from_unit(v.x), from_unit(v.y))
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

/// Four half-precision components, x in the low quarter.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfVector4(u64);

impl HalfVector4 {
    /// Packs four components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for HalfVector4 {
    type Packed = u64;

    const NAME: &'static str = "HalfVector4";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        64,
        &[16, 16, 16, 16],
        PixelColorType::RGBA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(
            unpack_half(self.0, 0),
            unpack_half(self.0, 16),
            unpack_half(self.0, 32),
            unpack_half(self.0, 48),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(pack_half(v.x) | pack_half(v.y) << 16 | pack_half(v.z) << 32 | pack_half(v.w) << 48)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        (self.to_vector4() + 1.0) / 2.0
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(v * 2.0 - 1.0)
    }

    #[inline]
    fn packed(self) -> u64 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_single_golden() {
        assert_eq!(HalfSingle::new(0.1).packed(), 11878);
        assert_eq!(HalfSingle::new(-0.3).packed(), 46285);
        assert_eq!(HalfSingle::from_packed(15360).to_vector4(), Vector4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_half_single_scaled() {
        let p = HalfSingle::new(-1.0);
        assert_eq!(p.to_scaled_vector4().x, 0.0);
        assert_eq!(HalfSingle::from_scaled_vector4(Vector4::ONE).to_f32(), 1.0);
    }

    #[test]
    fn test_half_vector2() {
        assert_eq!(HalfVector2::new(1.0, 1.0).packed(), 1006648320);
        assert_eq!(HalfVector2::new(1.0, 0.0).packed(), 15360);
        let v = HalfVector2::new(0.5, -2.0).to_vector4();
        assert_eq!(v, Vector4::new(0.5, -2.0, 0.0, 1.0));
    }

    #[test]
    fn test_half_vector4() {
        assert_eq!(HalfVector4::new(1.0, 1.0, 1.0, 1.0).packed(), 4323521613979991040);
        assert_eq!(HalfVector4::new(1.0, 0.0, 0.0, 0.0).packed(), 15360);
        let s = HalfVector4::new(-1.0, 1.0, 0.0, 1.0).to_scaled_vector4();
        assert_eq!(s, Vector4::new(0.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn test_half_clamps_and_nan() {
        let big = HalfSingle::new(1e9).to_f32();
        assert_eq!(big, 65504.0);
        assert_eq!(HalfSingle::new(-1e9).to_f32(), -65504.0);
        assert_eq!(HalfSingle::new(f32::NAN).packed(), 0);
    }
}
