//! Signed formats, normalized and unnormalized.
//!
//! Signed normalized channels map `[-1, 1]` to `[-(2^(n-1) - 1), 2^(n-1) - 1]`
//! and store the result as a two's-complement field. Their scaled vector is
//! `(v + 1) / 2`. The `Short` formats store raw values in `[-32768, 32767]`
//! and scale through `(v + 32767) / 65534`.
//!
//! Two-component formats read blue as 0 and alpha as 1, and leave those
//! untouched when scaling.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use pixfmt_core::numerics::{quantize_range, quantize_snorm, snorm_to_f32};
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::Pixel;

const SHORT_MAX: f32 = 32767.0;
const SHORT_SPAN: f32 = 65534.0;

#[inline]
fn pack_snorm8(v: f32) -> u64 {
    quantize_snorm(v, 127) as i8 as u8 as u64
}

#[inline]
fn unpack_snorm8(packed: u64, shift: u32) -> f32 {
    snorm_to_f32((packed >> shift) as u8 as i8 as i32, 127)
}

#[inline]
fn pack_snorm16(v: f32) -> u64 {
    quantize_snorm(v, 32767) as i16 as u16 as u64
}

#[inline]
fn unpack_snorm16(packed: u64, shift: u32) -> f32 {
    snorm_to_f32((packed >> shift) as u16 as i16 as i32, 32767)
}

#[inline]
fn pack_short(v: f32) -> u64 {
    quantize_range(v, -32768.0, SHORT_MAX) as i16 as u16 as u64
}

#[inline]
fn unpack_short(packed: u64, shift: u32) -> f32 {
    (packed >> shift) as u16 as i16 as f32
}

#[inline]
fn xy_mapped(v: Vector4, f: impl Fn(Vec2) -> Vec2) -> Vector4 {
    f(v.truncate().truncate()).extend(v.z).extend(v.w)
}

/// Two signed normalized bytes, x in the low byte.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedByte2(u16);

impl NormalizedByte2 {
    /// Packs two components in `[-1, 1]`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, 0.0, 1.0))
    }
}

impl Pixel for NormalizedByte2 {
    type Packed = u16;

    const NAME: &'static str = "NormalizedByte2";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[8, 8],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u64;
        Vector4::new(unpack_snorm8(p, 0), unpack_snorm8(p, 8), 0.0, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self((pack_snorm8(v.x) | pack_snorm8(v.y) << 8) as u16)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        xy_mapped(self.to_vector4(), |xy| (xy + 1.0) / 2.0)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(xy_mapped(v, |xy| xy * 2.0 - 1.0))
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

/// Four signed normalized bytes, x in the low byte.
///
/// ```rust
/// use pixfmt_formats::{NormalizedByte4, Pixel};
///
/// assert_eq!(NormalizedByte4::new(0.1, -0.3, 0.5, -0.7).packed(), 0xA740DA0D);
/// assert_eq!(NormalizedByte4::new(-1.0, -1.0, -1.0, -1.0).packed(), 0x81818181);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedByte4(u32);

impl NormalizedByte4 {
    /// Packs four components in `[-1, 1]`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for NormalizedByte4 {
    type Packed = u32;

    const NAME: &'static str = "NormalizedByte4";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[8, 8, 8, 8],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u64;
        Vector4::new(
            unpack_snorm8(p, 0),
            unpack_snorm8(p, 8),
            unpack_snorm8(p, 16),
            unpack_snorm8(p, 24),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(
            (pack_snorm8(v.x) | pack_snorm8(v.y) << 8 | pack_snorm8(v.z) << 16 | pack_snorm8(v.w) << 24)
                as u32,
        )
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
    fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }
}

/// Two signed normalized 16-bit components, x in the low half.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedShort2(u32);

impl NormalizedShort2 {
    /// Packs two components in `[-1, 1]`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, 0.0, 1.0))
    }
}

impl Pixel for NormalizedShort2 {
    type Packed = u32;

    const NAME: &'static str = "NormalizedShort2";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[16, 16],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u64;
        Vector4::new(unpack_snorm16(p, 0), unpack_snorm16(p, 16), 0.0, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self((pack_snorm16(v.x) | pack_snorm16(v.y) << 16) as u32)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        xy_mapped(self.to_vector4(), |xy| (xy + 1.0) / 2.0)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(xy_mapped(v, |xy| xy * 2.0 - 1.0))
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

/// Four signed normalized 16-bit components, x in the low quarter.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedShort4(u64);

impl NormalizedShort4 {
    /// Packs four components in `[-1, 1]`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for NormalizedShort4 {
    type Packed = u64;

    const NAME: &'static str = "NormalizedShort4";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        64,
        &[16, 16, 16, 16],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(
            unpack_snorm16(self.0, 0),
            unpack_snorm16(self.0, 16),
            unpack_snorm16(self.0, 32),
            unpack_snorm16(self.0, 48),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(
            pack_snorm16(v.x)
                | pack_snorm16(v.y) << 16
                | pack_snorm16(v.z) << 32
                | pack_snorm16(v.w) << 48,
        )
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

/// Two signed 16-bit integers, x in the low half.
///
/// ```rust
/// use pixfmt_formats::{Pixel, Short2};
///
/// assert_eq!(Short2::new(127.5, -5.3).packed(), 0xFFFB0080);
/// assert_eq!(Short2::new(1e9, -1e9).packed(), 0x8000_7FFF);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Short2(u32);

impl Short2 {
    /// Packs two components in `[-32768, 32767]`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, 0.0, 1.0))
    }
}

impl Pixel for Short2 {
    type Packed = u32;

    const NAME: &'static str = "Short2";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[16, 16],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u64;
        Vector4::new(unpack_short(p, 0), unpack_short(p, 16), 0.0, 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self((pack_short(v.x) | pack_short(v.y) << 16) as u32)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        xy_mapped(self.to_vector4(), |xy| (xy + SHORT_MAX) / SHORT_SPAN)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(xy_mapped(v, |xy| xy * SHORT_SPAN - SHORT_MAX))
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

/// Four signed 16-bit integers, x in the low quarter.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Short4(u64);

impl Short4 {
    /// Packs four components in `[-32768, 32767]`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for Short4 {
    type Packed = u64;

    const NAME: &'static str = "Short4";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        64,
        &[16, 16, 16, 16],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(
            unpack_short(self.0, 0),
            unpack_short(self.0, 16),
            unpack_short(self.0, 32),
            unpack_short(self.0, 48),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(pack_short(v.x) | pack_short(v.y) << 16 | pack_short(v.z) << 32 | pack_short(v.w) << 48)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        (self.to_vector4() + SHORT_MAX) / SHORT_SPAN
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(v * SHORT_SPAN - SHORT_MAX)
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
