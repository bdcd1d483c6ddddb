//! Bit-packed unsigned formats.
//!
//! Each channel is `round(clamp(v, 0, 1) * (2^bits - 1))`, masked and shifted
//! into place. [`Byte4`] is the exception: its native vector range is
//! `[0, 255]` and only the scaled vector is normalized.

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::{quantize_range, quantize_unorm, unorm_to_f32};
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::Pixel;

#[inline]
fn field(packed: u32, shift: u32, max: u32) -> f32 {
    unorm_to_f32((packed >> shift) & max, max)
}

/// 5-bit blue, 6-bit green, 5-bit red. Red occupies the top bits.
///
/// ```rust
/// use pixfmt_formats::{Bgr565, Pixel};
///
/// assert_eq!(Bgr565::new(1.0, 0.0, 0.0).packed(), 0xF800);
/// assert_eq!(Bgr565::new(0.0, 1.0, 0.0).packed(), 0x07E0);
/// assert_eq!(Bgr565::new(0.0, 0.0, 1.0).packed(), 0x001F);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bgr565(u16);

impl Bgr565 {
    /// Packs three normalized components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, 1.0))
    }
}

impl Pixel for Bgr565 {
    type Packed = u16;

    const NAME: &'static str = "Bgr565";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[5, 6, 5],
        PixelColorType::BGR,
        PixelAlphaRepresentation::None,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u32;
        Vector4::new(field(p, 11, 0x1F), field(p, 5, 0x3F), field(p, 0, 0x1F), 1.0)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(
            ((quantize_unorm(v.x, 0x1F) << 11)
                | (quantize_unorm(v.y, 0x3F) << 5)
                | quantize_unorm(v.z, 0x1F)) as u16,
        )
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

/// 4 bits per channel: alpha in the top nibble, then red, green, blue.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bgra4444(u16);

impl Bgra4444 {
    /// Packs four normalized components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for Bgra4444 {
    type Packed = u16;

    const NAME: &'static str = "Bgra4444";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[4, 4, 4, 4],
        PixelColorType::BGRA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u32;
        Vector4::new(
            field(p, 8, 0xF),
            field(p, 4, 0xF),
            field(p, 0, 0xF),
            field(p, 12, 0xF),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(
            ((quantize_unorm(v.w, 0xF) << 12)
                | (quantize_unorm(v.x, 0xF) << 8)
                | (quantize_unorm(v.y, 0xF) << 4)
                | quantize_unorm(v.z, 0xF)) as u16,
        )
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

/// 5 bits per color channel and a 1-bit alpha in the top bit.
///
/// ```rust
/// use pixfmt_formats::{Bgra5551, Pixel};
///
/// assert_eq!(Bgra5551::new(1.0, 0.0, 0.0, 1.0).packed(), 0xFC00);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bgra5551(u16);

impl Bgra5551 {
    /// Packs four normalized components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for Bgra5551 {
    type Packed = u16;

    const NAME: &'static str = "Bgra5551";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        16,
        &[5, 5, 5, 1],
        PixelColorType::BGRA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let p = self.0 as u32;
        Vector4::new(
            field(p, 10, 0x1F),
            field(p, 5, 0x1F),
            field(p, 0, 0x1F),
            field(p, 15, 0x1),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(
            ((quantize_unorm(v.x, 0x1F) << 10)
                | (quantize_unorm(v.y, 0x1F) << 5)
                | quantize_unorm(v.z, 0x1F)
                | (quantize_unorm(v.w, 0x1) << 15)) as u16,
        )
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

/// 10 bits each for red, green, blue and 2 bits of alpha, red lowest.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba1010102(u32);

impl Rgba1010102 {
    /// Packs four normalized components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for Rgba1010102 {
    type Packed = u32;

    const NAME: &'static str = "Rgba1010102";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[10, 10, 10, 2],
        PixelColorType::RGBA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(
            field(self.0, 0, 0x3FF),
            field(self.0, 10, 0x3FF),
            field(self.0, 20, 0x3FF),
            field(self.0, 30, 0x3),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self(
            quantize_unorm(v.x, 0x3FF)
                | (quantize_unorm(v.y, 0x3FF) << 10)
                | (quantize_unorm(v.z, 0x3FF) << 20)
                | (quantize_unorm(v.w, 0x3) << 30),
        )
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

/// Four unsigned bytes holding unnormalized values in `[0, 255]`.
///
/// The native vector is `[0, 255]`; the scaled vector divides by 255.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Byte4(u32);

impl Byte4 {
    /// Packs four components given in `[0, 255]`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vector4(Vector4::new(x, y, z, w))
    }
}

impl Pixel for Byte4 {
    type Packed = u32;

    const NAME: &'static str = "Byte4";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[8, 8, 8, 8],
        PixelColorType::VECTOR,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let [x, y, z, w] = self.0.to_le_bytes();
        Vector4::new(x as f32, y as f32, z as f32, w as f32)
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        let q = |c: f32| quantize_range(c, 0.0, 255.0) as u8;
        Self(u32::from_le_bytes([q(v.x), q(v.y), q(v.z), q(v.w)]))
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        self.to_vector4() / 255.0
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(v * 255.0)
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
