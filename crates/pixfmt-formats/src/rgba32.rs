//! 8-bit RGBA, the hub format for every 8-bit sibling conversion.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::{downscale_16_to_8, quantize_unorm, unorm_to_f32};
use pixfmt_core::{
    Error, PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Result, Vector4,
};

use crate::{Abgr32, Argb32, Bgr24, Bgra32, L8, L16, La16, La32, Pixel, Rgb24, Rgb48, Rgba64};

/// Four 8-bit unsigned normalized channels in red, green, blue, alpha order.
///
/// ```rust
/// use pixfmt_formats::{Pixel, Rgba32};
///
/// let c = Rgba32::parse_hex("#FF8000").unwrap();
/// assert_eq!(c, Rgba32::new(255, 128, 0, 255));
/// assert_eq!(c.to_hex(), "FF8000FF");
/// assert_eq!(c.packed(), 0xFF0080FF);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba32 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba32 {
    /// Creates a pixel from channel bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a pixel from normalized floats, clamping each channel.
    #[inline]
    pub fn from_floats(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_vector4(Vector4::new(r, g, b, a))
    }

    /// Parses `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA`, with an optional `#`.
    ///
    /// Short forms double every digit; a missing alpha is `FF`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHex`] for any other length or a non-hex digit.
    pub fn parse_hex(hex: &str) -> Result<Self> {
        Self::try_parse_hex(hex).ok_or_else(|| Error::invalid_hex(hex))
    }

    /// Like [`parse_hex`](Self::parse_hex), returning `None` on failure.
    pub fn try_parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        let mut nibbles = [0xFu8; 8];
        match digits.len() {
            3 | 4 => {
                for (i, &c) in digits.iter().enumerate() {
                    let n = hex_digit(c)?;
                    nibbles[i * 2] = n;
                    nibbles[i * 2 + 1] = n;
                }
            }
            6 | 8 => {
                for (i, &c) in digits.iter().enumerate() {
                    nibbles[i] = hex_digit(c)?;
                }
            }
            _ => return None,
        }
        let byte = |i: usize| (nibbles[i * 2] << 4) | nibbles[i * 2 + 1];
        Some(Self::new(byte(0), byte(1), byte(2), byte(3)))
    }

    /// Uppercase `RRGGBBAA` without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Rgba32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl fmt::Debug for Rgba32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba32({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Pixel for Rgba32 {
    type Packed = u32;

    const NAME: &'static str = "Rgba32";

    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
        32,
        &[8, 8, 8, 8],
        PixelColorType::RGBA,
        PixelAlphaRepresentation::Unassociated,
    );

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(
            unorm_to_f32(self.r as u32, 255),
            unorm_to_f32(self.g as u32, 255),
            unorm_to_f32(self.b as u32, 255),
            unorm_to_f32(self.a as u32, 255),
        )
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(
            quantize_unorm(v.x, 255) as u8,
            quantize_unorm(v.y, 255) as u8,
            quantize_unorm(v.z, 255) as u8,
            quantize_unorm(v.w, 255) as u8,
        )
    }

    #[inline]
    fn packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self { r, g, b, a }
    }

    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        self
    }

    #[inline]
    fn from_rgba32(source: Rgba32) -> Self {
        source
    }

    #[inline]
    fn from_bgra32(s: Bgra32) -> Self {
        Self::new(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_argb32(s: Argb32) -> Self {
        Self::new(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_abgr32(s: Abgr32) -> Self {
        Self::new(s.r, s.g, s.b, s.a)
    }

    #[inline]
    fn from_rgb24(s: Rgb24) -> Self {
        Self::rgb(s.r, s.g, s.b)
    }

    #[inline]
    fn from_bgr24(s: Bgr24) -> Self {
        Self::rgb(s.r, s.g, s.b)
    }

    #[inline]
    fn from_l8(s: L8) -> Self {
        Self::rgb(s.l, s.l, s.l)
    }

    #[inline]
    fn from_l16(s: L16) -> Self {
        let l = downscale_16_to_8(s.l);
        Self::rgb(l, l, l)
    }

    #[inline]
    fn from_la16(s: La16) -> Self {
        Self::new(s.l, s.l, s.l, s.a)
    }

    #[inline]
    fn from_la32(s: La32) -> Self {
        let l = downscale_16_to_8(s.l);
        Self::new(l, l, l, downscale_16_to_8(s.a))
    }

    #[inline]
    fn from_rgb48(s: Rgb48) -> Self {
        Self::rgb(
            downscale_16_to_8(s.r),
            downscale_16_to_8(s.g),
            downscale_16_to_8(s.b),
        )
    }

    #[inline]
    fn from_rgba64(s: Rgba64) -> Self {
        Self::new(
            downscale_16_to_8(s.r),
            downscale_16_to_8(s.g),
            downscale_16_to_8(s.b),
            downscale_16_to_8(s.a),
        )
    }
}
