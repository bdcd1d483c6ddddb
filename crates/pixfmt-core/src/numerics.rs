//! Quantization policy shared by every codec.
//!
//! All float to integer conversions in the workspace funnel through this
//! module so that the scalar codecs, the direct sibling conversions and the
//! SIMD kernels agree bit for bit.
//!
//! # Policy
//!
//! 1. NaN becomes 0, then the value is clamped to the legal range.
//! 2. The clamped value is scaled to the integer range.
//! 3. 0.5 is added toward the sign and the result truncated toward zero,
//!    which rounds half away from zero.
//!
//! Clamping before rounding means an out-of-range input can never wrap.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::numerics::{quantize_unorm, quantize_snorm};
//!
//! assert_eq!(quantize_unorm(0.5, 255), 128);
//! assert_eq!(quantize_unorm(1.7, 255), 255);
//! assert_eq!(quantize_unorm(f32::NAN, 255), 0);
//! assert_eq!(quantize_snorm(-1.0, 127), -127);
//! ```

/// Rec.709 luminance coefficient for the red channel.
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for the green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for the blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Smallest alpha treated as non-zero when dividing by alpha.
pub const EPSILON: f32 = 0.001 / 255.0;

/// Replaces NaN with zero.
#[inline]
pub fn sanitize(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v }
}

/// Clamps to `[0, 1]`, NaN to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    sanitize(v).clamp(0.0, 1.0)
}

/// Clamps to `[-1, 1]`, NaN to 0.
#[inline]
pub fn clamp_signed_unit(v: f32) -> f32 {
    sanitize(v).clamp(-1.0, 1.0)
}

/// Adds 0.5 toward the sign and truncates toward zero.
#[inline]
pub fn round_half_away(v: f32) -> f32 {
    (v + 0.5f32.copysign(v)).trunc()
}

/// Quantizes a normalized value to an unsigned field with maximum `max`.
///
/// `max` is `2^bits - 1` for the field, e.g. 255 or 1023.
#[inline]
pub fn quantize_unorm(v: f32, max: u32) -> u32 {
    (clamp_unit(v) * max as f32 + 0.5) as u32
}

/// Quantizes a value in `[-1, 1]` to a signed field with maximum `max`.
///
/// `max` is `2^(bits-1) - 1`, e.g. 127 or 32767.
#[inline]
pub fn quantize_snorm(v: f32, max: i32) -> i32 {
    let s = clamp_signed_unit(v) * max as f32;
    (s + 0.5f32.copysign(s)) as i32
}

/// Quantizes an unnormalized value into `[min, max]`.
#[inline]
pub fn quantize_range(v: f32, min: f32, max: f32) -> i32 {
    let s = sanitize(v).clamp(min, max);
    (s + 0.5f32.copysign(s)) as i32
}

/// Normalizes an unsigned field with maximum `max` to `[0, 1]`.
#[inline]
pub fn unorm_to_f32(v: u32, max: u32) -> f32 {
    v as f32 / max as f32
}

/// Normalizes a signed field with maximum `max` to roughly `[-1, 1]`.
#[inline]
pub fn snorm_to_f32(v: i32, max: i32) -> f32 {
    v as f32 / max as f32
}

/// Widens an 8-bit channel to 16 bits (`v * 257`).
#[inline]
pub const fn upscale_8_to_16(v: u8) -> u16 {
    v as u16 * 257
}

/// Narrows a 16-bit channel to 8 bits with rounding.
///
/// Equal to `round(v / 257)`; a tie is impossible because 257 is odd.
#[inline]
pub const fn downscale_16_to_8(v: u16) -> u8 {
    ((v as u32 + 128) / 257) as u8
}

/// Rec.709 luminance of 8-bit channels, rounded to 8 bits.
#[inline]
pub fn luminance_8(r: u8, g: u8, b: u8) -> u8 {
    (r as f32 * REC709_LUMA_R + g as f32 * REC709_LUMA_G + b as f32 * REC709_LUMA_B + 0.5) as u8
}

/// Rec.709 luminance of 16-bit channels, rounded to 16 bits.
#[inline]
pub fn luminance_16(r: u16, g: u16, b: u16) -> u16 {
    (r as f32 * REC709_LUMA_R + g as f32 * REC709_LUMA_G + b as f32 * REC709_LUMA_B + 0.5) as u16
}

/// Rec.709 luminance of linear float channels.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    r * REC709_LUMA_R + g * REC709_LUMA_G + b * REC709_LUMA_B
}
