//! SIMD byte/float kernels.
//!
//! Uses `wide::f32x8` to convert 8 channel bytes at a time between the
//! `[0, 255]` integer domain and the `[0, 1]` float domain. Each lane runs the
//! exact operation sequence of the scalar codecs in [`crate::numerics`]
//! (divide by 255 on the way in; sanitize, clamp, multiply, add 0.5, truncate
//! on the way out), so results are bit-identical to per-pixel conversion.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::simd::{bytes_to_unit_floats, unit_floats_to_bytes};
//!
//! let bytes = [0u8, 51, 102, 153, 204, 255, 128, 1, 7];
//! let mut floats = [0.0f32; 9];
//! bytes_to_unit_floats(&bytes, &mut floats).unwrap();
//! let mut back = [0u8; 9];
//! unit_floats_to_bytes(&floats, &mut back).unwrap();
//! assert_eq!(bytes, back);
//! ```

use wide::{CmpEq, f32x8};

use crate::numerics::quantize_unorm;
use crate::{Result, Vector4, ensure_same_len};

/// Converts channel bytes to normalized floats (`b / 255`).
pub fn bytes_to_unit_floats(src: &[u8], dst: &mut [f32]) -> Result<()> {
    ensure_same_len("destination", src.len(), dst.len())?;

    let scale = f32x8::splat(255.0);
    let mut src_chunks = src.chunks_exact(8);
    let mut dst_chunks = dst.chunks_exact_mut(8);
    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        let v = f32x8::from([
            s[0] as f32,
            s[1] as f32,
            s[2] as f32,
            s[3] as f32,
            s[4] as f32,
            s[5] as f32,
            s[6] as f32,
            s[7] as f32,
        ]);
        d.copy_from_slice(&(v / scale).to_array());
    }

    for (s, d) in src_chunks
        .remainder()
        .iter()
        .zip(dst_chunks.into_remainder())
    {
        *d = *s as f32 / 255.0;
    }
    Ok(())
}

/// Converts normalized floats to channel bytes with clamping and rounding.
///
/// NaN maps to 0.
pub fn unit_floats_to_bytes(src: &[f32], dst: &mut [u8]) -> Result<()> {
    ensure_same_len("destination", src.len(), dst.len())?;

    let zero = f32x8::splat(0.0);
    let one = f32x8::splat(1.0);
    let scale = f32x8::splat(255.0);
    let half = f32x8::splat(0.5);

    let mut src_chunks = src.chunks_exact(8);
    let mut dst_chunks = dst.chunks_exact_mut(8);
    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        let mut lanes = [0.0f32; 8];
        lanes.copy_from_slice(s);
        let v = f32x8::from(lanes);
        let v = v.cmp_eq(v).blend(v, zero);
        let q = (v.max(zero).min(one) * scale + half).to_array();
        for (out, q) in d.iter_mut().zip(q) {
            *out = q as u8;
        }
    }

    for (s, d) in src_chunks
        .remainder()
        .iter()
        .zip(dst_chunks.into_remainder())
    {
        *d = quantize_unorm(*s, 255) as u8;
    }
    Ok(())
}

/// Converts RGBA bytes to canonical vectors, four bytes per vector.
pub fn rgba_bytes_to_vectors(src: &[u8], dst: &mut [Vector4]) -> Result<()> {
    ensure_same_len("destination", src.len(), dst.len() * 4)?;
    bytes_to_unit_floats(src, bytemuck::cast_slice_mut(dst))
}

/// Converts canonical vectors to RGBA bytes, four bytes per vector.
pub fn vectors_to_rgba_bytes(src: &[Vector4], dst: &mut [u8]) -> Result<()> {
    ensure_same_len("destination", src.len() * 4, dst.len())?;
    unit_floats_to_bytes(bytemuck::cast_slice(src), dst)
}
