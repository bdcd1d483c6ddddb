//! sRGB companding of canonical vectors.
//!
//! The sRGB curve combines a linear segment near black with a 2.4 power
//! segment. Only the color components are touched; alpha is always linear.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use crate::Vector4;

/// Decodes an sRGB encoded value to linear light.
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// ```rust
/// use pixfmt_core::companding::expand;
///
/// assert!((expand(0.5) - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn expand(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light to sRGB.
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn compress(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Expands the color components of a vector, leaving alpha untouched.
#[inline]
pub fn expand_vector(v: Vector4) -> Vector4 {
    Vector4::new(expand(v.x), expand(v.y), expand(v.z), v.w)
}

/// Compresses the color components of a vector, leaving alpha untouched.
#[inline]
pub fn compress_vector(v: Vector4) -> Vector4 {
    Vector4::new(compress(v.x), compress(v.y), compress(v.z), v.w)
}

/// Expands every vector in place.
pub fn expand_slice(vectors: &mut [Vector4]) {
    for v in vectors {
        *v = expand_vector(*v);
    }
}

/// Compresses every vector in place.
pub fn compress_slice(vectors: &mut [Vector4]) {
    for v in vectors {
        *v = compress_vector(*v);
    }
}
