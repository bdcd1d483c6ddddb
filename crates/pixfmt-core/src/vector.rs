//! The canonical interchange vector and alpha association helpers.
//!
//! Every pixel format converts through [`Vector4`], a four component float
//! vector ordered `x, y, z, w`. Color formats map those to `R, G, B, A`.

use crate::numerics::EPSILON;

/// Canonical interchange vector.
pub type Vector4 = glam::Vec4;

/// Returns `v` with its `w` component replaced.
#[inline]
pub fn with_w(v: Vector4, w: f32) -> Vector4 {
    v.truncate().extend(w)
}

/// Multiplies the color components by alpha.
///
/// ```rust
/// use pixfmt_core::{Vector4, vector::premultiply};
///
/// let p = premultiply(Vector4::new(1.0, 0.5, 0.0, 0.5));
/// assert_eq!(p, Vector4::new(0.5, 0.25, 0.0, 0.5));
/// ```
#[inline]
pub fn premultiply(v: Vector4) -> Vector4 {
    with_w(v * v.w, v.w)
}

/// Divides the color components by alpha.
///
/// Zero alpha yields transparent black rather than a division by zero.
#[inline]
pub fn unpremultiply(v: Vector4) -> Vector4 {
    if v.w.abs() < EPSILON {
        return Vector4::ZERO;
    }
    with_w(v / v.w, v.w)
}

/// Premultiplies every vector in place.
pub fn premultiply_slice(vectors: &mut [Vector4]) {
    for v in vectors {
        *v = premultiply(*v);
    }
}

/// Unpremultiplies every vector in place.
pub fn unpremultiply_slice(vectors: &mut [Vector4]) {
    for v in vectors {
        *v = unpremultiply(*v);
    }
}
