//! Cross-format bulk conversion.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_formats::{Bgr565, Pixel, Rgba32};
//! use pixfmt_ops::convert;
//!
//! let src = vec![Rgba32::new(255, 0, 0, 255); 3000];
//! let mut dst = vec![Bgr565::default(); 3000];
//! convert(&src, &mut dst).unwrap();
//! assert!(dst.iter().all(|p| p.packed() == 0xF800));
//! ```

use pixfmt_core::{PixelConversionModifiers, Result, Vector4, ensure_same_len};
use tracing::trace;

use crate::PixelOps;

/// Elements converted per pass through the intermediate vector buffer.
pub const CHUNK_SIZE: usize = 1024;

/// Converts `source` into `destination` through scaled canonical vectors.
///
/// Peak scratch memory is one [`CHUNK_SIZE`] vector buffer regardless of the
/// image size. Each element ends up as
/// `D::from_scaled_vector4(s.to_scaled_vector4())`.
pub fn convert<S: PixelOps, D: PixelOps>(source: &[S], destination: &mut [D]) -> Result<()> {
    ensure_same_len("destination", source.len(), destination.len())?;
    trace!(from = S::NAME, to = D::NAME, count = source.len(), "convert");

    let from = S::operations();
    let to = D::operations();
    let mut buffer = vec![Vector4::ZERO; CHUNK_SIZE.min(source.len())];
    for (src, dst) in source
        .chunks(CHUNK_SIZE)
        .zip(destination.chunks_mut(CHUNK_SIZE))
    {
        let buffer = &mut buffer[..src.len()];
        from.to_vector4(src, buffer, PixelConversionModifiers::SCALE)?;
        to.from_vector4_destructive(buffer, dst, PixelConversionModifiers::SCALE)?;
    }
    Ok(())
}

/// Converts into a newly allocated buffer.
pub fn convert_to_vec<S: PixelOps, D: PixelOps>(source: &[S]) -> Result<Vec<D>> {
    let mut out = vec![D::default(); source.len()];
    convert(source, &mut out)?;
    Ok(out)
}
