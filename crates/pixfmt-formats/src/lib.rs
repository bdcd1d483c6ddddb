//! # pixfmt-formats
//!
//! Packed pixel format codecs.
//!
//! Every format implements [`Pixel`]: pure conversions to and from the
//! canonical [`Vector4`](pixfmt_core::Vector4), in native and scaled
//! flavors, plus direct conversions between common siblings that give the
//! same bits as the vector path.
//!
//! # Formats
//!
//! | Family | Formats |
//! |--------|---------|
//! | 8-bit byte order | [`Rgba32`], [`Bgra32`], [`Argb32`], [`Abgr32`], [`Rgb24`], [`Bgr24`] |
//! | Luminance | [`L8`], [`L16`], [`La16`], [`La32`] |
//! | Alpha | [`A8`] |
//! | Packed unsigned | [`Bgr565`], [`Bgra4444`], [`Bgra5551`], [`Rgba1010102`], [`Byte4`] |
//! | 16-bit unsigned | [`Rg32`], [`Rgb48`], [`Rgba64`] |
//! | Signed | [`NormalizedByte2`], [`NormalizedByte4`], [`NormalizedShort2`], [`NormalizedShort4`], [`Short2`], [`Short4`] |
//! | Half float | [`HalfSingle`], [`HalfVector2`], [`HalfVector4`] |
//! | Float | [`RgbaVector`] |
//!
//! # Example
//!
//! ```rust
//! use pixfmt_formats::{Bgra5551, Pixel, Rgba32};
//!
//! let red = Rgba32::new(255, 0, 0, 255);
//! let packed = Bgra5551::from_scaled_vector4(red.to_scaled_vector4());
//! assert_eq!(packed.packed(), 0xFC00);
//! ```
//!
//! # Colors
//!
//! [`Color`] holds a format-neutral value parsed from hex literals or CSS
//! names. The CSS table is exposed as `Color` constants.
//!
//! # Feature Flags
//!
//! - `serde` - derive `Serialize`/`Deserialize` for every format; `Color`
//!   serializes as a hex string

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod alpha;
mod byte_order;
mod color;
mod half_float;
mod luminance;
mod named;
mod packed;
pub mod pixel;
mod rgba32;
mod rgba_vector;
mod signed;
mod wide_unorm;

pub use alpha::A8;
pub use byte_order::{Abgr32, Argb32, Bgr24, Bgra32, Rgb24};
pub use color::{Color, WEB_SAFE_PALETTE_LEN};
pub use half_float::{HalfSingle, HalfVector2, HalfVector4};
pub use luminance::{L8, L16, La16, La32};
pub use packed::{Bgr565, Bgra4444, Bgra5551, Byte4, Rgba1010102};
pub use pixel::Pixel;
pub use rgba_vector::RgbaVector;
pub use rgba32::Rgba32;
pub use signed::{
    NormalizedByte2, NormalizedByte4, NormalizedShort2, NormalizedShort4, Short2, Short4,
};
pub use wide_unorm::{Rg32, Rgb48, Rgba64};

/// Invokes `$m!` once with the full list of format types.
///
/// Used by downstream crates to implement traits for every format.
///
/// ```rust
/// macro_rules! count {
///     ($($t:ty),*) => { [$(stringify!($t)),*].len() };
/// }
/// assert_eq!(pixfmt_formats::for_all_formats!(count), 29);
/// ```
#[macro_export]
macro_rules! for_all_formats {
    ($m:ident) => {
        $m!(
            $crate::A8,
            $crate::Abgr32,
            $crate::Argb32,
            $crate::Bgr24,
            $crate::Bgr565,
            $crate::Bgra32,
            $crate::Bgra4444,
            $crate::Bgra5551,
            $crate::Byte4,
            $crate::HalfSingle,
            $crate::HalfVector2,
            $crate::HalfVector4,
            $crate::L8,
            $crate::L16,
            $crate::La16,
            $crate::La32,
            $crate::NormalizedByte2,
            $crate::NormalizedByte4,
            $crate::NormalizedShort2,
            $crate::NormalizedShort4,
            $crate::Rg32,
            $crate::Rgb24,
            $crate::Rgb48,
            $crate::Rgba1010102,
            $crate::Rgba32,
            $crate::Rgba64,
            $crate::RgbaVector,
            $crate::Short2,
            $crate::Short4
        )
    };
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::pixel::Pixel;
    pub use crate::{Color, L8, L16, Rgb24, Rgba32, Rgba64, RgbaVector};
    pub use pixfmt_core::prelude::*;
}
