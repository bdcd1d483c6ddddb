//! # pixfmt-core
//!
//! Core types for pixel format interchange.
//!
//! Every pixel format in the pixfmt family converts through one canonical
//! four component float vector. This crate defines that vector and the pieces
//! every codec shares:
//!
//! - [`Vector4`] - the canonical interchange vector (`glam::Vec4`)
//! - [`PixelConversionModifiers`] - scale / premultiply / sRGB companding flags
//! - [`numerics`] - the quantization policy (clamp, then round half away from zero)
//! - [`companding`] - sRGB expand / compress of vectors
//! - [`vector`] - premultiplication helpers
//! - [`PixelComponentInfo`], [`PixelTypeInfo`] - format metadata
//! - [`simd`] - `wide` byte/float kernels bit-identical to the scalar path
//! - [`Error`], [`Result`] - contract violation errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixfmt-core (this crate)
//!    ^
//!    |
//!    +-- pixfmt-formats (pixel codecs, colors)
//!           ^
//!           +-- pixfmt-ops (bulk operations, blending)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pixfmt_core::{Vector4, numerics::quantize_unorm};
//!
//! let v = Vector4::new(0.5, 0.5, 0.5, 1.0);
//! let bytes = v.to_array().map(|c| quantize_unorm(c, 255) as u8);
//! assert_eq!(bytes, [128, 128, 128, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod companding;
pub mod component_info;
pub mod error;
pub mod modifiers;
pub mod numerics;
pub mod simd;
pub mod vector;

pub use component_info::{
    MAX_COMPONENTS, PixelAlphaRepresentation, PixelColorType, PixelComponentInfo, PixelTypeInfo,
};
pub use error::{Error, Result, ensure_min_len, ensure_same_len};
pub use modifiers::PixelConversionModifiers;
pub use vector::Vector4;

/// Prelude module for convenient imports.
///
/// ```
/// use pixfmt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::component_info::{
        PixelAlphaRepresentation, PixelColorType, PixelComponentInfo, PixelTypeInfo,
    };
    pub use crate::error::{Error, Result};
    pub use crate::modifiers::PixelConversionModifiers;
    pub use crate::vector::Vector4;
}
