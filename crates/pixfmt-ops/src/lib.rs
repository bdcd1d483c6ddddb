//! # pixfmt-ops
//!
//! Bulk pixel operations and compositing.
//!
//! Every format in `pixfmt-formats` gets a lazily built
//! [`PixelOperations`] strategy, reached through [`PixelOps::operations`].
//! The strategy is resolved once per buffer; its inner loops are monomorphic
//! over the format's codec.
//!
//! # Modules
//!
//! - [`operations`] - the [`PixelOperations`] contract and default strategy
//! - [`rgba_compatible`] - SIMD strategies for 8-bit formats
//! - [`convert()`] - chunked cross-format conversion
//! - [`composite`] - blend modes, Porter-Duff operators, [`Blender`]
//! - [`palette`] - named-color palettes in any format
//! - `parallel` - Rayon versions of `convert` and `blend`
//!
//! # Example
//!
//! ```rust
//! use pixfmt_formats::{Rgba32, Rgba64};
//! use pixfmt_ops::composite::{AlphaCompositionMode, ColorBlendingMode, get_blender};
//!
//! let background = vec![Rgba32::new(255, 0, 0, 255); 16];
//! let source = vec![Rgba64::new(0, 65535, 0, 65535); 16];
//! let mut out = vec![Rgba32::default(); 16];
//!
//! let blender = get_blender(ColorBlendingMode::Normal, AlphaCompositionMode::SrcOver);
//! blender.blend(&mut out, &background, &source, 0.5).unwrap();
//! assert_eq!(out[0], Rgba32::new(128, 128, 0, 255));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Rayon helpers in `parallel`
//! - `serde` - `Serialize`/`Deserialize` for blend modes and [`BlendOptions`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod composite;
mod convert;
pub mod operations;
pub mod palette;
mod registry;
pub mod rgba_compatible;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use composite::{
    AlphaCompositionMode, BlendOptions, Blender, ColorBlendingMode, get_blender,
};
pub use convert::{CHUNK_SIZE, convert, convert_to_vec};
pub use operations::{DefaultOperations, PLANAR_PADDING, PixelOperations};
pub use registry::PixelOps;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::composite::{AlphaCompositionMode, BlendOptions, ColorBlendingMode, get_blender};
    pub use crate::operations::PixelOperations;
    pub use crate::registry::PixelOps;
    pub use crate::{convert, convert_to_vec};
    pub use pixfmt_formats::prelude::*;
}
