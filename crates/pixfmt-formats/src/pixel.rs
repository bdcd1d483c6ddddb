//! The per-format codec contract.
//!
//! Every format implements [`Pixel`]. The required methods convert to and
//! from the canonical [`Vector4`]; everything else has a provided body that
//! goes through the scaled vector. Formats whose layout allows it override the
//! sibling conversions with integer paths that give the same bits.
//!
//! # Scaled and native vectors
//!
//! `to_vector4` returns the format's native range, e.g. `[-1, 1]` for signed
//! normalized formats or `[0, 255]` for [`Byte4`](crate::Byte4).
//! `to_scaled_vector4` always returns `[0, 1]` and is what cross-format
//! conversion uses. For most formats the two coincide.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_formats::{Pixel, Rgba32, Bgr565};
//!
//! let red = Rgba32::new(255, 0, 0, 255);
//! assert_eq!(red.to_vector4().to_array(), [1.0, 0.0, 0.0, 1.0]);
//!
//! let packed = Bgr565::from_rgba32(red);
//! assert_eq!(packed.packed(), 0xF800);
//! ```

use std::fmt;

use pixfmt_core::{PixelTypeInfo, Vector4};

use crate::{
    Abgr32, Argb32, Bgr24, Bgra32, L8, L16, La16, La32, Rgb24, Rgb48, Rgba32, Rgba64,
};

/// A packed pixel format.
///
/// Implementations are plain `Copy` values; all methods are pure and
/// allocation-free.
pub trait Pixel: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Smallest native integer holding the packed layout.
    type Packed: Copy + Default + Eq + fmt::Debug + fmt::LowerHex + Send + Sync + 'static;

    /// Short format name, used in diagnostics.
    const NAME: &'static str;

    /// Format metadata.
    const TYPE_INFO: PixelTypeInfo;

    /// Converts to the native-range canonical vector.
    fn to_vector4(self) -> Vector4;

    /// Packs a native-range canonical vector, clamping out-of-range input.
    fn from_vector4(v: Vector4) -> Self;

    /// Converts to the `[0, 1]` canonical vector.
    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        self.to_vector4()
    }

    /// Packs a `[0, 1]` canonical vector.
    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(v)
    }

    /// Packed bit pattern, first channel in the least significant bits.
    fn packed(self) -> Self::Packed;

    /// Rebuilds a pixel from its packed bit pattern.
    fn from_packed(packed: Self::Packed) -> Self;

    /// Converts to [`Rgba32`].
    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::from_scaled_vector4(self.to_scaled_vector4())
    }

    /// Converts from [`Rgba32`].
    #[inline]
    fn from_rgba32(source: Rgba32) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Bgra32`].
    #[inline]
    fn from_bgra32(source: Bgra32) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Argb32`].
    #[inline]
    fn from_argb32(source: Argb32) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Abgr32`].
    #[inline]
    fn from_abgr32(source: Abgr32) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Rgb24`].
    #[inline]
    fn from_rgb24(source: Rgb24) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Bgr24`].
    #[inline]
    fn from_bgr24(source: Bgr24) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`L8`].
    #[inline]
    fn from_l8(source: L8) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`L16`].
    #[inline]
    fn from_l16(source: L16) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`La16`].
    #[inline]
    fn from_la16(source: La16) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`La32`].
    #[inline]
    fn from_la32(source: La32) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Rgb48`].
    #[inline]
    fn from_rgb48(source: Rgb48) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from [`Rgba64`].
    #[inline]
    fn from_rgba64(source: Rgba64) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts from any other format through the scaled vector.
    #[inline]
    fn from_pixel<P: Pixel>(source: P) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }
}

/// Overrides the sibling conversions of an 8-bit format by routing through
/// [`Rgba32`]. Valid only when `from_scaled_vector4(v)` equals
/// `from_rgba32(Rgba32::from_scaled_vector4(v))` for the format.
macro_rules! rgba32_siblings {
    () => {
        #[inline]
        fn from_bgra32(source: $crate::Bgra32) -> Self {
            Self::from_rgba32($crate::Rgba32::from_bgra32(source))
        }
        #[inline]
        fn from_argb32(source: $crate::Argb32) -> Self {
            Self::from_rgba32($crate::Rgba32::from_argb32(source))
        }
        #[inline]
        fn from_abgr32(source: $crate::Abgr32) -> Self {
            Self::from_rgba32($crate::Rgba32::from_abgr32(source))
        }
        #[inline]
        fn from_rgb24(source: $crate::Rgb24) -> Self {
            Self::from_rgba32($crate::Rgba32::from_rgb24(source))
        }
        #[inline]
        fn from_bgr24(source: $crate::Bgr24) -> Self {
            Self::from_rgba32($crate::Rgba32::from_bgr24(source))
        }
        #[inline]
        fn from_l8(source: $crate::L8) -> Self {
            Self::from_rgba32($crate::Rgba32::from_l8(source))
        }
        #[inline]
        fn from_l16(source: $crate::L16) -> Self {
            Self::from_rgba32($crate::Rgba32::from_l16(source))
        }
        #[inline]
        fn from_la16(source: $crate::La16) -> Self {
            Self::from_rgba32($crate::Rgba32::from_la16(source))
        }
        #[inline]
        fn from_la32(source: $crate::La32) -> Self {
            Self::from_rgba32($crate::Rgba32::from_la32(source))
        }
        #[inline]
        fn from_rgb48(source: $crate::Rgb48) -> Self {
            Self::from_rgba32($crate::Rgba32::from_rgb48(source))
        }
        #[inline]
        fn from_rgba64(source: $crate::Rgba64) -> Self {
            Self::from_rgba32($crate::Rgba32::from_rgba64(source))
        }
    };
}

/// 16-bit counterpart of `rgba32_siblings`, routing through [`Rgba64`].
macro_rules! rgba64_siblings {
    () => {
        #[inline]
        fn from_rgba32(source: $crate::Rgba32) -> Self {
            Self::from_rgba64($crate::Rgba64::from_rgba32(source))
        }
        #[inline]
        fn from_bgra32(source: $crate::Bgra32) -> Self {
            Self::from_rgba64($crate::Rgba64::from_bgra32(source))
        }
        #[inline]
        fn from_argb32(source: $crate::Argb32) -> Self {
            Self::from_rgba64($crate::Rgba64::from_argb32(source))
        }
        #[inline]
        fn from_abgr32(source: $crate::Abgr32) -> Self {
            Self::from_rgba64($crate::Rgba64::from_abgr32(source))
        }
        #[inline]
        fn from_rgb24(source: $crate::Rgb24) -> Self {
            Self::from_rgba64($crate::Rgba64::from_rgb24(source))
        }
        #[inline]
        fn from_bgr24(source: $crate::Bgr24) -> Self {
            Self::from_rgba64($crate::Rgba64::from_bgr24(source))
        }
        #[inline]
        fn from_l8(source: $crate::L8) -> Self {
            Self::from_rgba64($crate::Rgba64::from_l8(source))
        }
        #[inline]
        fn from_l16(source: $crate::L16) -> Self {
            Self::from_rgba64($crate::Rgba64::from_l16(source))
        }
        #[inline]
        fn from_la16(source: $crate::La16) -> Self {
            Self::from_rgba64($crate::Rgba64::from_la16(source))
        }
        #[inline]
        fn from_la32(source: $crate::La32) -> Self {
            Self::from_rgba64($crate::Rgba64::from_la32(source))
        }
        #[inline]
        fn from_rgb48(source: $crate::Rgb48) -> Self {
            Self::from_rgba64($crate::Rgba64::from_rgb48(source))
        }
    };
}

pub(crate) use {rgba32_siblings, rgba64_siblings};
