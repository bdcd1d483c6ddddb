//! Conversion modifiers applied when moving pixels in and out of the
//! canonical vector.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bit-flag set controlling how pixels move into and out of [`Vector4`](crate::Vector4).
///
/// - [`SCALE`](Self::SCALE): use the scaled `[0, 1]` representation.
/// - [`PREMULTIPLY`](Self::PREMULTIPLY): associate alpha on the way in,
///   disassociate on the way out.
/// - [`SRGB_COMPAND`](Self::SRGB_COMPAND): expand sRGB to linear on the way in,
///   compress on the way out. Always carries [`SCALE`](Self::SCALE).
///
/// ```rust
/// use pixfmt_core::PixelConversionModifiers as M;
///
/// let m = M::SRGB_COMPAND | M::PREMULTIPLY;
/// assert!(m.is_scaled());
/// assert!(m.is_premultiplied());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelConversionModifiers(u8);

impl PixelConversionModifiers {
    /// No modifiers: native vector range, straight alpha.
    pub const NONE: Self = Self(0);
    /// Scaled `[0, 1]` vectors.
    pub const SCALE: Self = Self(1);
    /// Premultiplied alpha.
    pub const PREMULTIPLY: Self = Self(1 << 1);
    /// sRGB companding; implies [`SCALE`](Self::SCALE).
    pub const SRGB_COMPAND: Self = Self((1 << 2) | 1);

    /// Raw flag bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when every flag in `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `self` with the flags in `other` cleared.
    #[inline]
    pub const fn remove(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `self` with [`SCALE`](Self::SCALE) set.
    #[inline]
    pub const fn with_scale(self) -> Self {
        Self(self.0 | Self::SCALE.0)
    }

    /// Scaled representation requested.
    #[inline]
    pub const fn is_scaled(self) -> bool {
        self.contains(Self::SCALE)
    }

    /// Premultiplication requested.
    #[inline]
    pub const fn is_premultiplied(self) -> bool {
        self.contains(Self::PREMULTIPLY)
    }

    /// sRGB companding requested.
    #[inline]
    pub const fn is_companded(self) -> bool {
        self.contains(Self::SRGB_COMPAND)
    }

    /// Adds or removes [`SRGB_COMPAND`](Self::SRGB_COMPAND) depending on `compand`.
    ///
    /// Removing companding keeps [`SCALE`](Self::SCALE).
    #[inline]
    pub const fn apply_compand(self, compand: bool) -> Self {
        if compand {
            Self(self.0 | Self::SRGB_COMPAND.0)
        } else {
            Self((self.0 & !Self::SRGB_COMPAND.0) | (self.0 & Self::SCALE.0))
        }
    }
}

impl BitOr for PixelConversionModifiers {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PixelConversionModifiers {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PixelConversionModifiers {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for PixelConversionModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("NONE");
        }
        let mut names = Vec::new();
        if self.is_companded() {
            names.push("SRGB_COMPAND");
        } else if self.is_scaled() {
            names.push("SCALE");
        }
        if self.is_premultiplied() {
            names.push("PREMULTIPLY");
        }
        f.write_str(&names.join(" | "))
    }
}
