//! Pixel format metadata.
//!
//! Each format publishes a [`PixelTypeInfo`] as an associated constant, so
//! the descriptor is built once at compile time and invalid metadata fails
//! the build. [`PixelComponentInfo::new`] is the fallible runtime path for
//! callers describing formats of their own.

use std::fmt;
use std::ops::BitOr;

use crate::{Error, Result};

/// Maximum number of components a descriptor can hold.
pub const MAX_COMPONENTS: usize = 16;

/// Component count, per-component precision and padding of a pixel format.
///
/// Invariant: `sum(precisions) + padding == bits_per_pixel`.
///
/// ```rust
/// use pixfmt_core::PixelComponentInfo;
///
/// let info = PixelComponentInfo::new(16, &[5, 6, 5]).unwrap();
/// assert_eq!(info.component_count(), 3);
/// assert_eq!(info.padding(), 0);
/// assert_eq!(info.component_precision(1).unwrap(), 6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelComponentInfo {
    count: u8,
    padding: u32,
    precisions: [u8; MAX_COMPONENTS],
}

impl PixelComponentInfo {
    /// Builds a descriptor, validating every precision.
    ///
    /// # Errors
    ///
    /// - [`Error::TooManyComponents`] for more than 16 precisions
    /// - [`Error::PrecisionOutOfRange`] for a precision above 255
    /// - [`Error::PrecisionExceedsBits`] when precisions exceed `bits_per_pixel`
    pub fn new(bits_per_pixel: u32, precisions: &[u32]) -> Result<Self> {
        if precisions.len() > MAX_COMPONENTS {
            return Err(Error::TooManyComponents(precisions.len()));
        }
        let mut packed = [0u8; MAX_COMPONENTS];
        let mut total = 0u32;
        for (index, &precision) in precisions.iter().enumerate() {
            if precision > u8::MAX as u32 {
                return Err(Error::PrecisionOutOfRange { index, precision });
            }
            packed[index] = precision as u8;
            total += precision;
        }
        if total > bits_per_pixel {
            return Err(Error::PrecisionExceedsBits {
                total,
                bits: bits_per_pixel,
            });
        }
        Ok(Self {
            count: precisions.len() as u8,
            padding: bits_per_pixel - total,
            precisions: packed,
        })
    }

    /// Compile-time constructor for built-in formats.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) on the same
    /// conditions [`new`](Self::new) reports as errors.
    pub const fn from_precisions(bits_per_pixel: u32, precisions: &[u8]) -> Self {
        assert!(precisions.len() <= MAX_COMPONENTS, "too many components");
        let mut packed = [0u8; MAX_COMPONENTS];
        let mut total = 0u32;
        let mut i = 0;
        while i < precisions.len() {
            packed[i] = precisions[i];
            total += precisions[i] as u32;
            i += 1;
        }
        assert!(total <= bits_per_pixel, "precisions exceed pixel size");
        Self {
            count: precisions.len() as u8,
            padding: bits_per_pixel - total,
            precisions: packed,
        }
    }

    /// Number of components.
    #[inline]
    pub const fn component_count(&self) -> usize {
        self.count as usize
    }

    /// Unused bits in the pixel.
    #[inline]
    pub const fn padding(&self) -> u32 {
        self.padding
    }

    /// Total bits: precisions plus padding.
    pub fn bits_per_pixel(&self) -> u32 {
        self.precisions().iter().map(|&p| p as u32).sum::<u32>() + self.padding
    }

    /// Precisions of the declared components.
    #[inline]
    pub fn precisions(&self) -> &[u8] {
        &self.precisions[..self.count as usize]
    }

    /// Precision of one component.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentIndexOutOfRange`] past the component count.
    pub fn component_precision(&self, index: usize) -> Result<u32> {
        self.precisions()
            .get(index)
            .map(|&p| p as u32)
            .ok_or(Error::ComponentIndexOutOfRange {
                index,
                count: self.count as usize,
            })
    }

    /// Largest component precision, 0 for an empty descriptor.
    pub fn max_precision(&self) -> u32 {
        self.precisions().iter().copied().max().unwrap_or(0) as u32
    }

    /// Smallest component precision, 0 for an empty descriptor.
    pub fn min_precision(&self) -> u32 {
        self.precisions().iter().copied().min().unwrap_or(0) as u32
    }
}

impl fmt::Debug for PixelComponentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelComponentInfo")
            .field("precisions", &self.precisions())
            .field("padding", &self.padding)
            .finish()
    }
}

/// How alpha is stored by a format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PixelAlphaRepresentation {
    /// No alpha channel.
    #[default]
    None,
    /// Color is premultiplied by alpha.
    Associated,
    /// Color is independent of alpha.
    Unassociated,
}

/// Channel semantics of a format as a bit-flag set.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelColorType(u16);

impl PixelColorType {
    /// Red channel present.
    pub const RED: Self = Self(1);
    /// Green channel present.
    pub const GREEN: Self = Self(1 << 1);
    /// Blue channel present.
    pub const BLUE: Self = Self(1 << 2);
    /// Alpha channel present.
    pub const ALPHA: Self = Self(1 << 3);
    /// Single luminance channel.
    pub const LUMINANCE: Self = Self(1 << 4);
    /// Color channels stored blue first.
    pub const BGR_ORDER: Self = Self(1 << 5);
    /// Channels are generic vector components rather than colors.
    pub const VECTOR: Self = Self(1 << 6);

    /// Red, green, blue.
    pub const RGB: Self = Self(Self::RED.0 | Self::GREEN.0 | Self::BLUE.0);
    /// Red, green, blue, alpha.
    pub const RGBA: Self = Self(Self::RGB.0 | Self::ALPHA.0);
    /// Blue, green, red.
    pub const BGR: Self = Self(Self::RGB.0 | Self::BGR_ORDER.0);
    /// Blue, green, red, alpha.
    pub const BGRA: Self = Self(Self::BGR.0 | Self::ALPHA.0);
    /// Luminance with alpha.
    pub const LUMINANCE_ALPHA: Self = Self(Self::LUMINANCE.0 | Self::ALPHA.0);

    /// True when every flag in `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Const-friendly union.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for PixelColorType {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for PixelColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(PixelColorType, &str); 7] = [
            (PixelColorType::RED, "RED"),
            (PixelColorType::GREEN, "GREEN"),
            (PixelColorType::BLUE, "BLUE"),
            (PixelColorType::ALPHA, "ALPHA"),
            (PixelColorType::LUMINANCE, "LUMINANCE"),
            (PixelColorType::BGR_ORDER, "BGR_ORDER"),
            (PixelColorType::VECTOR, "VECTOR"),
        ];
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "PixelColorType({})", set.join(" | "))
    }
}

/// Complete descriptor of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelTypeInfo {
    /// Total bits per pixel.
    pub bits_per_pixel: u32,
    /// Per-component layout.
    pub component_info: PixelComponentInfo,
    /// Channel semantics.
    pub color_type: PixelColorType,
    /// Alpha storage.
    pub alpha_representation: PixelAlphaRepresentation,
}

impl PixelTypeInfo {
    /// Compile-time constructor for built-in formats.
    pub const fn new(
        bits_per_pixel: u32,
        precisions: &[u8],
        color_type: PixelColorType,
        alpha_representation: PixelAlphaRepresentation,
    ) -> Self {
        Self {
            bits_per_pixel,
            component_info: PixelComponentInfo::from_precisions(bits_per_pixel, precisions),
            color_type,
            alpha_representation,
        }
    }

    /// Bytes per pixel, rounded up.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel.div_ceil(8) as usize
    }

    /// True when the format stores alpha.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        !matches!(self.alpha_representation, PixelAlphaRepresentation::None)
    }
}
