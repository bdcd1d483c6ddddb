//! Error types for pixfmt operations.
//!
//! Every error in this crate family is a contract violation detected at the
//! call site: mismatched buffer lengths, malformed metadata, malformed color
//! literals. Numeric edge cases (NaN, out-of-range floats) are clamped by the
//! codecs and never surface here.
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::{Error, Result, ensure_same_len};
//!
//! fn copy(src: &[u8], dst: &mut [u8]) -> Result<()> {
//!     ensure_same_len("destination", src.len(), dst.len())?;
//!     dst.copy_from_slice(src);
//!     Ok(())
//! }
//!
//! assert!(copy(&[1, 2], &mut [0; 3]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for `Error` and `Display`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by pixel format and bulk operation entry points.
///
/// # Categories
///
/// - **Buffer guards**: [`LengthMismatch`](Error::LengthMismatch), [`TooShort`](Error::TooShort)
/// - **Metadata**: [`TooManyComponents`](Error::TooManyComponents),
///   [`PrecisionOutOfRange`](Error::PrecisionOutOfRange),
///   [`PrecisionExceedsBits`](Error::PrecisionExceedsBits),
///   [`ComponentIndexOutOfRange`](Error::ComponentIndexOutOfRange)
/// - **Color literals**: [`InvalidHex`](Error::InvalidHex), [`UnknownColor`](Error::UnknownColor)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two buffers that must be the same length are not.
    #[error("length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the offending buffer
        what: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A buffer is shorter than the operation requires.
    #[error("{what} too short: need at least {required}, got {actual}")]
    TooShort {
        /// Name of the offending buffer
        what: &'static str,
        /// Minimum length
        required: usize,
        /// Actual length
        actual: usize,
    },

    /// Component metadata lists more components than can be described.
    #[error("too many components: {0} (maximum is 16)")]
    TooManyComponents(usize),

    /// A single component precision does not fit in a byte.
    #[error("component {index} precision {precision} exceeds 255 bits")]
    PrecisionOutOfRange {
        /// Component index
        index: usize,
        /// Declared precision
        precision: u32,
    },

    /// Component precisions add up to more than the pixel size.
    #[error("component precisions total {total} bits but the pixel has {bits}")]
    PrecisionExceedsBits {
        /// Sum of component precisions
        total: u32,
        /// Bits per pixel
        bits: u32,
    },

    /// A component index is past the component count.
    #[error("component index {index} out of range for {count} components")]
    ComponentIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Component count
        count: usize,
    },

    /// A hex color literal could not be parsed.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A color name is not in the named-color table.
    #[error("unknown color: {0:?}")]
    UnknownColor(String),
}

impl Error {
    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Creates an [`Error::TooShort`] error.
    #[inline]
    pub fn too_short(what: &'static str, required: usize, actual: usize) -> Self {
        Self::TooShort {
            what,
            required,
            actual,
        }
    }

    /// Creates an [`Error::InvalidHex`] error.
    #[inline]
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex(input.into())
    }

    /// Creates an [`Error::UnknownColor`] error.
    #[inline]
    pub fn unknown_color(name: impl Into<String>) -> Self {
        Self::UnknownColor(name.into())
    }

    /// Returns `true` if this is a buffer size guard failure.
    #[inline]
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::TooShort { .. })
    }

    /// Returns `true` if this is a component metadata error.
    #[inline]
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            Self::TooManyComponents(_)
                | Self::PrecisionOutOfRange { .. }
                | Self::PrecisionExceedsBits { .. }
                | Self::ComponentIndexOutOfRange { .. }
        )
    }
}

/// Fails with [`Error::LengthMismatch`] unless `actual == expected`.
#[inline]
pub fn ensure_same_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::length_mismatch(what, expected, actual))
    }
}

/// Fails with [`Error::TooShort`] unless `actual >= required`.
#[inline]
pub fn ensure_min_len(what: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual >= required {
        Ok(())
    } else {
        Err(Error::too_short(what, required, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        let err = ensure_same_len("destination", 10, 8).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("destination"));
        assert!(msg.contains("10"));
        assert!(msg.contains('8'));
        assert!(err.is_length_error());
    }

    #[test]
    fn test_min_len() {
        assert!(ensure_min_len("source", 4, 4).is_ok());
        assert!(ensure_min_len("source", 4, 9).is_ok());
        let err = ensure_min_len("source", 4, 3).unwrap_err();
        assert_eq!(err, Error::too_short("source", 4, 3));
    }

    #[test]
    fn test_metadata_errors() {
        assert!(Error::TooManyComponents(17).is_metadata_error());
        assert!(!Error::invalid_hex("#zz").is_metadata_error());
        assert!(Error::invalid_hex("#zz").to_string().contains("#zz"));
    }
}
