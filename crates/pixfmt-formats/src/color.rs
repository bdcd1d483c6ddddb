//! Format-neutral color values.
//!
//! [`Color`] is what configuration layers and color literals produce: it is
//! parsed from hex strings or CSS names, or built from raw component bytes,
//! and converted to a concrete pixel format only when it is used.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use pixfmt_core::{Error, Result, Vector4};

use crate::{Pixel, Rgba32, Rgba64, named};

/// Number of distinct colors in [`Color::web_safe_palette`].
pub const WEB_SAFE_PALETTE_LEN: usize = 140;

/// A color stored at 16 bits per channel.
///
/// ```rust
/// use pixfmt_formats::{Bgra32, Color, Pixel};
///
/// let c: Color = "#FF000080".parse().unwrap();
/// assert_eq!(c.to_pixel::<Bgra32>(), Bgra32::new(255, 0, 0, 128));
/// assert_eq!(Color::parse("Red").unwrap(), Color::RED);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(Rgba64);

impl Color {
    /// Creates a color from component bytes.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Rgba64::from_bytes(r, g, b, a))
    }

    /// Creates an opaque color from component bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    /// Creates a color from any pixel.
    #[inline]
    pub fn from_pixel<P: Pixel>(pixel: P) -> Self {
        Self(Rgba64::from_pixel(pixel))
    }

    /// Creates a color from a scaled vector.
    #[inline]
    pub fn from_vector4(v: Vector4) -> Self {
        Self(Rgba64::from_scaled_vector4(v))
    }

    /// Converts to a concrete pixel format.
    #[inline]
    pub fn to_pixel<P: Pixel>(self) -> P {
        P::from_rgba64(self.0)
    }

    /// Scaled canonical vector.
    #[inline]
    pub fn to_vector4(self) -> Vector4 {
        self.0.to_scaled_vector4()
    }

    /// Returns the color with its alpha replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let mut v = self.to_vector4();
        v.w = alpha;
        Self::from_vector4(v)
    }

    /// Parses a hex literal; see [`Rgba32::parse_hex`].
    pub fn parse_hex(hex: &str) -> Result<Self> {
        Rgba32::parse_hex(hex).map(Self::from_pixel)
    }

    /// Like [`parse_hex`](Self::parse_hex), returning `None` on failure.
    pub fn try_parse_hex(hex: &str) -> Option<Self> {
        Rgba32::try_parse_hex(hex).map(Self::from_pixel)
    }

    /// Resolves a CSS color name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name)
    }

    /// Parses a CSS color name or a hex literal.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColor`] when the input is neither.
    pub fn parse(input: &str) -> Result<Self> {
        Self::try_parse(input).ok_or_else(|| Error::unknown_color(input))
    }

    /// Like [`parse`](Self::parse), returning `None` on failure.
    pub fn try_parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_name(input).or_else(|| Self::try_parse_hex(input))
    }

    /// Uppercase `RRGGBBAA` at 8 bits per channel.
    pub fn to_hex(self) -> String {
        self.to_pixel::<Rgba32>().to_hex()
    }

    /// Every CSS named color, aliases included, in alphabetical order.
    pub fn named() -> impl Iterator<Item = (&'static str, Color)> {
        named::NAMED_COLORS.iter().copied()
    }

    /// The distinct CSS named colors, first name of each value kept.
    ///
    /// Built once on first use.
    pub fn web_safe_palette() -> &'static [Color] {
        static PALETTE: OnceLock<Vec<Color>> = OnceLock::new();
        PALETTE.get_or_init(|| {
            let mut seen = HashSet::new();
            Self::named()
                .map(|(_, color)| color)
                .filter(|color| seen.insert(*color))
                .collect()
        })
    }
}

impl From<Rgba32> for Color {
    fn from(pixel: Rgba32) -> Self {
        Self::from_pixel(pixel)
    }
}

impl From<Rgba64> for Color {
    fn from(pixel: Rgba64) -> Self {
        Self(pixel)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}
