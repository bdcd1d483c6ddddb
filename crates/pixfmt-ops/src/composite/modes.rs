//! Blend mode and composition operator selectors.

use std::fmt;

/// Color mixing function applied before alpha composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorBlendingMode {
    /// Source color replaces the backdrop.
    #[default]
    Normal,
    /// `b * s`.
    Multiply,
    /// `min(1, b + s)`.
    Add,
    /// `max(0, b - s)`.
    Subtract,
    /// `1 - (1 - b)(1 - s)`.
    Screen,
    /// Per channel minimum.
    Darken,
    /// Per channel maximum.
    Lighten,
    /// Multiply or screen depending on the backdrop.
    Overlay,
    /// Multiply or screen depending on the source.
    HardLight,
}

impl ColorBlendingMode {
    /// Number of blend modes.
    pub const COUNT: usize = 9;

    /// Every blend mode, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Normal,
        Self::Multiply,
        Self::Add,
        Self::Subtract,
        Self::Screen,
        Self::Darken,
        Self::Lighten,
        Self::Overlay,
        Self::HardLight,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Multiply => "Multiply",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Screen => "Screen",
            Self::Darken => "Darken",
            Self::Lighten => "Lighten",
            Self::Overlay => "Overlay",
            Self::HardLight => "HardLight",
        }
    }
}

impl fmt::Display for ColorBlendingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Porter-Duff composition operator.
///
/// `Src*` operators place the source relative to the backdrop; `Dest*`
/// operators are the same laws with the two inputs exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphaCompositionMode {
    /// Source over backdrop.
    #[default]
    SrcOver,
    /// Source only.
    Src,
    /// Source where the backdrop is opaque, backdrop elsewhere.
    SrcAtop,
    /// Source where the backdrop is opaque.
    SrcIn,
    /// Source where the backdrop is transparent.
    SrcOut,
    /// Backdrop only.
    Dest,
    /// Backdrop where the source is opaque, source elsewhere.
    DestAtop,
    /// Backdrop over source.
    DestOver,
    /// Backdrop where the source is opaque.
    DestIn,
    /// Backdrop where the source is transparent.
    DestOut,
    /// Transparent black.
    Clear,
    /// Source and backdrop where they do not overlap.
    Xor,
}

impl AlphaCompositionMode {
    /// Number of composition operators.
    pub const COUNT: usize = 12;

    /// Every operator, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::SrcOver,
        Self::Src,
        Self::SrcAtop,
        Self::SrcIn,
        Self::SrcOut,
        Self::Dest,
        Self::DestAtop,
        Self::DestOver,
        Self::DestIn,
        Self::DestOut,
        Self::Clear,
        Self::Xor,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SrcOver => "SrcOver",
            Self::Src => "Src",
            Self::SrcAtop => "SrcAtop",
            Self::SrcIn => "SrcIn",
            Self::SrcOut => "SrcOut",
            Self::Dest => "Dest",
            Self::DestAtop => "DestAtop",
            Self::DestOver => "DestOver",
            Self::DestIn => "DestIn",
            Self::DestOut => "DestOut",
            Self::Clear => "Clear",
            Self::Xor => "Xor",
        }
    }
}

impl fmt::Display for AlphaCompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
