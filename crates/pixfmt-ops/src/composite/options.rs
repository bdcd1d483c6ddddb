//! Graphics options carried by drawing layers.

use super::{AlphaCompositionMode, Blender, ColorBlendingMode, get_blender};

/// How a layer is blended onto its backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlendOptions {
    /// Opacity of the layer, `[0, 1]`.
    pub blend_percentage: f32,
    /// Color mixing function.
    pub color_blending_mode: ColorBlendingMode,
    /// Porter-Duff operator.
    pub alpha_composition_mode: AlphaCompositionMode,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            blend_percentage: 1.0,
            color_blending_mode: ColorBlendingMode::Normal,
            alpha_composition_mode: AlphaCompositionMode::SrcOver,
        }
    }
}

impl BlendOptions {
    /// Options for a mode pair at full opacity.
    pub fn new(color: ColorBlendingMode, alpha: AlphaCompositionMode) -> Self {
        Self {
            color_blending_mode: color,
            alpha_composition_mode: alpha,
            ..Self::default()
        }
    }

    /// Sets the opacity.
    pub fn with_blend_percentage(mut self, percentage: f32) -> Self {
        self.blend_percentage = percentage;
        self
    }

    /// The blender for these modes.
    pub fn blender(&self) -> Blender {
        get_blender(self.color_blending_mode, self.alpha_composition_mode)
    }
}
