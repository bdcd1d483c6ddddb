//! Color palettes packed into pixel formats.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_formats::{Bgr565, WEB_SAFE_PALETTE_LEN};
//! use pixfmt_ops::palette;
//!
//! let palette = palette::web_safe::<Bgr565>().unwrap();
//! assert_eq!(palette.len(), WEB_SAFE_PALETTE_LEN);
//! ```

use pixfmt_core::Result;
use pixfmt_formats::{Color, Rgba64};
use tracing::debug;

use crate::{PixelOps, convert};

/// Packs colors into `P` through the bulk dispatcher.
pub fn to_pixels<P: PixelOps>(colors: &[Color]) -> Result<Vec<P>> {
    let wide: Vec<Rgba64> = colors.iter().map(|c| c.to_pixel::<Rgba64>()).collect();
    let mut out = vec![P::default(); wide.len()];
    convert(&wide, &mut out)?;
    Ok(out)
}

/// The distinct CSS named colors packed into `P`, in table order.
pub fn web_safe<P: PixelOps>() -> Result<Vec<P>> {
    let colors = Color::web_safe_palette();
    debug!(format = P::NAME, len = colors.len(), "packing web-safe palette");
    to_pixels(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfmt_formats::{Pixel, Rgba32, WEB_SAFE_PALETTE_LEN};
    use std::collections::HashSet;

    #[test]
    fn test_web_safe_distinct() {
        let palette = web_safe::<Rgba32>().unwrap();
        assert_eq!(palette.len(), WEB_SAFE_PALETTE_LEN);
        let unique: HashSet<u32> = palette.iter().map(|p| p.packed()).collect();
        assert_eq!(unique.len(), WEB_SAFE_PALETTE_LEN);
    }

    #[test]
    fn test_to_pixels_matches_color() {
        let colors = [Color::from_rgb(10, 20, 30), Color::from_rgba(1, 2, 3, 4)];
        let pixels = to_pixels::<Rgba32>(&colors).unwrap();
        assert_eq!(pixels, vec![Rgba32::new(10, 20, 30, 255), Rgba32::new(1, 2, 3, 4)]);
    }
}
