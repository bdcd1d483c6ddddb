//! Concrete end-to-end scenarios.

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use pixfmt_core::{PixelConversionModifiers, Vector4};
use pixfmt_formats::{
    Abgr32, Argb32, Bgra32, Bgra5551, Color, Pixel, Rgba32, WEB_SAFE_PALETTE_LEN,
};
use pixfmt_ops::{AlphaCompositionMode, ColorBlendingMode, PixelOps, get_blender, palette};

#[test]
fn test_rgba32_red_to_vector() {
    let red = Rgba32::new(255, 0, 0, 255);
    assert_eq!(red.to_vector4(), Vector4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(red.to_scaled_vector4(), Vector4::new(1.0, 0.0, 0.0, 1.0));

    let mut bulk = [Vector4::ZERO; 3];
    Rgba32::operations()
        .to_vector4(&[red; 3], &mut bulk, PixelConversionModifiers::NONE)
        .unwrap();
    assert_eq!(bulk, [Vector4::new(1.0, 0.0, 0.0, 1.0); 3]);
}

#[test]
fn test_half_gray_rounds_up() {
    let v = Vector4::new(0.5, 0.5, 0.5, 1.0);
    assert_eq!(Rgba32::from_vector4(v), Rgba32::new(128, 128, 128, 255));
    assert_eq!(Bgra32::from_vector4(v), Bgra32::new(128, 128, 128, 255));
    assert_eq!(Argb32::from_vector4(v), Argb32::new(128, 128, 128, 255));
    assert_eq!(Abgr32::from_vector4(v), Abgr32::new(128, 128, 128, 255));

    // 20 elements: two full SIMD lanes of 8 plus a scalar tail
    let mut vectors = vec![v; 20];
    let mut out = vec![Rgba32::default(); 20];
    Rgba32::operations()
        .from_vector4_destructive(&mut vectors, &mut out, PixelConversionModifiers::SCALE)
        .unwrap();
    assert!(out.iter().all(|p| *p == Rgba32::new(128, 128, 128, 255)));
}

#[test]
fn test_bgra5551_opaque_red() {
    let p = Bgra5551::from_vector4(Vector4::new(1.0, 0.0, 0.0, 1.0));
    let bits = p.packed();
    assert_eq!(bits >> 15, 1, "alpha bit");
    assert_eq!((bits >> 10) & 0x1F, 31, "red");
    assert_eq!((bits >> 5) & 0x1F, 0, "green");
    assert_eq!(bits & 0x1F, 0, "blue");
    assert_eq!(bits, 0xFC00);
}

#[test]
fn test_red_under_half_green() {
    let blender = get_blender(ColorBlendingMode::Normal, AlphaCompositionMode::SrcOver);
    let out = blender.blend_vector(
        Vector4::new(1.0, 0.0, 0.0, 1.0),
        Vector4::new(0.0, 1.0, 0.0, 1.0),
        0.5,
    );
    assert_abs_diff_eq!(out, Vector4::new(0.5, 0.5, 0.0, 1.0), epsilon = 1e-6);

    let background = [Rgba32::new(255, 0, 0, 255); 9];
    let source = [Rgba32::new(0, 255, 0, 255); 9];
    let mut destination = [Rgba32::default(); 9];
    blender.blend(&mut destination, &background, &source, 0.5).unwrap();
    assert_eq!(destination, [Rgba32::new(128, 128, 0, 255); 9]);

    let single: Rgba32 = blender.blend_pixel(background[0], source[0], 0.5);
    assert_eq!(single, destination[0]);
}

#[test]
fn test_web_safe_palette_count() {
    let colors = Color::web_safe_palette();
    assert_eq!(colors.len(), WEB_SAFE_PALETTE_LEN);
    let unique: HashSet<Color> = colors.iter().copied().collect();
    assert_eq!(unique.len(), WEB_SAFE_PALETTE_LEN);

    let packed = palette::web_safe::<Bgra32>().unwrap();
    let unique: HashSet<u32> = packed.iter().map(|p| p.packed()).collect();
    assert_eq!(unique.len(), WEB_SAFE_PALETTE_LEN);
}
