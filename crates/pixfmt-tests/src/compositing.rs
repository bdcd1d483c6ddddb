//! Compositing identities across every blend mode and operator.

use approx::assert_abs_diff_eq;
use pixfmt_core::Vector4;
use pixfmt_formats::{Rgba32, Rgba64, RgbaVector};
use pixfmt_ops::{AlphaCompositionMode, BlendOptions, ColorBlendingMode, get_blender};

fn grid() -> Vec<Vector4> {
    let steps = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];
    let mut out = Vec::new();
    for &r in &steps {
        for &g in &steps {
            for &a in &steps {
                out.push(Vector4::new(r, g, 1.0 - r, a));
            }
        }
    }
    out
}

fn every_blender() -> impl Iterator<Item = pixfmt_ops::Blender> {
    ColorBlendingMode::ALL.into_iter().flat_map(|color| {
        AlphaCompositionMode::ALL
            .into_iter()
            .map(move |alpha| get_blender(color, alpha))
    })
}

#[test]
fn test_clear_is_transparent() {
    let inputs = grid();
    for color in ColorBlendingMode::ALL {
        let blender = get_blender(color, AlphaCompositionMode::Clear);
        for b in &inputs {
            for s in inputs.iter().step_by(7) {
                for amount in [0.0, 0.3, 1.0] {
                    assert_eq!(blender.blend_vector(*b, *s, amount).w, 0.0);
                }
            }
        }
    }
}

#[test]
fn test_src_full_opacity_is_source() {
    let inputs = grid();
    for color in ColorBlendingMode::ALL {
        let blender = get_blender(color, AlphaCompositionMode::Src);
        for b in inputs.iter().step_by(5) {
            for s in inputs.iter().filter(|s| s.w > 0.0) {
                assert_eq!(blender.blend_vector(*b, *s, 1.0), *s);
            }
        }
    }

    let blender = get_blender(ColorBlendingMode::Normal, AlphaCompositionMode::Src);
    let background = vec![Rgba32::new(9, 8, 7, 6); 50];
    let source: Vec<Rgba32> = (0..50u8).map(|i| Rgba32::new(i, i * 2, i * 3, i + 1)).collect();
    let mut destination = vec![Rgba32::default(); 50];
    blender.blend(&mut destination, &background, &source, 1.0).unwrap();
    assert_eq!(destination, source);
}

#[test]
fn test_zero_opacity_keeps_backdrop() {
    let background: Vec<Rgba64> = (0..64u16)
        .map(|i| Rgba64::new(i * 1000, 65535 - i * 900, i * 7, (i + 1) * 1000))
        .collect();
    let source = vec![RgbaVector::new(0.3, 0.6, 0.9, 1.0); 64];
    for blender in every_blender() {
        if blender.alpha_composition_mode() == AlphaCompositionMode::Clear {
            continue;
        }
        let mut destination = vec![Rgba64::default(); 64];
        blender.blend(&mut destination, &background, &source, 0.0).unwrap();
        assert_eq!(destination, background, "{blender:?}");
    }
}

#[test]
fn test_transparent_source_keeps_backdrop() {
    let b = Vector4::new(0.2, 0.4, 0.6, 0.8);
    let s = Vector4::new(1.0, 1.0, 1.0, 0.0);
    for blender in every_blender() {
        if blender.alpha_composition_mode() != AlphaCompositionMode::Clear {
            assert_eq!(blender.blend_vector(b, s, 1.0), b, "{blender:?}");
        }
    }
}

#[test]
fn test_multiply_white_and_black_backdrops() {
    let blender = get_blender(ColorBlendingMode::Multiply, AlphaCompositionMode::SrcOver);
    for s in grid().into_iter().map(|v| Vector4::new(v.x, v.y, v.z, 1.0)) {
        let on_white = blender.blend_vector(Vector4::ONE, s, 1.0);
        assert_abs_diff_eq!(on_white, s, epsilon = 1e-6);

        let on_black = blender.blend_vector(Vector4::new(0.0, 0.0, 0.0, 1.0), s, 1.0);
        assert_abs_diff_eq!(on_black, Vector4::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-6);
    }
}

#[test]
fn test_xor_symmetric_for_equal_alpha() {
    let inputs = grid();
    for color in ColorBlendingMode::ALL {
        let blender = get_blender(color, AlphaCompositionMode::Xor);
        for a in &inputs {
            for b in inputs.iter().filter(|b| b.w == a.w) {
                assert_eq!(blender.blend_vector(*a, *b, 1.0), blender.blend_vector(*b, *a, 1.0));
            }
        }
    }
}

#[test]
fn test_xor_of_transparent_inputs_is_transparent_black() {
    let inputs: Vec<Vector4> = grid().into_iter().filter(|v| v.w == 0.0).collect();
    for color in ColorBlendingMode::ALL {
        let blender = get_blender(color, AlphaCompositionMode::Xor);
        for a in &inputs {
            for b in &inputs {
                assert_eq!(blender.blend_vector(*a, *b, 1.0), Vector4::ZERO);
            }
            assert_eq!(blender.blend_vector(*a, Vector4::ONE, 0.0), Vector4::ZERO);
        }
    }

    let blender = get_blender(ColorBlendingMode::Normal, AlphaCompositionMode::Xor);
    let background = vec![Rgba32::new(10, 20, 30, 0); 5];
    let source = vec![Rgba32::new(200, 100, 50, 0); 5];
    let mut destination = vec![Rgba32::new(1, 1, 1, 1); 5];
    blender.blend(&mut destination, &background, &source, 1.0).unwrap();
    assert_eq!(destination, vec![Rgba32::new(0, 0, 0, 0); 5]);
}

#[test]
fn test_over_transparent_backdrop_is_source() {
    let backdrop = Vector4::ZERO;
    for alpha in [AlphaCompositionMode::Src, AlphaCompositionMode::SrcOver] {
        for color in ColorBlendingMode::ALL {
            let blender = get_blender(color, alpha);
            for s in grid().into_iter().filter(|s| s.w > 0.0) {
                assert_eq!(blender.blend_vector(backdrop, s, 1.0), s, "{blender:?}");
            }
        }
    }
}

#[test]
fn test_dest_is_backdrop() {
    let inputs = grid();
    for color in ColorBlendingMode::ALL {
        let blender = get_blender(color, AlphaCompositionMode::Dest);
        for b in &inputs {
            assert_eq!(blender.blend_vector(*b, Vector4::new(0.9, 0.1, 0.5, 0.7), 0.8), *b);
        }
    }
}

#[test]
fn test_results_stay_in_range() {
    let inputs = grid();
    for blender in every_blender() {
        for b in inputs.iter().step_by(3) {
            for s in inputs.iter().step_by(4) {
                let r = blender.blend_vector(*b, *s, 0.65);
                assert!(r.is_finite(), "{blender:?} {b} {s}");
                assert!((0.0..=1.0 + 1e-5).contains(&r.w), "{blender:?} {r}");
            }
        }
    }
}

#[test]
fn test_blend_options_drive_blender() {
    let opts = BlendOptions::new(ColorBlendingMode::Lighten, AlphaCompositionMode::SrcOver)
        .with_blend_percentage(1.0);
    let out = opts.blender().blend_vector(
        Vector4::new(0.2, 0.8, 0.4, 1.0),
        Vector4::new(0.6, 0.1, 0.4, 1.0),
        opts.blend_percentage,
    );
    assert_abs_diff_eq!(out, Vector4::new(0.6, 0.8, 0.4, 1.0), epsilon = 1e-6);
}
