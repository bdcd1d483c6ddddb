//! Blend functions, Porter-Duff laws and the kernel table.
//!
//! All inputs are straight (non-premultiplied) scaled vectors with alpha in
//! `w`. A kernel scales the source alpha by the opacity, returns the backdrop
//! untouched when the source then contributes nothing (`Clear` and a
//! transparent `Xor` excepted), mixes colors with the blend function and
//! weights the three regions with the operator's law:
//!
//! ```text
//! xw = b.a * s.a        overlap, colored by blend(b, s)
//! bw = b.a - xw         backdrop only
//! sw = s.a - xw         source only
//! ```
//!
//! One kernel per (blend mode, operator) pair is monomorphized into
//! [`KERNELS`] so the per-pixel loop makes no decisions.

use pixfmt_core::Vector4;
use pixfmt_core::numerics::EPSILON;
use pixfmt_core::vector::with_w;

use super::modes::{AlphaCompositionMode, ColorBlendingMode};

/// A resolved per-pixel kernel: `(backdrop, source, opacity) -> result`.
pub(crate) type BlendKernel = fn(Vector4, Vector4, f32) -> Vector4;

trait BlendFunction {
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4;
}

struct Normal;
struct Multiply;
struct Add;
struct Subtract;
struct Screen;
struct Darken;
struct Lighten;
struct Overlay;
struct HardLight;

impl BlendFunction for Normal {
    #[inline(always)]
    fn blend(_backdrop: Vector4, source: Vector4) -> Vector4 {
        source
    }
}

impl BlendFunction for Multiply {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        backdrop * source
    }
}

impl BlendFunction for Add {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        (backdrop + source).min(Vector4::ONE)
    }
}

impl BlendFunction for Subtract {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        (backdrop - source).max(Vector4::ZERO)
    }
}

impl BlendFunction for Screen {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        Vector4::ONE - (Vector4::ONE - source) * (Vector4::ONE - backdrop)
    }
}

impl BlendFunction for Darken {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        backdrop.min(source)
    }
}

impl BlendFunction for Lighten {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        backdrop.max(source)
    }
}

/// Multiplies where `d <= 0.5`, screens above.
#[inline(always)]
fn overlay_channel(d: f32, e: f32) -> f32 {
    if d <= 0.5 {
        2.0 * d * e
    } else {
        1.0 - 2.0 * (1.0 - e) * (1.0 - d)
    }
}

impl BlendFunction for Overlay {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        Vector4::new(
            overlay_channel(backdrop.x, source.x),
            overlay_channel(backdrop.y, source.y),
            overlay_channel(backdrop.z, source.z),
            0.0,
        )
        .min(Vector4::ONE)
    }
}

impl BlendFunction for HardLight {
    #[inline(always)]
    fn blend(backdrop: Vector4, source: Vector4) -> Vector4 {
        Vector4::new(
            overlay_channel(source.x, backdrop.x),
            overlay_channel(source.y, backdrop.y),
            overlay_channel(source.z, backdrop.z),
            0.0,
        )
        .min(Vector4::ONE)
    }
}

/// Divides weighted color by alpha and stores alpha in `w`.
#[inline(always)]
fn resolve(color: Vector4, alpha: f32) -> Vector4 {
    with_w(color / alpha.max(EPSILON), alpha)
}

/// A transparent `dst` yields `src` exactly.
#[inline(always)]
fn over(dst: Vector4, src: Vector4, blend: Vector4) -> Vector4 {
    if dst.w == 0.0 {
        return src;
    }
    let blend_w = dst.w * src.w;
    let dst_w = dst.w - blend_w;
    let src_w = src.w - blend_w;
    let alpha = dst_w + src_w + blend_w;
    resolve(dst * dst_w + src * src_w + blend * blend_w, alpha)
}

#[inline(always)]
fn atop(dst: Vector4, src: Vector4, blend: Vector4) -> Vector4 {
    let blend_w = dst.w * src.w;
    let dst_w = dst.w - blend_w;
    resolve(dst * dst_w + blend * blend_w, dst.w)
}

#[inline(always)]
fn inside(dst: Vector4, src: Vector4) -> Vector4 {
    let alpha = dst.w * src.w;
    resolve(src * alpha, alpha)
}

#[inline(always)]
fn outside(dst: Vector4, src: Vector4) -> Vector4 {
    let alpha = (1.0 - dst.w) * src.w;
    resolve(src * alpha, alpha)
}

#[inline(always)]
fn xor(dst: Vector4, src: Vector4) -> Vector4 {
    let src_w = 1.0 - dst.w;
    let dst_w = 1.0 - src.w;
    let alpha = src.w * src_w + dst.w * dst_w;
    resolve(src * (src.w * src_w) + dst * (dst.w * dst_w), alpha)
}

trait Composition {
    /// Result when the source has zero effective alpha.
    #[inline(always)]
    fn invisible_source(backdrop: Vector4) -> Vector4 {
        backdrop
    }

    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4;
}

struct SrcOver;
struct Src;
struct SrcAtop;
struct SrcIn;
struct SrcOut;
struct Dest;
struct DestAtop;
struct DestOver;
struct DestIn;
struct DestOut;
struct Clear;
struct Xor;

impl Composition for SrcOver {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        over(backdrop, source, B::blend(backdrop, source))
    }
}

impl Composition for Src {
    #[inline(always)]
    fn compose<B: BlendFunction>(_backdrop: Vector4, source: Vector4) -> Vector4 {
        source
    }
}

impl Composition for SrcAtop {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        atop(backdrop, source, B::blend(backdrop, source))
    }
}

impl Composition for SrcIn {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        inside(backdrop, source)
    }
}

impl Composition for SrcOut {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        outside(backdrop, source)
    }
}

impl Composition for Dest {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, _source: Vector4) -> Vector4 {
        backdrop
    }
}

impl Composition for DestAtop {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        atop(source, backdrop, B::blend(source, backdrop))
    }
}

impl Composition for DestOver {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        over(source, backdrop, B::blend(source, backdrop))
    }
}

impl Composition for DestIn {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        inside(source, backdrop)
    }
}

impl Composition for DestOut {
    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        outside(source, backdrop)
    }
}

impl Composition for Clear {
    #[inline(always)]
    fn invisible_source(_backdrop: Vector4) -> Vector4 {
        Vector4::ZERO
    }

    #[inline(always)]
    fn compose<B: BlendFunction>(_backdrop: Vector4, _source: Vector4) -> Vector4 {
        Vector4::ZERO
    }
}

impl Composition for Xor {
    /// Two transparent inputs give transparent black, whichever side is the
    /// backdrop.
    #[inline(always)]
    fn invisible_source(backdrop: Vector4) -> Vector4 {
        if backdrop.w == 0.0 { Vector4::ZERO } else { backdrop }
    }

    #[inline(always)]
    fn compose<B: BlendFunction>(backdrop: Vector4, source: Vector4) -> Vector4 {
        xor(backdrop, source)
    }
}

/// `opacity` must already be clamped to `[0, 1]`.
fn kernel<B: BlendFunction, C: Composition>(
    backdrop: Vector4,
    source: Vector4,
    opacity: f32,
) -> Vector4 {
    let source = with_w(source, source.w * opacity);
    if source.w == 0.0 {
        return C::invisible_source(backdrop);
    }
    C::compose::<B>(backdrop, source)
}

macro_rules! kernel_row {
    ($blend:ty) => {
        [
            kernel::<$blend, SrcOver>,
            kernel::<$blend, Src>,
            kernel::<$blend, SrcAtop>,
            kernel::<$blend, SrcIn>,
            kernel::<$blend, SrcOut>,
            kernel::<$blend, Dest>,
            kernel::<$blend, DestAtop>,
            kernel::<$blend, DestOver>,
            kernel::<$blend, DestIn>,
            kernel::<$blend, DestOut>,
            kernel::<$blend, Clear>,
            kernel::<$blend, Xor>,
        ]
    };
}

/// Kernels indexed by `[ColorBlendingMode as usize][AlphaCompositionMode as usize]`.
static KERNELS: [[BlendKernel; AlphaCompositionMode::COUNT]; ColorBlendingMode::COUNT] = [
    kernel_row!(Normal),
    kernel_row!(Multiply),
    kernel_row!(Add),
    kernel_row!(Subtract),
    kernel_row!(Screen),
    kernel_row!(Darken),
    kernel_row!(Lighten),
    kernel_row!(Overlay),
    kernel_row!(HardLight),
];

/// Looks up the kernel for a mode pair.
#[inline]
pub(crate) fn resolve_kernel(
    color: ColorBlendingMode,
    alpha: AlphaCompositionMode,
) -> BlendKernel {
    KERNELS[color as usize][alpha as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn run(color: ColorBlendingMode, alpha: AlphaCompositionMode, b: Vector4, s: Vector4, o: f32) -> Vector4 {
        resolve_kernel(color, alpha)(b, s, o)
    }

    #[test]
    fn test_normal_src_over_half_black() {
        let r = run(
            ColorBlendingMode::Normal,
            AlphaCompositionMode::SrcOver,
            Vector4::ONE,
            Vector4::new(0.0, 0.0, 0.0, 0.8),
            0.5,
        );
        assert_abs_diff_eq!(r, Vector4::new(0.6, 0.6, 0.6, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_multiply_src_over() {
        let r = run(
            ColorBlendingMode::Multiply,
            AlphaCompositionMode::SrcOver,
            Vector4::splat(0.9),
            Vector4::splat(0.4),
            0.5,
        );
        assert_abs_diff_eq!(r, Vector4::new(0.783_478_3, 0.783_478_3, 0.783_478_3, 0.92), epsilon = 1e-5);
    }

    #[test]
    fn test_subtract_and_screen() {
        let b = Vector4::new(0.2, 0.2, 0.2, 0.3);
        let s = Vector4::new(0.3, 0.3, 0.3, 0.2);
        let sub = run(ColorBlendingMode::Subtract, AlphaCompositionMode::SrcOver, b, s, 0.5);
        assert_abs_diff_eq!(sub, Vector4::new(0.202_702_7, 0.202_702_7, 0.202_702_7, 0.37), epsilon = 1e-5);
        let scr = run(ColorBlendingMode::Screen, AlphaCompositionMode::SrcOver, b, s, 0.5);
        assert_abs_diff_eq!(scr, Vector4::new(0.238_378_4, 0.238_378_4, 0.238_378_4, 0.37), epsilon = 1e-5);
    }

    #[test]
    fn test_overlay_and_hard_light_swap_operands() {
        let b = Vector4::new(0.2, 0.8, 0.5, 1.0);
        let s = Vector4::new(0.7, 0.3, 0.6, 1.0);
        let ov = Overlay::blend(b, s);
        let hl = HardLight::blend(s, b);
        assert_abs_diff_eq!(ov.truncate(), hl.truncate(), epsilon = 1e-6);
        assert_abs_diff_eq!(ov.x, 2.0 * 0.2 * 0.7, epsilon = 1e-6);
        assert_abs_diff_eq!(ov.y, 1.0 - 2.0 * 0.7 * 0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(ov.z, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_add_and_subtract_clamp() {
        let b = Vector4::new(0.7, 0.1, 0.0, 1.0);
        let s = Vector4::new(0.6, 0.3, 0.0, 1.0);
        assert_eq!(Add::blend(b, s).x, 1.0);
        assert_eq!(Subtract::blend(b, s).y, 0.0);
    }

    #[test]
    fn test_invisible_source_returns_backdrop() {
        let b = Vector4::new(0.1, 0.2, 0.3, 0.4);
        let s = Vector4::new(0.9, 0.8, 0.7, 1.0);
        for color in ColorBlendingMode::ALL {
            for alpha in AlphaCompositionMode::ALL {
                let r = run(color, alpha, b, s, 0.0);
                if alpha == AlphaCompositionMode::Clear {
                    assert_eq!(r, Vector4::ZERO);
                } else {
                    assert_eq!(r, b, "{color} {alpha}");
                }
            }
        }
    }

    #[test]
    fn test_xor_of_two_transparent_inputs() {
        let a = Vector4::new(0.0, 0.0, 1.0, 0.0);
        let b = Vector4::new(0.0, 0.1, 1.0, 0.0);
        for color in ColorBlendingMode::ALL {
            assert_eq!(run(color, AlphaCompositionMode::Xor, a, b, 1.0), Vector4::ZERO);
            assert_eq!(run(color, AlphaCompositionMode::Xor, b, a, 1.0), Vector4::ZERO);
            assert_eq!(run(color, AlphaCompositionMode::Xor, b, Vector4::ONE, 0.0), Vector4::ZERO);
        }
        let opaque = Vector4::new(0.3, 0.2, 0.1, 1.0);
        assert_eq!(run(ColorBlendingMode::Normal, AlphaCompositionMode::Xor, opaque, a, 1.0), opaque);
    }

    #[test]
    fn test_src_over_transparent_backdrop_is_exact() {
        let b = Vector4::new(0.9, 0.9, 0.9, 0.0);
        let s = Vector4::new(0.1, 0.7, 0.3, 0.6);
        for color in ColorBlendingMode::ALL {
            assert_eq!(run(color, AlphaCompositionMode::SrcOver, b, s, 1.0), s, "{color}");
        }
        let half = run(ColorBlendingMode::Normal, AlphaCompositionMode::SrcOver, b, s, 0.5);
        assert_eq!(half, Vector4::new(0.1, 0.7, 0.3, 0.3));
    }

    #[test]
    fn test_in_and_out_alpha() {
        let b = Vector4::new(0.0, 0.0, 1.0, 0.5);
        let s = Vector4::new(1.0, 0.0, 0.0, 1.0);
        let r_in = run(ColorBlendingMode::Normal, AlphaCompositionMode::SrcIn, b, s, 1.0);
        assert_abs_diff_eq!(r_in, Vector4::new(1.0, 0.0, 0.0, 0.5), epsilon = 1e-6);
        let r_out = run(ColorBlendingMode::Normal, AlphaCompositionMode::SrcOut, b, s, 1.0);
        assert_abs_diff_eq!(r_out, Vector4::new(1.0, 0.0, 0.0, 0.5), epsilon = 1e-6);
        let d_in = run(ColorBlendingMode::Normal, AlphaCompositionMode::DestIn, b, s, 1.0);
        assert_abs_diff_eq!(d_in, Vector4::new(0.0, 0.0, 1.0, 0.5), epsilon = 1e-6);
        let d_out = run(ColorBlendingMode::Normal, AlphaCompositionMode::DestOut, b, s, 1.0);
        assert_eq!(d_out.w, 0.0);
    }

    #[test]
    fn test_atop_keeps_backdrop_alpha() {
        let b = Vector4::new(0.0, 0.0, 1.0, 0.25);
        let s = Vector4::new(1.0, 0.0, 0.0, 1.0);
        let r = run(ColorBlendingMode::Normal, AlphaCompositionMode::SrcAtop, b, s, 1.0);
        assert_abs_diff_eq!(r, Vector4::new(1.0, 0.0, 0.0, 0.25), epsilon = 1e-6);
        let d = run(ColorBlendingMode::Normal, AlphaCompositionMode::DestAtop, b, s, 1.0);
        assert_abs_diff_eq!(d.w, 1.0, epsilon = 1e-6);
    }
}
