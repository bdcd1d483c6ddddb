//! Shortcut paths versus the canonical vector path.
//!
//! Direct sibling conversions and the SIMD bulk strategies must give the
//! same bits as `P::from_scaled_vector4(x.to_scaled_vector4())`.

use pixfmt_core::numerics::quantize_unorm;
use pixfmt_core::{PixelConversionModifiers, Vector4, simd};
use pixfmt_formats::{
    A8, Abgr32, Argb32, Bgr24, Bgra32, L8, L16, La16, La32, Pixel, Rgb24, Rgb48, Rgba32, Rgba64,
};
use pixfmt_ops::{DefaultOperations, PixelOperations, PixelOps};

/// Deterministic xorshift sequence.
fn noise(seed: u64, n: usize) -> Vec<u64> {
    let mut state = seed | 1;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn rgba32_samples() -> Vec<Rgba32> {
    let mut out: Vec<Rgba32> = (0..=255u8)
        .flat_map(|v| {
            [
                Rgba32::new(v, 0, 0, 255),
                Rgba32::new(0, v, 0, 255),
                Rgba32::new(0, 0, v, 255),
                Rgba32::new(v, v, v, v),
                Rgba32::new(v, 255 - v, v / 2, 128),
            ]
        })
        .collect();
    out.extend(noise(0x5EED, 4096).into_iter().map(|n| Rgba32::from_packed(n as u32)));
    out
}

fn rgba64_samples() -> Vec<Rgba64> {
    let mut out: Vec<Rgba64> = (0..=u16::MAX)
        .step_by(3)
        .map(|v| Rgba64::new(v, u16::MAX - v, v / 2, v))
        .collect();
    out.extend(noise(0xC0FFEE, 4096).into_iter().map(Rgba64::from_packed));
    out
}

fn via_vector<P: Pixel, S: Pixel>(s: S) -> P {
    P::from_scaled_vector4(s.to_scaled_vector4())
}

fn check_direct_siblings<P: Pixel>() {
    for x in rgba32_samples() {
        assert_eq!(P::from_rgba32(x), via_vector::<P, _>(x), "{} from {x:?}", P::NAME);

        let bgra = Bgra32::new(x.r, x.g, x.b, x.a);
        assert_eq!(P::from_bgra32(bgra), via_vector::<P, _>(bgra), "{} from {bgra:?}", P::NAME);
        let argb = Argb32::new(x.r, x.g, x.b, x.a);
        assert_eq!(P::from_argb32(argb), via_vector::<P, _>(argb), "{} from {argb:?}", P::NAME);
        let abgr = Abgr32::new(x.r, x.g, x.b, x.a);
        assert_eq!(P::from_abgr32(abgr), via_vector::<P, _>(abgr), "{} from {abgr:?}", P::NAME);
        let rgb = Rgb24::new(x.r, x.g, x.b);
        assert_eq!(P::from_rgb24(rgb), via_vector::<P, _>(rgb), "{} from {rgb:?}", P::NAME);
        let bgr = Bgr24::new(x.r, x.g, x.b);
        assert_eq!(P::from_bgr24(bgr), via_vector::<P, _>(bgr), "{} from {bgr:?}", P::NAME);
    }

    for l in 0..=u8::MAX {
        let l8 = L8::new(l);
        assert_eq!(P::from_l8(l8), via_vector::<P, _>(l8), "{} from {l8:?}", P::NAME);
        for a in 0..=u8::MAX {
            let la = La16::new(l, a);
            assert_eq!(P::from_la16(la), via_vector::<P, _>(la), "{} from {la:?}", P::NAME);
        }
    }

    for l in 0..=u16::MAX {
        let l16 = L16::new(l);
        assert_eq!(P::from_l16(l16), via_vector::<P, _>(l16), "{} from {l16:?}", P::NAME);
    }

    for x in rgba64_samples() {
        assert_eq!(P::from_rgba64(x), via_vector::<P, _>(x), "{} from {x:?}", P::NAME);
        let la = La32::new(x.r, x.a);
        assert_eq!(P::from_la32(la), via_vector::<P, _>(la), "{} from {la:?}", P::NAME);
        let rgb = Rgb48::new(x.r, x.g, x.b);
        assert_eq!(P::from_rgb48(rgb), via_vector::<P, _>(rgb), "{} from {rgb:?}", P::NAME);
    }
}

fn check_to_rgba32<P: Pixel>() {
    let vectors = noise(0xBEEF, 2048).into_iter().map(|n| {
        let c = |shift: u32| ((n >> shift) & 0xFFFF) as f32 / 65535.0;
        Vector4::new(c(0), c(16), c(32), c(48))
    });
    for v in vectors {
        let p = P::from_scaled_vector4(v);
        assert_eq!(p.to_rgba32(), via_vector::<Rgba32, _>(p), "{} {p:?}", P::NAME);
    }
}

macro_rules! check_all {
    ($($pixel:ty),*) => {
        $(
            check_direct_siblings::<$pixel>();
            check_to_rgba32::<$pixel>();
        )*
    };
}

#[test]
fn test_direct_siblings_match_vector_path() {
    pixfmt_formats::for_all_formats!(check_all);
}

/// Vectors sitting exactly on or next to the `k + 0.5` rounding boundaries.
fn boundary_vectors() -> Vec<Vector4> {
    let mut channels: Vec<f32> = Vec::new();
    for k in 0..=255u32 {
        let mid = (k as f32 + 0.5) / 255.0;
        channels.extend([k as f32 / 255.0, mid, f32::from_bits(mid.to_bits() - 1), f32::from_bits(mid.to_bits() + 1)]);
    }
    channels.extend([-0.0, -1.0, 2.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY]);
    channels
        .chunks(4)
        .flat_map(|c| {
            let w = c.get(3).copied().unwrap_or(1.0);
            [
                Vector4::new(c[0], c.get(1).copied().unwrap_or(0.0), c.get(2).copied().unwrap_or(0.0), w),
                Vector4::new(w, c[0], c.get(1).copied().unwrap_or(0.0), 1.0),
            ]
        })
        .collect()
}

#[test]
fn test_simd_kernel_matches_scalar() {
    let floats: Vec<f32> = boundary_vectors().iter().flat_map(|v| v.to_array()).collect();
    let mut bytes = vec![0u8; floats.len()];
    simd::unit_floats_to_bytes(&floats, &mut bytes).unwrap();
    for (f, b) in floats.iter().zip(&bytes) {
        assert_eq!(*b as u32, quantize_unorm(*f, 255), "{f:?}");
    }

    let all: Vec<u8> = (0..=255u8).cycle().take(1027).collect();
    let mut unit = vec![0f32; all.len()];
    simd::bytes_to_unit_floats(&all, &mut unit).unwrap();
    for (b, f) in all.iter().zip(&unit) {
        assert_eq!(*f, *b as f32 / 255.0);
    }
}

fn check_bulk_strategy<P: PixelOps>() {
    let scalar = DefaultOperations::<P>::new();
    let modifiers = [
        PixelConversionModifiers::NONE,
        PixelConversionModifiers::SCALE,
        PixelConversionModifiers::PREMULTIPLY.with_scale(),
        PixelConversionModifiers::SRGB_COMPAND,
        PixelConversionModifiers::SRGB_COMPAND | PixelConversionModifiers::PREMULTIPLY,
    ];
    for m in modifiers {
        let mut a = boundary_vectors();
        let mut b = a.clone();
        let mut fast = vec![P::default(); a.len()];
        let mut slow = vec![P::default(); a.len()];
        P::operations().from_vector4_destructive(&mut a, &mut fast, m).unwrap();
        scalar.from_vector4_destructive(&mut b, &mut slow, m).unwrap();
        assert_eq!(fast, slow, "{} pack {m:?}", P::NAME);

        let mut va = vec![Vector4::ZERO; fast.len()];
        let mut vb = vec![Vector4::ZERO; fast.len()];
        P::operations().to_vector4(&fast, &mut va, m).unwrap();
        scalar.to_vector4(&fast, &mut vb, m).unwrap();
        assert_eq!(va, vb, "{} unpack {m:?}", P::NAME);
    }
}

#[test]
fn test_simd_strategies_match_scalar() {
    check_bulk_strategy::<Rgba32>();
    check_bulk_strategy::<Bgra32>();
    check_bulk_strategy::<Argb32>();
    check_bulk_strategy::<Abgr32>();
    check_bulk_strategy::<Rgb24>();
    check_bulk_strategy::<Bgr24>();
    check_bulk_strategy::<L8>();
    check_bulk_strategy::<La16>();
    check_bulk_strategy::<A8>();
}
