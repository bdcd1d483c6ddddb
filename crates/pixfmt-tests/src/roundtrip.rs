//! Round trips and clamping for every format.

use pixfmt_core::Vector4;
use pixfmt_formats::{
    Byte4, HalfSingle, HalfVector2, HalfVector4, NormalizedByte2, NormalizedByte4,
    NormalizedShort2, NormalizedShort4, Pixel, Short2, Short4,
};
use pixfmt_ops::{PixelOps, convert_to_vec};

fn scaled_probes() -> Vec<Vector4> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 40) as f32 / (1u64 << 24) as f32
    };
    let mut out: Vec<Vector4> = (0..2000).map(|_| Vector4::new(next(), next(), next(), next())).collect();
    out.extend([Vector4::ZERO, Vector4::ONE, Vector4::splat(0.5)]);
    out
}

/// `from_vector4(to_vector4(p)) == p` for every value reachable by packing.
fn check_native_roundtrip<P: Pixel>() {
    for v in scaled_probes() {
        let p = P::from_scaled_vector4(v);
        assert_eq!(P::from_vector4(p.to_vector4()), p, "{} native {p:?}", P::NAME);
        assert_eq!(P::from_packed(p.packed()), p, "{} packed {p:?}", P::NAME);
    }
}

/// Scaled round trips land within one quantization step of the input.
fn check_scaled_roundtrip<P: Pixel>() {
    let bits = P::TYPE_INFO.component_info.min_precision().min(16);
    let step = 1.0 / ((1u32 << bits) - 1) as f32;
    for v in scaled_probes() {
        let p = P::from_scaled_vector4(v);
        let again = P::from_scaled_vector4(p.to_scaled_vector4());
        let delta = (again.to_scaled_vector4() - p.to_scaled_vector4()).abs().max_element();
        assert!(delta <= step, "{} {p:?} -> {again:?}", P::NAME);
    }
}

fn check_bulk_matches_per_pixel<P: PixelOps>() {
    let pixels: Vec<P> = scaled_probes().into_iter().map(P::from_scaled_vector4).collect();
    let mut vectors = vec![Vector4::ZERO; pixels.len()];
    P::operations().to_scaled_vector4(&pixels, &mut vectors).unwrap();
    for (p, v) in pixels.iter().zip(&vectors) {
        assert_eq!(*v, p.to_scaled_vector4(), "{}", P::NAME);
    }
    let bits = P::TYPE_INFO.component_info.min_precision().min(16);
    let step = 1.0 / ((1u32 << bits) - 1) as f32;
    let back: Vec<P> = convert_to_vec(&pixels).unwrap();
    for (b, p) in back.iter().zip(&pixels) {
        let delta = (b.to_scaled_vector4() - p.to_scaled_vector4()).abs().max_element();
        assert!(delta <= step, "{} {p:?} -> {b:?}", P::NAME);
    }
}

macro_rules! roundtrip_all {
    ($($pixel:ty),*) => {
        $(
            check_native_roundtrip::<$pixel>();
            check_scaled_roundtrip::<$pixel>();
            check_bulk_matches_per_pixel::<$pixel>();
        )*
    };
}

#[test]
fn test_every_format_roundtrips() {
    pixfmt_formats::for_all_formats!(roundtrip_all);
}

/// Native range of a format, used to build the expected clamp results.
trait NativeRange {
    const MIN: f32 = 0.0;
    const MAX: f32 = 1.0;
    /// Whether scaled input above 1 packs as 1.
    const SCALED_CLAMPS: bool = true;
}

macro_rules! native_range {
    ($($pixel:ty),* => $min:expr, $max:expr) => {
        $(impl NativeRange for $pixel {
            const MIN: f32 = $min;
            const MAX: f32 = $max;
        })*
    };
}

macro_rules! unit_range {
    ($($pixel:ty),*) => {
        $(impl NativeRange for $pixel {})*
    };
}

native_range!(Byte4 => 0.0, 255.0);
native_range!(NormalizedByte2, NormalizedByte4, NormalizedShort2, NormalizedShort4 => -1.0, 1.0);
native_range!(Short2, Short4 => -32768.0, 32767.0);

impl NativeRange for HalfSingle {
    const MIN: f32 = -65504.0;
    const MAX: f32 = 65504.0;
    const SCALED_CLAMPS: bool = false;
}

impl NativeRange for HalfVector2 {
    const MIN: f32 = -65504.0;
    const MAX: f32 = 65504.0;
    const SCALED_CLAMPS: bool = false;
}

impl NativeRange for HalfVector4 {
    const MIN: f32 = -65504.0;
    const MAX: f32 = 65504.0;
    const SCALED_CLAMPS: bool = false;
}

unit_range!(
    pixfmt_formats::A8,
    pixfmt_formats::Abgr32,
    pixfmt_formats::Argb32,
    pixfmt_formats::Bgr24,
    pixfmt_formats::Bgr565,
    pixfmt_formats::Bgra32,
    pixfmt_formats::Bgra4444,
    pixfmt_formats::Bgra5551,
    pixfmt_formats::L8,
    pixfmt_formats::L16,
    pixfmt_formats::La16,
    pixfmt_formats::La32,
    pixfmt_formats::Rg32,
    pixfmt_formats::Rgb24,
    pixfmt_formats::Rgb48,
    pixfmt_formats::Rgba1010102,
    pixfmt_formats::Rgba32,
    pixfmt_formats::Rgba64,
    pixfmt_formats::RgbaVector
);

fn check_clamping<P: Pixel + NativeRange>() {
    let at_max = P::from_vector4(Vector4::splat(P::MAX));
    let at_min = P::from_vector4(Vector4::splat(P::MIN));
    for big in [1e5, 1e9, f32::MAX, f32::INFINITY] {
        assert_eq!(P::from_vector4(Vector4::splat(big)), at_max, "{} {big}", P::NAME);
        assert_eq!(P::from_vector4(Vector4::splat(-big)), at_min, "{} -{big}", P::NAME);
    }
    assert_eq!(
        P::from_vector4(Vector4::splat(f32::NAN)),
        P::from_vector4(Vector4::ZERO),
        "{} NaN",
        P::NAME
    );
    if P::SCALED_CLAMPS {
        assert_eq!(
            P::from_scaled_vector4(Vector4::splat(2.0)),
            P::from_scaled_vector4(Vector4::ONE),
            "{} scaled",
            P::NAME
        );
    }
}

macro_rules! clamping_all {
    ($($pixel:ty),*) => {
        $(check_clamping::<$pixel>();)*
    };
}

#[test]
fn test_out_of_range_clamps() {
    pixfmt_formats::for_all_formats!(clamping_all);
}
