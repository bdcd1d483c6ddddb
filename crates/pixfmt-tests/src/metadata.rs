//! Format metadata and precondition errors.

use pixfmt_core::{Error, PixelComponentInfo, Vector4};
use pixfmt_formats::{Bgr24, Color, L8, Pixel, Rgba32, Rgba64};
use pixfmt_ops::{PLANAR_PADDING, PixelOps, convert, get_blender};
use pixfmt_ops::composite::{AlphaCompositionMode, ColorBlendingMode};

fn check_layout<P: Pixel>() {
    let info = P::TYPE_INFO;
    let components = info.component_info;
    let total: u32 = components.precisions().iter().map(|&p| p as u32).sum();
    assert_eq!(total + components.padding(), info.bits_per_pixel, "{}", P::NAME);
    assert_eq!(components.bits_per_pixel(), info.bits_per_pixel, "{}", P::NAME);
    assert_eq!(std::mem::size_of::<P>() * 8, info.bits_per_pixel as usize, "{}", P::NAME);
    assert_eq!(info.bytes_per_pixel(), std::mem::size_of::<P>(), "{}", P::NAME);
    assert!(components.component_count() >= 1, "{}", P::NAME);
    assert!(
        components.component_precision(components.component_count()).is_err(),
        "{}",
        P::NAME
    );
}

macro_rules! layout_all {
    ($($pixel:ty),*) => {
        $(check_layout::<$pixel>();)*
    };
}

#[test]
fn test_every_layout_adds_up() {
    pixfmt_formats::for_all_formats!(layout_all);
}

#[test]
fn test_component_info_rejects_bad_layouts() {
    assert_eq!(
        PixelComponentInfo::new(64, &[1; 17]).unwrap_err(),
        Error::TooManyComponents(17)
    );
    assert_eq!(
        PixelComponentInfo::new(512, &[8, 256]).unwrap_err(),
        Error::PrecisionOutOfRange {
            index: 1,
            precision: 256
        }
    );
    assert_eq!(
        PixelComponentInfo::new(16, &[8, 8, 8]).unwrap_err(),
        Error::PrecisionExceedsBits { total: 24, bits: 16 }
    );

    let info = PixelComponentInfo::new(32, &[10, 10, 10]).unwrap();
    assert_eq!(info.padding(), 2);
    assert_eq!(
        info.component_precision(3).unwrap_err(),
        Error::ComponentIndexOutOfRange { index: 3, count: 3 }
    );
}

#[test]
fn test_color_literals() {
    assert_eq!(Rgba32::parse_hex("#f00").unwrap(), Rgba32::new(255, 0, 0, 255));
    assert_eq!(Rgba32::parse_hex("11223344").unwrap(), Rgba32::new(0x11, 0x22, 0x33, 0x44));
    for bad in ["", "#", "12", "12345", "#1234567", "gg0000"] {
        assert_eq!(Rgba32::parse_hex(bad).unwrap_err(), Error::invalid_hex(bad));
    }

    assert_eq!(Color::parse("  CornflowerBlue ").unwrap(), Color::parse("#6495ED").unwrap());
    assert!(matches!(Color::parse("notacolor"), Err(Error::UnknownColor(_))));
}

#[test]
fn test_bulk_length_guards() {
    let mut vectors = vec![Vector4::ZERO; 4];
    let err = Rgba32::operations()
        .to_scaled_vector4(&[Rgba32::default(); 5], &mut vectors)
        .unwrap_err();
    assert!(err.is_length_error());

    let mut out = [Bgr24::default(); 3];
    assert!(convert(&[L8::new(1); 2], &mut out).unwrap_err().is_length_error());
    assert_eq!(out, [Bgr24::default(); 3]);

    let mut bytes = [0u8; 7];
    assert!(
        Rgba32::operations()
            .to_rgba32_bytes(&[Rgba32::default(); 2], &mut bytes)
            .is_err()
    );

    let planes = [1u8; 4];
    let mut packed = vec![Rgba32::default(); 4 + PLANAR_PADDING - 1];
    let err = Rgba32::operations()
        .pack_from_rgb_planes(&planes, &planes, &planes, &mut packed)
        .unwrap_err();
    assert_eq!(err, Error::too_short("destination", 4 + PLANAR_PADDING, packed.len()));

    let blender = get_blender(ColorBlendingMode::Normal, AlphaCompositionMode::SrcOver);
    let mut destination = vec![Rgba64::default(); 3];
    let background = vec![Rgba64::default(); 3];
    let source = vec![Rgba32::default(); 2];
    assert!(
        blender
            .blend(&mut destination, &background, &source, 1.0)
            .unwrap_err()
            .is_length_error()
    );
}
