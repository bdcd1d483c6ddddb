//! Byte-direct formats: 8-bit channels in alternative memory orders.
//!
//! These carry no quantization law of their own. They exist so decoders can
//! address native byte orders, and convert to and from [`Rgba32`] by channel
//! reordering alone. Fields are always named `r`, `g`, `b`, `a`; only their
//! declaration order (and therefore memory order) differs. Constructors take
//! channels in RGBA order regardless of layout.

use bytemuck::{Pod, Zeroable};
use pixfmt_core::numerics::{quantize_unorm, unorm_to_f32};
use pixfmt_core::{PixelAlphaRepresentation, PixelColorType, PixelTypeInfo, Vector4};

use crate::pixel::rgba32_siblings;
use crate::{Pixel, Rgba32};

macro_rules! four_channel_bytes {
    ($(#[$meta:meta])* $name:ident { $f0:ident, $f1:ident, $f2:ident, $f3:ident }, $color:expr) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            #[allow(missing_docs)]
            pub $f0: u8,
            #[allow(missing_docs)]
            pub $f1: u8,
            #[allow(missing_docs)]
            pub $f2: u8,
            #[allow(missing_docs)]
            pub $f3: u8,
        }

        impl $name {
            /// Creates a pixel from channel bytes given in RGBA order.
            #[inline]
            pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
                Self { r, g, b, a }
            }
        }

        impl Pixel for $name {
            type Packed = u32;

            const NAME: &'static str = stringify!($name);

            const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
                32,
                &[8, 8, 8, 8],
                $color,
                PixelAlphaRepresentation::Unassociated,
            );

            #[inline]
            fn to_vector4(self) -> Vector4 {
                Vector4::new(
                    unorm_to_f32(self.r as u32, 255),
                    unorm_to_f32(self.g as u32, 255),
                    unorm_to_f32(self.b as u32, 255),
                    unorm_to_f32(self.a as u32, 255),
                )
            }

            #[inline]
            fn from_vector4(v: Vector4) -> Self {
                Self::new(
                    quantize_unorm(v.x, 255) as u8,
                    quantize_unorm(v.y, 255) as u8,
                    quantize_unorm(v.z, 255) as u8,
                    quantize_unorm(v.w, 255) as u8,
                )
            }

            #[inline]
            fn packed(self) -> u32 {
                u32::from_le_bytes([self.$f0, self.$f1, self.$f2, self.$f3])
            }

            #[inline]
            fn from_packed(packed: u32) -> Self {
                let [$f0, $f1, $f2, $f3] = packed.to_le_bytes();
                Self { $f0, $f1, $f2, $f3 }
            }

            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::new(self.r, self.g, self.b, self.a)
            }

            #[inline]
            fn from_rgba32(s: Rgba32) -> Self {
                Self::new(s.r, s.g, s.b, s.a)
            }

            rgba32_siblings!();
        }
    };
}

macro_rules! three_channel_bytes {
    ($(#[$meta:meta])* $name:ident { $f0:ident, $f1:ident, $f2:ident }, $color:expr) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            #[allow(missing_docs)]
            pub $f0: u8,
            #[allow(missing_docs)]
            pub $f1: u8,
            #[allow(missing_docs)]
            pub $f2: u8,
        }

        impl $name {
            /// Creates a pixel from channel bytes given in RGB order.
            #[inline]
            pub const fn new(r: u8, g: u8, b: u8) -> Self {
                Self { r, g, b }
            }
        }

        impl Pixel for $name {
            type Packed = u32;

            const NAME: &'static str = stringify!($name);

            const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(
                24,
                &[8, 8, 8],
                $color,
                PixelAlphaRepresentation::None,
            );

            #[inline]
            fn to_vector4(self) -> Vector4 {
                Vector4::new(
                    unorm_to_f32(self.r as u32, 255),
                    unorm_to_f32(self.g as u32, 255),
                    unorm_to_f32(self.b as u32, 255),
                    1.0,
                )
            }

            #[inline]
            fn from_vector4(v: Vector4) -> Self {
                Self::new(
                    quantize_unorm(v.x, 255) as u8,
                    quantize_unorm(v.y, 255) as u8,
                    quantize_unorm(v.z, 255) as u8,
                )
            }

            #[inline]
            fn packed(self) -> u32 {
                u32::from_le_bytes([self.$f0, self.$f1, self.$f2, 0])
            }

            #[inline]
            fn from_packed(packed: u32) -> Self {
                let [$f0, $f1, $f2, _] = packed.to_le_bytes();
                Self { $f0, $f1, $f2 }
            }

            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::rgb(self.r, self.g, self.b)
            }

            #[inline]
            fn from_rgba32(s: Rgba32) -> Self {
                Self::new(s.r, s.g, s.b)
            }

            rgba32_siblings!();
        }
    };
}

four_channel_bytes!(
    /// 8-bit channels stored blue, green, red, alpha.
    Bgra32 { b, g, r, a },
    PixelColorType::BGRA
);

four_channel_bytes!(
    /// 8-bit channels stored alpha, red, green, blue.
    Argb32 { a, r, g, b },
    PixelColorType::RGBA
);

four_channel_bytes!(
    /// 8-bit channels stored alpha, blue, green, red.
    Abgr32 { a, b, g, r },
    PixelColorType::BGRA
);

three_channel_bytes!(
    /// 8-bit channels stored red, green, blue. Alpha reads as opaque.
    Rgb24 { r, g, b },
    PixelColorType::RGB
);

three_channel_bytes!(
    /// 8-bit channels stored blue, green, red. Alpha reads as opaque.
    Bgr24 { b, g, r },
    PixelColorType::BGR
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_order() {
        let c = Rgba32::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&Bgra32::from_rgba32(c)), &[3, 2, 1, 4]);
        assert_eq!(bytemuck::bytes_of(&Argb32::from_rgba32(c)), &[4, 1, 2, 3]);
        assert_eq!(bytemuck::bytes_of(&Abgr32::from_rgba32(c)), &[4, 3, 2, 1]);
        assert_eq!(bytemuck::bytes_of(&Rgb24::from_rgba32(c)), &[1, 2, 3]);
        assert_eq!(bytemuck::bytes_of(&Bgr24::from_rgba32(c)), &[3, 2, 1]);
    }

    #[test]
    fn test_argb32_packed() {
        let p = Argb32::from_vector4(Vector4::new(0.1, -0.3, 0.5, -0.7));
        assert_eq!(p.packed(), 0x80001a00);
        assert_eq!(Argb32::from_packed(0x80001a00), p);
    }

    #[test]
    fn test_bgra32_packed() {
        let p = Bgra32::new(0x1a, 0, 0x80, 0);
        assert_eq!(p.packed(), 0x1a0080);
    }

    #[test]
    fn test_rgb_alpha_synthesized() {
        assert_eq!(Rgb24::new(0, 0, 0).to_vector4().w, 1.0);
        assert_eq!(Bgr24::new(9, 8, 7).to_rgba32(), Rgba32::new(9, 8, 7, 255));
        assert_eq!(Rgb24::new(1, 2, 3).packed(), 0x030201);
        assert_eq!(Bgr24::new(1, 2, 3).packed(), 0x010203);
    }

    #[test]
    fn test_siblings_via_hub() {
        let bgra = Bgra32::new(10, 20, 30, 40);
        assert_eq!(Abgr32::from_bgra32(bgra), Abgr32::new(10, 20, 30, 40));
        assert_eq!(Rgb24::from_bgra32(bgra), Rgb24::new(10, 20, 30));
    }

    #[test]
    fn test_type_info() {
        assert_eq!(Bgr24::TYPE_INFO.bits_per_pixel, 24);
        assert!(!Bgr24::TYPE_INFO.has_alpha());
        assert!(Bgra32::TYPE_INFO.color_type.contains(PixelColorType::BGR_ORDER));
    }
}
