//! One bulk-operations singleton per format.
//!
//! Each strategy is built lazily on first use behind a [`OnceLock`], so
//! concurrent first callers observe a single instance.

use std::sync::OnceLock;

use pixfmt_formats::{
    A8, Abgr32, Argb32, Bgr24, Bgr565, Bgra32, Bgra4444, Bgra5551, Byte4, HalfSingle, HalfVector2,
    HalfVector4, L8, L16, La16, La32, NormalizedByte2, NormalizedByte4, NormalizedShort2,
    NormalizedShort4, Pixel, Rg32, Rgb24, Rgb48, Rgba32, Rgba64, Rgba1010102, RgbaVector, Short2,
    Short4,
};
use tracing::debug;

use crate::operations::{DefaultOperations, PixelOperations};
use crate::rgba_compatible::{Rgba32Operations, RgbaCompatibleOperations};

/// A pixel format with a registered bulk-operations strategy.
pub trait PixelOps: Pixel {
    /// The format's bulk operations, constructed exactly once.
    fn operations() -> &'static dyn PixelOperations<Self>;
}

macro_rules! register_operations {
    ($($pixel:ty => $strategy:ty),* $(,)?) => {
        $(
            impl PixelOps for $pixel {
                fn operations() -> &'static dyn PixelOperations<Self> {
                    static OPERATIONS: OnceLock<$strategy> = OnceLock::new();
                    OPERATIONS.get_or_init(|| {
                        debug!(
                            format = <$pixel as Pixel>::NAME,
                            strategy = stringify!($strategy),
                            "initializing bulk operations"
                        );
                        <$strategy>::new()
                    })
                }
            }
        )*
    };
}

register_operations! {
    Rgba32 => Rgba32Operations,
    Bgra32 => RgbaCompatibleOperations<Bgra32>,
    Argb32 => RgbaCompatibleOperations<Argb32>,
    Abgr32 => RgbaCompatibleOperations<Abgr32>,
    Rgb24 => RgbaCompatibleOperations<Rgb24>,
    Bgr24 => RgbaCompatibleOperations<Bgr24>,
    L8 => RgbaCompatibleOperations<L8>,
    La16 => RgbaCompatibleOperations<La16>,
    A8 => RgbaCompatibleOperations<A8>,
    L16 => DefaultOperations<L16>,
    La32 => DefaultOperations<La32>,
    Rgb48 => DefaultOperations<Rgb48>,
    Rgba64 => DefaultOperations<Rgba64>,
    Rg32 => DefaultOperations<Rg32>,
    Bgr565 => DefaultOperations<Bgr565>,
    Bgra4444 => DefaultOperations<Bgra4444>,
    Bgra5551 => DefaultOperations<Bgra5551>,
    Rgba1010102 => DefaultOperations<Rgba1010102>,
    Byte4 => DefaultOperations<Byte4>,
    NormalizedByte2 => DefaultOperations<NormalizedByte2>,
    NormalizedByte4 => DefaultOperations<NormalizedByte4>,
    NormalizedShort2 => DefaultOperations<NormalizedShort2>,
    NormalizedShort4 => DefaultOperations<NormalizedShort4>,
    Short2 => DefaultOperations<Short2>,
    Short4 => DefaultOperations<Short4>,
    HalfSingle => DefaultOperations<HalfSingle>,
    HalfVector2 => DefaultOperations<HalfVector2>,
    HalfVector4 => DefaultOperations<HalfVector4>,
    RgbaVector => DefaultOperations<RgbaVector>,
}
