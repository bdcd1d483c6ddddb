//! CSS named colors.
//!
//! One literal table generates both the `Color` constants and the
//! case-insensitive lookup used by [`Color::parse`](crate::Color::parse).
//! Several CSS names share a value (`Aqua`/`Cyan`, `Gray`/`Grey`, ...);
//! [`Color::web_safe_palette`](crate::Color::web_safe_palette) keeps only the
//! first name of each value.

use crate::Color;

macro_rules! named_colors {
    ($($konst:ident = $css:literal: ($r:literal, $g:literal, $b:literal, $a:literal);)*) => {
        impl Color {
            $(
                #[doc = concat!("CSS `", $css, "`: rgba(", $r, ", ", $g, ", ", $b, ", ", $a, ").")]
                pub const $konst: Color = Color::from_rgba($r, $g, $b, $a);
            )*
        }

        /// Every named color in alphabetical order, aliases included.
        pub(crate) static NAMED_COLORS: &[(&str, Color)] = &[$(($css, Color::$konst)),*];
    };
}

named_colors! {
    ALICE_BLUE = "AliceBlue": (240, 248, 255, 255);
    ANTIQUE_WHITE = "AntiqueWhite": (250, 235, 215, 255);
    AQUA = "Aqua": (0, 255, 255, 255);
    AQUAMARINE = "Aquamarine": (127, 255, 212, 255);
    AZURE = "Azure": (240, 255, 255, 255);
    BEIGE = "Beige": (245, 245, 220, 255);
    BISQUE = "Bisque": (255, 228, 196, 255);
    BLACK = "Black": (0, 0, 0, 255);
    BLANCHED_ALMOND = "BlanchedAlmond": (255, 235, 205, 255);
    BLUE = "Blue": (0, 0, 255, 255);
    BLUE_VIOLET = "BlueViolet": (138, 43, 226, 255);
    BROWN = "Brown": (165, 42, 42, 255);
    BURLY_WOOD = "BurlyWood": (222, 184, 135, 255);
    CADET_BLUE = "CadetBlue": (95, 158, 160, 255);
    CHARTREUSE = "Chartreuse": (127, 255, 0, 255);
    CHOCOLATE = "Chocolate": (210, 105, 30, 255);
    CORAL = "Coral": (255, 127, 80, 255);
    CORNFLOWER_BLUE = "CornflowerBlue": (100, 149, 237, 255);
    CORNSILK = "Cornsilk": (255, 248, 220, 255);
    CRIMSON = "Crimson": (220, 20, 60, 255);
    CYAN = "Cyan": (0, 255, 255, 255);
    DARK_BLUE = "DarkBlue": (0, 0, 139, 255);
    DARK_CYAN = "DarkCyan": (0, 139, 139, 255);
    DARK_GOLDENROD = "DarkGoldenrod": (184, 134, 11, 255);
    DARK_GRAY = "DarkGray": (169, 169, 169, 255);
    DARK_GREEN = "DarkGreen": (0, 100, 0, 255);
    DARK_GREY = "DarkGrey": (169, 169, 169, 255);
    DARK_KHAKI = "DarkKhaki": (189, 183, 107, 255);
    DARK_MAGENTA = "DarkMagenta": (139, 0, 139, 255);
    DARK_OLIVE_GREEN = "DarkOliveGreen": (85, 107, 47, 255);
    DARK_ORANGE = "DarkOrange": (255, 140, 0, 255);
    DARK_ORCHID = "DarkOrchid": (153, 50, 204, 255);
    DARK_RED = "DarkRed": (139, 0, 0, 255);
    DARK_SALMON = "DarkSalmon": (233, 150, 122, 255);
    DARK_SEA_GREEN = "DarkSeaGreen": (143, 188, 143, 255);
    DARK_SLATE_BLUE = "DarkSlateBlue": (72, 61, 139, 255);
    DARK_SLATE_GRAY = "DarkSlateGray": (47, 79, 79, 255);
    DARK_SLATE_GREY = "DarkSlateGrey": (47, 79, 79, 255);
    DARK_TURQUOISE = "DarkTurquoise": (0, 206, 209, 255);
    DARK_VIOLET = "DarkViolet": (148, 0, 211, 255);
    DEEP_PINK = "DeepPink": (255, 20, 147, 255);
    DEEP_SKY_BLUE = "DeepSkyBlue": (0, 191, 255, 255);
    DIM_GRAY = "DimGray": (105, 105, 105, 255);
    DIM_GREY = "DimGrey": (105, 105, 105, 255);
    DODGER_BLUE = "DodgerBlue": (30, 144, 255, 255);
    FIREBRICK = "Firebrick": (178, 34, 34, 255);
    FLORAL_WHITE = "FloralWhite": (255, 250, 240, 255);
    FOREST_GREEN = "ForestGreen": (34, 139, 34, 255);
    FUCHSIA = "Fuchsia": (255, 0, 255, 255);
    GAINSBORO = "Gainsboro": (220, 220, 220, 255);
    GHOST_WHITE = "GhostWhite": (248, 248, 255, 255);
    GOLD = "Gold": (255, 215, 0, 255);
    GOLDENROD = "Goldenrod": (218, 165, 32, 255);
    GRAY = "Gray": (128, 128, 128, 255);
    GREEN = "Green": (0, 128, 0, 255);
    GREEN_YELLOW = "GreenYellow": (173, 255, 47, 255);
    GREY = "Grey": (128, 128, 128, 255);
    HONEYDEW = "Honeydew": (240, 255, 240, 255);
    HOT_PINK = "HotPink": (255, 105, 180, 255);
    INDIAN_RED = "IndianRed": (205, 92, 92, 255);
    INDIGO = "Indigo": (75, 0, 130, 255);
    IVORY = "Ivory": (255, 255, 240, 255);
    KHAKI = "Khaki": (240, 230, 140, 255);
    LAVENDER = "Lavender": (230, 230, 250, 255);
    LAVENDER_BLUSH = "LavenderBlush": (255, 240, 245, 255);
    LAWN_GREEN = "LawnGreen": (124, 252, 0, 255);
    LEMON_CHIFFON = "LemonChiffon": (255, 250, 205, 255);
    LIGHT_BLUE = "LightBlue": (173, 216, 230, 255);
    LIGHT_CORAL = "LightCoral": (240, 128, 128, 255);
    LIGHT_CYAN = "LightCyan": (224, 255, 255, 255);
    LIGHT_GOLDENROD_YELLOW = "LightGoldenrodYellow": (250, 250, 210, 255);
    LIGHT_GRAY = "LightGray": (211, 211, 211, 255);
    LIGHT_GREEN = "LightGreen": (144, 238, 144, 255);
    LIGHT_GREY = "LightGrey": (211, 211, 211, 255);
    LIGHT_PINK = "LightPink": (255, 182, 193, 255);
    LIGHT_SALMON = "LightSalmon": (255, 160, 122, 255);
    LIGHT_SEA_GREEN = "LightSeaGreen": (32, 178, 170, 255);
    LIGHT_SKY_BLUE = "LightSkyBlue": (135, 206, 250, 255);
    LIGHT_SLATE_GRAY = "LightSlateGray": (119, 136, 153, 255);
    LIGHT_SLATE_GREY = "LightSlateGrey": (119, 136, 153, 255);
    LIGHT_STEEL_BLUE = "LightSteelBlue": (176, 196, 222, 255);
    LIGHT_YELLOW = "LightYellow": (255, 255, 224, 255);
    LIME = "Lime": (0, 255, 0, 255);
    LIME_GREEN = "LimeGreen": (50, 205, 50, 255);
    LINEN = "Linen": (250, 240, 230, 255);
    MAGENTA = "Magenta": (255, 0, 255, 255);
    MAROON = "Maroon": (128, 0, 0, 255);
    MEDIUM_AQUAMARINE = "MediumAquamarine": (102, 205, 170, 255);
    MEDIUM_BLUE = "MediumBlue": (0, 0, 205, 255);
    MEDIUM_ORCHID = "MediumOrchid": (186, 85, 211, 255);
    MEDIUM_PURPLE = "MediumPurple": (147, 112, 219, 255);
    MEDIUM_SEA_GREEN = "MediumSeaGreen": (60, 179, 113, 255);
    MEDIUM_SLATE_BLUE = "MediumSlateBlue": (123, 104, 238, 255);
    MEDIUM_SPRING_GREEN = "MediumSpringGreen": (0, 250, 154, 255);
    MEDIUM_TURQUOISE = "MediumTurquoise": (72, 209, 204, 255);
    MEDIUM_VIOLET_RED = "MediumVioletRed": (199, 21, 133, 255);
    MIDNIGHT_BLUE = "MidnightBlue": (25, 25, 112, 255);
    MINT_CREAM = "MintCream": (245, 255, 250, 255);
    MISTY_ROSE = "MistyRose": (255, 228, 225, 255);
    MOCCASIN = "Moccasin": (255, 228, 181, 255);
    NAVAJO_WHITE = "NavajoWhite": (255, 222, 173, 255);
    NAVY = "Navy": (0, 0, 128, 255);
    OLD_LACE = "OldLace": (253, 245, 230, 255);
    OLIVE = "Olive": (128, 128, 0, 255);
    OLIVE_DRAB = "OliveDrab": (107, 142, 35, 255);
    ORANGE = "Orange": (255, 165, 0, 255);
    ORANGE_RED = "OrangeRed": (255, 69, 0, 255);
    ORCHID = "Orchid": (218, 112, 214, 255);
    PALE_GOLDENROD = "PaleGoldenrod": (238, 232, 170, 255);
    PALE_GREEN = "PaleGreen": (152, 251, 152, 255);
    PALE_TURQUOISE = "PaleTurquoise": (175, 238, 238, 255);
    PALE_VIOLET_RED = "PaleVioletRed": (219, 112, 147, 255);
    PAPAYA_WHIP = "PapayaWhip": (255, 239, 213, 255);
    PEACH_PUFF = "PeachPuff": (255, 218, 185, 255);
    PERU = "Peru": (205, 133, 63, 255);
    PINK = "Pink": (255, 192, 203, 255);
    PLUM = "Plum": (221, 160, 221, 255);
    POWDER_BLUE = "PowderBlue": (176, 224, 230, 255);
    PURPLE = "Purple": (128, 0, 128, 255);
    REBECCA_PURPLE = "RebeccaPurple": (102, 51, 153, 255);
    RED = "Red": (255, 0, 0, 255);
    ROSY_BROWN = "RosyBrown": (188, 143, 143, 255);
    ROYAL_BLUE = "RoyalBlue": (65, 105, 225, 255);
    SADDLE_BROWN = "SaddleBrown": (139, 69, 19, 255);
    SALMON = "Salmon": (250, 128, 114, 255);
    SANDY_BROWN = "SandyBrown": (244, 164, 96, 255);
    SEA_GREEN = "SeaGreen": (46, 139, 87, 255);
    SEA_SHELL = "SeaShell": (255, 245, 238, 255);
    SIENNA = "Sienna": (160, 82, 45, 255);
    SILVER = "Silver": (192, 192, 192, 255);
    SKY_BLUE = "SkyBlue": (135, 206, 235, 255);
    SLATE_BLUE = "SlateBlue": (106, 90, 205, 255);
    SLATE_GRAY = "SlateGray": (112, 128, 144, 255);
    SLATE_GREY = "SlateGrey": (112, 128, 144, 255);
    SNOW = "Snow": (255, 250, 250, 255);
    SPRING_GREEN = "SpringGreen": (0, 255, 127, 255);
    STEEL_BLUE = "SteelBlue": (70, 130, 180, 255);
    TAN = "Tan": (210, 180, 140, 255);
    TEAL = "Teal": (0, 128, 128, 255);
    THISTLE = "Thistle": (216, 191, 216, 255);
    TOMATO = "Tomato": (255, 99, 71, 255);
    TRANSPARENT = "Transparent": (0, 0, 0, 0);
    TURQUOISE = "Turquoise": (64, 224, 208, 255);
    VIOLET = "Violet": (238, 130, 238, 255);
    WHEAT = "Wheat": (245, 222, 179, 255);
    WHITE = "White": (255, 255, 255, 255);
    WHITE_SMOKE = "WhiteSmoke": (245, 245, 245, 255);
    YELLOW = "Yellow": (255, 255, 0, 255);
    YELLOW_GREEN = "YellowGreen": (154, 205, 50, 255);
}

/// Resolves a CSS color name, ignoring ASCII case.
pub(crate) fn lookup(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(css, _)| css.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
}
