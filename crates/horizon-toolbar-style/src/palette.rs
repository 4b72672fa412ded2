//! Material Design color palette.
//!
//! Swatches are named `paper<Hue><Shade>`, e.g. `paperBlue500` or
//! `paperDeepOrange900`. A bare hue name such as `paperBlue` refers to the
//! 500 shade.

use crate::color::Color;

/// Palette token used as the dark-theme background when none is given.
pub const DEFAULT_PRIMARY: &str = "paperBlue";

/// Palette token used when a color token cannot be resolved.
pub const FALLBACK_SWATCH: &str = "paperGrey500";

/// The enumerated tokens accepted as a toolbar primary color.
pub const PRIMARY_COLORS: &[&str] = &[
    "googleBlue",
    "googleGreen",
    "googleRed",
    "googleYellow",
    "paperRed",
    "paperPink",
    "paperPurple",
    "paperDeepPurple",
    "paperIndigo",
    "paperBlue",
    "paperLightBlue",
    "paperCyan",
    "paperTeal",
    "paperGreen",
    "paperLightGreen",
    "paperLime",
    "paperYellow",
    "paperAmber",
    "paperOrange",
    "paperDeepOrange",
    "paperBrown",
    "paperGrey",
    "paperBlueGrey",
];

/// Swatch table: (name, 0xRRGGBB).
const SWATCHES: &[(&str, u32)] = &[
    // Google brand colors
    ("googleBlue500", 0x4285F4),
    ("googleGreen500", 0x0F9D58),
    ("googleRed500", 0xDB4437),
    ("googleYellow500", 0xF4B400),
    // Red
    ("paperRed100", 0xFFCDD2),
    ("paperRed500", 0xF44336),
    ("paperRed700", 0xD32F2F),
    ("paperRed900", 0xB71C1C),
    // Pink
    ("paperPink100", 0xF8BBD0),
    ("paperPink500", 0xE91E63),
    ("paperPink700", 0xC2185B),
    ("paperPink900", 0x880E4F),
    // Purple
    ("paperPurple100", 0xE1BEE7),
    ("paperPurple500", 0x9C27B0),
    ("paperPurple700", 0x7B1FA2),
    ("paperPurple900", 0x4A148C),
    // Deep purple
    ("paperDeepPurple100", 0xD1C4E9),
    ("paperDeepPurple500", 0x673AB7),
    ("paperDeepPurple700", 0x512DA8),
    ("paperDeepPurple900", 0x311B92),
    // Indigo
    ("paperIndigo100", 0xC5CAE9),
    ("paperIndigo500", 0x3F51B5),
    ("paperIndigo700", 0x303F9F),
    ("paperIndigo900", 0x1A237E),
    // Blue
    ("paperBlue100", 0xBBDEFB),
    ("paperBlue500", 0x2196F3),
    ("paperBlue700", 0x1976D2),
    ("paperBlue900", 0x0D47A1),
    // Light blue
    ("paperLightBlue100", 0xB3E5FC),
    ("paperLightBlue500", 0x03A9F4),
    ("paperLightBlue700", 0x0288D1),
    ("paperLightBlue900", 0x01579B),
    // Cyan
    ("paperCyan100", 0xB2EBF2),
    ("paperCyan500", 0x00BCD4),
    ("paperCyan700", 0x0097A7),
    ("paperCyan900", 0x006064),
    // Teal
    ("paperTeal100", 0xB2DFDB),
    ("paperTeal500", 0x009688),
    ("paperTeal700", 0x00796B),
    ("paperTeal900", 0x004D40),
    // Green
    ("paperGreen100", 0xC8E6C9),
    ("paperGreen500", 0x4CAF50),
    ("paperGreen700", 0x388E3C),
    ("paperGreen900", 0x1B5E20),
    // Light green
    ("paperLightGreen100", 0xDCEDC8),
    ("paperLightGreen500", 0x8BC34A),
    ("paperLightGreen700", 0x689F38),
    ("paperLightGreen900", 0x33691E),
    // Lime
    ("paperLime100", 0xF0F4C3),
    ("paperLime500", 0xCDDC39),
    ("paperLime700", 0xAFB42B),
    ("paperLime900", 0x827717),
    // Yellow
    ("paperYellow100", 0xFFF9C4),
    ("paperYellow500", 0xFFEB3B),
    ("paperYellow700", 0xFBC02D),
    ("paperYellow900", 0xF57F17),
    // Amber
    ("paperAmber100", 0xFFECB3),
    ("paperAmber500", 0xFFC107),
    ("paperAmber700", 0xFFA000),
    ("paperAmber900", 0xFF6F00),
    // Orange
    ("paperOrange100", 0xFFE0B2),
    ("paperOrange500", 0xFF9800),
    ("paperOrange700", 0xF57C00),
    ("paperOrange900", 0xE65100),
    // Deep orange
    ("paperDeepOrange100", 0xFFCCBC),
    ("paperDeepOrange500", 0xFF5722),
    ("paperDeepOrange700", 0xE64A19),
    ("paperDeepOrange900", 0xBF360C),
    // Brown
    ("paperBrown100", 0xD7CCC8),
    ("paperBrown500", 0x795548),
    ("paperBrown700", 0x5D4037),
    ("paperBrown900", 0x3E2723),
    // Grey
    ("paperGrey100", 0xF5F5F5),
    ("paperGrey500", 0x9E9E9E),
    ("paperGrey700", 0x616161),
    ("paperGrey900", 0x212121),
    // Blue grey
    ("paperBlueGrey100", 0xCFD8DC),
    ("paperBlueGrey500", 0x607D8B),
    ("paperBlueGrey700", 0x455A64),
    ("paperBlueGrey900", 0x263238),
];

/// Lookup over the built-in Material swatches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPalette;

impl MaterialPalette {
    /// Look up a swatch by its exact name (`paperBlue700`).
    pub fn swatch(name: &str) -> Option<Color> {
        SWATCHES
            .iter()
            .find(|(swatch, _)| *swatch == name)
            .map(|&(_, rgb)| rgb_to_color(rgb))
    }

    /// Look up a swatch by exact name, then as a hue name with the 500 shade.
    pub fn lookup(name: &str) -> Option<Color> {
        Self::swatch(name).or_else(|| Self::swatch(&format!("{name}500")))
    }

    /// The swatch used when nothing else matches.
    pub fn fallback() -> Color {
        rgb_to_color(0x9E9E9E)
    }

    /// Check if a token is one of the enumerated primary colors.
    pub fn is_primary(name: &str) -> bool {
        PRIMARY_COLORS.contains(&name)
    }

    /// Iterate over all swatch names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SWATCHES.iter().map(|(name, _)| *name)
    }
}

fn rgb_to_color(rgb: u32) -> Color {
    Color::from_rgb8(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    )
}
