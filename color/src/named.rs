//! Catalog of named colors.
//!
//! Every entry is an opaque [`RgbaF32`] constant. A few names share the same
//! channels on purpose: `TEAL`/`TURQUOISE` and
//! `LIGHT_GOLDENROD`/`LIGHT_GOLDENROD_YELLOW`.

use core::{fmt, str::FromStr};

use log::debug;

use crate::{error::ParseNamedColorError, format::RgbaF32};

macro_rules! named_colors {
    ($($variant:ident, $konst:ident, $name:literal => ($r:literal, $g:literal, $b:literal);)*) => {
        $(
            #[doc = concat!("`", $name, "`: R ", stringify!($r), ", G ", stringify!($g), ", B ", stringify!($b))]
            pub const $konst: RgbaF32 = RgbaF32::new($r, $g, $b, 1.0);
        )*

        /// A color from the catalog, addressable by name.
        ///
        /// Parsing is ASCII case-insensitive and ignores `_`, `-` and spaces,
        /// so `"SkyBlue"`, `"sky_blue"` and `"sky blue"` all resolve to
        /// [`NamedColor::SkyBlue`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NamedColor {
            $($variant,)*
        }

        impl NamedColor {
            /// Every entry, in catalog order.
            pub const ALL: &'static [NamedColor] = &[$(NamedColor::$variant,)*];

            /// Canonical name: lowercase, no separators.
            pub const fn name(self) -> &'static str {
                match self {
                    $(NamedColor::$variant => $name,)*
                }
            }

            pub const fn color(self) -> RgbaF32 {
                match self {
                    $(NamedColor::$variant => $konst,)*
                }
            }
        }
    };
}

named_colors! {
    Black, BLACK, "black" => (0.0, 0.0, 0.0);
    White, WHITE, "white" => (1.0, 1.0, 1.0);
    Red, RED, "red" => (1.0, 0.0, 0.0);
    Green, GREEN, "green" => (0.0, 1.0, 0.0);
    Blue, BLUE, "blue" => (0.0, 0.0, 1.0);
    Yellow, YELLOW, "yellow" => (1.0, 1.0, 0.0);
    Magenta, MAGENTA, "magenta" => (1.0, 0.0, 1.0);
    Cyan, CYAN, "cyan" => (0.0, 1.0, 1.0);
    Orange, ORANGE, "orange" => (1.0, 0.5, 0.0);
    Purple, PURPLE, "purple" => (0.5, 0.0, 0.5);
    Pink, PINK, "pink" => (1.0, 0.5, 0.5);
    Lime, LIME, "lime" => (0.5, 1.0, 0.0);
    Teal, TEAL, "teal" => (0.0, 0.5, 0.5);
    Lavender, LAVENDER, "lavender" => (0.5, 0.0, 1.0);
    Brown, BROWN, "brown" => (0.6, 0.3, 0.0);
    Beige, BEIGE, "beige" => (0.9, 0.9, 0.7);
    Maroon, MAROON, "maroon" => (0.5, 0.0, 0.0);
    Mint, MINT, "mint" => (0.0, 0.5, 0.3);
    Olive, OLIVE, "olive" => (0.5, 0.5, 0.0);
    Coral, CORAL, "coral" => (1.0, 0.5, 0.3);
    Navy, NAVY, "navy" => (0.0, 0.0, 0.5);
    Turquoise, TURQUOISE, "turquoise" => (0.0, 0.5, 0.5);
    Silver, SILVER, "silver" => (0.75, 0.75, 0.75);
    Gold, GOLD, "gold" => (1.0, 0.84, 0.0);
    SkyBlue, SKY_BLUE, "skyblue" => (0.53, 0.81, 0.98);
    Violet, VIOLET, "violet" => (0.93, 0.51, 0.93);
    Indigo, INDIGO, "indigo" => (0.29, 0.0, 0.51);
    Aquamarine, AQUAMARINE, "aquamarine" => (0.5, 1.0, 0.83);
    Tan, TAN, "tan" => (0.82, 0.71, 0.55);
    Linen, LINEN, "linen" => (0.98, 0.94, 0.9);
    Ivory, IVORY, "ivory" => (1.0, 1.0, 0.94);
    Snow, SNOW, "snow" => (1.0, 0.98, 0.98);
    Seashell, SEASHELL, "seashell" => (1.0, 0.96, 0.93);
    LavenderBlush, LAVENDER_BLUSH, "lavenderblush" => (1.0, 0.94, 0.96);
    FloralWhite, FLORAL_WHITE, "floralwhite" => (1.0, 0.98, 0.94);
    AliceBlue, ALICE_BLUE, "aliceblue" => (0.94, 0.97, 1.0);
    Honeydew, HONEYDEW, "honeydew" => (0.94, 1.0, 0.94);
    LightCyan, LIGHT_CYAN, "lightcyan" => (0.88, 1.0, 1.0);
    LightYellow, LIGHT_YELLOW, "lightyellow" => (1.0, 1.0, 0.88);
    LightGoldenrodYellow, LIGHT_GOLDENROD_YELLOW, "lightgoldenrodyellow" => (0.98, 0.98, 0.82);
    PapayaWhip, PAPAYA_WHIP, "papayawhip" => (1.0, 0.94, 0.84);
    MistyRose, MISTY_ROSE, "mistyrose" => (1.0, 0.89, 0.88);
    LemonChiffon, LEMON_CHIFFON, "lemonchiffon" => (1.0, 0.98, 0.8);
    LightGoldenrod, LIGHT_GOLDENROD, "lightgoldenrod" => (0.98, 0.98, 0.82);
    LightCoral, LIGHT_CORAL, "lightcoral" => (0.94, 0.5, 0.5);
    Salmon, SALMON, "salmon" => (0.98, 0.5, 0.45);
    DarkSalmon, DARK_SALMON, "darksalmon" => (0.91, 0.59, 0.48);
    LightSalmon, LIGHT_SALMON, "lightsalmon" => (1.0, 0.63, 0.48);
    Crimson, CRIMSON, "crimson" => (0.86, 0.08, 0.24);
    Firebrick, FIREBRICK, "firebrick" => (0.7, 0.13, 0.13);
    DarkRed, DARK_RED, "darkred" => (0.55, 0.0, 0.0);
}

fn is_separator(b: u8) -> bool {
    matches!(b, b'_' | b'-' | b' ')
}

/// Compare a user-supplied name against a canonical one, skipping separators.
fn name_matches(canonical: &str, input: &str) -> bool {
    let mut input = input
        .bytes()
        .filter(|b| !is_separator(*b))
        .map(|b| b.to_ascii_lowercase());

    canonical.bytes().all(|c| input.next() == Some(c)) && input.next().is_none()
}

/// Resolve a name to its catalog color.
pub fn lookup(name: &str) -> Option<RgbaF32> {
    name.parse::<NamedColor>().ok().map(NamedColor::color)
}

impl FromStr for NamedColor {
    type Err = ParseNamedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.bytes().all(is_separator) {
            return Err(ParseNamedColorError::Empty);
        }

        NamedColor::ALL
            .iter()
            .copied()
            .find(|c| name_matches(c.name(), s))
            .ok_or_else(|| {
                debug!("no catalog color named {s:?}");
                ParseNamedColorError::Unknown
            })
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for NamedColor {
    type Error = ParseNamedColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
