use crate::{
    MapColor,
    format::{HsvF32, RgbF32},
    named::{self, NamedColor},
};

/// Floating point color with straight (non-premultiplied) alpha.
///
/// Channels are nominally in [0, 1] but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct RgbaF32 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for RgbaF32 {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl RgbaF32 {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray.
    pub const fn gray(x: f32) -> Self {
        Self {
            r: x,
            g: x,
            b: x,
            a: 1.0,
        }
    }

    /// Convert a RGB to an RGBA, given an A.
    pub const fn from_rgb(rgb: RgbF32, a: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Look up a catalog color by name. See [`NamedColor`] for the accepted spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name)
    }

    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// The color channels, alpha dropped.
    pub const fn rgb(self) -> RgbF32 {
        RgbF32::new(self.r, self.g, self.b)
    }

    pub fn to_hsv(self) -> HsvF32 {
        HsvF32::from(self)
    }
}

impl MapColor for RgbaF32 {
    type Component = f32;

    fn map<F>(self, f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }
}

impl From<RgbF32> for RgbaF32 {
    fn from(value: RgbF32) -> Self {
        Self::from_rgb(value, 1.0)
    }
}

/// Opaque.
impl From<HsvF32> for RgbaF32 {
    fn from(value: HsvF32) -> Self {
        value.to_rgba(1.0)
    }
}

impl From<NamedColor> for RgbaF32 {
    fn from(value: NamedColor) -> Self {
        value.color()
    }
}

impl From<[f32; 4]> for RgbaF32 {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<RgbaF32> for [f32; 4] {
    fn from(value: RgbaF32) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}
