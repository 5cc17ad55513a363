use log::trace;

use crate::format::{RgbF32, RgbaF32, hsv_to_rgb};

/// 32-bit floating point HSV.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HsvF32 {
    /// [0, 360), or [`HsvF32::HUE_UNDEFINED`] for black
    pub hue: f32,
    /// [0, 1]
    pub saturation: f32,
    /// [0, 1]
    pub value: f32,
}

impl HsvF32 {
    /// Hue reported by [`rgb_to_hsv`] when the input is black.
    pub const HUE_UNDEFINED: f32 = -1.0;

    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Whether `hue` carries information. Achromatic colors have no hue.
    pub fn is_hue_defined(&self) -> bool {
        self.hue != Self::HUE_UNDEFINED && self.saturation != 0.0
    }

    pub fn to_rgb(self) -> RgbF32 {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }

    /// Convert to RGBA with an explicit alpha.
    pub fn to_rgba(self, a: f32) -> RgbaF32 {
        RgbaF32::from_rgb(self.to_rgb(), a)
    }
}

/// Convert RGB to HSV.
///
/// * `r`, `g`, `b` - channels in [0, 1]
///
/// Degenerate inputs never fail:
/// * black (`max <= 0`) gives saturation 0 and hue [`HsvF32::HUE_UNDEFINED`]
/// * gray (`max > 0`, all channels equal) gives saturation 0 and hue 0
///
/// Any other hue is normalized into [0, 360).
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> HsvF32 {
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;

    let saturation = if max > 0.0 {
        delta / max
    } else {
        trace!("rgb_to_hsv: black input, hue undefined");
        return HsvF32::new(HsvF32::HUE_UNDEFINED, 0.0, max);
    };

    if delta == 0.0 {
        trace!("rgb_to_hsv: gray input {max}, hue defaults to 0");
        return HsvF32::new(0.0, 0.0, max);
    }

    let mut hue = if r >= max {
        (g - b) / delta
    } else if g >= max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    hue *= 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    // a tiny negative sector can round up to a full turn
    if hue >= 360.0 {
        hue -= 360.0;
    }

    HsvF32::new(hue, saturation, max)
}

impl From<RgbF32> for HsvF32 {
    fn from(rgb: RgbF32) -> Self {
        rgb_to_hsv(rgb.r, rgb.g, rgb.b)
    }
}

/// Alpha is dropped.
impl From<RgbaF32> for HsvF32 {
    fn from(rgba: RgbaF32) -> Self {
        rgb_to_hsv(rgba.r, rgba.g, rgba.b)
    }
}
