use crate::{MapColor, format::HsvF32};

/// 32-bit floating point RGB, without alpha.
///
/// This is what [`hsv_to_rgb`] produces. Widen it with
/// [`RgbaF32::from_rgb`](crate::RgbaF32::from_rgb) to pick an alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RgbF32 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbF32 {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(x: f32) -> Self {
        Self { r: x, g: x, b: x }
    }
}

/// Convert HSV to RGB using the hexagonal cone model.
///
/// * `h` - hue in degrees, [0, 360)
/// * `s` - saturation, [0, 1]
/// * `v` - value, [0, 1]
///
/// Inputs are neither validated nor clamped. The sector is `h / 60`
/// truncated toward zero, so a negative hue falls into sector 0 with a
/// negative fraction, and `h == 360` lands in the last sector with a zero
/// fraction rather than wrapping to red.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> RgbF32 {
    if s == 0.0 {
        return RgbF32::gray(v);
    }

    let h = h / 60.0;
    let i = h as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RgbF32 { r, g, b }
}

impl MapColor for RgbF32 {
    type Component = f32;

    fn map<F>(self, f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl From<HsvF32> for RgbF32 {
    fn from(hsv: HsvF32) -> Self {
        hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value)
    }
}

impl From<[f32; 3]> for RgbF32 {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<RgbF32> for [f32; 3] {
    fn from(value: RgbF32) -> Self {
        [value.r, value.g, value.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    fn assert_rgb(c: RgbF32, r: f32, g: f32, b: f32) {
        assert!(
            approx_eq(c.r, r) && approx_eq(c.g, g) && approx_eq(c.b, b),
            "expected ({r}, {g}, {b}), got {c:?}"
        );
    }

    #[test]
    fn primaries() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), 1.0, 0.0, 0.0);
        assert_rgb(hsv_to_rgb(120.0, 1.0, 1.0), 0.0, 1.0, 0.0);
        assert_rgb(hsv_to_rgb(240.0, 1.0, 1.0), 0.0, 0.0, 1.0);
    }

    #[test]
    fn secondaries() {
        assert_rgb(hsv_to_rgb(60.0, 1.0, 1.0), 1.0, 1.0, 0.0);
        assert_rgb(hsv_to_rgb(180.0, 1.0, 1.0), 0.0, 1.0, 1.0);
        assert_rgb(hsv_to_rgb(300.0, 1.0, 1.0), 1.0, 0.0, 1.0);
    }

    #[test]
    fn zero_saturation_is_exact_gray() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            let c = hsv_to_rgb(200.0, 0.0, v);
            assert_eq!(c, RgbF32::gray(v));
        }
        // hue is ignored entirely
        assert_eq!(hsv_to_rgb(-1.0, 0.0, 0.3), RgbF32::gray(0.3));
    }

    #[test]
    fn each_sector_uses_its_channel_order() {
        // h = 30 + 60k puts f at 0.5, so t == q == v * (1 - s/2)
        let (v, s) = (0.8, 0.5);
        let p = v * (1.0 - s);
        let mid = v * (1.0 - s * 0.5);

        assert_rgb(hsv_to_rgb(30.0, s, v), v, mid, p);
        assert_rgb(hsv_to_rgb(90.0, s, v), mid, v, p);
        assert_rgb(hsv_to_rgb(150.0, s, v), p, v, mid);
        assert_rgb(hsv_to_rgb(210.0, s, v), p, mid, v);
        assert_rgb(hsv_to_rgb(270.0, s, v), mid, p, v);
        assert_rgb(hsv_to_rgb(330.0, s, v), v, p, mid);
    }

    #[test]
    fn full_turn_falls_into_last_sector() {
        assert_rgb(hsv_to_rgb(360.0, 1.0, 1.0), 1.0, 0.0, 1.0);
    }

    #[test]
    fn negative_hue_truncates_toward_zero() {
        // -30 / 60 truncates to sector 0 with f = -0.5
        let c = hsv_to_rgb(-30.0, 1.0, 1.0);
        assert_rgb(c, 1.0, -0.5, 0.0);
    }

    #[test]
    fn map_touches_every_channel() {
        let c = RgbF32::new(0.2, 0.4, 0.6).map(|x| x * 0.5);
        assert_rgb(c, 0.1, 0.2, 0.3);
    }

    #[test]
    fn from_hsv_matches_function() {
        let hsv = HsvF32::new(75.0, 0.4, 0.9);
        assert_eq!(RgbF32::from(hsv), hsv_to_rgb(75.0, 0.4, 0.9));
    }
}
