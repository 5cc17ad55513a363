pub mod hsvf32;
pub mod rgbaf32;
pub mod rgbf32;

pub use hsvf32::{HsvF32, rgb_to_hsv};
pub use rgbaf32::RgbaF32;
pub use rgbf32::{RgbF32, hsv_to_rgb};
