#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod format;
pub mod named;

pub use error::ParseNamedColorError;
pub use format::{HsvF32, RgbF32, RgbaF32, hsv_to_rgb, rgb_to_hsv};
pub use named::NamedColor;

/// Apply a function to every color channel of a value.
///
/// Alpha is not a color channel: implementors carrying one leave it untouched.
pub trait MapColor: Copy {
    type Component;

    fn map<F>(self, f: F) -> Self
    where
        F: Fn(Self::Component) -> Self::Component;
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
