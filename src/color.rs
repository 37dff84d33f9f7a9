//! Floating-point HSV color handling.
//!
//! Hue is measured in turns [0, 1); saturation and value live in [0, 1].
//! Floats keep the random color generation simple; pixels are packed to
//! 8 bits per channel only at the output boundary.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// An HSV color. Immutable value type; normalize before converting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Fully dark (all channels zero after conversion).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Wrap hue into [0, 1) and clamp saturation and value into [0, 1].
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_turns(self.h),
            s: clamp01(self.s),
            v: clamp01(self.v),
        }
    }

    /// Convert to normalized RGB, each channel in [0, 1].
    pub fn to_rgb(self) -> (f32, f32, f32) {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Pack into an 8-bit-per-channel pixel.
    ///
    /// `RGB8` carries no alpha channel; output drivers treat the pixel as
    /// fully opaque.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixel(self) -> Rgb {
        let (r, g, b) = self.to_rgb();
        Rgb {
            r: libm::roundf(r * 255.0) as u8,
            g: libm::roundf(g * 255.0) as u8,
            b: libm::roundf(b * 255.0) as u8,
        }
    }
}

fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

fn wrap_turns(h: f32) -> f32 {
    let wrapped = h - libm::floorf(h);
    // floorf(1.0 - epsilon) rounding can still yield 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Standard six-sector HSV to RGB conversion.
///
/// Inputs are expected pre-normalized (hue wrapped to [0, 1), saturation and
/// value clamped to [0, 1]); out-of-range values select a sector
/// deterministically but are otherwise unspecified.
///
/// `s == 0` short-circuits to grayscale, matching the canonical conversion
/// rather than falling through the sector math.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }

    let mut h6 = h * 6.0;
    if h6 >= 6.0 {
        // hue 1.0 wraps to sector 0
        h6 = 0.0;
    }
    let sector = libm::floorf(h6);
    let frac = h6 - sector;

    let v1 = v * (1.0 - s);
    let v2 = v * (1.0 - s * frac);
    let v3 = v * (1.0 - s * (1.0 - frac));

    match sector as u8 {
        0 => (v, v3, v1),
        1 => (v2, v, v1),
        2 => (v1, v, v3),
        3 => (v1, v2, v),
        4 => (v3, v1, v),
        _ => (v, v1, v2),
    }
}
