// SPDX-License-Identifier: MPL-2.0

//! Per-pixel color transforms
//!
//! Each transform maps one RGB triple to another and never looks at
//! neighbouring pixels. Alpha is left alone by [`map_rgb`].

use crate::constants::{
    BRIGHTNESS_OFFSET, LUMA_WEIGHTS, RAINBOW_HUE_SHIFT, RAINBOW_SATURATION_GAIN, SEPIA_MATRIX,
    VINTAGE_WARMTH,
};
use crate::frame::FrameBuffer;

/// Apply a per-pixel RGB transform in place, preserving alpha
pub fn map_rgb<F>(frame: &mut FrameBuffer, transform: F)
where
    F: Fn(u8, u8, u8) -> [u8; 3],
{
    for pixel in frame.pixels_mut() {
        let [r, g, b] = transform(pixel[0], pixel[1], pixel[2]);
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
    }
}

/// Weighted sum in thousandths, truncated and clamped to 255
#[inline]
fn weighted(weights: [u32; 3], r: u8, g: u8, b: u8) -> u8 {
    let sum = weights[0] * r as u32 + weights[1] * g as u32 + weights[2] * b as u32;
    (sum / 1000).min(255) as u8
}

/// Rec. 601 luma, truncated
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    weighted(LUMA_WEIGHTS, r, g, b)
}

pub fn sepia(r: u8, g: u8, b: u8) -> [u8; 3] {
    [
        weighted(SEPIA_MATRIX[0], r, g, b),
        weighted(SEPIA_MATRIX[1], r, g, b),
        weighted(SEPIA_MATRIX[2], r, g, b),
    ]
}

pub fn grayscale(r: u8, g: u8, b: u8) -> [u8; 3] {
    let gray = luma(r, g, b);
    [gray, gray, gray]
}

pub fn brightness(r: u8, g: u8, b: u8) -> [u8; 3] {
    [
        r.saturating_add(BRIGHTNESS_OFFSET),
        g.saturating_add(BRIGHTNESS_OFFSET),
        b.saturating_add(BRIGHTNESS_OFFSET),
    ]
}

/// Sepia plus a slight warmth bias on red and green
pub fn vintage(r: u8, g: u8, b: u8) -> [u8; 3] {
    let [r, g, b] = sepia(r, g, b);
    [
        r.saturating_add(VINTAGE_WARMTH.0),
        g.saturating_add(VINTAGE_WARMTH.1),
        b,
    ]
}

pub fn negative(r: u8, g: u8, b: u8) -> [u8; 3] {
    [255 - r, 255 - g, 255 - b]
}

/// Rotate hue and double saturation
pub fn rainbow(r: u8, g: u8, b: u8) -> [u8; 3] {
    let hsl = Hsl::from_rgb(r, g, b);
    Hsl {
        h: (hsl.h + RAINBOW_HUE_SHIFT).rem_euclid(1.0),
        s: (hsl.s * RAINBOW_SATURATION_GAIN).min(1.0),
        l: hsl.l,
    }
    .to_rgb()
}

/// Hue, saturation, lightness, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Standard max/min conversion; hue ties resolve red, then green, then blue
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f32 / 255.0;
        let g = g as f32 / 255.0;
        let b = b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self { h: h / 6.0, s, l }
    }

    /// Convert back to 8-bit RGB, rounding to nearest
    pub fn to_rgb(self) -> [u8; 3] {
        let to_byte = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;

        if self.s == 0.0 {
            let v = to_byte(self.l);
            return [v, v, v];
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        [
            to_byte(hue_to_rgb(p, q, self.h + 1.0 / 3.0)),
            to_byte(hue_to_rgb(p, q, self.h)),
            to_byte(hue_to_rgb(p, q, self.h - 1.0 / 3.0)),
        ]
    }
}

#[inline]
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_white() {
        // 0.937 * 255 = 238.935, truncated
        assert_eq!(sepia(255, 255, 255), [255, 255, 238]);
    }

    #[test]
    fn test_sepia_black_stays_black() {
        assert_eq!(sepia(0, 0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_grayscale_weights() {
        assert_eq!(grayscale(255, 255, 255), [255, 255, 255]);
        // 0.299 * 100 = 29.9
        assert_eq!(grayscale(100, 0, 0), [29, 29, 29]);
    }

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(brightness(10, 240, 255), [40, 255, 255]);
    }

    #[test]
    fn test_vintage_adds_warmth() {
        let [sr, sg, sb] = sepia(40, 30, 20);
        assert_eq!(vintage(40, 30, 20), [sr + 10, sg + 5, sb]);
        assert_eq!(vintage(255, 255, 255), [255, 255, 238]);
    }

    #[test]
    fn test_hsl_primaries() {
        let red = Hsl::from_rgb(255, 0, 0);
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.l, 0.5);

        let green = Hsl::from_rgb(0, 255, 0);
        assert!((green.h - 1.0 / 3.0).abs() < 1e-6);

        let blue = Hsl::from_rgb(0, 0, 255);
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_hsl_tie_prefers_red() {
        // Yellow: red and green share the max, red branch wins
        let yellow = Hsl::from_rgb(255, 255, 0);
        assert!((yellow.h - 1.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_hsl_round_trip() {
        for rgb in [[12, 200, 99], [255, 128, 0], [30, 30, 30], [0, 0, 255]] {
            let back = Hsl::from_rgb(rgb[0], rgb[1], rgb[2]).to_rgb();
            assert_eq!(back, rgb);
        }
    }

    #[test]
    fn test_rainbow_keeps_gray() {
        // Zero saturation stays zero after doubling
        assert_eq!(rainbow(128, 128, 128), [128, 128, 128]);
    }

    #[test]
    fn test_rainbow_rotates_red() {
        // Hue 0 + 0.3: red channel lands at (2/3 - 0.6333) * 6 = 0.2
        assert_eq!(rainbow(255, 0, 0), [51, 255, 0]);
    }

    #[test]
    fn test_rainbow_doubles_partial_saturation() {
        // s ~ 0.247, l = 0.5; saturation doubles to ~0.494 before the rotation
        let hsl = Hsl::from_rgb(159, 96, 96);
        assert!((hsl.s - 0.247).abs() < 1e-3);
        assert_eq!(rainbow(159, 96, 96), [90, 191, 64]);
    }

    #[test]
    fn test_rainbow_saturation_caps_at_one() {
        // Already fully saturated, doubling must not overshoot
        let out = rainbow(0, 0, 255);
        let hsl = Hsl::from_rgb(out[0], out[1], out[2]);
        assert!((hsl.s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_rgb_preserves_alpha() {
        let mut frame = FrameBuffer::filled(2, 2, [10, 20, 30, 77]).unwrap();
        map_rgb(&mut frame, negative);
        assert!(frame.pixels().iter().all(|p| *p == [245, 235, 225, 77]));
    }
}
