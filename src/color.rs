//! Color triples and the colorspace conversions the classifiers depend on.
//!
//! Lab and HSV values are stored in the common 8-bit encodings:
//! - Lab: L* scaled from 0-100 to 0-255, a* and b* offset by 128
//! - HSV: hue halved to 0-180, saturation and value in 0-255
//!
//! Classification thresholds are defined against these encodings, so the
//! conversions follow the reference sRGB / D65 formulas exactly rather than
//! a perceptual approximation.

use serde::{Deserialize, Serialize};

/// sRGB -> XYZ matrix, D65.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// D65 reference white (Y is 1.0).
const WHITE_X: f64 = 0.950456;
const WHITE_Z: f64 = 1.088754;

const LAB_EPSILON: f64 = 0.008856;

/// An 8-bit red/green/blue color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb`, either letter case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let s = hex.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// ITU-R BT.601 luma, used as the brightness proxy for outlier rejection.
    #[inline]
    pub fn luma(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    /// Spread between the strongest and weakest channel.
    pub fn chroma(&self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }

    pub fn to_lab(&self) -> Lab8 {
        let lin = [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ];
        let [x, y, z] = RGB_TO_XYZ.map(|row| row[0] * lin[0] + row[1] * lin[1] + row[2] * lin[2]);

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y);
        let fz = lab_f(z / WHITE_Z);

        let l = if y > LAB_EPSILON {
            116.0 * y.cbrt() - 16.0
        } else {
            903.3 * y
        };
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        Lab8 {
            l: saturate(l * 255.0 / 100.0),
            a: saturate(a + 128.0),
            b: saturate(b + 128.0),
        }
    }

    pub fn to_hsv(&self) -> Hsv8 {
        let (r, g, b) = (self.r as f64, self.g as f64, self.b as f64);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let s = if max > 0.0 { 255.0 * diff / max } else { 0.0 };

        let mut h = if diff == 0.0 {
            0.0
        } else if max == r {
            60.0 * (g - b) / diff
        } else if max == g {
            120.0 + 60.0 * (b - r) / diff
        } else {
            240.0 + 60.0 * (r - g) / diff
        };
        if h < 0.0 {
            h += 360.0;
        }

        let mut h = (h / 2.0).round();
        if h >= 180.0 {
            h -= 180.0;
        }

        Hsv8 {
            h: h as u8,
            s: saturate(s),
            v: max as u8,
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self::new(r, g, b)
    }
}

/// CIE L*a*b* in 8-bit encoding (L 0-255, a/b centered on 128).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Lab8 {
    pub l: u8,
    pub a: u8,
    pub b: u8,
}

impl Lab8 {
    /// L* back on its natural 0-100 scale.
    pub fn lightness(&self) -> f64 {
        self.l as f64 / 255.0 * 100.0
    }

    /// Signed red/green axis, 0 is neutral.
    pub fn a_centered(&self) -> i32 {
        self.a as i32 - 128
    }

    /// Signed yellow/blue axis, 0 is neutral.
    pub fn b_centered(&self) -> i32 {
        self.b as i32 - 128
    }
}

impl From<[u8; 3]> for Lab8 {
    fn from([l, a, b]: [u8; 3]) -> Self {
        Self { l, a, b }
    }
}

impl From<Lab8> for [u8; 3] {
    fn from(c: Lab8) -> Self {
        [c.l, c.a, c.b]
    }
}

/// Hue/saturation/value in 8-bit encoding (hue 0-180).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Hsv8 {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl From<[u8; 3]> for Hsv8 {
    fn from([h, s, v]: [u8; 3]) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv8> for [u8; 3] {
    fn from(c: Hsv8) -> Self {
        [c.h, c.s, c.v]
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[inline]
fn saturate(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encoding() {
        assert_eq!(Color::new(255, 0, 128).hex(), "#ff0080");
        assert_eq!(Color::new(0, 0, 0).hex(), "#000000");
        assert_eq!(Color::from_hex("#FF0080"), Some(Color::new(255, 0, 128)));
        assert_eq!(Color::from_hex("c68642"), Some(Color::new(198, 134, 66)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
    }

    #[test]
    fn hex_round_trip_sweep() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in [0u8, 1, 127, 128, 254, 255] {
                    let c = Color::new(r as u8, g as u8, b);
                    assert_eq!(Color::from_hex(&c.hex()), Some(c));
                }
            }
        }
    }

    #[test]
    fn luma_weights() {
        assert!((Color::new(255, 255, 255).luma() - 255.0).abs() < 1e-9);
        assert!((Color::new(255, 0, 0).luma() - 76.245).abs() < 1e-9);
        assert!((Color::new(0, 0, 255).luma() - 29.07).abs() < 1e-9);
    }

    #[test]
    fn chroma_spread() {
        assert_eq!(Color::new(200, 150, 120).chroma(), 80);
        assert_eq!(Color::new(90, 90, 90).chroma(), 0);
    }

    #[test]
    fn lab_reference_values() {
        assert_eq!(Color::new(255, 255, 255).to_lab(), Lab8 { l: 255, a: 128, b: 128 });
        assert_eq!(Color::new(0, 0, 0).to_lab(), Lab8 { l: 0, a: 128, b: 128 });
        assert_eq!(Color::new(255, 0, 0).to_lab(), Lab8 { l: 136, a: 208, b: 195 });
        assert_eq!(Color::new(0, 0, 255).to_lab(), Lab8 { l: 82, a: 207, b: 20 });
    }

    #[test]
    fn lab_grey_is_neutral() {
        let lab = Color::new(128, 128, 128).to_lab();
        assert_eq!(lab.a_centered(), 0);
        assert_eq!(lab.b_centered(), 0);
        assert!((lab.lightness() - 53.7).abs() < 0.5);
    }

    #[test]
    fn hsv_reference_values() {
        assert_eq!(Color::new(255, 0, 0).to_hsv(), Hsv8 { h: 0, s: 255, v: 255 });
        assert_eq!(Color::new(0, 255, 0).to_hsv(), Hsv8 { h: 60, s: 255, v: 255 });
        assert_eq!(Color::new(0, 0, 255).to_hsv(), Hsv8 { h: 120, s: 255, v: 255 });
        assert_eq!(Color::new(0, 0, 0).to_hsv(), Hsv8 { h: 0, s: 0, v: 0 });
        assert_eq!(Color::new(77, 77, 77).to_hsv(), Hsv8 { h: 0, s: 0, v: 77 });
        // 60 * 60 / 100 = 36 degrees
        assert_eq!(Color::new(200, 160, 100).to_hsv(), Hsv8 { h: 18, s: 128, v: 200 });
    }

    #[test]
    fn serializes_as_arrays() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(1, 2, 3));
    }
}
