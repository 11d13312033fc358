use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Straight-alpha sRGB color with channels in `[0, 1]`.
///
/// This is the color token carried by world points from the scene builders
/// through the compositor to the output surfaces.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Error returned when a color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color literal")]
    Empty,
    #[error("invalid hex color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidHex(String),
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a color from straight components, clamping each to `[0, 1]`.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    ///
    /// This is the constructor used for hex literals from `.vsml` files.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Returns the color as rounded sRGB bytes.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_srgb_u8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Hue, saturation and lightness, each in `[0, 1]`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    /// Inverse of [`to_hsl`](Self::to_hsl). Inputs are clamped to `[0, 1]`.
    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
        match digits.len() {
            3 => Some(Self::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    fn named(name: &str) -> Option<Self> {
        let [r, g, b, a] = match name.to_ascii_lowercase().as_str() {
            "black"        => [0, 0, 0, 255],
            "white"        => [255, 255, 255, 255],
            "red"          => [255, 0, 0, 255],
            "green"        => [0, 128, 0, 255],
            "blue"         => [0, 0, 255, 255],
            "yellow"       => [255, 255, 0, 255],
            "orange"       => [255, 165, 0, 255],
            "gray" | "grey" => [128, 128, 128, 255],
            "transparent"  => [0, 0, 0, 0],
            _ => return None,
        };
        Some(Self::from_srgb_u8(r, g, b, a))
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
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

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        match s.strip_prefix('#') {
            Some(digits) => {
                Self::parse_hex(digits).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()))
            }
            None => Self::named(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parses_six_digit_hex() {
        let c: Color = "#2E7D32".parse().unwrap();
        assert_eq!(c.to_srgb_u8(), [0x2e, 0x7d, 0x32, 0xff]);
    }

    #[test]
    fn parses_short_and_alpha_hex() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::white());
        let c: Color = "#00000080".parse().unwrap();
        assert_eq!(c.to_srgb_u8(), [0, 0, 0, 0x80]);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::black());
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::white());
    }

    #[test]
    fn rejects_bad_literals() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!("#12345".parse::<Color>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!("#gggggg".parse::<Color>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!("mauve".parse::<Color>(), Err(ColorParseError::UnknownName(_))));
    }

    #[test]
    fn hex_output_omits_opaque_alpha() {
        assert_eq!(Color::from_srgb_u8(255, 143, 0, 255).to_hex(), "#ff8f00");
        assert_eq!(Color::from_srgb_u8(255, 143, 0, 16).to_hex(), "#ff8f0010");
    }

    #[test]
    fn hsl_of_primaries() {
        let (h, s, l) = Color::new(1.0, 0.0, 0.0, 1.0).to_hsl();
        assert_abs_diff_eq!(h, 0.0);
        assert_abs_diff_eq!(s, 1.0);
        assert_abs_diff_eq!(l, 0.5);

        let (h, _, _) = Color::new(0.0, 0.0, 1.0, 1.0).to_hsl();
        assert_abs_diff_eq!(h, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn hsl_round_trips_arbitrary_color() {
        let c = Color::from_srgb_u8(0x2e, 0x7d, 0x32, 0xff);
        let (h, s, l) = c.to_hsl();
        let back = Color::from_hsl(h, s, l, c.a);
        assert_abs_diff_eq!(back.r, c.r, epsilon = 1e-12);
        assert_abs_diff_eq!(back.g, c.g, epsilon = 1e-12);
        assert_abs_diff_eq!(back.b, c.b, epsilon = 1e-12);
    }
}
