//! RGBA color model with CSS-style literal parsing.
//!
//! Components are plain `f32`s, conventionally in `0.0..=1.0`. Nothing
//! clamps them on construction; only packing into `0xRRGGBBAA` does.
//!
//! ```rust,ignore
//! use imed_types::Color;
//!
//! let accent = Color::parse("#3D7FE0FF").unwrap();
//! let warn = Color::parse("hsl(40, 90%, 55%)").unwrap();
//! let half = Color::parse("rgba(1, 1, 1, 0.5)").unwrap();
//! assert_eq!(accent.to_string(), "#3D7FE0FF");
//! ```

use std::fmt;
use std::str::FromStr;

use ::color::{AlphaColor, Srgb as CssSrgb};
use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A color with four float components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Returned by [`Color::from_str`] when a literal cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color literal: {0:?}")]
pub struct ColorParseError(pub String);

// Constructors
impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Unpack a `0xRRGGBBAA` value.
    pub fn from_rgba_u32(rgba: u32) -> Self {
        let channel = |shift: u32| ((rgba >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(24), channel(16), channel(8), channel(0))
    }

    /// Build a color from hue (degrees), saturation and value.
    ///
    /// Uses the hexagonal-sector formula with no gamma correction. The hue
    /// wraps, so `360.0` and `-0.0` both land in the red sector.
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::new(r + m, g + m, b + m, a)
    }

    /// Parse a color literal.
    ///
    /// Accepted forms: `#RRGGBBAA`, `#RRGGBB`, `#RGBA`, `#RGB`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)`, `hsl(h, s%, v%)`,
    /// `hsla(h, s%, v%, a)` and CSS color names. `rgb` components are taken
    /// as-is (0.0 to 1.0), not as bytes.
    ///
    /// The `hsl` forms go through [`Color::from_hsv`]: the second and third
    /// tokens are percentages (the `%` sign is optional) and always divided
    /// by 100.
    ///
    /// Returns `None` on a non-numeric token, the wrong number of tokens or
    /// an unknown form. A partially decoded color is never returned.
    pub fn parse(text: &str) -> Option<Self> {
        let literal = text.trim().to_ascii_lowercase();

        if let Some(digits) = literal.strip_prefix('#') {
            return parse_hex(digits);
        }
        if let Some(args) = literal.strip_prefix("rgba") {
            let [r, g, b, a] = tokens::<4>(&literal, args)?;
            return Some(Self::new(number(r)?, number(g)?, number(b)?, number(a)?));
        }
        if let Some(args) = literal.strip_prefix("rgb") {
            let [r, g, b] = tokens::<3>(&literal, args)?;
            return Some(Self::rgb(number(r)?, number(g)?, number(b)?));
        }
        if let Some(args) = literal.strip_prefix("hsla") {
            let [h, s, v, a] = tokens::<4>(&literal, args)?;
            return Some(Self::from_hsv(
                number(h)?,
                percent(s)?,
                percent(v)?,
                number(a)?,
            ));
        }
        if let Some(args) = literal.strip_prefix("hsl") {
            let [h, s, v] = tokens::<3>(&literal, args)?;
            return Some(Self::from_hsv(number(h)?, percent(s)?, percent(v)?, 1.0));
        }

        parse_named(&literal)
    }

    /// Component-wise blend, `t = 0.0` yields `a`.
    pub fn lerp(a: Color, b: Color, t: f32) -> Self {
        Self::new(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        )
    }
}

// Conversions
impl Color {
    /// Pack into `0xRRGGBBAA`, clamping each component and rounding.
    pub fn to_rgba_u32(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 24) | (channel(self.g) << 16) | (channel(self.b) << 8) | channel(self.a)
    }

    /// Hue in degrees `[0, 360)`, saturation and value.
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let hsv: Hsv = Hsv::from_color(Srgb::new(self.r, self.g, self.b));
        (hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_hex(digits: &str) -> Option<Color> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let packed = match digits.len() {
        8 => u32::from_str_radix(digits, 16).ok()?,
        6 => (u32::from_str_radix(digits, 16).ok()? << 8) | 0xFF,
        4 => expand_nibbles(u32::from_str_radix(digits, 16).ok()?, 4),
        3 => (expand_nibbles(u32::from_str_radix(digits, 16).ok()?, 3) << 8) | 0xFF,
        _ => return None,
    };

    Some(Color::from_rgba_u32(packed))
}

/// `0xABC` -> `0xAABBCC`
fn expand_nibbles(value: u32, count: u32) -> u32 {
    (0..count).rev().fold(0, |acc, i| {
        let nibble = (value >> (i * 4)) & 0xF;
        (acc << 8) | (nibble << 4) | nibble
    })
}

/// Split the argument list of a functional literal into exactly `N` tokens.
fn tokens<'a, const N: usize>(literal: &str, args: &'a str) -> Option<[&'a str; N]> {
    let inner = args.trim();
    let inner = inner.strip_prefix('(').unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match <[&str; N]>::try_from(parts) {
        Ok(parts) => Some(parts),
        Err(parts) => {
            log::warn!(
                "expected {N} elements in color literal {literal:?}, found {}",
                parts.len()
            );
            None
        }
    }
}

fn number(token: &str) -> Option<f32> {
    token.parse().ok()
}

/// `"40%"` and `"40"` both -> `0.4`.
fn percent(token: &str) -> Option<f32> {
    let digits = token.strip_suffix('%').unwrap_or(token);
    Some(number(digits.trim())? / 100.0)
}

fn parse_named(literal: &str) -> Option<Color> {
    let parsed = ::color::parse_color(literal).ok()?;
    let srgb: AlphaColor<CssSrgb> = parsed.to_alpha_color();
    Some(Color::from(srgb.components))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_nibbles() {
        assert_eq!(expand_nibbles(0xABC, 3), 0xAABBCC);
        assert_eq!(expand_nibbles(0x1234, 4), 0x11223344);
    }

    #[test]
    fn test_percent_sign_is_optional() {
        assert_eq!(percent("50%"), Some(0.5));
        assert_eq!(percent("50"), Some(0.5));
        assert_eq!(percent(" 25 %"), Some(0.25));
        assert_eq!(percent("abc%"), None);
    }

    #[test]
    fn test_tokens_strips_parens() {
        let parts: Option<[&str; 3]> = tokens("rgb(1, 2, 3)", "(1, 2, 3)");
        assert_eq!(parts, Some(["1", "2", "3"]));
        let parts: Option<[&str; 3]> = tokens("rgb 1,2,3", " 1,2,3");
        assert_eq!(parts, Some(["1", "2", "3"]));
    }
}
