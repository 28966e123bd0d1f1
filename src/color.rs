use std::ops::{Add, Mul, Sub};

use serde::Deserialize;

use crate::approx_eq;
use crate::error::{Error, Result};

/// An RGB color with unclamped f64 channels.
///
/// Shading math happily produces channels outside [0, 1]; clamping only
/// happens when the canvas is serialized to 8-bit output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Scene files write colors either as `[r, g, b]` or as a hex string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([f64; 3]),
    Hex(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Self> {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Ok(Color::new(r, g, b)),
            ColorRepr::Hex(hex) => Color::from_hex(&hex),
        }
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses `rrggbb` or `rrggbbaa` hex notation, with an optional leading
    /// `#`. The alpha pair, when present, is ignored.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| -> Result<f64> {
            let byte = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))?;
            Ok(f64::from(byte) / 255.0)
        };

        Ok(Color::new(channel(0)?, channel(1)?, channel(2)?))
    }

    /// Clamps each channel to [0, 1] and rounds to an 8-bit value.
    #[inline]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    #[inline]
    pub fn approx_eq(&self, other: &Color) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, other: Color) -> Self::Output {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for Color {
    type Output = Color;

    #[inline]
    fn sub(self, other: Color) -> Self::Output {
        Color::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

/// Component-wise (Hadamard) product, used to filter a light's intensity
/// through a surface color.
impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, other: Color) -> Self::Output {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

#[test]
fn arithmetic() {
    let c1 = Color::new(0.9, 0.6, 0.75);
    let c2 = Color::new(0.7, 0.1, 0.25);

    assert!((c1 + c2).approx_eq(&Color::new(1.6, 0.7, 1.0)));
    assert!((c1 - c2).approx_eq(&Color::new(0.2, 0.5, 0.5)));
    assert!((Color::new(0.2, 0.3, 0.4) * 2.0).approx_eq(&Color::new(0.4, 0.6, 0.8)));
}

#[test]
fn hadamard_product() {
    let c1 = Color::new(1.0, 0.2, 0.4);
    let c2 = Color::new(0.9, 1.0, 0.1);

    assert!((c1 * c2).approx_eq(&Color::new(0.9, 0.2, 0.04)));
}

#[test]
fn hex_parsing() {
    let c = Color::from_hex("ff4785ff").unwrap();
    assert!(approx_eq(c.r, 1.0));
    assert!(approx_eq(c.g, 71.0 / 255.0));
    assert!(approx_eq(c.b, 133.0 / 255.0));

    assert!(Color::from_hex("#ffffff").unwrap().approx_eq(&Color::WHITE));
    assert!(Color::from_hex("nonsense").is_err());
    assert!(Color::from_hex("12345").is_err());
}

#[test]
fn rgb8_conversion_clamps() {
    assert_eq!([255, 128, 0], Color::new(1.5, 0.5019, -0.3).to_rgb8());
}
