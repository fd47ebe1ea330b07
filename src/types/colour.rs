//! Colour type, packing and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{PixgenError, Result};

/// An RGBA colour value.
///
/// Packs into a `u32` with red in the highest byte and alpha in the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Pack into a `u32`: `0xRRGGBBAA`.
    pub const fn pack(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Unpack a `0xRRGGBBAA` value.
    pub const fn unpack(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    /// Build an opaque colour from HSL.
    ///
    /// `hue` is in degrees, `saturation` and `lightness` in `0.0..=1.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hsl: Hsl = Hsl::new(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
        let rgb: Srgb<f32> = hsl.into_color();
        Self::rgb(
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        )
    }

    /// Hue in degrees, saturation and lightness in `0.0..=1.0`.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsl: Hsl = rgb.into_color();
        (hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness)
    }

    /// Parse a colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    /// - `hsl(H, S%, L%)`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(args) = s
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_hsl(s, args);
        }
        Self::from_hex(s)
    }

    /// Parse a hex colour string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid_colour(s));
        }

        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>>>()?;

        match digits[..] {
            [r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            [r, g, b, a] => Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::new(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                a1 << 4 | a0,
            )),
            _ => Err(invalid_colour(s)),
        }
    }

    /// Convert to an RGBA byte array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<u32> for Colour {
    fn from(packed: u32) -> Self {
        Self::unpack(packed)
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> Self {
        colour.pack()
    }
}

impl FromStr for Colour {
    type Err = PixgenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = PixgenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_colour(s: &str) -> PixgenError {
    PixgenError::Parse {
        message: format!("Invalid colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, #RRGGBBAA, or hsl(H, S%, L%)".to_string()),
    }
}

/// Parse the argument list of `hsl(H, S%, L%)`.
fn parse_hsl(original: &str, args: &str) -> Result<Colour> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let [h, s, l] = parts[..] else {
        return Err(invalid_colour(original));
    };

    let number = |part: &str| -> Result<f32> {
        part.trim_end_matches('%')
            .trim()
            .parse::<f32>()
            .map_err(|_| invalid_colour(original))
    };

    Ok(Colour::from_hsl(
        number(h)?,
        number(s)? / 100.0,
        number(l)? / 100.0,
    ))
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| PixgenError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}
