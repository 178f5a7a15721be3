use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{about_eq, EPSILON};

/// RGB + alpha.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.00001` epsilon.
#[derive(Copy, Clone)]
pub struct Rgba {
    /// Red channel value, in the `[0.0..=1.0]` range.
    pub red: f32,
    /// Green channel value, in the `[0.0..=1.0]` range.
    pub green: f32,
    /// Blue channel value, in the `[0.0..=1.0]` range.
    pub blue: f32,
    /// Alpha channel value, in the `[0.0..=1.0]` range.
    pub alpha: f32,
}
impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.red, other.red, EPSILON)
            && about_eq(self.green, other.green, EPSILON)
            && about_eq(self.blue, other.blue, EPSILON)
            && about_eq(self.alpha, other.alpha, EPSILON)
    }
}
impl Rgba {
    /// New from normalized channels.
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self { red, green, blue, alpha }
    }

    /// New opaque color from byte channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// New color from byte channels.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: alpha as f32 / 255.0,
        }
    }

    /// New from a packed `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self::rgba((argb >> 16) as u8, (argb >> 8) as u8, argb as u8, (argb >> 24) as u8)
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub fn to_argb(self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Convert channels to bytes, `[red, green, blue, alpha]`.
    pub fn to_bytes(self) -> [u8; 4] {
        fn i(n: f32) -> u8 {
            (n.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [i(self.red), i(self.green), i(self.blue), i(self.alpha)]
    }

    /// Returns a copy of the color with a new `alpha` value.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns a copy of the color with the alpha set to `0`.
    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }
}
impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Rgba")
                .field("red", &self.red)
                .field("green", &self.green)
                .field("blue", &self.blue)
                .field("alpha", &self.alpha)
                .finish()
        } else {
            let [r, g, b, a] = self.to_bytes();
            if a == 255 {
                write!(f, "rgb({r}, {g}, {b})")
            } else {
                write!(f, "rgba({r}, {g}, {b}, {a})")
            }
        }
    }
}
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_bytes();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}
impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse `[#|0x]RRGGBB[AA]` or `[#|0x]RGB[A]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s.strip_prefix('#').or_else(|| s.strip_prefix("0x")).unwrap_or(s);
        if !hex.is_ascii() {
            return Err(ParseColorError::UnknownFormat);
        }

        let byte = |i: usize, len: usize| -> Result<u8, ParseColorError> {
            let c = &hex[i * len..(i + 1) * len];
            let v = u8::from_str_radix(c, 16)?;
            Ok(if len == 1 { v * 17 } else { v })
        };

        match hex.len() {
            3 => Ok(Rgba::rgb(byte(0, 1)?, byte(1, 1)?, byte(2, 1)?)),
            4 => Ok(Rgba::rgba(byte(0, 1)?, byte(1, 1)?, byte(2, 1)?, byte(3, 1)?)),
            6 => Ok(Rgba::rgb(byte(0, 2)?, byte(1, 2)?, byte(2, 2)?)),
            8 => Ok(Rgba::rgba(byte(0, 2)?, byte(1, 2)?, byte(2, 2)?, byte(3, 2)?)),
            0..=2 | 5 | 7 => Err(ParseColorError::MissingComponent),
            _ => Err(ParseColorError::ExtraComponent),
        }
    }
}
impl Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An error which can be returned when parsing a hex color.
#[derive(Debug)]
#[non_exhaustive]
pub enum ParseColorError {
    /// Color component parse error.
    Component(std::num::ParseIntError),
    /// Missing color component.
    MissingComponent,
    /// Extra color component.
    ExtraComponent,
    /// Unexpected char.
    UnknownFormat,
}
impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Component(e) => write!(f, "error parsing component, {e}"),
            ParseColorError::MissingComponent => write!(f, "missing component"),
            ParseColorError::ExtraComponent => write!(f, "extra component"),
            ParseColorError::UnknownFormat => write!(f, "unknown format"),
        }
    }
}
impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let ParseColorError::Component(e) = self {
            Some(e)
        } else {
            None
        }
    }
}
impl From<std::num::ParseIntError> for ParseColorError {
    fn from(value: std::num::ParseIntError) -> Self {
        ParseColorError::Component(value)
    }
}

/// Named colors.
pub mod colors {
    use super::Rgba;

    /// Black, `#000000`.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// White, `#FFFFFF`.
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Gray, `#808080`.
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
}
