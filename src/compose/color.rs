//! Canvas background colors parsed from hex notation

use crate::io::error::{ConversionError, invalid_parameter};
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pixel value for RGB buffers
    pub const fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.red, self.green, self.blue])
    }
}

impl FromStr for Color {
    type Err = ConversionError;

    /// Accepts `#rgb`, `#rrggbb`, `black` and `white`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            _ => {}
        }

        let reject = || invalid_parameter("background", &s, &"expected #rgb or #rrggbb");
        let hex = trimmed.strip_prefix('#').ok_or_else(reject)?;
        if !hex.is_ascii() {
            return Err(reject());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_err| reject());
        let (red, green, blue) = match hex.len() {
            3 => {
                let expand = |i: usize| -> Result<u8, ConversionError> {
                    let digit = hex.get(i..=i).ok_or_else(reject)?;
                    channel(&digit.repeat(2))
                };
                (expand(0)?, expand(1)?, expand(2)?)
            }
            6 => (
                channel(hex.get(0..2).ok_or_else(reject)?)?,
                channel(hex.get(2..4).ok_or_else(reject)?)?,
                channel(hex.get(4..6).ok_or_else(reject)?)?,
            ),
            _ => return Err(reject()),
        };
        Ok(Self::new(red, green, blue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
