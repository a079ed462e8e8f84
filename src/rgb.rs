//! Floating-point RGB, the hub every other representation converts through.
//!
//! [`RgbFloat`] holds red, green and blue as normalized `f64` values in
//! `0.0..=1.0`. It owns the hex codec and the HSV to RGB formula; the integer
//! and HSV types reach each other only by way of this type.
//!
//! # Examples
//!
//! ## Hex Codec
//!
//! ```
//! use colorhub::RgbFloat;
//!
//! let lime = RgbFloat::from_hex("#80ff00").unwrap();
//! assert_eq!(lime.hex(), "#80ff00");
//!
//! // The leading '#' is optional on input
//! let same = RgbFloat::from_hex("80ff00").unwrap();
//! assert_eq!(lime, same);
//! ```
//!
//! ## Converting
//!
//! ```
//! use colorhub::{ByteWidth, RgbFloat};
//!
//! let rgb = RgbFloat::new(0.5, 1.0, 0.0);
//!
//! let int = rgb.to_rgb_int(ByteWidth::ONE);
//! assert_eq!(int.rgb(), (128, 255, 0));
//!
//! let hsv = rgb.to_hsv();
//! assert_eq!(hsv.hsv(), (0.25, 1.0, 1.0));
//! ```
//!
//! Channel values are not clamped. A channel outside `0.0..=1.0` converts
//! without error and produces an out-of-range hex digit group or integer.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ColorError;
use crate::hsv::Hsv;
use crate::rgb_int::{ByteWidth, RgbInt};

/// Largest value of a single hex-encoded channel.
const HEX_CHANNEL_MAX: f64 = 255.0;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
});

/// RGB color with normalized floating-point channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbFloat {
    /// Red, nominally `0.0..=1.0`.
    pub r: f64,
    /// Green, nominally `0.0..=1.0`.
    pub g: f64,
    /// Blue, nominally `0.0..=1.0`.
    pub b: f64,
}

impl RgbFloat {
    /// Create a color from its three components.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns the components as an `(r, g, b)` tuple.
    #[must_use]
    pub const fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` hex string. The `#` is optional and digits may be
    /// either case; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] unless the input is exactly six hex
    /// digits after the optional prefix.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let Some(caps) = HEX_RE.captures(hex.trim()) else {
            log::debug!("rejected hex color {hex:?}");
            return Err(ColorError::InvalidHex(hex.to_string()));
        };

        let channel = |index: usize| {
            u8::from_str_radix(&caps[index], 16).map(|value| f64::from(value) / HEX_CHANNEL_MAX)
        };
        match (channel(1), channel(2), channel(3)) {
            (Ok(r), Ok(g), Ok(b)) => {
                log::trace!("parsed hex {hex:?} as ({r}, {g}, {b})");
                Ok(Self::new(r, g, b))
            }
            _ => Err(ColorError::InvalidHex(hex.to_string())),
        }
    }

    /// Scale integer channels down by the maximum value of their byte width.
    #[must_use]
    pub fn from_rgb_int(rgb_int: RgbInt) -> Self {
        let max = f64::from(rgb_int.byte_width().max_value());
        Self::new(
            f64::from(rgb_int.r) / max,
            f64::from(rgb_int.g) / max,
            f64::from(rgb_int.b) / max,
        )
    }

    /// Convert from HSV by locating the hue in one of six 60° sectors.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        let (h, s, v) = hsv.hsv();

        let degrees = h * 360.0;
        let chroma = v * s;
        let x = chroma * (1.0 - ((degrees / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = if degrees < 60.0 {
            (chroma, x, 0.0)
        } else if degrees < 120.0 {
            (x, chroma, 0.0)
        } else if degrees < 180.0 {
            (0.0, chroma, x)
        } else if degrees < 240.0 {
            (0.0, x, chroma)
        } else if degrees < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Self::new(r + m, g + m, b + m)
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    ///
    /// Each channel is scaled by 255 and rounded half away from zero.
    #[must_use]
    pub fn hex(&self) -> String {
        format!(
            "#{}{}{}",
            hex_channel(self.r),
            hex_channel(self.g),
            hex_channel(self.b)
        )
    }

    /// Quantize to integer channels of the given byte width.
    #[must_use]
    pub fn to_rgb_int(self, byte_width: ByteWidth) -> RgbInt {
        RgbInt::from_rgb(self, byte_width)
    }

    /// Convert to HSV.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb(self)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is already rounded; f64 to i64 saturates"
)]
fn hex_channel(value: f64) -> String {
    let scaled = (value * HEX_CHANNEL_MAX).round() as i64;
    if scaled < 0 {
        format!("-{:02x}", scaled.unsigned_abs())
    } else {
        format!("{scaled:02x}")
    }
}

/// Format with the fewest of one, two or three decimals that is exact.
#[expect(clippy::float_cmp, reason = "checking for an exact short decimal")]
fn short_decimal(value: f64) -> String {
    if (value * 10.0).round() / 10.0 == value {
        format!("{value:.1}")
    } else if (value * 100.0).round() / 100.0 == value {
        format!("{value:.2}")
    } else {
        format!("{value:.3}")
    }
}

impl fmt::Display for RgbFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RgbFloat({}, {}, {})",
            short_decimal(self.r),
            short_decimal(self.g),
            short_decimal(self.b)
        )
    }
}

impl FromStr for RgbFloat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for RgbFloat {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for RgbFloat {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(value.as_str())
    }
}

impl From<(f64, f64, f64)> for RgbFloat {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbInt> for RgbFloat {
    fn from(rgb_int: RgbInt) -> Self {
        Self::from_rgb_int(rgb_int)
    }
}

impl From<Hsv> for RgbFloat {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv)
    }
}
