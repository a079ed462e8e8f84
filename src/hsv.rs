//! Hue, saturation and value, all normalized to `0.0..=1.0`.
//!
//! Hue is stored as a fraction of a full turn (`degrees / 360`). Every
//! conversion into or out of HSV passes through [`RgbFloat`], which keeps the
//! grayscale and black conventions defined in one place:
//!
//! - zero chroma (`r == g == b`) yields hue `0.0` and saturation `0.0`
//! - black yields `(0.0, 0.0, 0.0)` without dividing by zero
//!
//! ```
//! use colorhub::{Hsv, RgbFloat};
//!
//! let gray = Hsv::from_rgb(RgbFloat::new(0.4, 0.4, 0.4));
//! assert_eq!(gray.hsv(), (0.0, 0.0, 0.4));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::rgb::RgbFloat;
use crate::rgb_int::{ByteWidth, RgbInt};

/// Color in the HSV cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue as a fraction of 360°.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (brightness).
    pub v: f64,
}

impl Hsv {
    /// Create a color from hue, saturation and value.
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Returns the components as an `(h, s, v)` tuple.
    #[must_use]
    pub const fn hsv(&self) -> (f64, f64, f64) {
        (self.h, self.s, self.v)
    }

    /// Convert from floating-point RGB.
    ///
    /// When several channels share the maximum, red wins over green and green
    /// over blue when picking the hue formula.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "ties between channels must be exact")]
    pub fn from_rgb(rgb: RgbFloat) -> Self {
        let (r, g, b) = rgb.rgb();
        let c_max = r.max(g).max(b);
        let c_min = r.min(g).min(b);
        let delta = c_max - c_min;

        let degrees = if delta == 0.0 {
            0.0
        } else if c_max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if c_max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let saturation = if c_max == 0.0 { 0.0 } else { delta / c_max };

        Self::new(degrees / 360.0, saturation, c_max)
    }

    /// Convert from integer RGB through [`RgbFloat`].
    #[must_use]
    pub fn from_rgb_int(rgb_int: RgbInt) -> Self {
        Self::from_rgb(RgbFloat::from_rgb_int(rgb_int))
    }

    /// Parse a `#rrggbb` hex string through [`RgbFloat::from_hex`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        RgbFloat::from_hex(hex).map(Self::from_rgb)
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn hex(&self) -> String {
        RgbFloat::from_hsv(*self).hex()
    }

    /// Convert to floating-point RGB.
    #[must_use]
    pub fn to_rgb(self) -> RgbFloat {
        RgbFloat::from_hsv(self)
    }

    /// Convert to integer RGB through [`RgbFloat`].
    #[must_use]
    pub fn to_rgb_int(self, byte_width: ByteWidth) -> RgbInt {
        RgbInt::from_hsv(self, byte_width)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsv({:?}, {:?}, {:?})", self.h, self.s, self.v)
    }
}

impl FromStr for Hsv {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Hsv {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for Hsv {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(value.as_str())
    }
}

impl From<(f64, f64, f64)> for Hsv {
    fn from((h, s, v): (f64, f64, f64)) -> Self {
        Self::new(h, s, v)
    }
}

impl From<RgbFloat> for Hsv {
    fn from(rgb: RgbFloat) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<RgbInt> for Hsv {
    fn from(rgb_int: RgbInt) -> Self {
        Self::from_rgb_int(rgb_int)
    }
}
