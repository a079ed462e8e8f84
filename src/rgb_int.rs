//! Integer RGB with a configurable byte width per channel.
//!
//! Only one byte per channel (`0..=255`) is implemented. Wider channels are a
//! reserved extension: asking for them fails with
//! [`ColorError::UnsupportedByteWidth`] rather than producing a rescaled value.
//!
//! ```
//! use colorhub::{ColorError, RgbInt};
//!
//! let lime = RgbInt::new(128, 255, 0, 1).unwrap();
//! assert_eq!(lime.hex(), "#80ff00");
//!
//! assert_eq!(RgbInt::new(0, 0, 0, 2), Err(ColorError::UnsupportedByteWidth(2)));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hsv::Hsv;
use crate::rgb::RgbFloat;

/// Number of bytes used to store each integer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteWidth(u8);

impl ByteWidth {
    /// One byte per channel, `0..=255`.
    pub const ONE: Self = Self(1);

    /// Validate a byte width.
    ///
    /// # Errors
    ///
    /// - [`ColorError::ZeroByteWidth`] for `0`
    /// - [`ColorError::UnsupportedByteWidth`] for anything above `1`
    pub fn new(bytes: u8) -> Result<Self, ColorError> {
        match bytes {
            0 => {
                log::warn!("rejected zero byte width");
                Err(ColorError::ZeroByteWidth)
            }
            1 => Ok(Self::ONE),
            n => {
                log::warn!("rejected unsupported byte width {n}");
                Err(ColorError::UnsupportedByteWidth(n))
            }
        }
    }

    /// Number of bytes per channel.
    #[must_use]
    pub const fn bytes(self) -> u8 {
        self.0
    }

    /// Largest channel value, `2^(8n) - 1`.
    #[must_use]
    pub fn max_value(self) -> u32 {
        let max = (1u64 << (8 * u32::from(self.0))) - 1;
        u32::try_from(max).unwrap_or(u32::MAX)
    }
}

impl Default for ByteWidth {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for ByteWidth {
    type Error = ColorError;

    fn try_from(bytes: u8) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

/// RGB color with unsigned integer channels.
///
/// Channels are not checked against [`ByteWidth::max_value`]; a channel above
/// the maximum converts to a float above `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbInt {
    /// Red channel.
    pub r: u32,
    /// Green channel.
    pub g: u32,
    /// Blue channel.
    pub b: u32,
    byte_width: ByteWidth,
}

impl RgbInt {
    /// Create a color from integer channels and a byte width.
    ///
    /// # Errors
    ///
    /// Returns an error if `byte_width` is not `1`; see [`ByteWidth::new`].
    pub fn new(r: u32, g: u32, b: u32, byte_width: u8) -> Result<Self, ColorError> {
        Ok(Self::with_width(r, g, b, ByteWidth::new(byte_width)?))
    }

    /// Create a color from integer channels and an already validated width.
    #[must_use]
    pub const fn with_width(r: u32, g: u32, b: u32, byte_width: ByteWidth) -> Self {
        Self {
            r,
            g,
            b,
            byte_width,
        }
    }

    /// Byte width of each channel.
    #[must_use]
    pub const fn byte_width(&self) -> ByteWidth {
        self.byte_width
    }

    /// Returns the channels as an `(r, g, b)` tuple.
    #[must_use]
    pub const fn rgb(&self) -> (u32, u32, u32) {
        (self.r, self.g, self.b)
    }

    /// Quantize float channels, rounding half away from zero.
    ///
    /// Negative channels saturate at `0`.
    #[must_use]
    pub fn from_rgb(rgb: RgbFloat, byte_width: ByteWidth) -> Self {
        let max = f64::from(byte_width.max_value());
        Self::with_width(
            quantize(rgb.r, max),
            quantize(rgb.g, max),
            quantize(rgb.b, max),
            byte_width,
        )
    }

    /// Parse a `#rrggbb` hex string through [`RgbFloat::from_hex`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for malformed input.
    pub fn from_hex(hex: &str, byte_width: ByteWidth) -> Result<Self, ColorError> {
        let rgb = RgbFloat::from_hex(hex)?;
        Ok(Self::from_rgb(rgb, byte_width))
    }

    /// Convert from HSV through [`RgbFloat`].
    #[must_use]
    pub fn from_hsv(hsv: Hsv, byte_width: ByteWidth) -> Self {
        Self::from_rgb(RgbFloat::from_hsv(hsv), byte_width)
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn hex(&self) -> String {
        RgbFloat::from_rgb_int(*self).hex()
    }

    /// Convert to floating-point RGB.
    #[must_use]
    pub fn to_rgb(self) -> RgbFloat {
        RgbFloat::from_rgb_int(self)
    }

    /// Convert to HSV through [`RgbFloat`].
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb_int(self)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rounded before the saturating cast"
)]
fn quantize(channel: f64, max: f64) -> u32 {
    (channel * max).round() as u32
}

impl fmt::Display for RgbInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RgbInt({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for RgbInt {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s, ByteWidth::ONE)
    }
}

impl TryFrom<&str> for RgbInt {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for RgbInt {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RgbFloat> for RgbInt {
    fn from(rgb: RgbFloat) -> Self {
        Self::from_rgb(rgb, ByteWidth::ONE)
    }
}

impl From<Hsv> for RgbInt {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv, ByteWidth::ONE)
    }
}
