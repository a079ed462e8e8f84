//! # colorhub
//!
//! Conversions between three representations of the same color:
//!
//! - [`RgbFloat`]: red, green, blue as `f64` in `0.0..=1.0`
//! - [`RgbInt`]: red, green, blue as integers sized by a [`ByteWidth`]
//! - [`Hsv`]: hue, saturation, value, each in `0.0..=1.0`
//!
//! ## Quick Start
//!
//! ```rust
//! use colorhub::prelude::*;
//!
//! let rgb = RgbFloat::from_hex("#80ff00").unwrap();
//! let hsv = rgb.to_hsv();
//! let int = hsv.to_rgb_int(ByteWidth::ONE);
//!
//! assert_eq!(int.rgb(), (128, 255, 0));
//! assert_eq!(int.hex(), "#80ff00");
//! ```
//!
//! ## Core Concepts
//!
//! - **Hub**: every cross-representation conversion goes through [`RgbFloat`].
//!   `RgbInt` and `Hsv` never convert into each other directly.
//! - **Construction-time errors**: only hex parsing and byte-width selection
//!   can fail ([`ColorError`]). Conversions between existing values cannot.
//! - **No clamping**: channels outside the nominal range pass through
//!   conversions unchanged in spirit and surface as out-of-range output.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hsv;
pub mod logging;
pub mod rgb;
pub mod rgb_int;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::error::ColorError;
    pub use crate::hsv::Hsv;
    pub use crate::rgb::RgbFloat;
    pub use crate::rgb_int::{ByteWidth, RgbInt};
}

// Re-export key types at crate root
pub use error::ColorError;
pub use hsv::Hsv;
pub use rgb::RgbFloat;
pub use rgb_int::{ByteWidth, RgbInt};
