//! Error type shared by the color constructors.

use std::fmt;

/// Error returned when a color cannot be constructed.
///
/// Errors only ever surface at construction time (parsing a hex string or
/// choosing a byte width). Once a color value exists, every conversion
/// between representations is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not six hex digits with an optional leading `#`.
    InvalidHex(String),
    /// Multi-byte channels are reserved and not implemented.
    UnsupportedByteWidth(u8),
    /// A zero byte width leaves no representable channel values.
    ZeroByteWidth,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s:?}"),
            Self::UnsupportedByteWidth(n) => {
                write!(f, "Unsupported byte width: {n} (multi-byte colors not implemented)")
            }
            Self::ZeroByteWidth => write!(f, "Byte width must be at least 1"),
        }
    }
}

impl std::error::Error for ColorError {}
