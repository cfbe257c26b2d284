//! Error types for color validation at the crate boundary.

use thiserror::Error;

use crate::color::Channel;

/// Errors raised when caller-supplied values cannot become a [`Color`](crate::Color).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Integer channel write outside 0–255
    #[error("{channel} value {value} is outside 0-255")]
    ChannelOutOfRange {
        /// Channel being written
        channel: Channel,
        /// The rejected value
        value: i64,
    },

    /// Normalized component outside 0.0–1.0 (or NaN)
    #[error("{component} component {value} is outside 0.0-1.0")]
    ComponentOutOfRange {
        /// Channel the component belongs to
        component: Channel,
        /// The rejected value
        value: f64,
    },

    /// Text that is not a 3, 6, or 8 digit hex color
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
