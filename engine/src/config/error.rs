//! Errors raised while loading or validating a scene configuration.

use thiserror::Error;

/// Errors that can occur while reading a scenario.
///
/// `index` fields refer to the position of the body in the `bodies` list.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gravity must be finite")]
    NonFiniteGravity,

    #[error("body {index}: {field} must be finite")]
    NonFinite {
        /// Body index.
        index: usize,
        /// Offending field name.
        field: &'static str,
    },

    #[error("body {index}: inverse mass must be >= 0, got {value}")]
    NegativeInverseMass {
        /// Body index.
        index: usize,
        /// Value found in the file.
        value: f32,
    },

    #[error("body {index}: sphere radius must be > 0, got {value}")]
    InvalidRadius {
        /// Body index.
        index: usize,
        /// Value found in the file.
        value: f32,
    },

    #[error("body {index}: static body (inverse mass 0) cannot have a velocity")]
    MovingStaticBody {
        /// Body index.
        index: usize,
    },
}
