//! Error handling for TileKit core types
//!
//! Value types validate on construction and report failures through
//! [`CoreError`]. Higher layers wrap it in their own error enums.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color string could not be parsed
    #[error("Invalid color '{value}': expected #rgb or #rrggbb")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// A group name is empty or only whitespace
    #[error("Invalid group name '{name}': name must not be empty")]
    InvalidGroupName {
        /// The rejected name.
        name: String,
    },
}

impl CoreError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create an invalid group name error.
    pub fn invalid_group_name(name: impl Into<String>) -> Self {
        Self::InvalidGroupName { name: name.into() }
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
