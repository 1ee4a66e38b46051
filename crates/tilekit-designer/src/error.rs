//! Error types for the designer crate.
//!
//! The `Display` strings of [`DesignerError::NoGroupSelected`] and
//! [`DesignerError::InvalidInput`] are shown to the user verbatim.

use thiserror::Error;
use tilekit_core::{ComponentId, CoreError, GroupId};

/// Message shown when an action needs an active group and none is set.
pub const NO_GROUP_SELECTED_MESSAGE: &str =
    "No group is selected. Create or select a group to begin.";

/// Message shown when a tile dialog field does not hold an integer.
pub const INVALID_INTEGERS_MESSAGE: &str = "Please enter valid integers.";

/// Errors raised by designer actions and registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignerError {
    /// An action needs an active group and none is selected.
    #[error("No group is selected. Create or select a group to begin.")]
    NoGroupSelected,

    /// A group handle does not belong to the registry.
    #[error("Unknown group: {id}")]
    UnknownGroup { id: GroupId },

    /// No group has this name.
    #[error("Group '{name}' does not exist")]
    UnknownGroupName { name: String },

    /// A group with this name already exists.
    #[error("Group '{name}' already exists")]
    DuplicateGroup { name: String },

    /// A tile dialog field could not be parsed as an integer.
    #[error("Please enter valid integers.")]
    InvalidInput {
        /// Label of the first offending field.
        field: &'static str,
    },

    /// A component id is not alive in the store.
    #[error("Component {id} not found")]
    ComponentNotFound { id: ComponentId },

    /// Cross-structure invariants do not hold.
    #[error("Inconsistent designer state: {0}")]
    Inconsistent(String),

    /// A core value failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for designer operations.
pub type Result<T> = std::result::Result<T, DesignerError>;
