//! Error types for the core GoCardless types.

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building core values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The environment tag is neither `sandbox` nor `live`.
    #[error("{0} is not a valid environment")]
    InvalidEnvironment(String),
}
