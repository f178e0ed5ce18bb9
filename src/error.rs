//! Domain errors raised by topology construction and parameter sampling.

/// Errors that can occur while generating a network fixture
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid sampling range for '{field}' [{min}, {max}): {reason}")]
    InvalidRange {
        field: String,
        min: String,
        max: String,
        reason: String,
    },
}
