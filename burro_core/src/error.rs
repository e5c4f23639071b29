//! Error types for the BURRO runtime.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type BurroResult<T> = Result<T, BurroError>;

/// Unified error type for the BURRO runtime.
#[derive(Error, Debug)]
pub enum BurroError {
    /// Configuration file missing, unreadable, or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller handed the runtime something it cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A part reported a failure from `run`/`run_threaded`
    #[error("Part '{name}' failed: {message}")]
    Part { name: String, message: String },

    /// I/O failure (thread spawn, file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal runtime failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BurroError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        BurroError::Config(msg.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        BurroError::InvalidInput(msg.into())
    }

    /// Create a part-failure error
    pub fn part(name: impl Into<String>, msg: impl Into<String>) -> Self {
        BurroError::Part {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        BurroError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_error_display() {
        let err = BurroError::part("camera", "no frame available");
        assert_eq!(err.to_string(), "Part 'camera' failed: no frame available");
    }

    #[test]
    fn test_io_error_conversion() {
        fn fails() -> BurroResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(BurroError::Io(_))));
    }
}
