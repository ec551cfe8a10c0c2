use thiserror::Error;

/// Unified error type for lib-version operations.
///
/// None of these ever reach callers of `resolve_version`; the resolver maps
/// every variant to the `unknown` sentinel.
#[derive(Error, Debug)]
pub enum LibVersionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed properties at line {line}: {message}")]
    Properties { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in lib-version
pub type Result<T> = std::result::Result<T, LibVersionError>;

impl LibVersionError {
    /// Create a properties parse error for the given 1-based line
    pub fn properties(line: usize, message: impl Into<String>) -> Self {
        LibVersionError::Properties {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        LibVersionError::Config(msg.into())
    }
}

impl From<toml::de::Error> for LibVersionError {
    fn from(err: toml::de::Error) -> Self {
        LibVersionError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LibVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_properties_error_display() {
        let err = LibVersionError::properties(3, "Malformed \\uxxxx encoding");
        assert_eq!(
            err.to_string(),
            "Malformed properties at line 3: Malformed \\uxxxx encoding"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_errors = vec![
            std::io::Error::new(std::io::ErrorKind::NotFound, "Not found"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid data"),
        ];

        for io_err in io_errors {
            let err: LibVersionError = io_err.into();
            assert!(err.to_string().starts_with("I/O error"));
        }
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: LibVersionError = toml_err.into();
        assert!(matches!(err, LibVersionError::Config(_)));
    }
}
