use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Class '{class}' references record '{record}' which is not emitted before it")]
    UnknownRecord { class: String, record: String },

    #[error("Class filter names unknown record '{name}'")]
    UnknownClassFilter { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code the binary reports for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::IoError(_) => ErrorCategory::Io,
            GenError::TomlError(_)
            | GenError::ConfigValidationError { .. }
            | GenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GenError::UnknownRecord { .. } | GenError::UnknownClassFilter { .. } => {
                ErrorCategory::Schema
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Usually transient: permissions, full disk, a directory being removed.
            GenError::IoError(_) => ErrorSeverity::Medium,
            GenError::TomlError(_)
            | GenError::ConfigValidationError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::UnknownClassFilter { .. } => ErrorSeverity::High,
            GenError::UnknownRecord { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::IoError(e) => format!("Could not write the generated header: {}", e),
            GenError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            GenError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            GenError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' has an invalid value: {}", field, reason)
            }
            GenError::UnknownRecord { class, record } => {
                format!("'{}' needs '{}', which is missing from the output", class, record)
            }
            GenError::UnknownClassFilter { name } => {
                format!("There is no record named '{}'", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory is writable",
            ErrorCategory::Configuration => "Fix the flag or TOML value named above and retry",
            ErrorCategory::Schema => "Include every referenced record in the class list",
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_errors_are_critical() {
        let err = GenError::UnknownRecord {
            class: "User".to_string(),
            record: "Address".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Schema);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("Address"));
    }

    #[test]
    fn test_exit_codes_by_severity() {
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);

        let config_err = GenError::UnknownClassFilter {
            name: "Order".to_string(),
        };
        assert_eq!(config_err.severity().exit_code(), 1);

        let io_err: GenError = std::io::Error::other("read-only").into();
        assert_eq!(io_err.severity().exit_code(), 2);

        let schema_err = GenError::UnknownRecord {
            class: "User".to_string(),
            record: "Address".to_string(),
        };
        assert_eq!(schema_err.severity().exit_code(), 3);
    }

    #[test]
    fn test_io_error_conversion() {
        let err: GenError = std::io::Error::other("disk full").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("disk full"));
    }
}
