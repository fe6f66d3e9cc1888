use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Usage error: {message}")]
    Usage { message: String },

    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Cannot access file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Configuration,
    FileSystem,
}

impl GeneratorError {
    /// 將錯誤對應到檔案系統錯誤，缺檔時回報 FileNotFound
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GeneratorError::FileNotFound { path }
        } else {
            GeneratorError::FileAccess { path, source }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GeneratorError::Usage { .. } => ErrorCategory::Usage,
            GeneratorError::ConfigError { .. }
            | GeneratorError::InvalidConfigValueError { .. }
            | GeneratorError::TomlError(_) => ErrorCategory::Configuration,
            GeneratorError::FileNotFound { .. }
            | GeneratorError::FileAccess { .. }
            | GeneratorError::Io(_) => ErrorCategory::FileSystem,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage | ErrorCategory::Configuration => 2,
            ErrorCategory::FileSystem => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeneratorError::FileNotFound { path } => {
                format!("Cannot find '{}'", path.display())
            }
            GeneratorError::FileAccess { path, .. } => {
                format!("Cannot read or write '{}'", path.display())
            }
            GeneratorError::Usage { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeneratorError::Usage { .. } => {
                "Pass the path to postgis_config.h as the only argument"
            }
            GeneratorError::FileNotFound { .. } => {
                "Check the path to postgis_config.h; run PostGIS configure first if it is missing"
            }
            GeneratorError::FileAccess { .. } | GeneratorError::Io(_) => {
                "Check file permissions and that the output directory exists"
            }
            GeneratorError::ConfigError { .. }
            | GeneratorError::InvalidConfigValueError { .. }
            | GeneratorError::TomlError(_) => "Check the --config path and fix the settings file",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_from_io_maps_not_found() {
        let err = GeneratorError::from_io("missing.h", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, GeneratorError::FileNotFound { .. }));
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.exit_code(), 1);

        let err = GeneratorError::from_io("locked.h", Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, GeneratorError::FileAccess { .. }));
    }

    #[test]
    fn test_io_error_converts_to_io_variant() {
        let err: GeneratorError = Error::new(ErrorKind::InvalidData, "bad bytes").into();
        assert!(matches!(err, GeneratorError::Io(_)));
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn test_config_errors_exit_with_usage_code() {
        let err = GeneratorError::InvalidConfigValueError {
            field: "header.guard".to_string(),
            value: "1BAD".to_string(),
            reason: "not a C identifier".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("header.guard"));
    }
}
