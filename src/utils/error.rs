use thiserror::Error;

/// 參數驗證失敗時顯示給使用者的訊息
pub const INVALID_PARAMETERS_MESSAGE: &str = "V0, V and dt must be positive numbers.";

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("{message}")]
    InvalidParameter {
        field: String,
        value: String,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者輸入錯誤
    High,
    /// 系統或檔案層級錯誤
    Critical,
}

impl GrowthError {
    pub fn invalid_parameter(field: &str, value: f64) -> Self {
        GrowthError::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            message: INVALID_PARAMETERS_MESSAGE.to_string(),
        }
    }

    /// 被拒絕的參數名稱與原始值
    pub fn rejected_parameter(&self) -> Option<(&str, &str)> {
        match self {
            GrowthError::InvalidParameter { field, value, .. } => Some((field.as_str(), value.as_str())),
            _ => None,
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, GrowthError::InvalidParameter { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GrowthError::InvalidParameter { .. }
            | GrowthError::ConfigError { .. }
            | GrowthError::TomlError(_) => ErrorSeverity::High,
            GrowthError::IoError(_) | GrowthError::RenderError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GrowthError::InvalidParameter { message, .. } => message.clone(),
            GrowthError::IoError(e) => format!("File system error: {}", e),
            GrowthError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            GrowthError::ConfigError { message } => format!("Configuration problem: {}", message),
            GrowthError::RenderError { message } => format!("Could not draw the chart: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GrowthError::InvalidParameter { .. } => "Pass strictly positive values for --V0, --V and --dt",
            GrowthError::IoError(_) => "Check that the output directory is writable",
            GrowthError::TomlError(_) | GrowthError::ConfigError { .. } => {
                "Check the file passed with --config"
            }
            GrowthError::RenderError { .. } => {
                "Check that the output path ends in .png and that system fonts are installed"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_carries_user_message() {
        let err = GrowthError::invalid_parameter("V0", -1.0);
        assert!(err.is_invalid_parameter());
        assert_eq!(err.to_string(), INVALID_PARAMETERS_MESSAGE);
        assert_eq!(err.user_friendly_message(), INVALID_PARAMETERS_MESSAGE);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.rejected_parameter(), Some(("V0", "-1")));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: GrowthError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(!err.is_invalid_parameter());
        assert_eq!(err.rejected_parameter(), None);
    }
}
