use crate::utils::error::{GrowthError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 嚴格大於零，NaN 亦視為無效
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GrowthError::invalid_parameter(field_name, value))
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(GrowthError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(GrowthError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
