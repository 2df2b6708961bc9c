use crate::domain::model::GrowthParams;
use crate::utils::error::{GrowthError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Optional defaults file; every key may be omitted.
///
/// ```toml
/// [growth]
/// v0 = 1.13e-4
/// v = 3.81e38
/// dt = 5.0
///
/// [plot]
/// out = "figures/growth.png"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub growth: Option<GrowthSection>,
    pub plot: Option<PlotSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthSection {
    pub v0: Option<f64>,
    pub v: Option<f64>,
    pub dt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSection {
    pub out: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GrowthError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: TomlConfig = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${BUN_DT})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GrowthError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 設定檔數值覆蓋內建預設值
    pub fn growth_params(&self) -> GrowthParams {
        let defaults = GrowthParams::default();
        match &self.growth {
            Some(section) => GrowthParams {
                v0: section.v0.unwrap_or(defaults.v0),
                v: section.v.unwrap_or(defaults.v),
                dt: section.dt.unwrap_or(defaults.dt),
            },
            None => defaults,
        }
    }

    pub fn plot_output(&self) -> Option<&str> {
        self.plot.as_ref().and_then(|p| p.out.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(out) = self.plot_output() {
            validate_path("plot.out", out)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(GrowthError::ConfigError {
                    message: format!(
                        "unsupported logging.level '{}'. Valid levels: {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
