use crate::config::toml_config::TomlConfig;
use crate::domain::model::{GrowthParams, DEFAULT_PLOT_PATH};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both tools.
#[derive(Debug, Clone, Default, Args)]
pub struct GrowthArgs {
    /// Initial bun volume (m^3). Default 1.13e-4
    #[arg(long = "V0", value_name = "FLOAT", allow_negative_numbers = true)]
    pub v0: Option<f64>,

    /// Target volume (m^3). Default 3.81e38 (Neptune-bound)
    #[arg(long = "V", value_name = "FLOAT", allow_negative_numbers = true)]
    pub v: Option<f64>,

    /// Doubling interval in minutes. Default 5
    #[arg(long = "dt", value_name = "MINUTES", allow_negative_numbers = true)]
    pub dt: Option<f64>,

    /// TOML file with default values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl GrowthArgs {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    /// 命令列 > 設定檔 > 內建預設值
    pub fn resolve(&self, file: Option<&TomlConfig>) -> GrowthParams {
        let base = file.map(TomlConfig::growth_params).unwrap_or_default();
        GrowthParams {
            v0: self.v0.unwrap_or(base.v0),
            v: self.v.unwrap_or(base.v),
            dt: self.dt.unwrap_or(base.dt),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "chestnut")]
#[command(about = "Chestnut bun doubling (V(t)=V0*2^(t/dt))")]
pub struct CalculatorArgs {
    #[command(flatten)]
    pub growth: GrowthArgs,

    /// Show integer doublings (ceil) and corresponding T
    #[arg(long)]
    pub ceil: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "plot_growth")]
#[command(about = "Plot exponential bun growth")]
pub struct PlotArgs {
    #[command(flatten)]
    pub growth: GrowthArgs,

    /// Output PNG path. Default figures/growth.png
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

impl PlotArgs {
    pub fn output_path(&self, file: Option<&TomlConfig>) -> PathBuf {
        self.out
            .clone()
            .or_else(|| file.and_then(TomlConfig::plot_output).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLOT_PATH))
    }
}
