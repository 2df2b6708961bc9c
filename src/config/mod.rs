#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CalculatorArgs, GrowthArgs, PlotArgs};
pub use toml_config::TomlConfig;
