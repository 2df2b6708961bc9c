pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CalculatorArgs, GrowthArgs, PlotArgs};

#[cfg(feature = "plot")]
pub use adapters::chart::PngRenderer;

pub use config::TomlConfig;
pub use crate::core::{calculator::calculate, plotter::GrowthPlotter};
pub use domain::model::{CalculationReport, GrowthParams, PlotOutcome, PlotPlan};
pub use domain::ports::GrowthRenderer;
pub use utils::error::{GrowthError, Result};
