pub mod calculator;
pub mod growth;
pub mod plotter;
pub mod report;

pub use crate::domain::model::{CalculationReport, GrowthParams, PlotOutcome, PlotPlan};
pub use crate::domain::ports::GrowthRenderer;
pub use crate::utils::error::Result;
