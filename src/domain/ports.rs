use crate::domain::model::PlotPlan;
use crate::utils::error::Result;
use std::path::Path;

pub trait GrowthRenderer {
    fn render(&self, plan: &PlotPlan, path: &Path) -> Result<()>;
}
