use crate::core::growth::{evaluate, evaluate_ceil};
use crate::domain::model::{CalculationReport, GrowthParams};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Validate the parameters, then derive the doubling count and elapsed time.
/// With `ceil` the whole-doubling variant is added to the report.
pub fn calculate(params: &GrowthParams, ceil: bool) -> Result<CalculationReport> {
    params.validate()?;

    let result = evaluate(params);
    tracing::debug!(
        "n = {}, T = {} minutes (V0 = {}, V = {}, dt = {})",
        result.n,
        result.elapsed.minutes,
        params.v0,
        params.v,
        params.dt
    );

    let ceil = ceil.then(|| evaluate_ceil(&result, params.dt));
    if let Some(c) = &ceil {
        tracing::debug!("ceil mode: n_int = {}, T_int = {} minutes", c.n_int, c.elapsed.minutes);
    }

    Ok(CalculationReport {
        params: *params,
        result,
        ceil,
    })
}
