//! Closed-form doubling arithmetic shared by the calculator and the plotter.

use crate::domain::model::{CeilResult, DoublingResult, GrowthParams, TimeSpan};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive, Validate};

pub const MIN_HORIZON_MINUTES: f64 = 60.0;
pub const HORIZON_OVERSHOOT: f64 = 1.05;
pub const SAMPLE_COUNT: usize = 1000;

impl Validate for GrowthParams {
    fn validate(&self) -> Result<()> {
        validate_positive("V0", self.v0)?;
        validate_positive("V", self.v)?;
        validate_positive("dt", self.dt)?;
        Ok(())
    }
}

/// Number of doublings needed to go from `v0` to `v`: `log2(v / v0)`.
pub fn doublings(v0: f64, v: f64) -> f64 {
    (v / v0).log2()
}

/// Minutes needed to reach `v`: `dt * log2(v / v0)`.
pub fn elapsed_minutes(dt: f64, v0: f64, v: f64) -> f64 {
    dt * doublings(v0, v)
}

/// Callers validate `params` first; non-positive inputs give NaN or infinities.
pub fn evaluate(params: &GrowthParams) -> DoublingResult {
    let n = doublings(params.v0, params.v);
    DoublingResult {
        n,
        elapsed: TimeSpan::from_minutes(params.dt * n),
    }
}

pub fn evaluate_ceil(result: &DoublingResult, dt: f64) -> CeilResult {
    let n_int = result.n.ceil() as i64;
    CeilResult {
        n_int,
        elapsed: TimeSpan::from_minutes(n_int as f64 * dt),
    }
}

/// `V(t) = V0 * 2^(t/dt)`
pub fn volume_at(params: &GrowthParams, t: f64) -> f64 {
    params.v0 * (t / params.dt).exp2()
}

/// Chart horizon: slightly past the crossing, never shorter than one hour.
pub fn plot_horizon(elapsed_minutes: f64) -> f64 {
    (elapsed_minutes * HORIZON_OVERSHOOT).max(MIN_HORIZON_MINUTES)
}

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // 最後一點固定為 end，避免累積誤差
            points[count - 1] = end;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_power_of_two_ratio_is_exact() {
        let result = evaluate(&GrowthParams::new(1.0, 1024.0, 2.0));
        assert_eq!(result.n, 10.0);
        assert_eq!(result.elapsed.minutes, 20.0);

        let ceil = evaluate_ceil(&result, 2.0);
        assert_eq!(ceil.n_int, 10);
        assert_eq!(ceil.elapsed.minutes, 20.0);
    }

    #[test]
    fn test_default_scenario() {
        let params = GrowthParams::default();
        let result = evaluate(&params);
        let expected_n = (3.81e38_f64 / 1.13e-4).log2();
        assert!(rel_close(result.n, expected_n));
        assert!(result.n > 141.27 && result.n < 141.28);
        assert!(rel_close(result.elapsed.minutes, 5.0 * expected_n));
        assert!(result.elapsed.minutes > 706.37 && result.elapsed.minutes < 706.38);
        assert_eq!(elapsed_minutes(params.dt, params.v0, params.v), result.elapsed.minutes);
    }

    #[test]
    fn test_time_units_are_plain_divisions() {
        let span = TimeSpan::from_minutes(720.3);
        assert_eq!(span.hours, 720.3 / 60.0);
        assert_eq!(span.days, span.hours / 24.0);
    }

    #[test]
    fn test_ceil_never_undercounts() {
        for &(v0, v, dt) in &[(1.0, 3.0, 1.5), (2.5e-3, 7.0e9, 12.0), (1.0, 1.0001, 0.1)] {
            let result = evaluate(&GrowthParams::new(v0, v, dt));
            let ceil = evaluate_ceil(&result, dt);
            assert_eq!(ceil.n_int as f64, result.n.ceil());
            assert!(ceil.n_int as f64 >= result.n);
            assert!(ceil.elapsed.minutes >= result.elapsed.minutes);
            assert_eq!(ceil.elapsed.minutes, ceil.n_int as f64 * dt);
        }
    }

    #[test]
    fn test_target_below_start_gives_negative_time() {
        let result = evaluate(&GrowthParams::new(8.0, 1.0, 5.0));
        assert_eq!(result.n, -3.0);
        assert_eq!(result.elapsed.minutes, -15.0);
    }

    #[test]
    fn test_validation_rejects_each_parameter() {
        assert!(GrowthParams::default().validate().is_ok());
        assert!(GrowthParams::new(0.0, 1.0, 1.0).validate().is_err());
        assert!(GrowthParams::new(1.0, -1.0, 1.0).validate().is_err());
        assert!(GrowthParams::new(1.0, 1.0, 0.0).validate().is_err());
        assert!(GrowthParams::new(f64::NAN, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_plot_horizon() {
        assert_eq!(plot_horizon(720.0), 720.0 * 1.05);
        assert_eq!(plot_horizon(10.0), 60.0);
        assert_eq!(plot_horizon(-15.0), 60.0);
    }

    #[test]
    fn test_linspace_spans_both_ends() {
        let points = linspace(0.0, 756.3, SAMPLE_COUNT);
        assert_eq!(points.len(), 1000);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[999], 756.3);
        assert!(points.windows(2).all(|w| w[1] > w[0]));

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_volume_at_doubles_every_interval() {
        let params = GrowthParams::new(1.5, 100.0, 4.0);
        assert_eq!(volume_at(&params, 0.0), 1.5);
        assert_eq!(volume_at(&params, 4.0), 3.0);
        assert_eq!(volume_at(&params, 12.0), 12.0);
    }
}
