use crate::core::growth::{evaluate, linspace, plot_horizon, volume_at, SAMPLE_COUNT};
use crate::core::report::annotation_lines;
use crate::domain::model::{Annotation, GrowthParams, PlotOutcome, PlotPlan, SamplePoint};
use crate::domain::ports::GrowthRenderer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fs;
use std::path::Path;

/// 10 x 6 inch figure at 150 DPI.
pub const CANVAS_SIZE: (u32, u32) = (1500, 900);
/// Annotation text sits three decades below the target, at 60% of T.
const ANNOTATION_DROP: f64 = 1e-3;
const ANNOTATION_X_FRACTION: f64 = 0.6;
const Y_PADDING: f64 = 2.0;
/// Widest log-axis span, in ratio; plotters needs `hi / lo` to stay finite.
pub const MAX_Y_SPAN: f64 = 1e300;

impl PlotPlan {
    /// Parameters must already be validated.
    pub fn build(params: &GrowthParams) -> Self {
        let result = evaluate(params);
        let elapsed = result.elapsed.minutes;
        let t_max = plot_horizon(elapsed);

        let samples: Vec<SamplePoint> = linspace(0.0, t_max, SAMPLE_COUNT)
            .into_iter()
            .map(|t| SamplePoint {
                t,
                v: volume_at(params, t),
            })
            .collect();

        let annotation = Annotation {
            lines: annotation_lines(&result.elapsed),
            anchor: (elapsed, params.v),
            text_at: (elapsed * ANNOTATION_X_FRACTION, params.v * ANNOTATION_DROP),
        };

        // 目標值小於初始值時 T 為負，x 軸往左延伸
        let x_range = (elapsed.min(0.0), t_max);
        let y_range = value_range(
            samples
                .iter()
                .map(|s| s.v)
                .chain([params.v, annotation.text_at.1]),
        );

        Self {
            params: *params,
            result,
            t_max,
            samples,
            x_range,
            y_range,
            annotation,
            title: "Chestnut bun exponential growth".to_string(),
            x_label: "Time (minutes)".to_string(),
            y_label: "Volume (m³), log scale".to_string(),
            curve_label: "V(t) = V0 · 2^(t/dt)".to_string(),
            target_label: "Target volume".to_string(),
            elapsed_label: format!("T = {:.1} min", elapsed),
            size: CANVAS_SIZE,
        }
    }
}

/// Log-axis bounds covering every finite positive value, padded by a factor of two.
/// The lower bound is raised so the span never exceeds `MAX_Y_SPAN`.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() || hi <= 0.0 {
        return (0.1, 10.0);
    }

    let hi = (hi * Y_PADDING).min(f64::MAX);
    let lo = (lo / Y_PADDING).max(hi / MAX_Y_SPAN);
    (lo, hi)
}

/// 確保輸出目錄存在
pub fn prepare_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub struct GrowthPlotter<R: GrowthRenderer> {
    renderer: R,
}

impl<R: GrowthRenderer> GrowthPlotter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// validate -> compute -> prepare directory -> render
    pub fn run(&self, params: &GrowthParams, out: &Path) -> Result<PlotOutcome> {
        params.validate()?;

        let plan = PlotPlan::build(params);
        tracing::debug!(
            "T = {} minutes, t_max = {} minutes, {} samples",
            plan.result.elapsed.minutes,
            plan.t_max,
            plan.samples.len()
        );

        prepare_output_path(out)?;
        self.renderer.render(&plan, out)?;
        tracing::info!("Chart written to {}", out.display());

        Ok(PlotOutcome {
            path: out.to_path_buf(),
            result: plan.result,
            t_max: plan.t_max,
        })
    }
}
