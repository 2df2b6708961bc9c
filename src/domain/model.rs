use serde::{Deserialize, Serialize};

pub const DEFAULT_V0: f64 = 1.13e-4;
pub const DEFAULT_V: f64 = 3.81e38;
pub const DEFAULT_DT: f64 = 5.0;
pub const DEFAULT_PLOT_PATH: &str = "figures/growth.png";

/// Run parameters for `V(t) = V0 * 2^(t/dt)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    /// Initial value (m^3).
    pub v0: f64,
    /// Target value (m^3).
    pub v: f64,
    /// Doubling interval in minutes.
    pub dt: f64,
}

impl GrowthParams {
    pub fn new(v0: f64, v: f64, dt: f64) -> Self {
        Self { v0, v, dt }
    }
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            v0: DEFAULT_V0,
            v: DEFAULT_V,
            dt: DEFAULT_DT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
}

impl TimeSpan {
    pub fn from_minutes(minutes: f64) -> Self {
        let hours = minutes / 60.0;
        let days = hours / 24.0;
        Self {
            minutes,
            hours,
            days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublingResult {
    /// Real-valued number of doublings.
    pub n: f64,
    pub elapsed: TimeSpan,
}

/// Result rounded up to a whole number of doublings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeilResult {
    pub n_int: i64,
    pub elapsed: TimeSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationReport {
    pub params: GrowthParams,
    pub result: DoublingResult,
    pub ceil: Option<CeilResult>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub t: f64,
    pub v: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub lines: Vec<String>,
    /// Point the arrow touches, in data coordinates.
    pub anchor: (f64, f64),
    /// Where the text box sits, in data coordinates.
    pub text_at: (f64, f64),
}

/// Everything the renderer needs to draw one growth chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPlan {
    pub params: GrowthParams,
    pub result: DoublingResult,
    pub t_max: f64,
    pub samples: Vec<SamplePoint>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub annotation: Annotation,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curve_label: String,
    pub target_label: String,
    pub elapsed_label: String,
    /// Canvas size in pixels.
    pub size: (u32, u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutcome {
    pub path: std::path::PathBuf,
    pub result: DoublingResult,
    pub t_max: f64,
}
