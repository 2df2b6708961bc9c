//! Console text for both tools.

use crate::domain::model::{CalculationReport, TimeSpan};
use std::fmt::Write;
use std::path::Path;

/// `x` in scientific notation with a signed two-digit exponent, e.g. `1.130000e-04`.
pub fn format_scientific(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return format_non_finite(x);
    }
    let raw = format!("{:.*e}", precision, x);
    with_padded_exponent(&raw)
}

/// Shortest round-trip text for a float, always showing a fractional part or exponent.
pub fn format_float(x: f64) -> String {
    if !x.is_finite() {
        return format_non_finite(x);
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        with_padded_exponent(&format!("{:e}", x))
    } else if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

fn format_non_finite(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

fn with_padded_exponent(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw.to_string(),
    }
}

/// `<m> minutes (<h> hours, <d> days)` with 3/6/6 decimals.
pub fn format_time_span(span: &TimeSpan) -> String {
    format!(
        "{:.3} minutes ({:.6} hours, {:.6} days)",
        span.minutes, span.hours, span.days
    )
}

pub fn render_calculation(report: &CalculationReport) -> String {
    let params = &report.params;
    let mut out = String::new();

    let _ = writeln!(out, "\n--- Chestnut problem (your variables) ---\n");
    let _ = writeln!(
        out,
        "V0 (initial single-bun volume) = {} m^3",
        format_scientific(params.v0, 6)
    );
    let _ = writeln!(
        out,
        "V  (target volume)            = {} m^3",
        format_scientific(params.v, 6)
    );
    let _ = writeln!(
        out,
        "dt (doubling interval)        = {} minutes\n",
        format_float(params.dt)
    );
    let _ = writeln!(out, "n (required doublings, real)  = {:.6}", report.result.n);
    let _ = writeln!(
        out,
        "T (time to reach target, real)= {}\n",
        format_time_span(&report.result.elapsed)
    );

    if let Some(ceil) = &report.ceil {
        let _ = writeln!(out, "[ceil] n (integer doublings)  = {}", ceil.n_int);
        let _ = writeln!(
            out,
            "[ceil] T (time with integer)  = {}\n",
            format_time_span(&ceil.elapsed)
        );
    }

    let _ = writeln!(out, "--- end ---\n");
    out
}

pub fn render_plot_summary(path: &Path, elapsed: &TimeSpan) -> String {
    format!(
        "Saved plot to {}\nT = {}\n",
        path.display(),
        format_time_span(elapsed)
    )
}

pub fn annotation_lines(elapsed: &TimeSpan) -> Vec<String> {
    vec![
        format!("T ≈ {:.1} min", elapsed.minutes),
        format!("({:.2} hr, {:.3} days)", elapsed.hours, elapsed.days),
    ]
}
