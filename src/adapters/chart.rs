use crate::domain::model::PlotPlan;
use crate::domain::ports::GrowthRenderer;
use crate::utils::error::{GrowthError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

type DrawResult = std::result::Result<(), Box<dyn Error>>;

// matplotlib 預設色 C0/C1/C2
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);
const TARGET_COLOR: RGBColor = RGBColor(255, 127, 14);
const ELAPSED_COLOR: RGBColor = RGBColor(44, 160, 44);

const FONT: &str = "sans-serif";
const ANNOTATION_FONT_SIZE: i32 = 20;
const ANNOTATION_PAD: i32 = 8;
const ARROW_HEAD: f64 = 12.0;

/// Draws the growth chart into a PNG file with the plotters bitmap backend.
#[derive(Debug, Clone, Default)]
pub struct PngRenderer;

impl PngRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl GrowthRenderer for PngRenderer {
    fn render(&self, plan: &PlotPlan, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, plan.size).into_drawing_area();
        draw_chart(&root, plan).map_err(render_error)?;
        // present 之後才真正寫檔
        root.present().map_err(|e| render_error(Box::new(e)))?;
        Ok(())
    }
}

fn render_error(e: Box<dyn Error>) -> GrowthError {
    GrowthError::RenderError {
        message: e.to_string(),
    }
}

fn draw_chart(root: &DrawingArea<BitMapBackend<'_>, Shift>, plan: &PlotPlan) -> DrawResult {
    root.fill(&WHITE)?;

    let (x_lo, x_hi) = plan.x_range;
    let (y_lo, y_hi) = plan.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&plan.title, (FONT, 36))
        .margin(24)
        .x_label_area_size(70)
        .y_label_area_size(120)
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(&plan.x_label)
        .y_desc(&plan.y_label)
        .y_label_formatter(&|v| format!("{:.0e}", v))
        .label_style((FONT, 18))
        .axis_desc_style((FONT, 22))
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(BLACK.mix(0.08))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            plan.samples
                .iter()
                // 低於 y 軸下限的點不畫
                .filter(|s| s.v.is_finite() && s.v >= y_lo && s.v <= y_hi)
                .map(|s| (s.t, s.v)),
            CURVE_COLOR.stroke_width(3),
        ))?
        .label(&plan.curve_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], CURVE_COLOR.stroke_width(3)));

    let target = plan.params.v;
    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_lo, target), (x_hi, target)],
            12,
            8,
            TARGET_COLOR.stroke_width(2),
        ))?
        .label(&plan.target_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], TARGET_COLOR.stroke_width(2)));

    let elapsed = plan.result.elapsed.minutes;
    chart
        .draw_series(DashedLineSeries::new(
            vec![(elapsed, y_lo), (elapsed, y_hi)],
            12,
            8,
            ELAPSED_COLOR.stroke_width(2),
        ))?
        .label(&plan.elapsed_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], ELAPSED_COLOR.stroke_width(2)));

    let anchor = chart.backend_coord(&plan.annotation.anchor);
    let text_at = chart.backend_coord(&plan.annotation.text_at);
    draw_annotation(root, &plan.annotation.lines, text_at, anchor)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .label_font((FONT, 18))
        .draw()?;

    Ok(())
}

/// Boxed multi-line note at `text_at` with an arrow ending on `anchor`, both in pixels.
fn draw_annotation(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    lines: &[String],
    text_at: (i32, i32),
    anchor: (i32, i32),
) -> DrawResult {
    let line_height = ANNOTATION_FONT_SIZE + 4;
    // 以字數估算文字寬度
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let width = widest * ANNOTATION_FONT_SIZE * 11 / 20 + 2 * ANNOTATION_PAD;
    let height = lines.len() as i32 * line_height + 2 * ANNOTATION_PAD;

    let top_left = (text_at.0, text_at.1 - height / 2);
    let bottom_right = (top_left.0 + width, top_left.1 + height);
    let center = (top_left.0 + width / 2, top_left.1 + height / 2);

    draw_arrow(root, center, anchor)?;

    root.draw(&Rectangle::new([top_left, bottom_right], WHITE.mix(0.8).filled()))?;
    root.draw(&Rectangle::new([top_left, bottom_right], BLACK.mix(0.6)))?;

    let font = (FONT, ANNOTATION_FONT_SIZE).into_font();
    for (i, line) in lines.iter().enumerate() {
        let pos = (
            top_left.0 + ANNOTATION_PAD,
            top_left.1 + ANNOTATION_PAD + i as i32 * line_height,
        );
        root.draw(&Text::new(line.clone(), pos, font.clone()))?;
    }
    Ok(())
}

fn draw_arrow(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    from: (i32, i32),
    to: (i32, i32),
) -> DrawResult {
    root.draw(&PathElement::new(vec![from, to], BLACK.stroke_width(2)))?;

    let dx = (to.0 - from.0) as f64;
    let dy = (to.1 - from.1) as f64;
    let length = dx.hypot(dy);
    if length < ARROW_HEAD {
        return Ok(());
    }

    let (ux, uy) = (dx / length, dy / length);
    let base = (to.0 as f64 - ux * ARROW_HEAD, to.1 as f64 - uy * ARROW_HEAD);
    let half = ARROW_HEAD / 2.0;
    let left = ((base.0 - uy * half) as i32, (base.1 + ux * half) as i32);
    let right = ((base.0 + uy * half) as i32, (base.1 - ux * half) as i32);

    root.draw(&Polygon::new(vec![to, left, right], BLACK.filled()))?;
    Ok(())
}
