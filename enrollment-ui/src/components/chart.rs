//! Chart Components
//!
//! Horizontal bar chart and line chart drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{StateRow, TrendPoint};

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "rgba(156, 163, 175, 0.3)"; // gray-400 at alpha 0.3
const LABEL: &str = "#9ca3af"; // gray-400

/// Horizontal bar chart of state totals
#[component]
pub fn BarChart(
    #[prop(into)]
    rows: Signal<Vec<StateRow>>,
    #[prop(into)]
    x_label: String,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let label = x_label.clone();

    create_effect(move |_| {
        let rows = rows.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &rows, &label);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="1200"
            height="600"
            class="w-full rounded-lg"
            aria-label=x_label
        />
    }
}

/// Line chart with point markers
#[component]
pub fn LineChart(
    #[prop(into)]
    points: Signal<Vec<TrendPoint>>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    color: Signal<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let chart_title = title.clone();

    create_effect(move |_| {
        let points = points.get();
        let color = color.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line(&canvas, &points, &chart_title, &color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="500"
            class="w-full rounded-lg"
            aria-label=title
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_bars(canvas: &HtmlCanvasElement, rows: &[StateRow], x_label: &str) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 150.0;
    let margin_right = 30.0;
    let margin_top = 20.0;
    let margin_bottom = 60.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if rows.is_empty() {
        draw_no_data(&ctx, width, height);
        return;
    }

    let max = rows.iter().map(|r| r.total_bio).max().unwrap_or(0);
    let (axis_max, step) = nice_axis(max as f64, 5);

    // Vertical grid lines with x-axis labels
    ctx.set_font("14px sans-serif");
    ctx.set_text_align("center");
    let mut tick = 0.0;
    while tick <= axis_max + step / 2.0 {
        let x = margin_left + (tick / axis_max) * chart_width;

        ctx.set_stroke_style(&GRID.into());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x, margin_top);
        ctx.line_to(x, margin_top + chart_height);
        ctx.stroke();

        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(&compact(tick as u64), x, margin_top + chart_height + 20.0);
        tick += step;
    }

    // Bars, first row at the top
    let band = chart_height / rows.len() as f64;
    let bar_height = band * 0.8;

    for (i, row) in rows.iter().enumerate() {
        let y = margin_top + i as f64 * band + (band - bar_height) / 2.0;
        let bar_width = (row.total_bio as f64 / axis_max) * chart_width;

        ctx.set_fill_style(&row.color.as_str().into());
        ctx.fill_rect(margin_left, y, bar_width, bar_height);

        ctx.set_fill_style(&LABEL.into());
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&row.state, margin_left - 10.0, y + bar_height / 2.0 + 5.0);
    }

    ctx.set_text_align("center");
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(x_label, margin_left + chart_width / 2.0, height - 15.0);
}

fn draw_line(canvas: &HtmlCanvasElement, points: &[TrendPoint], title: &str, color: &str) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 50.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style(&"#ffffff".into());
    ctx.set_font("bold 16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(title, width / 2.0, 28.0);

    if points.is_empty() {
        draw_no_data(&ctx, width, height);
        return;
    }

    let max = points.iter().map(|p| p.enrollments).max().unwrap_or(0);
    let (axis_max, step) = nice_axis(max as f64, 5);

    let x_of = |i: usize| {
        if points.len() > 1 {
            margin_left + i as f64 / (points.len() - 1) as f64 * chart_width
        } else {
            margin_left + chart_width / 2.0
        }
    };
    let y_of = |v: u64| margin_top + chart_height - (v as f64 / axis_max) * chart_height;

    // Horizontal grid with y labels
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    let mut tick = 0.0;
    while tick <= axis_max + step / 2.0 {
        let y = y_of(tick as u64);

        ctx.set_stroke_style(&GRID.into());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(&compact(tick as u64), margin_left - 8.0, y + 4.0);
        tick += step;
    }

    // Vertical grid with x labels
    ctx.set_text_align("center");
    for (i, point) in points.iter().enumerate() {
        let x = x_of(i);
        ctx.set_stroke_style(&GRID.into());
        ctx.begin_path();
        ctx.move_to(x, margin_top);
        ctx.line_to(x, margin_top + chart_height);
        ctx.stroke();

        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(&point.month.to_string(), x, height - 15.0);
    }

    // Series
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let (x, y) = (x_of(i), y_of(point.enrollments));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_of(i), y_of(point.enrollments), 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("No data", width / 2.0, height / 2.0);
}

/// Axis maximum and tick step, with the step at 1, 2 or 5 times a power of ten
pub fn nice_axis(max: f64, ticks: usize) -> (f64, f64) {
    if !max.is_finite() || max <= 0.0 || ticks == 0 {
        return (1.0, 1.0);
    }

    let raw = max / ticks as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    } * magnitude;

    ((max / step).ceil() * step, step)
}

/// Short tick label: 1500000 -> "1.5M"
pub fn compact(n: u64) -> String {
    let (value, suffix) = match n {
        0..=999 => return n.to_string(),
        1_000..=999_999 => (n as f64 / 1_000.0, "K"),
        _ => (n as f64 / 1_000_000.0, "M"),
    };
    let s = format!("{:.1}", value);
    format!("{}{}", s.strip_suffix(".0").unwrap_or(&s), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_axis() {
        assert_eq!(nice_axis(1_190_686.0, 5), (1_500_000.0, 500_000.0));
        assert_eq!(nice_axis(100.0, 5), (100.0, 20.0));
        assert_eq!(nice_axis(0.0, 5), (1.0, 1.0));
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(0), "0");
        assert_eq!(compact(500_000), "500K");
        assert_eq!(compact(1_500_000), "1.5M");
    }
}
