//! Chart Rendering
//!
//! Server-side SVG for the dashboard's bar chart (top states) and line chart
//! (monthly trend). The frontend draws its own canvas versions; these are for
//! the API, the CLI, and anything that just wants an image.

pub mod svg;

pub use svg::{Bar, BarChart, LineChart, Margins};

use crate::dataset::Dataset;

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Axis ticks from zero past `max`, spaced at 1, 2, or 5 times a power of ten
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 || count == 0 {
        return vec![0.0, 1.0];
    }

    let raw = max / count as f64;
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

    let n = (max / step).ceil() as usize;
    (0..=n).map(|i| i as f64 * step).collect()
}

/// Escape text for inclusion in SVG markup
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Horizontal bars of total biometric records per state
pub fn top_states_chart(dataset: &Dataset) -> BarChart {
    dataset
        .colored_states()
        .into_iter()
        .fold(
            BarChart::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .title("Top States by Enrollment")
                .x_label("Total Biometric Records"),
            |chart, s| chart.bar(s.row.state, s.row.total_bio as f64, s.color),
        )
}

/// Monthly enrollment line with markers
pub fn monthly_trend_chart(dataset: &Dataset) -> LineChart {
    dataset.monthly_trend().iter().fold(
        LineChart::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .title(dataset.trend_caption())
            .color(dataset.trend_color()),
        |chart, m| chart.point(m.month.to_string(), m.enrollments as f64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

        let ticks = nice_ticks(1_190_686.0, 5);
        assert_eq!(ticks, vec![0.0, 500_000.0, 1_000_000.0, 1_500_000.0]);

        assert_eq!(nice_ticks(0.0, 5), vec![0.0, 1.0]);
        assert_eq!(nice_ticks(f64::NAN, 5), vec![0.0, 1.0]);
    }

    #[test]
    fn test_ticks_cover_max() {
        let max = 9_792_552.0;
        let ticks = nice_ticks(max, 5);
        assert!(*ticks.last().unwrap() >= max);
        assert_eq!(ticks[0], 0.0);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_dataset_charts() {
        let ds = Dataset::sample();

        let bars = top_states_chart(&ds);
        assert_eq!(bars.bars.len(), 5);
        assert_eq!(bars.bars[0].label, "Maharashtra");
        let svg = bars.render();
        assert!(svg.contains("Total Biometric Records"));
        assert!(svg.contains("#FFD93D"));

        let line = monthly_trend_chart(&ds);
        assert_eq!(line.points.len(), 12);
        let svg = line.render();
        assert!(svg.contains("Monthly Trend (Peak July)"));
        assert_eq!(svg.matches("<circle").count(), 12);
    }
}
