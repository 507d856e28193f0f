//! SVG chart primitives
//!
//! Small, dependency-free renderers for the two chart shapes the dashboard
//! uses: a horizontal bar chart and a line chart with markers.

use super::{escape, nice_ticks};
use crate::dataset::compact;

const FONT: &str = "font-family=\"sans-serif\"";
const GRID_COLOR: &str = "#b0b0b0";
const GRID_OPACITY: f64 = 0.3;
const AXIS_COLOR: &str = "#333333";
const TEXT_COLOR: &str = "#222222";

/// Margins around the plot area, in pixels
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// A single horizontal bar
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Horizontal bar chart, bars drawn top to bottom in the given order
#[derive(Debug, Clone)]
pub struct BarChart {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub x_label: String,
    pub bars: Vec<Bar>,
    pub margins: Margins,
}

impl BarChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            title: None,
            x_label: String::new(),
            bars: Vec::new(),
            margins: Margins {
                left: 130.0,
                right: 30.0,
                top: 40.0,
                bottom: 60.0,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn bar(mut self, label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        self.bars.push(Bar {
            label: label.into(),
            value,
            color: color.into(),
        });
        self
    }

    pub fn render(&self) -> String {
        let (w, h) = (self.width as f64, self.height as f64);
        let m = self.margins;
        let plot_w = (w - m.left - m.right).max(1.0);
        let plot_h = (h - m.top - m.bottom).max(1.0);

        let mut out = open_svg(self.width, self.height);
        if let Some(title) = &self.title {
            push_title(&mut out, w, title);
        }

        if self.bars.is_empty() {
            push_no_data(&mut out, w, h);
            out.push_str("</svg>\n");
            return out;
        }

        let max = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let ticks = nice_ticks(max, 5);
        let axis_max = ticks.last().copied().filter(|v| *v > 0.0).unwrap_or(1.0);
        let x_of = |v: f64| m.left + (v / axis_max) * plot_w;

        // Vertical grid lines and tick labels
        for tick in &ticks {
            let x = x_of(*tick);
            out.push_str(&format!(
                "  <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"{GRID_COLOR}\" stroke-opacity=\"{GRID_OPACITY}\"/>\n",
                m.top,
                m.top + plot_h,
            ));
            out.push_str(&format!(
                "  <text x=\"{x:.1}\" y=\"{:.1}\" {FONT} font-size=\"11\" fill=\"{TEXT_COLOR}\" text-anchor=\"middle\">{}</text>\n",
                m.top + plot_h + 16.0,
                compact(*tick as u64),
            ));
        }

        let band = plot_h / self.bars.len() as f64;
        let bar_h = band * 0.8;

        for (i, bar) in self.bars.iter().enumerate() {
            let y = m.top + i as f64 * band + (band - bar_h) / 2.0;
            let bar_w = x_of(bar.value.max(0.0)) - m.left;
            out.push_str(&format!(
                "  <rect x=\"{:.1}\" y=\"{y:.1}\" width=\"{bar_w:.1}\" height=\"{bar_h:.1}\" fill=\"{}\"><title>{}: {}</title></rect>\n",
                m.left,
                escape(&bar.color),
                escape(&bar.label),
                crate::dataset::group_thousands(bar.value.max(0.0) as u64),
            ));
            out.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"12\" fill=\"{TEXT_COLOR}\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
                m.left - 8.0,
                y + bar_h / 2.0,
                escape(&bar.label),
            ));
        }

        // Axes
        push_axes(&mut out, m, plot_w, plot_h);

        if !self.x_label.is_empty() {
            out.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"12\" fill=\"{TEXT_COLOR}\" text-anchor=\"middle\">{}</text>\n",
                m.left + plot_w / 2.0,
                h - 16.0,
                escape(&self.x_label),
            ));
        }

        out.push_str("</svg>\n");
        out
    }
}

/// Line chart over evenly spaced categories
#[derive(Debug, Clone)]
pub struct LineChart {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub color: String,
    pub line_width: f64,
    /// (x label, value) pairs
    pub points: Vec<(String, f64)>,
    pub margins: Margins,
}

impl LineChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            title: None,
            color: "#4ECDC4".to_string(),
            line_width: 2.0,
            points: Vec::new(),
            margins: Margins {
                left: 60.0,
                right: 20.0,
                top: 40.0,
                bottom: 40.0,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn point(mut self, label: impl Into<String>, value: f64) -> Self {
        self.points.push((label.into(), value));
        self
    }

    pub fn render(&self) -> String {
        let (w, h) = (self.width as f64, self.height as f64);
        let m = self.margins;
        let plot_w = (w - m.left - m.right).max(1.0);
        let plot_h = (h - m.top - m.bottom).max(1.0);

        let mut out = open_svg(self.width, self.height);
        if let Some(title) = &self.title {
            push_title(&mut out, w, title);
        }

        if self.points.is_empty() {
            push_no_data(&mut out, w, h);
            out.push_str("</svg>\n");
            return out;
        }

        let max = self.points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let ticks = nice_ticks(max, 5);
        let axis_max = ticks.last().copied().filter(|v| *v > 0.0).unwrap_or(1.0);

        let step = if self.points.len() > 1 {
            plot_w / (self.points.len() - 1) as f64
        } else {
            0.0
        };
        let x_of = |i: usize| {
            if self.points.len() > 1 {
                m.left + i as f64 * step
            } else {
                m.left + plot_w / 2.0
            }
        };
        let y_of = |v: f64| m.top + plot_h - (v.max(0.0) / axis_max) * plot_h;

        // Horizontal grid lines with y tick labels
        for tick in &ticks {
            let y = y_of(*tick);
            out.push_str(&format!(
                "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{GRID_COLOR}\" stroke-opacity=\"{GRID_OPACITY}\"/>\n",
                m.left,
                m.left + plot_w,
            ));
            out.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"11\" fill=\"{TEXT_COLOR}\" text-anchor=\"end\">{}</text>\n",
                m.left - 6.0,
                y + 4.0,
                compact(*tick as u64),
            ));
        }

        // Vertical grid lines with x labels
        for (i, (label, _)) in self.points.iter().enumerate() {
            let x = x_of(i);
            out.push_str(&format!(
                "  <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"{GRID_COLOR}\" stroke-opacity=\"{GRID_OPACITY}\"/>\n",
                m.top,
                m.top + plot_h,
            ));
            out.push_str(&format!(
                "  <text x=\"{x:.1}\" y=\"{:.1}\" {FONT} font-size=\"11\" fill=\"{TEXT_COLOR}\" text-anchor=\"middle\">{}</text>\n",
                m.top + plot_h + 16.0,
                escape(label),
            ));
        }

        push_axes(&mut out, m, plot_w, plot_h);

        let path: Vec<String> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, (_, v))| format!("{:.1},{:.1}", x_of(i), y_of(*v)))
            .collect();

        out.push_str(&format!(
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            path.join(" "),
            escape(&self.color),
            self.line_width,
        ));

        for (i, (label, v)) in self.points.iter().enumerate() {
            out.push_str(&format!(
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"><title>{}: {}</title></circle>\n",
                x_of(i),
                y_of(*v),
                escape(&self.color),
                escape(label),
                crate::dataset::group_thousands(v.max(0.0) as u64),
            ));
        }

        out.push_str("</svg>\n");
        out
    }
}

fn open_svg(width: u32, height: u32) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    out.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    out
}

fn push_title(out: &mut String, width: f64, title: &str) {
    out.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"24\" {FONT} font-size=\"15\" font-weight=\"bold\" fill=\"{TEXT_COLOR}\" text-anchor=\"middle\">{}</text>\n",
        width / 2.0,
        escape(title),
    ));
}

fn push_axes(out: &mut String, m: Margins, plot_w: f64, plot_h: f64) {
    let bottom = m.top + plot_h;
    out.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{bottom:.1}\" stroke=\"{AXIS_COLOR}\"/>\n",
        m.left, m.top, m.left,
    ));
    out.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{bottom:.1}\" x2=\"{:.1}\" y2=\"{bottom:.1}\" stroke=\"{AXIS_COLOR}\"/>\n",
        m.left,
        m.left + plot_w,
    ));
}

fn push_no_data(out: &mut String, width: f64, height: f64) {
    out.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"16\" fill=\"#6b7280\" text-anchor=\"middle\">No data</text>\n",
        width / 2.0,
        height / 2.0,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_draws_one_rect_per_bar() {
        let svg = BarChart::new(600, 300)
            .x_label("Total")
            .bar("A", 10.0, "#FF0000")
            .bar("B", 20.0, "#00FF00")
            .render();

        // One background rect plus one per bar
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("fill=\"#00FF00\""));
        assert!(svg.contains(">Total</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_bar_chart_escapes_labels() {
        let svg = BarChart::new(600, 300).bar("Jammu & Kashmir", 5.0, "#000").render();
        assert!(svg.contains("Jammu &amp; Kashmir"));
        assert!(!svg.contains("Jammu & Kashmir"));
    }

    #[test]
    fn test_empty_charts_render_placeholder() {
        let svg = BarChart::new(400, 200).render();
        assert!(svg.contains("No data"));

        let svg = LineChart::new(400, 200).title("Empty").render();
        assert!(svg.contains("No data"));
        assert!(svg.contains(">Empty</text>"));
    }

    #[test]
    fn test_line_chart_markers() {
        let svg = LineChart::new(500, 300)
            .color("#4ECDC4")
            .point("Jan", 1.0)
            .point("Feb", 3.0)
            .point("Mar", 2.0)
            .render();

        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_single_point_line_chart() {
        let svg = LineChart::new(500, 300).point("Only", 7.0).render();
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}
