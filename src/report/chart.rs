//! SVG line chart of average runtime against dataset size

use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::{algorithms, chart};
use crate::error::AppResult;
use crate::models::ExperimentTable;

use super::Reporter;

const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TICKS: usize = 5;

const BUBBLE_COLOR: &str = "#1f77b4";
const HEAP_COLOR: &str = "#ff7f0e";

/// Linear mapping from a data range onto a pixel range
#[derive(Debug, Clone, Copy)]
struct Scale {
    min: f64,
    max: f64,
    from_px: f64,
    to_px: f64,
}

impl Scale {
    fn new(min: f64, max: f64, from_px: f64, to_px: f64) -> Self {
        // Degenerate ranges still need a non-zero span
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };
        Self { min, max, from_px, to_px }
    }

    fn map(&self, value: f64) -> f64 {
        self.from_px + (value - self.min) / (self.max - self.min) * (self.to_px - self.from_px)
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=TICKS).map(move |i| self.min + (self.max - self.min) * i as f64 / TICKS as f64)
    }
}

/// Render the table as a standalone SVG document
pub fn render_svg(table: &ExperimentTable) -> String {
    let width = f64::from(chart::WIDTH);
    let height = f64::from(chart::HEIGHT);
    let plot_right = width - MARGIN_RIGHT;
    let plot_bottom = height - MARGIN_BOTTOM;

    let sizes: Vec<f64> = table.sizes().into_iter().map(|s| s as f64).collect();
    let bubble = table.bubble_series();
    let heap = table.heap_series();

    let x_min = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = if sizes.is_empty() { (0.0, 1.0) } else { (x_min, x_max) };
    let y_max = bubble
        .iter()
        .chain(&heap)
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let x = Scale::new(x_min, x_max, MARGIN_LEFT, plot_right);
    let y = Scale::new(0.0, y_max, plot_bottom, MARGIN_TOP);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = chart::WIDTH,
        h = chart::HEIGHT
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-size=\"20\">{}</text>\n",
        width / 2.0,
        chart::TITLE
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"52\" text-anchor=\"middle\" font-size=\"12\" fill=\"#555\">order: {}, generated {}</text>\n",
        width / 2.0,
        table.order,
        table.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    // Grid and tick labels
    svg.push_str("<g stroke=\"#ddd\" stroke-width=\"1\">\n");
    for tick in x.ticks() {
        let px = x.map(tick);
        svg.push_str(&format!(
            "<line x1=\"{px:.1}\" y1=\"{MARGIN_TOP:.1}\" x2=\"{px:.1}\" y2=\"{plot_bottom:.1}\"/>\n"
        ));
    }
    for tick in y.ticks() {
        let py = y.map(tick);
        svg.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT:.1}\" y1=\"{py:.1}\" x2=\"{plot_right:.1}\" y2=\"{py:.1}\"/>\n"
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str("<g font-size=\"11\" fill=\"#333\">\n");
    for tick in x.ticks() {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{:.0}</text>\n",
            x.map(tick),
            plot_bottom + 18.0,
            tick
        ));
    }
    for tick in y.ticks() {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{:.3e}</text>\n",
            MARGIN_LEFT - 8.0,
            y.map(tick) + 4.0,
            tick
        ));
    }
    svg.push_str("</g>\n");

    // Axes
    svg.push_str(&format!(
        "<path d=\"M{MARGIN_LEFT:.1},{MARGIN_TOP:.1} V{plot_bottom:.1} H{plot_right:.1}\" fill=\"none\" stroke=\"black\"/>\n"
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
        (MARGIN_LEFT + plot_right) / 2.0,
        height - 20.0,
        chart::X_LABEL
    ));
    svg.push_str(&format!(
        "<text transform=\"translate(24,{:.1}) rotate(-90)\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
        (MARGIN_TOP + plot_bottom) / 2.0,
        chart::Y_LABEL
    ));

    push_series(&mut svg, &sizes, &bubble, x, y, BUBBLE_COLOR);
    push_series(&mut svg, &sizes, &heap, x, y, HEAP_COLOR);

    // Legend
    let legend_x = MARGIN_LEFT + 20.0;
    for (i, (label, color)) in [
        (algorithms::BUBBLE_SORT, BUBBLE_COLOR),
        (algorithms::BINARY_HEAP_SORT, HEAP_COLOR),
    ]
    .into_iter()
    .enumerate()
    {
        let ly = MARGIN_TOP + 20.0 + 20.0 * i as f64;
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{ly:.1}\" x2=\"{:.1}\" y2=\"{ly:.1}\" stroke=\"{color}\" stroke-width=\"2\"/>\n",
            legend_x,
            legend_x + 24.0
        ));
        svg.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{ly:.1}\" r=\"4\" fill=\"{color}\"/>\n",
            legend_x + 12.0
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\">{label}</text>\n",
            legend_x + 32.0,
            ly + 4.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_series(svg: &mut String, xs: &[f64], ys: &[f64], x: Scale, y: Scale, color: &str) {
    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(_, v)| v.is_finite())
        .map(|(&sx, &sy)| (x.map(sx), y.map(sy)))
        .collect();
    if points.is_empty() {
        return;
    }

    let path = points
        .iter()
        .map(|(px, py)| format!("{px:.1},{py:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        "<polyline points=\"{path}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>\n"
    ));
    for (px, py) in points {
        svg.push_str(&format!(
            "<circle cx=\"{px:.1}\" cy=\"{py:.1}\" r=\"4\" fill=\"{color}\"/>\n"
        ));
    }
}

/// Renders the table to an SVG file
#[derive(Debug, Clone)]
pub struct ChartReporter {
    path: PathBuf,
}

impl ChartReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reporter for ChartReporter {
    fn name(&self) -> &'static str {
        "chart"
    }

    fn report(&self, table: &ExperimentTable) -> AppResult<()> {
        std::fs::write(&self.path, render_svg(table))?;
        info!(path = %self.path.display(), "Chart saved");
        Ok(())
    }
}
