use super::ChartBackend;
use super::chart::Chart;
use super::layout::{CHAR_WIDTH, ChartLayout, LABEL_PAD, LANE_HEIGHT, MARGIN, SWATCH_SIZE};
use crate::error::Result;
use std::io::Write;

const AXIS_COLOR: &str = "#333333";
const GRID_COLOR: &str = "#b0b0b0";
const TEXT_COLOR: &str = "#222222";

/// Writes a standalone SVG document.
pub struct SvgBackend<W: Write> {
    out: W,
}

impl<W: Write> SvgBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartBackend for SvgBackend<W> {
    fn draw(&mut self, chart: &Chart, layout: &ChartLayout) -> Result<()> {
        let svg = render_svg(chart, layout);
        self.out.write_all(svg.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn render_svg(chart: &Chart, layout: &ChartLayout) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" font-family="sans-serif" font-size="11">
  <rect width="100%" height="100%" fill="white"/>
  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="15" fill="{TEXT_COLOR}">{}</text>
"#,
        layout.width,
        layout.height,
        layout.plot_x + layout.plot_width / 2.0,
        MARGIN + 16.0,
        escape_xml(&chart.title),
    );

    svg.push_str(&render_grid(layout));
    svg.push_str(&render_lanes(chart, layout));
    svg.push_str(&render_axes(layout));
    svg.push_str(&render_legend(chart, layout));

    svg.push_str("</svg>\n");
    svg
}

/// Dotted vertical gridline plus tick mark and label at every integer tick.
fn render_grid(layout: &ChartLayout) -> String {
    let mut grid = String::from("  <g class=\"grid\">\n");
    let top = layout.plot_y;
    let bottom = layout.plot_bottom();
    for tick in 0..=layout.max_tick {
        let x = layout.tick_x(tick);
        grid.push_str(&format!(
            r#"    <line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="{GRID_COLOR}" stroke-width="0.8" stroke-dasharray="1,2"/>
    <line x1="{x:.1}" y1="{bottom:.1}" x2="{x:.1}" y2="{:.1}" stroke="{AXIS_COLOR}" stroke-width="1"/>
    <text x="{x:.1}" y="{:.1}" text-anchor="middle" fill="{TEXT_COLOR}">{tick}</text>
"#,
            bottom + 4.0,
            bottom + 16.0,
        ));
    }
    grid.push_str("  </g>\n");
    grid
}

fn render_lanes(chart: &Chart, layout: &ChartLayout) -> String {
    let mut lanes = String::new();
    for (idx, row) in chart.rows.iter().enumerate() {
        let top = layout.band_top(idx);
        lanes.push_str(&format!(
            r#"  <g class="lane">
    <text x="{:.1}" y="{:.1}" text-anchor="end" dominant-baseline="middle" fill="{TEXT_COLOR}">{}</text>
"#,
            layout.plot_x - LABEL_PAD / 2.0,
            layout.band_mid(idx),
            escape_xml(&row.label),
        ));
        for span in &row.spans {
            let x = layout.tick_x(span.start);
            let w = span.length as f64 * layout.tick_width;
            lanes.push_str(&format!(
                r#"    <rect x="{x:.1}" y="{top:.1}" width="{w:.1}" height="{LANE_HEIGHT:.1}" fill="{}"><title>{} [{}, {})</title></rect>
"#,
                span.color,
                escape_xml(&span.task),
                span.start,
                span.start + span.length,
            ));
        }
        lanes.push_str("  </g>\n");
    }
    lanes
}

fn render_axes(layout: &ChartLayout) -> String {
    let left = layout.plot_x;
    let right = layout.plot_x + layout.plot_width;
    let top = layout.plot_y;
    let bottom = layout.plot_bottom();
    format!(
        r#"  <rect x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{AXIS_COLOR}" stroke-width="1"/>
  <text x="{:.1}" y="{:.1}" text-anchor="middle" fill="{TEXT_COLOR}">Tick</text>
"#,
        right - left,
        bottom - top,
        left + layout.plot_width / 2.0,
        bottom + 34.0,
    )
}

fn render_legend(chart: &Chart, layout: &ChartLayout) -> String {
    let x = layout.legend_x;
    let mut legend = format!(
        r#"  <g class="legend">
    <text x="{x:.1}" y="{:.1}" font-weight="bold" fill="{TEXT_COLOR}">Task</text>
"#,
        layout.legend_y + 12.0,
    );
    for (idx, entry) in chart.legend.iter().enumerate() {
        let y = layout.legend_row_y(idx);
        legend.push_str(&format!(
            r#"    <rect x="{x:.1}" y="{y:.1}" width="{SWATCH_SIZE:.1}" height="{SWATCH_SIZE:.1}" fill="{}"/>
    <text x="{:.1}" y="{:.1}" fill="{TEXT_COLOR}">{}</text>
"#,
            entry.color,
            x + SWATCH_SIZE + CHAR_WIDTH,
            y + SWATCH_SIZE - 2.0,
            escape_xml(&entry.task),
        ));
    }
    legend.push_str("  </g>\n");
    legend
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
