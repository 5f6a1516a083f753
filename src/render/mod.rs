//! Timeline rendering
//!
//! - [`Chart`]: pure model (rows of colored spans plus legend), no pixels
//! - [`ChartLayout`]: pixel geometry for bands, ticks and legend
//! - [`ChartBackend`]: drawing boundary; [`SvgBackend`] writes an SVG file

mod chart;
mod layout;
mod palette;
mod svg;

pub use chart::{Chart, ChartRow, ChartSpan, LegendEntry};
pub use layout::{ChartLayout, LANE_GAP, LANE_HEIGHT};
pub use palette::{PALETTE, Rgb, assign_colors, color_for};
pub use svg::SvgBackend;

use crate::error::{Error, Result};
use crate::trace::Timeline;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TITLE: &str = "CPU Run Timeline";

/// Draws labeled horizontal bands with colored spans and a legend.
pub trait ChartBackend {
    fn draw(&mut self, chart: &Chart, layout: &ChartLayout) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Build the chart for `timeline` and hand it to `backend`.
///
/// Fails with [`Error::EmptyTimeline`] when there are no lanes.
pub fn render_timeline<B: ChartBackend>(
    timeline: &Timeline,
    opts: &RenderOptions,
    backend: &mut B,
) -> Result<()> {
    if timeline.is_empty() {
        return Err(Error::EmptyTimeline);
    }

    let chart = Chart::from_timeline(timeline, opts.title.as_str());
    for row in &chart.rows {
        debug!(label = %row.label, spans = row.spans.len(), "compressed lane");
    }
    let layout = ChartLayout::new(&chart);
    backend.draw(&chart, &layout)?;
    info!(
        lanes = chart.rows.len(),
        tasks = chart.legend.len(),
        spans = chart.span_count(),
        max_tick = chart.max_tick,
        "rendered timeline"
    );
    Ok(())
}

/// Render `timeline` as SVG and write it to `path`.
///
/// The document is built in memory first, so a failed render leaves no file.
pub fn write_svg_file(timeline: &Timeline, opts: &RenderOptions, path: &Path) -> Result<()> {
    let mut backend = SvgBackend::new(Vec::new());
    render_timeline(timeline, opts, &mut backend)?;
    fs::write(path, backend.into_inner())?;
    Ok(())
}

/// Chart path next to `input`: `trace.txt` -> `trace.svg`.
///
/// An input already ending in `.svg` gets a second extension so it is never
/// overwritten: `trace.svg` -> `trace.svg.svg`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let output = input.with_extension("svg");
    if output != input {
        return output;
    }
    let mut name = input.as_os_str().to_owned();
    name.push(".svg");
    PathBuf::from(name)
}
