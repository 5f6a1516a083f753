use super::chart::Chart;

pub const MARGIN: f64 = 20.0;
pub const TITLE_HEIGHT: f64 = 32.0;
/// Height of one lane band.
pub const LANE_HEIGHT: f64 = 36.0;
/// Vertical gap between neighbouring bands.
pub const LANE_GAP: f64 = 12.0;
pub const PLOT_WIDTH: f64 = 960.0;
/// Space under the plot for tick labels and the axis caption.
pub const AXIS_HEIGHT: f64 = 44.0;
pub const CHAR_WIDTH: f64 = 7.0;
pub const LABEL_PAD: f64 = 12.0;
pub const LEGEND_GAP: f64 = 24.0;
pub const LEGEND_TITLE_HEIGHT: f64 = 20.0;
pub const LEGEND_ROW_HEIGHT: f64 = 18.0;
pub const SWATCH_SIZE: f64 = 12.0;

/// Pixel geometry of a chart.
///
/// Bands are stacked top-to-bottom in row order; the legend sits to the right
/// of the plot area so it never covers axes or labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub tick_width: f64,
    pub max_tick: usize,
    pub legend_x: f64,
    pub legend_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartLayout {
    pub fn new(chart: &Chart) -> Self {
        let label_chars = chart
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        let task_chars = chart
            .legend
            .iter()
            .map(|entry| entry.task.chars().count())
            .max()
            .unwrap_or(0)
            .max("Task".len());

        let plot_x = MARGIN + label_chars as f64 * CHAR_WIDTH + LABEL_PAD;
        let plot_y = MARGIN + TITLE_HEIGHT;
        let plot_height = chart.rows.len() as f64 * (LANE_HEIGHT + LANE_GAP);
        let tick_width = PLOT_WIDTH / chart.max_tick.max(1) as f64;

        let legend_x = plot_x + PLOT_WIDTH + LEGEND_GAP;
        let legend_y = plot_y;
        let legend_width = SWATCH_SIZE + 6.0 + task_chars as f64 * CHAR_WIDTH;
        let legend_height = LEGEND_TITLE_HEIGHT + chart.legend.len() as f64 * LEGEND_ROW_HEIGHT;

        let width = legend_x + legend_width + MARGIN;
        let height = plot_y + (plot_height + AXIS_HEIGHT).max(legend_height) + MARGIN;

        Self {
            plot_x,
            plot_y,
            plot_width: PLOT_WIDTH,
            plot_height,
            tick_width,
            max_tick: chart.max_tick,
            legend_x,
            legend_y,
            width,
            height,
        }
    }

    /// Top edge of the `index`-th band.
    pub fn band_top(&self, index: usize) -> f64 {
        self.plot_y + LANE_GAP / 2.0 + index as f64 * (LANE_HEIGHT + LANE_GAP)
    }

    /// Vertical midpoint of the `index`-th band, where its label goes.
    pub fn band_mid(&self, index: usize) -> f64 {
        self.band_top(index) + LANE_HEIGHT / 2.0
    }

    pub fn tick_x(&self, tick: usize) -> f64 {
        self.plot_x + tick as f64 * self.tick_width
    }

    pub fn plot_bottom(&self) -> f64 {
        self.plot_y + self.plot_height
    }

    pub fn legend_row_y(&self, index: usize) -> f64 {
        self.legend_y + LEGEND_TITLE_HEIGHT + index as f64 * LEGEND_ROW_HEIGHT
    }
}
