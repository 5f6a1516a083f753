use super::palette::{Rgb, assign_colors};
use crate::trace::{Timeline, compress_runs};
use std::collections::HashMap;

/// One colored run inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpan {
    pub task: String,
    pub start: usize,
    pub length: usize,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub label: String,
    pub spans: Vec<ChartSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub task: String,
    pub color: Rgb,
}

/// Everything a backend needs to draw, independent of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub title: String,
    /// Upper bound of the tick axis (the longest lane).
    pub max_tick: usize,
    /// Rows in input order.
    pub rows: Vec<ChartRow>,
    /// Distinct tasks in first-seen order.
    pub legend: Vec<LegendEntry>,
}

impl Chart {
    pub fn from_timeline(timeline: &Timeline, title: impl Into<String>) -> Self {
        let colors = assign_colors(timeline.distinct_tasks());
        let color_of = colors.iter().copied().collect::<HashMap<_, _>>();

        let rows = timeline
            .lanes()
            .iter()
            .map(|lane| ChartRow {
                label: lane.label.clone(),
                spans: compress_runs(&lane.tokens)
                    .into_iter()
                    .map(|span| ChartSpan {
                        task: span.token.clone(),
                        start: span.start,
                        length: span.length,
                        color: color_of[span.token.as_str()],
                    })
                    .collect(),
            })
            .collect();

        let legend = colors
            .into_iter()
            .map(|(task, color)| LegendEntry {
                task: task.to_string(),
                color,
            })
            .collect();

        Self {
            title: title.into(),
            max_tick: timeline.max_ticks(),
            rows,
            legend,
        }
    }

    pub fn span_count(&self) -> usize {
        self.rows.iter().map(|row| row.spans.len()).sum()
    }
}
