//! Geometry for the history chart.
//!
//! Points are laid out on a fixed virtual canvas; the SVG is stretched to
//! its container with `preserveAspectRatio="none"`, so hover lookups work on
//! the horizontal fraction of the rendered width rather than on pixels.

use crate::{history::HistoryStats, model::PriceHistoryPoint};

pub const CANVAS_WIDTH: f64 = 1000.0;
pub const CANVAS_HEIGHT: f64 = 300.0;

// dashed horizontal guides, as fractions of the canvas height
pub const GRID_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
  pub x: f64,
  pub y: f64,
  /// position of the source point in the history series
  pub index: usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
  points: Vec<ChartPoint>,
  stats: HistoryStats
}

impl ChartGeometry {
  pub fn new(series: &[PriceHistoryPoint]) -> Self {
    let stats = HistoryStats::from_points(series);
    let range = stats.range();
    let last = series.len().saturating_sub(1) as f64;

    let points = series
      .iter()
      .enumerate()
      .map(|(index, point)| ChartPoint {
        x: index as f64 / last * CANVAS_WIDTH,
        y: CANVAS_HEIGHT - (point.price - stats.min) / range * CANVAS_HEIGHT,
        index
      })
      .filter(|p| p.x.is_finite() && p.y.is_finite())
      .collect();

    Self { points, stats }
  }

  pub fn points(&self) -> &[ChartPoint] {
    &self.points
  }

  pub fn stats(&self) -> &HistoryStats {
    &self.stats
  }

  /// A single point cannot be drawn as a line.
  pub fn is_drawable(&self) -> bool {
    self.points.len() >= 2
  }

  /// `points` attribute for an SVG `<polyline>`.
  pub fn line_path(&self) -> String {
    self.points
      .iter()
      .map(|p| format!("{},{}", p.x, p.y))
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// Closed `d` attribute for the filled area under the line.
  pub fn area_path(&self) -> String {
    match (self.points.first(), self.points.last()) {
      (Some(first), Some(last)) if self.is_drawable() => format!(
        "M {},{} L {} L {},{} Z",
        first.x, CANVAS_HEIGHT, self.line_path(), last.x, CANVAS_HEIGHT
      ),
      _ => String::new()
    }
  }

  pub fn grid_lines(&self) -> impl Iterator<Item = f64> {
    GRID_FRACTIONS.into_iter().map(|f| f * CANVAS_HEIGHT)
  }

  /// Y-axis labels, top to bottom: max, midpoint, min.
  pub fn axis_labels(&self) -> [f64; 3] {
    [self.stats.max, self.stats.midpoint(), self.stats.min]
  }

  /// Snaps a horizontal pointer position to the nearest point.
  ///
  /// `fraction_x` is the pointer offset divided by the rendered chart width.
  /// Positions that do not land on a point yield `None`, leaving any
  /// previous hover untouched.
  pub fn hover_index(&self, fraction_x: f64) -> Option<usize> {
    if self.points.is_empty() || !fraction_x.is_finite() {
      return None;
    }
    let idx = (fraction_x * (self.points.len() - 1) as f64).round();
    if idx < 0.0 {
      return None;
    }
    let idx = idx as usize;
    (idx < self.points.len()).then_some(idx)
  }

  /// [`Self::hover_index`] from a pointer position and the chart's on-screen
  /// left edge and width, all in the same (client) coordinates. The edge has
  /// to be measured at the time of the event; a stale one after scrolling
  /// snaps to the wrong point.
  pub fn hover_index_at(&self, pointer_x: f64, left: f64, width: f64) -> Option<usize> {
    if width.is_nan() || width <= 0.0 {
      return None;
    }
    self.hover_index((pointer_x - left) / width)
  }

  pub fn point(&self, idx: usize) -> Option<&ChartPoint> {
    self.points.get(idx)
  }

  /// Horizontal tooltip anchor as a percentage of the chart width.
  pub fn tooltip_left_pct(point: &ChartPoint) -> f64 {
    point.x / CANVAS_WIDTH * 100.0
  }
}
