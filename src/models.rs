use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A plotted coordinate in chart-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One plotted line: an ordered point sequence plus its category name.
///
/// The *terminal point* (last point) anchors the series' end-of-line label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<Point>,
    pub category: String,
}

impl Series {
    pub fn new(points: Vec<Point>, category: impl Into<String>) -> Self {
        Self {
            points,
            category: category.into(),
        }
    }

    /// Last point of the series, or `None` for a (malformed) empty series.
    pub fn terminal(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Precondition violations on the input series list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("no series to plot")]
    NoSeries,
    #[error("series {index} ({category:?}) has no points")]
    EmptySeries { index: usize, category: String },
}
