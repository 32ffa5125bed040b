//! End-of-line label placement.
//!
//! The layout engine takes each series' terminal Y position in input order and
//! finds a label position that keeps every pair of labels at least
//! [`MIN_LABEL_GAP`] pixels apart, by greedily pushing colliding labels
//! upward (decreasing Y in SVG pixel space). It then picks the leader
//! geometry: a straight dashed line when the label stayed at the terminal Y,
//! a three-segment elbow when it was displaced.
//!
//! The engine is deliberately free of any rendering types so the collision
//! properties can be tested without a backend.

use crate::models::{InputError, Point, Series};
use log::debug;
use serde::Serialize;

/// Minimum vertical separation between two labels, in pixels.
/// Exactly this far apart counts as non-colliding (the test is strict `<`).
pub const MIN_LABEL_GAP: f64 = 20.0;

/// X offset past the plot width where a straight leader ends.
pub const STRAIGHT_END_X: f64 = 27.0;
/// X offset past the plot width where an elbow bends.
pub const ELBOW_KNEE_X: f64 = 15.0;
/// X offset past the plot width where an elbow's final segment ends.
pub const ELBOW_END_X: f64 = 30.0;
/// X offset past the plot width where label text starts.
pub const LABEL_X: f64 = 35.0;

/// Accepted label Y positions of a single rendering pass, in placement order.
///
/// Constructed fresh at the start of each pass and dropped with it; the
/// collection only ever grows, one entry per processed series.
#[derive(Debug, Default)]
pub struct LayoutState {
    placed: Vec<f64>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a non-colliding label position for `terminal_y` and record it.
    ///
    /// First-fit-descending: the candidate starts at the terminal Y and moves
    /// up in [`MIN_LABEL_GAP`] steps. After every shift the scan restarts so
    /// the new candidate is re-checked against all earlier placements.
    /// Worst case O(n^2) per call, fine for the small series counts this
    /// handles; the loop always terminates because each shift moves the
    /// candidate a fixed step away from a finite set of positions.
    pub fn place(&mut self, terminal_y: f64) -> f64 {
        let mut label_y = terminal_y;
        let mut moved = true;
        while moved {
            moved = false;
            for &p in &self.placed {
                if (p - label_y).abs() < MIN_LABEL_GAP {
                    label_y -= MIN_LABEL_GAP;
                    moved = true;
                    break;
                }
            }
        }
        self.placed.push(label_y);
        label_y
    }

    /// Accepted positions so far, in placement order.
    pub fn positions(&self) -> &[f64] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

/// Leader shape between a series' terminal point and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Leader {
    /// Label sits at the terminal Y; one horizontal dashed segment.
    Straight,
    /// Label was displaced; horizontal-vertical-horizontal dashed segments.
    Elbow,
}

impl Leader {
    /// The shape is fully determined by whether placement moved the label.
    pub fn for_placement(terminal_y: f64, label_y: f64) -> Self {
        if label_y == terminal_y {
            Leader::Straight
        } else {
            Leader::Elbow
        }
    }

    /// Stroke rule for the segments that reach the label: straight leaders
    /// keep the series color, elbows alternate blue/red by series index
    /// parity (the elbow's first horizontal stub still uses the series
    /// color, see [`LabelPlacement::leader_segments`]).
    pub fn stroke(self) -> LeaderStroke {
        match self {
            Leader::Straight => LeaderStroke::Series,
            Leader::Elbow => LeaderStroke::Parity,
        }
    }
}

/// Which color a leader segment is stroked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeaderStroke {
    /// The series' own line color.
    Series,
    /// The two-color cycle keyed on series index parity.
    Parity,
}

/// One dashed leader segment in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeaderSegment {
    pub from: Point,
    pub to: Point,
    pub stroke: LeaderStroke,
}

impl LeaderSegment {
    fn new(from: Point, to: Point, stroke: LeaderStroke) -> Self {
        Self { from, to, stroke }
    }
}

/// Final placement for one series' label, produced by [`plan_labels`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub series_index: usize,
    pub terminal: Point,
    pub label_y: f64,
    pub leader: Leader,
}

impl LabelPlacement {
    /// Dashed segments connecting the terminal point to the label, given the
    /// plot width `w` (labels live in the margin to its right).
    ///
    /// Straight: terminal → (w+27, terminal_y), series color.
    /// Elbow: terminal → (w+15, terminal_y) in the series color, then
    /// (w+15, terminal_y) → (w+15, label_y) → (w+30, label_y) in the parity
    /// color.
    pub fn leader_segments(&self, plot_width: f64) -> Vec<LeaderSegment> {
        let t = self.terminal;
        match self.leader {
            Leader::Straight => vec![LeaderSegment::new(
                t,
                Point::new(plot_width + STRAIGHT_END_X, t.y),
                LeaderStroke::Series,
            )],
            Leader::Elbow => {
                let knee_x = plot_width + ELBOW_KNEE_X;
                vec![
                    LeaderSegment::new(
                        t,
                        Point::new(knee_x, t.y),
                        LeaderStroke::Series,
                    ),
                    LeaderSegment::new(
                        Point::new(knee_x, t.y),
                        Point::new(knee_x, self.label_y),
                        LeaderStroke::Parity,
                    ),
                    LeaderSegment::new(
                        Point::new(knee_x, self.label_y),
                        Point::new(plot_width + ELBOW_END_X, self.label_y),
                        LeaderStroke::Parity,
                    ),
                ]
            }
        }
    }

    /// X position where the label text starts, given the plot width.
    pub fn label_x(&self, plot_width: f64) -> f64 {
        plot_width + LABEL_X
    }
}

/// Run one full layout pass over `series`, in input order.
///
/// The pass owns its [`LayoutState`]; nothing survives the call, so repeated
/// invocations over the same input are independent and yield identical
/// placements. Order matters: later series dodge every earlier label.
pub fn plan_labels(series: &[Series]) -> Result<Vec<LabelPlacement>, InputError> {
    if series.is_empty() {
        return Err(InputError::NoSeries);
    }
    let mut state = LayoutState::new();
    let mut out = Vec::with_capacity(series.len());
    for (idx, s) in series.iter().enumerate() {
        let terminal = s.terminal().ok_or_else(|| InputError::EmptySeries {
            index: idx,
            category: s.category.clone(),
        })?;
        let label_y = state.place(terminal.y);
        if label_y != terminal.y {
            debug!(
                "label for series {idx} ({:?}) shifted {} -> {label_y}",
                s.category, terminal.y
            );
        }
        out.push(LabelPlacement {
            series_index: idx,
            terminal,
            label_y,
            leader: Leader::for_placement(terminal.y, label_y),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_placement_is_unshifted() {
        let mut state = LayoutState::new();
        assert_eq!(state.place(239.0), 239.0);
        assert_eq!(state.positions(), &[239.0]);
    }

    #[test]
    fn exactly_min_gap_is_not_a_collision() {
        let mut state = LayoutState::new();
        state.place(100.0);
        assert_eq!(state.place(120.0), 120.0);
        assert_eq!(state.place(80.0), 80.0);
    }

    #[test]
    fn just_under_min_gap_shifts_up() {
        let mut state = LayoutState::new();
        state.place(100.0);
        // |100 - 119.5| = 19.5 < 20, so the candidate steps to 99.5,
        // collides again, and lands on 79.5.
        assert_eq!(state.place(119.5), 79.5);
    }

    #[test]
    fn identical_terminals_stack_upward() {
        let mut state = LayoutState::new();
        assert_eq!(state.place(100.0), 100.0);
        assert_eq!(state.place(100.0), 80.0);
        assert_eq!(state.place(100.0), 60.0);
    }

    #[test]
    fn shift_restarts_scan_against_earlier_placements() {
        let mut state = LayoutState::new();
        state.place(239.0);
        state.place(180.0);
        // 232 first dodges 239 down to 212, which still clears 180; if the
        // scan did not restart it could land between two existing labels.
        assert_eq!(state.place(232.0), 212.0);
        let pos = state.positions();
        for i in 0..pos.len() {
            for j in (i + 1)..pos.len() {
                assert!((pos[i] - pos[j]).abs() >= MIN_LABEL_GAP);
            }
        }
    }

    #[test]
    fn leader_shape_depends_only_on_displacement() {
        assert_eq!(Leader::for_placement(200.0, 200.0), Leader::Straight);
        assert_eq!(Leader::for_placement(200.0, 180.0), Leader::Elbow);
        assert_eq!(Leader::Straight.stroke(), LeaderStroke::Series);
        assert_eq!(Leader::Elbow.stroke(), LeaderStroke::Parity);
    }
}
