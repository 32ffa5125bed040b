//! Color utilities: series palette and leader stroke selection.

use crate::layout::LeaderStroke;
use plotters::prelude::*;

/// The d3 `schemeCategory10` palette.
/// Order: Blue, Orange, Green, Red, Purple, Brown, Pink, Gray, Olive, Cyan.
const CATEGORY10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // blue   (#1F77B4)
    RGBColor(255, 127, 14),  // orange (#FF7F0E)
    RGBColor(44, 160, 44),   // green  (#2CA02C)
    RGBColor(214, 39, 40),   // red    (#D62728)
    RGBColor(148, 103, 189), // purple (#9467BD)
    RGBColor(140, 86, 75),   // brown  (#8C564B)
    RGBColor(227, 119, 194), // pink   (#E377C2)
    RGBColor(127, 127, 127), // gray   (#7F7F7F)
    RGBColor(188, 189, 34),  // olive  (#BCBD22)
    RGBColor(23, 190, 207),  // cyan   (#17BECF)
];

/// Elbow strokes alternate between these two by series index parity.
const PARITY2: [RGBColor; 2] = [
    RGBColor(0, 0, 255), // even index: blue
    RGBColor(255, 0, 0), // odd index: red
];

/// Line/label color for a series, index-cycled through the palette.
#[inline]
pub fn series_color(idx: usize) -> RGBAColor {
    CATEGORY10[idx % CATEGORY10.len()].to_rgba()
}

/// Parity color for elbow segments of the series at `idx`.
#[inline]
pub fn parity_color(idx: usize) -> RGBAColor {
    PARITY2[idx % PARITY2.len()].to_rgba()
}

/// Resolve a leader segment's stroke rule to a concrete color.
pub fn leader_color(stroke: LeaderStroke, idx: usize, series: RGBAColor) -> RGBAColor {
    match stroke {
        LeaderStroke::Series => series,
        LeaderStroke::Parity => parity_color(idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), series_color(10));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn parity_alternates() {
        assert_eq!(parity_color(0), parity_color(2));
        assert_eq!(parity_color(1), parity_color(3));
        assert_ne!(parity_color(0), parity_color(1));
    }

    #[test]
    fn series_stroke_keeps_series_color() {
        let c = series_color(3);
        assert_eq!(leader_color(LeaderStroke::Series, 3, c), c);
        assert_eq!(leader_color(LeaderStroke::Parity, 3, c), parity_color(3));
    }
}
