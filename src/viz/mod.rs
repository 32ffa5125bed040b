//! Render multi-series line charts to **SVG** with non-overlapping
//! end-of-line labels.
//!
//! One pass per call: plan every label position through the layout engine,
//! then emit axes, the series polylines, the dashed leader segments and the
//! category text. The pass is a pure function of the input series list;
//! layout state never survives a call.

pub mod util;

use crate::layout::{self, LabelPlacement};
use crate::models::Series;
use anyhow::{Result, anyhow};
use log::info;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use util::{leader_color, series_color};

/// Chart-pixel extent of the built-in configuration.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;
/// Right-hand gutter reserved for leaders and label text.
pub const DEFAULT_LABEL_MARGIN: u32 = 100;

const MARGIN: u32 = 8;
const LEFT_LABEL_AREA: u32 = 40;
const BOTTOM_LABEL_AREA: u32 = 32;

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Convenience: render with the built-in 800x400 extent and 100 px label
/// gutter.
pub fn render_lines<P: AsRef<Path>>(series: &[Series], out_path: P) -> Result<()> {
    render_chart(
        series,
        out_path,
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
        DEFAULT_LABEL_MARGIN,
    )
}

/// Render `series` as an SVG line chart with end-of-line labels.
///
/// `width`/`height` are the chart-pixel extent the point coordinates live in;
/// `label_margin` is the extra horizontal room reserved to the right for
/// leaders and label text. Data maps linearly onto the plot area with Y
/// growing downward, matching the coordinate space the points are given in.
pub fn render_chart<P: AsRef<Path>>(
    series: &[Series],
    out_path: P,
    width: u32,
    height: u32,
    label_margin: u32,
) -> Result<()> {
    // Validates input (non-empty list, no empty series) and resolves every
    // label position before any drawing starts.
    let placements = layout::plan_labels(series)?;

    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    let canvas_w = width + label_margin;
    let canvas_h = height + BOTTOM_LABEL_AREA + 2 * MARGIN;

    let root = SVGBackend::new(path_string.as_str(), (canvas_w, canvas_h)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // Y range is reversed so chart coordinates equal SVG pixel space (y
    // grows downward); the layout engine's upward shifts stay upward on
    // screen.
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, LEFT_LABEL_AREA)
        .set_label_area_size(LabelAreaPosition::Bottom, BOTTOM_LABEL_AREA)
        .set_label_area_size(LabelAreaPosition::Right, label_margin)
        .build_cartesian_2d(0f64..width as f64, height as f64..0f64)
        .map_err(|e| anyhow!("{:?}", e))?;

    let tick_fmt = |v: &f64| format!("{:.0}", v);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(9)
        .y_labels(9)
        .x_label_formatter(&tick_fmt)
        .y_label_formatter(&tick_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_style(BLACK.stroke_width(1))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (placement, s) in placements.iter().zip(series) {
        draw_labeled_series(&mut chart, placement, s, width as f64)?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    info!(
        "rendered {} series with end labels to {}",
        series.len(),
        out_path.display()
    );
    Ok(())
}

/// Emit one series: its polyline, its dashed leader and its label text.
fn draw_labeled_series<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    placement: &LabelPlacement,
    series: &Series,
    plot_width: f64,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let idx = placement.series_index;
    let color = series_color(idx);

    let style = ShapeStyle {
        color,
        filled: false,
        stroke_width: 2,
    };
    chart
        .draw_series(LineSeries::new(
            series.points.iter().map(|p| (p.x, p.y)),
            style,
        ))
        .map_err(|e| anyhow!("{:?}", e))?;

    // 5 px dashes with 5 px gaps, like a `stroke-dasharray: 5,5` leader.
    for seg in placement.leader_segments(plot_width) {
        let stroke = leader_color(seg.stroke, idx, color);
        chart
            .draw_series(DashedLineSeries::new(
                [(seg.from.x, seg.from.y), (seg.to.x, seg.to.y)],
                5,
                5,
                stroke.stroke_width(1),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let text_style = (FontFamily::SansSerif, 14)
        .into_font()
        .color(&color)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(std::iter::once(Text::new(
            series.category.clone(),
            (placement.label_x(plot_width), placement.label_y),
            text_style,
        )))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
