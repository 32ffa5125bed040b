//! leadline
//!
//! Render multi-series line charts to SVG with per-series end-of-line labels
//! that never overlap. Label positions come from a greedy upward-displacement
//! search over the series' terminal points; displaced labels get an elbowed
//! dashed leader back to their line, unmoved labels a straight one.
//!
//! ### Example
//! ```no_run
//! use leadline::{dataset, viz};
//!
//! let series = dataset::builtin_series();
//! viz::render_lines(&series, "chart.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The layout engine itself is rendering-free and can be driven directly:
//! ```
//! use leadline::layout::LayoutState;
//!
//! let mut state = LayoutState::new();
//! assert_eq!(state.place(239.0), 239.0);
//! assert_eq!(state.place(232.0), 212.0); // pushed up, clear of 239
//! ```

pub mod dataset;
pub mod layout;
pub mod models;
pub mod viz;

pub use layout::{LabelPlacement, LayoutState, Leader, LeaderStroke, MIN_LABEL_GAP};
pub use models::{InputError, Point, Series};
