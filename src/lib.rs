//! stackchart: stacked bar/line chart layout engine.
//!
//! This crate turns a tabular data series (items on the x-axis, stacked
//! sub-values per item) into an ordered list of backend-agnostic draw
//! primitives. Geometry is computed in a single pure pass so rendering
//! backends and tests consume the exact same output.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartDataSource, TableDataSource, build_render_frame};
pub use error::{ChartError, ChartResult};
