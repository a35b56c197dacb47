pub mod data;
pub mod plot_area;
pub mod stacked;
pub mod types;

pub use data::{ItemSummary, ItemValues, summarize_table};
pub use plot_area::{AxisLayout, PlotArea, SlotGeometry};
pub use stacked::{
    StackPolyline, StackSegment, YAxisTick, max_item_total, project_stack_polylines,
    project_stack_segments, y_axis_ticks,
};
pub use types::{ChartMode, Viewport};
