mod chart_config;
mod data_source;
mod frame_builder;
mod json_contract;

pub use chart_config::ChartConfig;
pub use data_source::{ChartDataSource, TableDataSource};
pub use frame_builder::{DEFAULT_SERIES_COLOR, build_render_frame};
pub use json_contract::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
