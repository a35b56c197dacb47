use tracing::{debug, trace};

use crate::api::{ChartConfig, ChartDataSource};
use crate::core::{
    ChartMode, ItemSummary, ItemValues, PlotArea, max_item_total, project_stack_polylines,
    project_stack_segments, y_axis_ticks,
};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Neutral series color applied when the data source has no per-stack color.
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

const AXIS_LINE_COLOR: Color = Color::rgb(0.75, 0.75, 0.75);
const LABEL_TEXT_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_STROKE_WIDTH: f64 = 2.0;
const SERIES_STROKE_WIDTH: f64 = 2.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;

/// Computes the full draw-primitive list for one chart pass.
///
/// The pass is a pure function of its arguments: summaries are collected
/// fresh, nothing is cached between calls, and identical inputs always
/// produce identical frames. Draw order is axis lines, series geometry,
/// then labels.
pub fn build_render_frame(
    config: &ChartConfig,
    source: &dyn ChartDataSource,
) -> ChartResult<RenderFrame> {
    config.validate()?;
    let area = PlotArea::new(config.viewport, config.axis)?;

    let mut frame = RenderFrame::new(config.viewport)
        .with_line(LinePrimitive::new(
            0.0,
            area.baseline_y(),
            area.surface_width(),
            area.baseline_y(),
            AXIS_STROKE_WIDTH,
            AXIS_LINE_COLOR,
        ))
        .with_line(LinePrimitive::new(
            area.y_axis_x(),
            0.0,
            area.y_axis_x(),
            area.baseline_y(),
            AXIS_STROKE_WIDTH,
            AXIS_LINE_COLOR,
        ));

    let item_count = source.item_count();
    if item_count == 0 {
        debug!("no chart items; emitting axis lines only");
        return Ok(frame);
    }

    let stack_count = source.stack_count();
    let summaries = collect_summaries(source, item_count, stack_count)?;
    let max_value = max_item_total(&summaries)?;
    let slots = area.slots(item_count)?;
    trace!(
        max_value,
        unit_width = slots.unit_width(),
        "resolved vertical scale and slot geometry"
    );

    match config.mode {
        ChartMode::Bar => {
            let segments = project_stack_segments(&summaries, area, slots, max_value)?;
            for segment in segments {
                let color = source
                    .color_for(segment.stack_index)
                    .unwrap_or(DEFAULT_SERIES_COLOR);
                frame.rects.push(RectPrimitive::new(
                    segment.x,
                    segment.y,
                    segment.width,
                    segment.height,
                    color,
                ));
            }
        }
        ChartMode::Line => {
            let polylines =
                project_stack_polylines(&summaries, stack_count, area, slots, max_value)?;
            for polyline in polylines {
                let color = source
                    .color_for(polyline.stack_index)
                    .unwrap_or(DEFAULT_SERIES_COLOR);
                frame.polylines.push(PolylinePrimitive::new(
                    polyline.stack_index,
                    polyline.points,
                    SERIES_STROKE_WIDTH,
                    color,
                ));
            }
        }
    }

    for item_index in 0..item_count {
        let text = source.label_for(item_index).unwrap_or_default();
        frame.texts.push(TextPrimitive::new(
            text,
            slots.slot_x(item_index),
            area.x_label_y(),
            LABEL_FONT_SIZE_PX,
            LABEL_TEXT_COLOR,
            TextHAlign::Left,
        ));
    }

    let y_label_count = source.y_axis_label_count().unwrap_or(0);
    for tick in y_axis_ticks(max_value, area, y_label_count)? {
        frame.texts.push(TextPrimitive::new(
            tick.value.to_string(),
            0.0,
            tick.y,
            LABEL_FONT_SIZE_PX,
            LABEL_TEXT_COLOR,
            TextHAlign::Left,
        ));
    }

    debug!(
        rect_count = frame.rects.len(),
        polyline_count = frame.polylines.len(),
        text_count = frame.texts.len(),
        "built render frame"
    );
    Ok(frame)
}

fn collect_summaries(
    source: &dyn ChartDataSource,
    item_count: usize,
    stack_count: usize,
) -> ChartResult<Vec<ItemSummary>> {
    let mut summaries = Vec::with_capacity(item_count);
    for item_index in 0..item_count {
        let mut values = ItemValues::with_capacity(stack_count);
        for stack_index in 0..stack_count {
            values.push(source.value_at(item_index, stack_index));
        }
        summaries.push(ItemSummary::from_values(values)?);
    }
    debug!(item_count, stack_count, "collected item summaries");
    Ok(summaries)
}
