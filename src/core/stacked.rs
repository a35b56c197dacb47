use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::data::ItemSummary;
use crate::core::plot_area::{PlotArea, SlotGeometry};
use crate::error::{ChartError, ChartResult};

/// One stacked bar segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    pub item_index: usize,
    pub stack_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One per-stack line in pixel coordinates, vertices in item order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackPolyline {
    pub stack_index: usize,
    pub points: Vec<(f64, f64)>,
}

/// One y-axis tick: the value it represents and its vertical anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YAxisTick {
    pub value: f64,
    pub y: f64,
}

/// Largest per-item total, used as the vertical scale reference.
///
/// Fails with `DegenerateData` when there are no items or every total is
/// <= 0; segment heights would otherwise divide by zero.
pub fn max_item_total(summaries: &[ItemSummary]) -> ChartResult<f64> {
    let Some(max) = summaries
        .iter()
        .map(|summary| OrderedFloat(summary.total))
        .max()
    else {
        return Err(ChartError::DegenerateData(
            "cannot derive a vertical scale from zero items".to_owned(),
        ));
    };

    let max = max.into_inner();
    if max <= 0.0 {
        return Err(ChartError::DegenerateData(format!(
            "maximum item total must be > 0 to scale heights, got {max}"
        )));
    }
    Ok(max)
}

/// Projects summarized items into stacked bar segments.
///
/// Emits exactly one segment per (item, stack) pair. Segments of one item
/// are produced highest stack first: the y cursor starts at the top of the
/// item's full bar and walks down, so stack 0 ends up at the bottom of the
/// pile.
pub fn project_stack_segments(
    summaries: &[ItemSummary],
    area: PlotArea,
    slots: SlotGeometry,
    max_value: f64,
) -> ChartResult<Vec<StackSegment>> {
    validate_scale(max_value)?;

    // Items are independent, so large tables can project in parallel
    // without changing output order.
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<Vec<StackSegment>> = summaries
            .par_iter()
            .enumerate()
            .map(|(item_index, summary)| {
                project_item_segments(summary, item_index, area, slots, max_value)
            })
            .collect();
        Ok(projected.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut segments = Vec::with_capacity(summaries.len() * stack_width_hint(summaries));
        for (item_index, summary) in summaries.iter().enumerate() {
            segments.extend(project_item_segments(
                summary, item_index, area, slots, max_value,
            ));
        }
        Ok(segments)
    }
}

/// Projects summarized items into one polyline per stack.
///
/// Vertices are accumulated per stack index across all items, each stack
/// pre-seeded so the output always covers `0..stack_count` in order. A
/// stack that ends up with a vertex count different from the item count
/// fails with `IncompleteStack` instead of producing a ragged line.
pub fn project_stack_polylines(
    summaries: &[ItemSummary],
    stack_count: usize,
    area: PlotArea,
    slots: SlotGeometry,
    max_value: f64,
) -> ChartResult<Vec<StackPolyline>> {
    validate_scale(max_value)?;

    let mut stack_lines: IndexMap<usize, Vec<(f64, f64)>> = (0..stack_count)
        .map(|stack_index| (stack_index, Vec::with_capacity(summaries.len())))
        .collect();

    for (item_index, summary) in summaries.iter().enumerate() {
        let x = slots.slot_x(item_index);
        let total_height = (summary.total / max_value) * area.plot_height();
        let mut accumulated = 0.0;

        for stack_index in (0..summary.stack_count()).rev() {
            let segment_height = (summary.values[stack_index] / max_value) * area.plot_height();
            let y = area.plot_height() - total_height + area.top_pad() + accumulated;
            if let Some(points) = stack_lines.get_mut(&stack_index) {
                points.push((x, y));
            }
            accumulated += segment_height;
        }
    }

    let expected = summaries.len();
    let mut polylines = Vec::with_capacity(stack_count);
    for (stack_index, points) in stack_lines {
        if points.len() != expected {
            return Err(ChartError::IncompleteStack {
                stack_index,
                expected,
                actual: points.len(),
            });
        }
        polylines.push(StackPolyline {
            stack_index,
            points,
        });
    }
    Ok(polylines)
}

/// Evenly spaced y-axis ticks from `max_value` down towards zero.
///
/// Tick `i` of `n` carries value `max_value * (1 - i/n)` at vertical
/// position `(i/n) * plot_height`.
pub fn y_axis_ticks(
    max_value: f64,
    area: PlotArea,
    label_count: usize,
) -> ChartResult<Vec<YAxisTick>> {
    if label_count == 0 {
        return Ok(Vec::new());
    }
    validate_scale(max_value)?;

    let denominator = label_count as f64;
    let mut ticks = Vec::with_capacity(label_count);
    for index in 0..label_count {
        let ratio = (index as f64) / denominator;
        ticks.push(YAxisTick {
            value: max_value * (1.0 - ratio),
            y: ratio * area.plot_height(),
        });
    }
    Ok(ticks)
}

fn project_item_segments(
    summary: &ItemSummary,
    item_index: usize,
    area: PlotArea,
    slots: SlotGeometry,
    max_value: f64,
) -> Vec<StackSegment> {
    let x = slots.slot_x(item_index);
    let width = slots.bar_width();
    let total_height = (summary.total / max_value) * area.plot_height();
    let mut accumulated = 0.0;

    let mut segments = Vec::with_capacity(summary.stack_count());
    for stack_index in (0..summary.stack_count()).rev() {
        let segment_height = (summary.values[stack_index] / max_value) * area.plot_height();
        let y = area.plot_height() - total_height + area.top_pad() + accumulated;
        segments.push(StackSegment {
            item_index,
            stack_index,
            x,
            y,
            width,
            height: segment_height,
        });
        accumulated += segment_height;
    }
    segments
}

#[cfg(not(feature = "parallel-projection"))]
fn stack_width_hint(summaries: &[ItemSummary]) -> usize {
    summaries.first().map_or(0, ItemSummary::stack_count)
}

fn validate_scale(max_value: f64) -> ChartResult<()> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(ChartError::DegenerateData(format!(
            "height scaling requires a maximum item total > 0, got {max_value}"
        )));
    }
    Ok(())
}
