use proptest::prelude::*;

use stackchart::api::{ChartConfig, TableDataSource, build_render_frame};
use stackchart::core::{
    AxisLayout, ChartMode, PlotArea, Viewport, max_item_total, project_stack_segments,
    summarize_table,
};

fn table_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..12, 1usize..5).prop_flat_map(|(item_count, stack_count)| {
        proptest::collection::vec(
            proptest::collection::vec(0.01f64..1_000.0, stack_count),
            item_count,
        )
    })
}

proptest! {
    #[test]
    fn segment_heights_sum_to_the_item_total_height(rows in table_strategy()) {
        let stack_count = rows[0].len();
        let area = PlotArea::new(Viewport::new(1200, 800), AxisLayout::default())
            .expect("plot area");
        let summaries = summarize_table(&rows, stack_count).expect("summaries");
        let max = max_item_total(&summaries).expect("max");
        let slots = area.slots(rows.len()).expect("slots");

        let segments = project_stack_segments(&summaries, area, slots, max)
            .expect("projection");

        for (item_index, summary) in summaries.iter().enumerate() {
            let total_height = (summary.total / max) * area.plot_height();
            let height_sum: f64 = segments
                .iter()
                .filter(|segment| segment.item_index == item_index)
                .map(|segment| segment.height)
                .sum();
            prop_assert!((height_sum - total_height).abs() <= total_height.abs() * 1e-9 + 1e-12);
        }
    }

    #[test]
    fn bar_mode_emits_item_count_times_stack_count_rects(rows in table_strategy()) {
        let stack_count = rows[0].len();
        let item_count = rows.len();
        let source = TableDataSource::new(rows, stack_count).expect("source");
        let config = ChartConfig::new(Viewport::new(1200, 800));

        let frame = build_render_frame(&config, &source).expect("frame");
        prop_assert_eq!(frame.rects.len(), item_count * stack_count);
    }

    #[test]
    fn line_mode_emits_one_polyline_per_stack(rows in table_strategy()) {
        let stack_count = rows[0].len();
        let item_count = rows.len();
        let source = TableDataSource::new(rows, stack_count).expect("source");
        let config = ChartConfig::new(Viewport::new(1200, 800)).with_mode(ChartMode::Line);

        let frame = build_render_frame(&config, &source).expect("frame");
        prop_assert_eq!(frame.polylines.len(), stack_count);
        for polyline in &frame.polylines {
            prop_assert_eq!(polyline.points.len(), item_count);
        }
    }

    #[test]
    fn emitted_y_coordinates_stay_inside_the_padded_plot_region(rows in table_strategy()) {
        let stack_count = rows[0].len();
        let area = PlotArea::new(Viewport::new(1200, 800), AxisLayout::default())
            .expect("plot area");
        let summaries = summarize_table(&rows, stack_count).expect("summaries");
        let max = max_item_total(&summaries).expect("max");
        let slots = area.slots(rows.len()).expect("slots");

        let segments = project_stack_segments(&summaries, area, slots, max)
            .expect("projection");

        let upper_bound = area.plot_height() + area.top_pad();
        for segment in segments {
            prop_assert!(segment.y >= -1e-9);
            prop_assert!(segment.y + segment.height <= upper_bound + 1e-9);
        }
    }

    #[test]
    fn repeated_builds_stay_identical(rows in table_strategy()) {
        let stack_count = rows[0].len();
        let source = TableDataSource::new(rows, stack_count).expect("source");
        let config = ChartConfig::new(Viewport::new(1200, 800));

        let first = build_render_frame(&config, &source).expect("first frame");
        let second = build_render_frame(&config, &source).expect("second frame");
        prop_assert_eq!(first, second);
    }
}
