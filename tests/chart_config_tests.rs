use stackchart::api::ChartConfig;
use stackchart::core::{AxisLayout, ChartMode, Viewport};
use stackchart::error::ChartError;

#[test]
fn new_config_defaults_to_bar_mode_with_classic_margins() {
    let config = ChartConfig::new(Viewport::new(300, 100));

    assert_eq!(config.mode, ChartMode::Bar);
    assert!((config.axis.label_pad - 50.0).abs() <= 1e-9);
    assert!((config.axis.pre_pad - 10.0).abs() <= 1e-9);
    assert!((config.axis.post_pad - 10.0).abs() <= 1e-9);
    assert!((config.axis.top_pad - 10.0).abs() <= 1e-9);
    assert!((config.axis.plot_height_ratio - 0.8).abs() <= 1e-9);
    assert!((config.axis.x_label_offset - 5.0).abs() <= 1e-9);
}

#[test]
fn builder_methods_override_mode_and_axis() {
    let axis = AxisLayout {
        plot_height_ratio: 0.6,
        ..AxisLayout::default()
    };
    let config = ChartConfig::new(Viewport::new(300, 100))
        .with_mode(ChartMode::Line)
        .with_axis(axis);

    assert_eq!(config.mode, ChartMode::Line);
    assert!((config.axis.plot_height_ratio - 0.6).abs() <= 1e-9);
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::new(Viewport::new(640, 480)).with_mode(ChartMode::Line);

    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: ChartConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let parsed: ChartConfig =
        serde_json::from_str(r#"{"viewport":{"width":300,"height":100}}"#).expect("deserialize");

    assert_eq!(parsed.mode, ChartMode::Bar);
    assert_eq!(parsed.axis, AxisLayout::default());
}

#[test]
fn partial_axis_fields_keep_remaining_defaults() {
    let parsed: ChartConfig = serde_json::from_str(
        r#"{"viewport":{"width":300,"height":100},"axis":{"plot_height_ratio":0.5}}"#,
    )
    .expect("deserialize");

    assert!((parsed.axis.plot_height_ratio - 0.5).abs() <= 1e-9);
    assert!((parsed.axis.label_pad - 50.0).abs() <= 1e-9);
}

#[test]
fn zero_sized_viewport_fails_validation() {
    let config = ChartConfig::new(Viewport::new(300, 0));
    let err = config.validate().expect_err("must reject zero height");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 300,
            height: 0
        }
    ));
}

#[test]
fn out_of_range_plot_ratio_fails_validation() {
    let config = ChartConfig::new(Viewport::new(300, 100)).with_axis(AxisLayout {
        plot_height_ratio: 0.0,
        ..AxisLayout::default()
    });
    let err = config.validate().expect_err("must reject zero ratio");
    assert!(matches!(err, ChartError::InvalidConfiguration(_)));
}
