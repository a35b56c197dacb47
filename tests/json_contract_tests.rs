use stackchart::api::{
    ChartConfig, RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1, TableDataSource,
    build_render_frame,
};
use stackchart::core::Viewport;
use stackchart::render::RenderFrame;

fn sample_frame() -> RenderFrame {
    let config = ChartConfig::new(Viewport::new(300, 100));
    let source = TableDataSource::new(vec![vec![10.0, 20.0], vec![30.0, 0.0]], 2)
        .expect("source")
        .with_y_axis_labels(3);
    build_render_frame(&config, &source).expect("frame")
}

#[test]
fn frame_round_trips_through_the_v1_envelope() {
    let frame = sample_frame();

    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = RenderFrame::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, frame);
}

#[test]
fn bare_frame_payloads_remain_parseable() {
    let frame = sample_frame();
    let bare = serde_json::to_string(&frame).expect("serialize bare");

    let parsed = RenderFrame::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, frame);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let envelope = RenderFrameJsonContractV1 {
        schema_version: RENDER_FRAME_JSON_SCHEMA_V1 + 1,
        frame: sample_frame(),
    };
    let json = serde_json::to_string(&envelope).expect("serialize");

    let err = RenderFrame::from_json_compat_str(&json).expect_err("must reject version");
    assert!(format!("{err}").contains("schema version"));
}

#[test]
fn garbage_payload_is_rejected() {
    let err = RenderFrame::from_json_compat_str("{not json").expect_err("must reject garbage");
    assert!(format!("{err}").contains("frame json payload"));
}
