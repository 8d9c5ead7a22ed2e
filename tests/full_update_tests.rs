use metric_chart::core::Series;
use metric_chart::render::{Color, NullRenderer};
use metric_chart::{ChartAdapter, ChartError, DEFAULT_BORDER_COLOR};

fn chart() -> ChartAdapter<NullRenderer> {
    ChartAdapter::new(
        NullRenderer::default(),
        ["a", "b"],
        vec![Series::new("S", vec![1.0, 2.0])],
    )
    .expect("adapter init")
}

#[test]
fn update_replaces_labels_and_series_wholesale() {
    let mut adapter = chart();
    adapter
        .update(
            ["x", "y", "z"],
            vec![
                Series::new("T", vec![7.0, 8.0, 9.0]),
                Series::new("U", vec![0.0, 0.0, 1.0]),
            ],
        )
        .expect("replace");

    assert_eq!(adapter.labels(), ["x", "y", "z"]);
    assert!(adapter.series_by_label("S").is_none());
    assert_eq!(
        adapter.series_by_label("T").expect("T").data,
        vec![7.0, 8.0, 9.0]
    );
    let order: Vec<&str> = adapter.series().map(|s| s.label.as_str()).collect();
    assert_eq!(order, vec!["T", "U"]);
}

#[test]
fn update_reapplies_fixed_border_color() {
    let mut adapter = chart();
    let green = Color::from_hex("#00ff00").expect("valid color");
    adapter
        .update(
            ["a"],
            vec![Series::new("S", vec![5.0]).with_border_color(green)],
        )
        .expect("replace");

    assert_eq!(
        adapter.series_by_label("S").expect("S").border_color,
        DEFAULT_BORDER_COLOR
    );
}

#[test]
fn update_twice_matches_single_update() {
    let labels = ["m", "n"];
    let series = vec![Series::new("S", vec![4.0, 5.0])];

    let mut once = chart();
    once.update(labels, series.clone()).expect("first");

    let mut twice = chart();
    twice.update(labels, series.clone()).expect("first");
    twice.update(labels, series).expect("second");

    assert_eq!(once.state(), twice.state());
}

#[test]
fn update_does_not_redraw_until_requested() {
    let mut adapter = chart();
    adapter
        .update(["c"], vec![Series::new("S", vec![3.0])])
        .expect("replace");
    assert_eq!(adapter.render_count(), 1);
    assert_eq!(adapter.renderer().frames_rendered, 1);

    adapter.redraw().expect("redraw");
    assert_eq!(adapter.render_count(), 2);
    assert_eq!(adapter.renderer().last_text_count, 1);
}

#[test]
fn rejected_update_leaves_state_untouched() {
    let mut adapter = chart();
    let before = adapter.state().clone();

    let err = adapter
        .update(["a", "b", "c"], vec![Series::new("S", vec![1.0, 2.0])])
        .expect_err("length mismatch");
    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            data_len: 2,
            labels_len: 3,
            ..
        }
    ));
    assert_eq!(adapter.state(), &before);
}
