use std::cell::RefCell;
use std::rc::Rc;

use metric_chart::core::Series;
use metric_chart::extensions::{ChartPlugin, PluginContext, PluginEvent};
use metric_chart::render::NullRenderer;
use metric_chart::{ChartAdapter, ChartError};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn chart() -> ChartAdapter<NullRenderer> {
    ChartAdapter::new(
        NullRenderer::default(),
        ["a", "b"],
        vec![Series::new("S", vec![1.0, 2.0])],
    )
    .expect("adapter init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut adapter = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    adapter
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    adapter
        .update_incremental(["c"], vec![Series::new("S", vec![3.0])])
        .expect("append");
    adapter
        .update(["x"], vec![Series::new("S", vec![9.0])])
        .expect("replace");
    adapter.redraw().expect("redraw");

    let events = events.borrow();
    let kinds: Vec<PluginEvent> = events.iter().map(|(event, _)| *event).collect();
    assert_eq!(
        kinds,
        vec![
            PluginEvent::DataAppended {
                labels_appended: 1,
                points_appended: 1,
            },
            PluginEvent::Rendered { render_count: 2 },
            PluginEvent::DataReplaced {
                labels_len: 1,
                series_len: 1,
            },
            PluginEvent::Rendered { render_count: 3 },
        ]
    );

    let (_, append_context) = events[0];
    assert_eq!(append_context.labels_len, 3);
    assert!(!append_context.legend_displayed);
}

#[test]
fn rejected_updates_emit_nothing() {
    let mut adapter = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    adapter
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    assert!(
        adapter
            .update_incremental(["c"], vec![Series::new("missing", vec![3.0])])
            .is_err()
    );
    assert!(adapter.update(["c"], Vec::new()).is_ok());
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn duplicate_plugin_ids_are_rejected() {
    let mut adapter = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    adapter
        .register_plugin(Box::new(RecordingPlugin::new("dupe", events.clone())))
        .expect("first plugin");
    let err = adapter
        .register_plugin(Box::new(RecordingPlugin::new("dupe", events.clone())))
        .expect_err("duplicate must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = adapter
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty id must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn unregister_plugin_stops_dispatch() {
    let mut adapter = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    adapter
        .register_plugin(Box::new(RecordingPlugin::new("to-remove", events.clone())))
        .expect("register");
    assert_eq!(adapter.plugin_count(), 1);
    assert!(adapter.has_plugin("to-remove"));

    assert!(adapter.unregister_plugin("to-remove"));
    assert!(!adapter.unregister_plugin("to-remove"));
    adapter.redraw().expect("redraw");

    assert_eq!(adapter.plugin_count(), 0);
    assert!(events.borrow().is_empty());
}
