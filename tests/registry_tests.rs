use metric_chart::core::Series;
use metric_chart::registry::{
    self, BUILTIN_CAPABILITIES, CapabilityKind, ensure_registered, is_registered,
};
use metric_chart::render::NullRenderer;
use metric_chart::ChartAdapter;

#[test]
fn registration_runs_once_per_process() {
    let _ = ensure_registered();
    assert!(!ensure_registered());
    assert!(!ensure_registered());
    assert_eq!(registry::registered_capabilities(), BUILTIN_CAPABILITIES.as_slice());
}

#[test]
fn adapter_construction_registers_line_capabilities() {
    let _adapter = ChartAdapter::new(
        NullRenderer::default(),
        ["a"],
        vec![Series::new("S", vec![1.0])],
    )
    .expect("adapter init");

    assert!(is_registered(CapabilityKind::Controller, "line"));
    assert!(is_registered(CapabilityKind::Scale, "category"));
    assert!(is_registered(CapabilityKind::Plugin, "legend"));
    assert!(!is_registered(CapabilityKind::Controller, "bar"));
}

#[test]
fn concurrent_first_use_registers_exactly_once() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(ensure_registered))
        .collect();
    let performed = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread joins"))
        .filter(|performed| *performed)
        .count();

    assert!(performed <= 1);
    assert_eq!(registry::registered_capabilities().len(), BUILTIN_CAPABILITIES.len());
}
