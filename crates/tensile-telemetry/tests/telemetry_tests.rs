//! Integration tests for tensile-telemetry.

use tensile_telemetry::bus::EventBus;
use tensile_telemetry::events::{EventKind, SimulationEvent};
use tensile_telemetry::sinks::{EventSink, TracingSink, VecSink};

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(SimulationEvent::new(0, EventKind::TimestepBegin { sim_time: 0.0 }));
    bus.emit(SimulationEvent::new(0, EventKind::TimestepEnd { wall_time: 0.001 }));
    assert!(sink.events().is_empty()); // Nothing delivered before flush

    bus.flush();
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::TimestepBegin { .. }));
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(SimulationEvent::new(0, EventKind::TimestepBegin { sim_time: 0.0 }));
    bus.flush();
    assert!(sink.events().is_empty());
}

#[test]
fn multiple_sinks_each_receive() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(SimulationEvent::new(3, EventKind::DegenerateSprings { count: 2 }));
    bus.finish();
    assert_eq!(a.events().len(), 1);
    assert_eq!(b.events(), a.events());
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::new().name(), "tracing_sink");
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(5, EventKind::Energy { kinetic: 1.25 });
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn custom_event() {
    let event = SimulationEvent::new(
        10,
        EventKind::Custom {
            label: "note".into(),
            payload: "{\"max_displacement\":0.2}".into(),
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("max_displacement"));
}
