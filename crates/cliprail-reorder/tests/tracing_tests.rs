#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Tracing integration tests.
//!
//! These verify that engine transitions and ignored calls emit events:
//!   cargo test -p cliprail-reorder --features tracing --test tracing_tests

use std::sync::{Arc, Mutex};

use cliprail_core::event::PointerEvent;
use cliprail_reorder::{ItemId, PointerDriver, ReorderEngine, StackItem, StackLayout};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured event with its level, message, and fields.
#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: Vec<(String, String)>,
    /// Name of the span the event was emitted in, if any.
    span: Option<String>,
}

/// A span opened during capture, with the fields it was created with.
#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: Vec<(String, String)>,
}

/// A tracing Layer that records every event and new span.
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

/// Visitor that extracts event fields.
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: Vec::new(),
        };
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.fields,
        });
    }

    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut visitor);
        let span = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
            span,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    capture_with_spans(f).0
}

fn capture_with_spans<F: FnOnce()>(f: F) -> (Vec<CapturedEvent>, Vec<CapturedSpan>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
        spans: spans.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured_events = events.lock().unwrap().clone();
    let captured_spans = spans.lock().unwrap().clone();
    (captured_events, captured_spans)
}

fn layout() -> StackLayout {
    StackLayout::new(vec![
        StackItem::new(ItemId(1), "background", 40),
        StackItem::new(ItemId(2), "background", 40),
        StackItem::new(ItemId(3), "background", 40),
    ])
    .unwrap()
}

fn field<'a>(event: &'a CapturedEvent, name: &str) -> Option<&'a str> {
    event
        .fields
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn session_lifecycle_is_logged() {
    let events = capture(|| {
        let mut layout = layout();
        let mut engine = ReorderEngine::default();
        engine.begin_drag(&mut layout, Some(ItemId(3)));
        engine.update_drag(&mut layout, 10);
        engine.end_drag(&mut layout);
    });

    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert!(messages.contains(&"drag session started"), "{messages:?}");
    assert!(messages.contains(&"drag move: reordered"), "{messages:?}");
    assert!(messages.contains(&"drag session ended"), "{messages:?}");

    let moved = events
        .iter()
        .find(|e| e.message == "drag move: reordered")
        .unwrap();
    assert_eq!(moved.level, tracing::Level::DEBUG);
    assert_eq!(field(moved, "from"), Some("2"));
    assert_eq!(field(moved, "to"), Some("0"));
    assert_eq!(field(moved, "direction"), Some("still"));
}

#[test]
fn rejected_begin_is_logged() {
    let events = capture(|| {
        let mut layout = layout();
        let mut engine = ReorderEngine::default();
        engine.begin_drag(&mut layout, Some(ItemId(42)));
        engine.begin_drag(&mut layout, None);
    });

    assert!(
        events
            .iter()
            .any(|e| e.message == "begin_drag ignored: item not in container")
    );
    assert!(
        events
            .iter()
            .any(|e| e.message == "begin_drag ignored: no reorderable target"
                && e.level == tracing::Level::TRACE)
    );
}

#[test]
fn idle_calls_log_at_trace() {
    let events = capture(|| {
        let mut layout = layout();
        let mut engine = ReorderEngine::default();
        engine.update_drag(&mut layout, 5);
        engine.end_drag(&mut layout);
    });

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.level == tracing::Level::TRACE));
}

#[test]
fn driver_events_run_inside_span() {
    let (events, spans) = capture_with_spans(|| {
        let mut layout = layout();
        let mut driver = PointerDriver::default();
        driver.handle(&mut layout, PointerEvent::down(5, 100));
        driver.handle(&mut layout, PointerEvent::moved(5, 10));
        driver.handle(&mut layout, PointerEvent::up(5, 10));
    });

    let kinds: Vec<&str> = spans
        .iter()
        .filter(|s| s.name == "pointer_event")
        .filter_map(|s| {
            s.fields
                .iter()
                .find(|(k, _)| k == "kind")
                .map(|(_, v)| v.as_str())
        })
        .collect();
    assert_eq!(kinds, vec!["down", "move", "up"]);

    for message in ["drag session started", "drag move: reordered", "drag session ended"] {
        let event = events
            .iter()
            .find(|e| e.message == message)
            .unwrap_or_else(|| panic!("missing {message:?} in {events:?}"));
        assert_eq!(event.span.as_deref(), Some("pointer_event"), "{message}");
    }
}

#[test]
fn direct_engine_calls_have_no_driver_span() {
    let events = capture(|| {
        let mut layout = layout();
        let mut engine = ReorderEngine::default();
        engine.begin_drag(&mut layout, Some(ItemId(1)));
        engine.end_drag(&mut layout);
    });

    assert!(!events.is_empty());
    assert!(events.iter().all(|e| e.span.is_none()));
}
