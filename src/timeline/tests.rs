use super::*;
use assert_matches::assert_matches;
use tracematch::{Kind, generate_trace};

#[test]
fn test_initial_position() {
    let trace = generate_trace("abc", "abc");
    let timeline = Timeline::new(&trace);
    assert_eq!(timeline.position(), 0);
    assert_eq!(timeline.len(), 9);
    assert!(!timeline.is_empty());
    assert!(!timeline.at_end());
    assert_eq!(timeline.current().kind, Kind::Start);
    assert_eq!(timeline.progress(), (0, 8));
}

#[test]
fn test_forward_and_backward() {
    let trace = generate_trace("x", "");
    let mut timeline = Timeline::new(&trace);

    assert_eq!(timeline.backward(), None);
    assert_eq!(timeline.position(), 0);

    assert_eq!(timeline.forward().map(|e| e.id), Some(1));
    assert_eq!(timeline.forward().map(|e| e.kind), Some(Kind::Fail));
    assert_eq!(timeline.forward().map(|e| e.kind), Some(Kind::Finish));
    assert!(timeline.at_end());
    assert_eq!(timeline.forward(), None);
    assert_eq!(timeline.position(), 3);

    assert_eq!(timeline.backward().map(|e| e.id), Some(2));
    assert_eq!(timeline.position(), 2);
}

#[test]
fn test_seek() {
    let trace = generate_trace("a+b", "aaac");
    let mut timeline = Timeline::new(&trace);

    let event = timeline.seek(5).unwrap();
    assert_eq!(event.kind, Kind::Backtrack);
    assert_eq!(timeline.position(), 5);

    let last = trace.len() - 1;
    assert_eq!(timeline.seek(last).unwrap().kind, Kind::Finish);
    assert!(timeline.at_end());

    let len = trace.len();
    assert_matches!(timeline.seek(len), Err(Error::StepOutOfRange { step, len: l }) if step == len && l == len);
    assert_eq!(timeline.position(), last);
}

#[test]
fn test_rewind_and_to_end() {
    let trace = generate_trace("a*a*b", "aaaa");
    let mut timeline = Timeline::new(&trace);

    assert_eq!(timeline.to_end().id, trace.len() - 1);
    assert_eq!(timeline.progress(), (trace.len() - 1, trace.len() - 1));
    assert_eq!(timeline.rewind().id, 0);
    assert_eq!(timeline.position(), 0);
}

#[test]
fn test_single_event_trace() {
    let trace = tracematch::Engine::new(tracematch::Options { max_steps: 0 }).run("a", "a");
    let mut timeline = Timeline::new(&trace);
    assert!(timeline.at_end());
    assert_eq!(timeline.forward(), None);
    assert_eq!(timeline.backward(), None);
    assert_eq!(timeline.progress(), (0, 0));
    assert!(std::ptr::eq(timeline.trace(), &trace));
}
