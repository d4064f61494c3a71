use super::*;

fn event(id: usize, kind: Kind, pattern_pos: usize, text_pos: usize, depth: usize) -> Event {
    Event {
        id,
        kind,
        pattern_pos,
        text_pos,
        depth,
        message: String::new(),
    }
}

#[test]
fn test_outcome_match_span() {
    let trace = Trace::new(
        vec![
            event(0, Kind::Start, 0, 0, 0),
            event(1, Kind::Start, 0, 0, 0),
            event(2, Kind::Fail, 0, 0, 0),
            event(3, Kind::Start, 0, 1, 0),
            event(4, Kind::Start, 0, 1, 0),
            event(5, Kind::Match, 0, 1, 0),
            event(6, Kind::Success, 1, 2, 1),
            event(7, Kind::Finish, 0, 0, 0),
        ],
        false,
    );
    assert_eq!(trace.outcome(), Outcome::Match { start: 1, end: 2 });
    assert!(trace.is_match());
    assert!(!trace.halted());
}

#[test]
fn test_outcome_no_match() {
    let trace = Trace::new(
        vec![
            event(0, Kind::Start, 0, 0, 0),
            event(1, Kind::Start, 0, 0, 0),
            event(2, Kind::Fail, 0, 0, 0),
            event(3, Kind::Finish, 0, 0, 0),
        ],
        false,
    );
    assert_eq!(trace.outcome(), Outcome::NoMatch);
    assert!(!trace.is_match());
}

#[test]
fn test_outcome_halted_wins_over_success() {
    let trace = Trace::new(
        vec![
            event(0, Kind::Start, 0, 0, 0),
            event(1, Kind::Success, 0, 0, 0),
            event(2, Kind::Fail, 0, 0, 0),
        ],
        true,
    );
    assert_eq!(trace.outcome(), Outcome::Halted);
    assert!(!trace.is_match());
}

#[test]
fn test_iteration() {
    let trace = Trace::new(vec![event(0, Kind::Start, 0, 0, 0), event(1, Kind::Finish, 0, 0, 0)], false);
    let ids: Vec<_> = (&trace).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(trace.events().len(), 2);
    assert_eq!(trace.into_events().len(), 2);
}

#[test]
fn test_outcome_serialization() {
    assert_eq!(
        json::to_value(Outcome::Match { start: 1, end: 3 }).unwrap(),
        json::json!({"result": "match", "start": 1, "end": 3})
    );
    assert_eq!(
        json::to_value(Outcome::NoMatch).unwrap(),
        json::json!({"result": "no-match"})
    );
    assert_eq!(
        json::to_value(Outcome::Halted).unwrap(),
        json::json!({"result": "halted"})
    );
}
