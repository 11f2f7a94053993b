mod common;

use gridstate_lib::layout::{DragEnd, DragKind, DragOutcome};

use common::engine;

#[test]
fn test_resize_drag_applies_live() {
    let mut engine = engine();
    engine.begin_resize("name", 100);
    engine.update_drag(160);
    assert_eq!(engine.column_width("name"), 210);
    engine.update_drag(130);
    assert_eq!(engine.column_width("name"), 180);

    assert_eq!(
        engine.end_drag(DragEnd::Released),
        Some(DragOutcome::Resized {
            column_id: "name".into(),
            width: 180
        })
    );
    assert!(!engine.is_dragging());
}

#[test]
fn test_resize_drag_respects_minimum() {
    let mut engine = engine();
    engine.begin_resize("owner", 500);
    engine.update_drag(0);
    assert_eq!(engine.column_width("owner"), 80);
}

#[test]
fn test_reorder_drag_commits_on_release() {
    let mut engine = engine();
    engine.begin_reorder("name", 10);
    // name 0, owner 150, value 300, probability 450, closeDate 600
    engine.update_drag(700);
    assert_eq!(
        engine.end_drag(DragEnd::Released),
        Some(DragOutcome::Reordered {
            column_id: "name".into(),
            target: "closeDate".into()
        })
    );
    assert_eq!(
        engine.layout().order,
        ["owner", "value", "probability", "closeDate", "name"]
    );
}

#[test]
fn test_reorder_drag_cancelled_when_pointer_lost() {
    let mut engine = engine();
    let before = engine.layout().order.clone();
    engine.begin_reorder("value", 320);
    engine.update_drag(20);
    assert_eq!(engine.end_drag(DragEnd::PointerLost), Some(DragOutcome::Cancelled));
    assert_eq!(engine.layout().order, before);
}

#[test]
fn test_reorder_onto_itself_is_cancelled() {
    let mut engine = engine();
    engine.begin_reorder("value", 320);
    engine.update_drag(330);
    assert_eq!(engine.end_drag(DragEnd::Released), Some(DragOutcome::Cancelled));
}

#[test]
fn test_end_without_session_is_noop() {
    let mut engine = engine();
    assert_eq!(engine.end_drag(DragEnd::Released), None);
    engine.update_drag(50);
    assert!(!engine.is_dragging());
}

#[test]
fn test_new_drag_replaces_active_one() {
    let mut engine = engine();
    engine.begin_reorder("name", 0);
    engine.update_drag(400);
    engine.begin_resize("value", 450);

    let session = engine.drag().unwrap();
    assert!(matches!(session.kind(), DragKind::Resize { .. }));
    assert_eq!(engine.layout().order[0], "name");
}
