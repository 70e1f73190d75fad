use proptest::prelude::*;
use vibecanvas_designer::history::ShapeHistory;
use vibecanvas_designer::model::{DesignRectangle, DrawingObject, Shape};

fn snapshot(n: usize) -> Vec<DrawingObject> {
    (0..n)
        .map(|i| {
            DrawingObject::new(
                Shape::Rectangle(DesignRectangle::new(i as f64, 0.0, 10.0, 10.0)),
                "#000000",
                2.0,
            )
        })
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Commit,
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Commit), Just(Op::Undo), Just(Op::Redo)]
}

#[test]
fn test_commit_after_undo_drops_redo() {
    let mut history = ShapeHistory::default();
    history.commit(snapshot(1));
    history.commit(snapshot(2));
    assert_eq!(history.undo().map(|s| s.len()), Some(1));
    assert!(history.can_redo());

    history.commit(snapshot(5));
    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert_eq!(history.current().len(), 5);
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut history = ShapeHistory::default();
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_reset_keeps_single_snapshot() {
    let mut history = ShapeHistory::default();
    history.commit(snapshot(1));
    history.commit(snapshot(2));
    history.reset(snapshot(3));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

proptest! {
    #[test]
    fn history_flags_track_cursor(ops in proptest::collection::vec(op(), 0..60)) {
        let mut history = ShapeHistory::default();
        let mut committed = 0usize;
        for op in ops {
            match op {
                Op::Commit => {
                    committed += 1;
                    history.commit(snapshot(committed % 4));
                    prop_assert!(!history.can_redo());
                }
                Op::Undo => {
                    let before = history.cursor();
                    let stepped = history.undo().is_some();
                    prop_assert_eq!(stepped, before > 0);
                }
                Op::Redo => {
                    let before = history.cursor();
                    let stepped = history.redo().is_some();
                    prop_assert_eq!(stepped, before + 1 < history.len());
                }
            }
            prop_assert!(history.cursor() < history.len());
            prop_assert_eq!(history.can_undo(), history.cursor() > 0);
            prop_assert_eq!(history.can_redo(), history.cursor() + 1 < history.len());
        }
    }
}
