use vibecanvas_designer::canvas::{PointerEvent, Tool};
use vibecanvas_designer::designer_state::DesignerState;
use vibecanvas_designer::model::{DesignRectangle, Point, Shape, ShapeProperty};
use vibecanvas_designer::transform::TransformResult;

fn draw_rect(state: &mut DesignerState, x: f64, y: f64, w: f64, h: f64) {
    state.set_tool(Tool::Rectangle);
    state.pointer_down(&PointerEvent::at(x, y));
    state.pointer_move(Point::new(x + w / 2.0, y + h / 2.0));
    state.pointer_move(Point::new(x + w, y + h));
    state.pointer_up();
    state.set_tool(Tool::Selection);
}

#[test]
fn test_draw_rectangle_then_undo_redo() {
    let mut state = DesignerState::new();
    draw_rect(&mut state, 10.0, 10.0, 100.0, 50.0);

    assert_eq!(state.canvas.shape_count(), 1);
    let expected = Shape::Rectangle(DesignRectangle::new(10.0, 10.0, 100.0, 50.0));
    assert_eq!(state.canvas.shapes()[0].shape, expected);
    assert!(state.can_undo());
    assert!(!state.can_redo());

    let drawn = state.canvas.shapes().to_vec();
    assert!(state.undo());
    assert!(state.canvas.shapes().is_empty());
    assert!(state.can_redo());

    assert!(state.redo());
    assert_eq!(state.canvas.shapes(), drawn.as_slice());
}

#[test]
fn test_previews_do_not_commit() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Pencil);
    state.pointer_down(&PointerEvent::at(0.0, 0.0));
    for i in 0..50 {
        state.pointer_move(Point::new(i as f64, (i * 2) as f64));
    }
    assert_eq!(state.history.len(), 1);
    state.pointer_leave();
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_selection_pruned_after_undo() {
    let mut state = DesignerState::new();
    draw_rect(&mut state, 0.0, 0.0, 20.0, 20.0);
    let id = state.canvas.shapes()[0].id.clone();
    state.pointer_down(&PointerEvent::on_shape(5.0, 5.0, id));
    assert_eq!(state.canvas.selected_ids().len(), 1);

    state.undo();
    assert!(state.canvas.selected_ids().is_empty());
}

#[test]
fn test_each_edit_commits_exactly_once() {
    let mut state = DesignerState::new();
    draw_rect(&mut state, 0.0, 0.0, 10.0, 10.0);
    draw_rect(&mut state, 20.0, 20.0, 10.0, 10.0);
    assert_eq!(state.history.len(), 3);

    let ids: Vec<_> = state.canvas.shapes().iter().map(|s| s.id.clone()).collect();
    state.canvas.selection_manager.set(ids);
    assert!(state.group_selected());
    assert_eq!(state.history.len(), 4);
    assert!(state.ungroup_selected());
    assert_eq!(state.history.len(), 5);

    // Nothing to do with a multi-selection.
    assert!(!state.bring_forward());
    assert_eq!(state.history.len(), 5);

    let id = state.canvas.shapes()[0].id.clone();
    state.canvas.selection_manager.select_only(id.clone());
    assert!(state.bring_to_front());
    assert!(state.set_selected_property(ShapeProperty::Stroke("#00ff00".into())));
    assert!(!state.set_selected_property(ShapeProperty::RadiusX(4.0)));
    assert!(state.transform_end(&id, &TransformResult::new(0.0, 0.0, 2.0, 2.0, 30.0)));
    assert!(state.delete_selected());
    assert_eq!(state.history.len(), 9);
    assert_eq!(state.canvas.shape_count(), 1);
}

#[test]
fn test_text_commit_records_history() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Text);
    assert!(state.pointer_down(&PointerEvent::at(30.0, 30.0)));
    let id = state.canvas.shapes()[0].id.clone();
    state.set_tool(Tool::Selection);

    assert!(state.double_click(&PointerEvent::on_shape(31.0, 31.0, id.clone())));
    state.update_text_buffer("Release notes");
    let len = state.history.len();
    assert!(state.commit_text());
    assert_eq!(state.history.len(), len + 1);

    // Unchanged text is not a new history entry.
    assert!(state.double_click(&PointerEvent::on_shape(31.0, 31.0, id)));
    assert!(!state.commit_text());
    assert_eq!(state.history.len(), len + 1);
}
