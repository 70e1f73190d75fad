use vibecanvas_designer::canvas::{InteractionMode, PointerEvent, Tool};
use vibecanvas_designer::designer_state::DesignerState;
use vibecanvas_designer::input::{KeyEvent, KeyResponse};
use vibecanvas_designer::model::{Point, Shape};

fn state_with_rect() -> DesignerState {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Rectangle);
    state.pointer_down(&PointerEvent::at(0.0, 0.0));
    state.pointer_move(Point::new(30.0, 30.0));
    state.pointer_up();
    state.set_tool(Tool::Selection);
    state
}

#[test]
fn test_delete_key_removes_selection() {
    let mut state = state_with_rect();
    let id = state.canvas.shapes()[0].id.clone();
    state.pointer_down(&PointerEvent::on_shape(1.0, 1.0, id));

    assert_eq!(state.handle_key(&KeyEvent::new("Delete")), KeyResponse::Handled);
    assert_eq!(state.canvas.shape_count(), 0);

    assert_eq!(state.handle_key(&KeyEvent::ctrl("z")), KeyResponse::Handled);
    assert_eq!(state.canvas.shape_count(), 1);
    assert_eq!(state.handle_key(&KeyEvent::ctrl_shift("z")), KeyResponse::Handled);
    assert_eq!(state.canvas.shape_count(), 0);
}

#[test]
fn test_editing_text_swallows_global_bindings() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Text);
    state.pointer_down(&PointerEvent::at(10.0, 10.0));
    let id = state.canvas.shapes()[0].id.clone();
    state.double_click(&PointerEvent::on_shape(10.0, 10.0, id));
    assert_eq!(state.canvas.mode(), InteractionMode::EditingText);

    assert_eq!(state.handle_key(&KeyEvent::new("Backspace")), KeyResponse::Unhandled);
    assert_eq!(state.handle_key(&KeyEvent::ctrl("z")), KeyResponse::Unhandled);
    assert_eq!(state.canvas.shape_count(), 1);

    state.update_text_buffer("Title");
    assert_eq!(state.handle_key(&KeyEvent::new("Enter")), KeyResponse::Handled);
    assert_eq!(state.canvas.mode(), InteractionMode::Idle);
    match &state.canvas.shapes()[0].shape {
        Shape::Text(t) => assert_eq!(t.text, "Title"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_escape_discards_edit() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Text);
    state.pointer_down(&PointerEvent::at(10.0, 10.0));
    let id = state.canvas.shapes()[0].id.clone();
    state.double_click(&PointerEvent::on_shape(10.0, 10.0, id));
    state.update_text_buffer("never saved");
    let len = state.history.len();

    assert_eq!(state.handle_key(&KeyEvent::new("Escape")), KeyResponse::Handled);
    assert_eq!(state.history.len(), len);
    match &state.canvas.shapes()[0].shape {
        Shape::Text(t) => assert_eq!(t.text, "Double-click to edit"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_group_shortcuts() {
    let mut state = state_with_rect();
    state.set_tool(Tool::Rectangle);
    state.pointer_down(&PointerEvent::at(50.0, 50.0));
    state.pointer_move(Point::new(60.0, 60.0));
    state.pointer_up();
    state.set_tool(Tool::Selection);

    let ids: Vec<_> = state.canvas.shapes().iter().map(|s| s.id.clone()).collect();
    state.canvas.selection_manager.set(ids);
    state.handle_key(&KeyEvent::ctrl("g"));
    assert_eq!(state.canvas.shape_count(), 1);
    state.handle_key(&KeyEvent::ctrl_shift("G"));
    assert_eq!(state.canvas.shape_count(), 2);
}
