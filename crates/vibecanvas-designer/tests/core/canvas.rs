use vibecanvas_designer::canvas::{Canvas, InteractionMode, PointerEvent, Tool};
use vibecanvas_designer::model::{
    DesignPolyline, DesignRectangle, DrawingObject, Point, Shape, ShapeId,
};

fn canvas_with_rects(n: usize) -> (Canvas, Vec<ShapeId>) {
    let mut canvas = Canvas::new();
    let mut ids = Vec::new();
    for i in 0..n {
        let obj = DrawingObject::new(
            Shape::Rectangle(DesignRectangle::new(i as f64 * 50.0, 0.0, 40.0, 40.0)),
            "#000000",
            2.0,
        );
        ids.push(obj.id.clone());
        canvas.document.push(obj);
    }
    (canvas, ids)
}

#[test]
fn test_click_replaces_and_shift_click_toggles() {
    let (mut canvas, ids) = canvas_with_rects(3);
    let _ = canvas.pointer_down(&PointerEvent::on_shape(5.0, 5.0, ids[0].clone()));
    let _ = canvas.pointer_down(&PointerEvent::on_shape(55.0, 5.0, ids[1].clone()));
    assert_eq!(canvas.selected_ids(), &ids[1..2]);

    let _ = canvas.pointer_down(&PointerEvent::on_shape(105.0, 5.0, ids[2].clone()).with_shift());
    assert_eq!(canvas.selected_ids().len(), 2);
    assert!(canvas.selected_shape().is_none());

    let _ = canvas.pointer_down(&PointerEvent::on_shape(105.0, 5.0, ids[2].clone()).with_shift());
    assert_eq!(canvas.selected_ids(), &ids[1..2]);
}

#[test]
fn test_background_click_clears_unless_handle_or_shift() {
    let (mut canvas, ids) = canvas_with_rects(1);
    canvas.selection_manager.select_only(ids[0].clone());

    let _ = canvas.pointer_down(&PointerEvent::on_handle(45.0, 45.0));
    assert_eq!(canvas.selected_ids().len(), 1);
    let _ = canvas.pointer_down(&PointerEvent::on_background(400.0, 400.0).with_shift());
    assert_eq!(canvas.selected_ids().len(), 1);
    let _ = canvas.pointer_down(&PointerEvent::on_background(400.0, 400.0));
    assert!(canvas.selected_ids().is_empty());
}

#[test]
fn test_hit_test_fallback_finds_topmost() {
    let (mut canvas, ids) = canvas_with_rects(2);
    let _ = canvas.pointer_down(&PointerEvent::at(60.0, 10.0));
    assert_eq!(canvas.selected_ids(), &ids[1..2]);
    let _ = canvas.pointer_down(&PointerEvent::at(500.0, 500.0));
    assert!(canvas.selected_ids().is_empty());
}

#[test]
fn test_eraser_removes_and_deselects() {
    let (mut canvas, ids) = canvas_with_rects(2);
    canvas.selection_manager.select_only(ids[0].clone());
    canvas.set_tool(Tool::Eraser);
    assert!(canvas
        .pointer_down(&PointerEvent::on_shape(5.0, 5.0, ids[0].clone()))
        .is_some());
    assert_eq!(canvas.shape_count(), 1);
    assert!(canvas.selected_ids().is_empty());
    assert!(canvas.pointer_down(&PointerEvent::on_background(500.0, 5.0)).is_none());
}

#[test]
fn test_fill_only_applies_to_fill_capable_shapes() {
    let (mut canvas, ids) = canvas_with_rects(1);
    let line = DrawingObject::new(
        Shape::Polyline(DesignPolyline::new(
            vec![Point::new(0.0, 100.0), Point::new(50.0, 100.0)],
            false,
        )),
        "#000000",
        2.0,
    );
    let line_id = line.id.clone();
    canvas.document.push(line);

    canvas.set_tool(Tool::Fill);
    canvas.set_stroke_color("#ff0000");
    assert!(canvas
        .pointer_down(&PointerEvent::on_shape(5.0, 5.0, ids[0].clone()))
        .is_some());
    assert_eq!(canvas.shapes()[0].fill.as_deref(), Some("#ff0000"));
    assert!(canvas
        .pointer_down(&PointerEvent::on_shape(10.0, 100.0, line_id))
        .is_none());
    assert!(canvas.shapes()[1].fill.is_none());
}

#[test]
fn test_pointer_ignored_while_editing_text() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Text);
    let _ = canvas.pointer_down(&PointerEvent::at(10.0, 10.0));
    let id = canvas.shapes()[0].id.clone();
    assert!(canvas.double_click(&PointerEvent::on_shape(10.0, 10.0, id)));
    assert_eq!(canvas.mode(), InteractionMode::EditingText);

    assert!(canvas.pointer_down(&PointerEvent::at(200.0, 200.0)).is_none());
    assert_eq!(canvas.shape_count(), 1);
}

#[test]
fn test_leaving_selection_mode_collapses_selection() {
    let (mut canvas, ids) = canvas_with_rects(3);
    canvas.selection_manager.set(ids.clone());
    canvas.set_tool(Tool::Rectangle);
    assert_eq!(canvas.selected_ids(), &ids[2..3]);
}

#[test]
fn test_drawing_clears_selection_and_stays_in_drawing_mode() {
    let (mut canvas, ids) = canvas_with_rects(1);
    canvas.selection_manager.select_only(ids[0].clone());
    canvas.set_tool(Tool::Ellipse);
    assert!(canvas.pointer_down(&PointerEvent::at(300.0, 300.0)).is_none());
    assert_eq!(canvas.mode(), InteractionMode::Drawing);
    assert!(canvas.selected_ids().is_empty());
    assert!(canvas.pointer_down(&PointerEvent::at(310.0, 310.0)).is_none());
    assert_eq!(canvas.shape_count(), 2);
}

#[test]
fn test_negative_drag_normalizes_rectangle() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Rectangle);
    let _ = canvas.pointer_down(&PointerEvent::at(100.0, 100.0));
    canvas.pointer_move(Point::new(40.0, 70.0));
    assert!(canvas.pointer_up().is_some());
    assert_eq!(
        canvas.shapes()[0].shape,
        Shape::Rectangle(DesignRectangle::new(40.0, 70.0, 60.0, 30.0))
    );
}
