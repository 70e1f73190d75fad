use vibecanvas_designer::document::CanvasDocument;
use vibecanvas_designer::model::{
    DesignEllipse, DesignGroup, DesignPolyline, DesignRectangle, DesignText, DesignerShape,
    DrawingObject, Point, Shape, ShapeId,
};
use vibecanvas_designer::transform::TransformResult;

fn rect(x: f64, y: f64, w: f64, h: f64) -> DrawingObject {
    DrawingObject::new(
        Shape::Rectangle(DesignRectangle::new(x, y, w, h)),
        "#000000",
        2.0,
    )
}

fn ids(doc: &CanvasDocument) -> Vec<ShapeId> {
    doc.shapes.iter().map(|s| s.id.clone()).collect()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_group_computes_frame_and_local_children() {
    let mut doc = CanvasDocument::default();
    doc.push(rect(0.0, 0.0, 10.0, 10.0));
    doc.push(rect(20.0, 20.0, 10.0, 10.0));
    let members = ids(&doc);

    let group_id = doc.group(&members).unwrap();
    assert_eq!(doc.len(), 1);
    let group = doc.get(&group_id).unwrap();
    match &group.shape {
        Shape::Group(g) => {
            assert_eq!((g.x, g.y, g.width, g.height), (0.0, 0.0, 30.0, 30.0));
            let local: Vec<Point> = g.children.iter().map(|c| c.position()).collect();
            assert_eq!(local, vec![Point::new(0.0, 0.0), Point::new(20.0, 20.0)]);
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn test_group_then_ungroup_restores_positions() {
    let mut doc = CanvasDocument::default();
    doc.push(rect(15.0, 25.0, 10.0, 10.0));
    doc.push(DrawingObject::new(
        Shape::Ellipse(DesignEllipse::new(80.0, 40.0, 10.0, 5.0)),
        "#000000",
        2.0,
    ));
    doc.push(DrawingObject::new(
        Shape::Text(DesignText::new("hi", 50.0, 90.0, 16.0, "Arial")),
        "#000000",
        2.0,
    ));
    let before: Vec<Point> = doc.shapes.iter().map(|s| s.position()).collect();
    let old_ids = ids(&doc);

    let group_id = doc.group(&old_ids).unwrap();
    let new_ids = doc.ungroup(&group_id).unwrap();

    let after: Vec<Point> = doc.shapes.iter().map(|s| s.position()).collect();
    assert_eq!(after.len(), before.len());
    for (a, b) in after.iter().zip(&before) {
        assert_close(a.x, b.x);
        assert_close(a.y, b.y);
    }
    assert!(new_ids.iter().all(|id| !old_ids.contains(id)));
}

#[test]
fn test_ungroup_rejects_plain_shape() {
    let mut doc = CanvasDocument::default();
    doc.push(rect(0.0, 0.0, 1.0, 1.0));
    let id = doc.shapes[0].id.clone();
    assert!(doc.ungroup(&id).is_none());
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_bring_forward_then_noop_at_top() {
    let mut doc = CanvasDocument::default();
    for i in 0..3 {
        doc.push(rect(i as f64, 0.0, 1.0, 1.0));
    }
    let original = ids(&doc);

    assert!(doc.bring_forward(&original[1]));
    assert_eq!(
        ids(&doc),
        vec![original[0].clone(), original[2].clone(), original[1].clone()]
    );
    assert!(!doc.bring_forward(&original[1]));
    assert_eq!(
        ids(&doc),
        vec![original[0].clone(), original[2].clone(), original[1].clone()]
    );
}

#[test]
fn test_z_order_idempotent_at_boundaries() {
    let mut doc = CanvasDocument::default();
    for i in 0..4 {
        doc.push(rect(i as f64, 0.0, 1.0, 1.0));
    }
    let original = ids(&doc);
    assert!(!doc.send_to_back(&original[0]));
    assert!(!doc.bring_to_front(&original[3]));
    assert_eq!(ids(&doc), original);
}

#[test]
fn test_group_transform_scales_children() {
    let mut group = DrawingObject::new(
        Shape::Group(DesignGroup::new(
            10.0,
            10.0,
            30.0,
            30.0,
            vec![rect(0.0, 0.0, 10.0, 10.0), rect(20.0, 20.0, 10.0, 10.0)],
        )),
        "#000000",
        2.0,
    );
    assert!(group.apply_transform(&TransformResult::new(12.0, 14.0, 2.0, 0.5, 0.0)));
    match &group.shape {
        Shape::Group(g) => {
            assert_eq!((g.x, g.y, g.width, g.height), (12.0, 14.0, 60.0, 15.0));
            assert_eq!(
                g.children[1].shape,
                Shape::Rectangle(DesignRectangle::new(40.0, 10.0, 20.0, 5.0))
            );
        }
        other => panic!("expected group, got {:?}", other),
    }
}

fn transformed_then_ungrouped(result: TransformResult) -> (CanvasDocument, (f64, f64, f64, f64)) {
    let mut doc = CanvasDocument::default();
    let group = DrawingObject::new(
        Shape::Group(DesignGroup::new(
            100.0,
            100.0,
            100.0,
            70.0,
            vec![rect(0.0, 0.0, 20.0, 20.0), rect(80.0, 50.0, 20.0, 20.0)],
        )),
        "#000000",
        2.0,
    );
    let id = group.id.clone();
    doc.push(group);
    assert!(doc.get_mut(&id).unwrap().apply_transform(&result));
    let frame = doc.get(&id).unwrap().shape.bounds();
    assert!(doc.ungroup(&id).is_some());
    (doc, frame)
}

#[test]
fn test_mirrored_group_keeps_children_inside_box() {
    let (doc, (x1, y1, x2, y2)) =
        transformed_then_ungrouped(TransformResult::new(200.0, 100.0, -1.0, 1.0, 0.0));
    assert_eq!((x1, y1, x2, y2), (200.0, 100.0, 300.0, 170.0));
    assert_eq!(doc.len(), 2);
    for child in &doc.shapes {
        let (w, h) = child.shape.extent();
        assert!(w > 0.0 && h > 0.0, "negative size {:?}", child.shape);
        let (cx1, cy1, cx2, cy2) = child.shape.bounds();
        assert!(cx1 >= x1 && cy1 >= y1 && cx2 <= x2 && cy2 <= y2, "{:?} outside group", child.shape);
    }
}

#[test]
fn test_shrunk_group_floors_children() {
    let (doc, (x1, y1, x2, y2)) =
        transformed_then_ungrouped(TransformResult::new(100.0, 100.0, 0.01, 0.01, 0.0));
    assert_eq!((x2 - x1, y2 - y1), (5.0, 5.0));
    for child in &doc.shapes {
        let (w, h) = child.shape.extent();
        assert!(w >= 5.0 && h >= 5.0, "below minimum {:?}", child.shape);
        let p = child.position();
        assert!(p.x >= x1 && p.x <= x2 && p.y >= y1 && p.y <= y2, "{:?} outside group", child.shape);
    }
}

#[test]
fn test_transform_floors_rectangle_size() {
    let mut obj = rect(0.0, 0.0, 100.0, 100.0);
    obj.apply_transform(&TransformResult::new(0.0, 0.0, 0.01, 0.01, 0.0));
    assert_eq!(obj.shape.extent(), (5.0, 5.0));
}

#[test]
fn test_polyline_drag_moves_offset_only() {
    let mut line = DrawingObject::new(
        Shape::Polyline(DesignPolyline::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            false,
        )),
        "#000000",
        2.0,
    );
    line.apply_drag(&vibecanvas_designer::DragResult::new(5.0, 7.0));
    match &line.shape {
        Shape::Polyline(p) => {
            assert_eq!(p.points[1], Point::new(10.0, 10.0));
            let abs: Vec<Point> = p.absolute_points().collect();
            assert_eq!(abs[1], Point::new(15.0, 17.0));
        }
        other => panic!("expected polyline, got {:?}", other),
    }
}
