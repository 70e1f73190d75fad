use vibecanvas_designer::canvas::{PointerEvent, Tool};
use vibecanvas_designer::designer_state::DesignerState;
use vibecanvas_designer::model::{Point, Shape, StageSize};
use vibecanvas_designer::serialization::CanvasFile;

const LEGACY_FILE: &str = r##"{
  "version": "1.0",
  "stageSize": { "width": 1024, "height": 768 },
  "timestamp": "2024-03-01T12:00:00.000Z",
  "shapes": [
    { "x": 10, "y": 10, "width": 100, "height": 50, "stroke": "#df4b26",
      "strokeWidth": 5, "rotation": 0, "id": 1, "tool": "rectangle" },
    { "x": 200, "y": 200, "radiusX": 30, "radiusY": 20, "stroke": "#df4b26",
      "strokeWidth": 5, "fill": "#ffff00", "rotation": 0, "id": 2, "tool": "ellipse" },
    { "points": [0, 0, 40, 40], "stroke": "#000000", "strokeWidth": 2,
      "rotation": 0, "id": 3, "tool": "line" },
    { "x": 5, "y": 300, "text": "Double-click to edit", "fontSize": 16,
      "fontFamily": "Arial", "fill": "#000000", "rotation": 0, "id": 4, "tool": "text" },
    { "x": 0, "y": 0, "width": 20, "height": 20, "rotation": 0, "id": 5, "tool": "image",
      "src": "data:image/png;base64,AAAA" },
    { "id": 6, "tool": "group", "x": 400, "y": 400, "width": 30, "height": 30,
      "children": [
        { "x": 0, "y": 0, "width": 10, "height": 10, "id": 7, "tool": "rectangle" },
        { "x": 20, "y": 20, "width": 10, "height": 10, "id": 8, "tool": "rectangle" }
      ] }
  ]
}"##;

fn populated_state() -> DesignerState {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Ellipse);
    state.pointer_down(&PointerEvent::at(100.0, 100.0));
    state.pointer_move(Point::new(130.0, 120.0));
    state.pointer_up();
    state.set_tool(Tool::Text);
    state.pointer_down(&PointerEvent::at(10.0, 10.0));
    state
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.json");

    let mut state = populated_state();
    state.save_to_file(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["stageSize"]["width"], 800.0);
    assert_eq!(value["shapes"][1]["kind"], "textLabel");
    assert!(value["timestamp"].is_string());

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.canvas.shapes(), state.canvas.shapes());
    assert!(!loaded.can_undo());
    assert!(loaded.canvas.selected_ids().is_empty());
}

#[test]
fn test_invalid_file_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"version":"1.0","stageSize":{"width":800,"height":600}}"#).unwrap();

    let mut state = populated_state();
    let shapes = state.canvas.shapes().to_vec();
    let history_len = state.history.len();

    let err = state.load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("shapes"));
    assert_eq!(state.canvas.shapes(), shapes.as_slice());
    assert_eq!(state.history.len(), history_len);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = DesignerState::new();
    assert!(state.load_from_file(dir.path().join("nope.json")).is_err());
}

#[test]
fn test_legacy_file_converts() {
    let file = CanvasFile::from_json(LEGACY_FILE).unwrap();
    assert_eq!(file.stage_size, Some(StageSize::new(1024.0, 768.0)));
    assert_eq!(file.shapes.len(), 6);

    let kinds: Vec<String> = file.shapes.iter().map(|s| s.name()).collect();
    assert_eq!(kinds, vec!["Rectangle", "Ellipse", "Polyline", "Text", "Image", "Group"]);

    assert_eq!(file.shapes[0].id.as_str(), "1");
    assert_eq!(file.shapes[1].fill.as_deref(), Some("#ffff00"));
    match &file.shapes[2].shape {
        Shape::Polyline(line) => {
            assert!(!line.smoothed);
            assert_eq!(line.points, vec![Point::new(0.0, 0.0), Point::new(40.0, 40.0)]);
        }
        other => panic!("expected polyline, got {:?}", other),
    }
    match &file.shapes[4].shape {
        Shape::Image(img) => assert_eq!(img.source_ref, "data:image/png;base64,AAAA"),
        other => panic!("expected image, got {:?}", other),
    }
    match &file.shapes[5].shape {
        Shape::Group(g) => {
            assert_eq!(g.children.len(), 2);
            assert_eq!(g.children[1].position(), Point::new(20.0, 20.0));
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_stage_rejected() {
    let json = r#"{"stageSize":{"width":10,"height":600},"shapes":[]}"#;
    assert!(CanvasFile::from_json(json).is_err());
}
