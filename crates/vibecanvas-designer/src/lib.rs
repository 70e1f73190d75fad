//! # VibeCanvas Designer
//!
//! This crate provides the editing core of the VibeCanvas drawing canvas:
//! the shape model, the pointer/keyboard interaction state machine, the
//! snapshot undo/redo history and stage resizing.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Shapes**: Rectangles, ellipses, polylines, text labels, images and groups
//! - **Document**: Ordered shape list where sequence position is paint order
//! - **Canvas**: Active tool, selection and interaction state over a document
//!
//! ### Editing
//! - **History/Undo-Redo**: Whole-document snapshots with a linear cursor
//! - **Transforms**: Renderer-reported scale baked into shape sizes
//! - **Resize**: Stage resizing with scale or clear policies
//! - **Input**: Keyboard shortcut dispatch per interaction mode
//!
//! ### Boundary
//! - **Serialization**: Canvas JSON files, including the legacy format
//! - **Bridge**: Async file dialog and clipboard access
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (facade, file metadata)
//!   ├── Canvas
//!   │     ├── CanvasDocument (stage + shapes)
//!   │     ├── SelectionManager
//!   │     └── InteractionState (idle / drawing / editing text)
//!   └── ShapeHistory (snapshots)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vibecanvas_designer::{DesignerState, Point, PointerEvent, Tool};
//!
//! let mut state = DesignerState::new();
//! state.set_tool(Tool::Rectangle);
//! state.pointer_down(&PointerEvent::at(10.0, 10.0));
//! state.pointer_move(Point::new(110.0, 60.0));
//! state.pointer_up();
//!
//! assert_eq!(state.canvas.shape_count(), 1);
//! assert!(state.can_undo());
//! ```

pub mod bridge;
pub mod canvas;
pub mod document;
pub mod history;
pub mod input;
pub mod model;
pub mod resize;
pub mod selection_manager;
pub mod serialization;
pub mod transform;

// Integration modules
pub mod designer_state;

// Re-export all public types from submodules
pub use bridge::{hydrate_images, png_data_url, CanvasBridge, LoadedFile};
pub use canvas::{Canvas, Edit, HitTarget, InteractionMode, InteractionState, PointerEvent, Tool};
pub use document::CanvasDocument;
pub use history::{ShapeHistory, Snapshot};
pub use input::{KeyEvent, KeyResponse, ShortcutAction, ShortcutMap};
pub use model::{
    DesignEllipse, DesignGroup, DesignImage, DesignPolyline, DesignRectangle, DesignText,
    DesignerShape, DrawingObject, Point, Shape, ShapeId, ShapeProperty, ShapeType, StageSize,
};
pub use resize::{rescale_shapes, validate_stage_size, CanvasPreset, ResizePolicy, CANVAS_PRESETS};
pub use selection_manager::SelectionManager;
pub use serialization::CanvasFile;
pub use transform::{DragResult, TransformResult};

// State and integration
pub use designer_state::DesignerState;
