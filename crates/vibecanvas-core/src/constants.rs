//! Shared constants for the canvas.

/// Persisted canvas file schema version.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Default stage size.
pub const DEFAULT_STAGE_WIDTH: f64 = 800.0;
pub const DEFAULT_STAGE_HEIGHT: f64 = 600.0;

/// Accepted stage dimension range, inclusive, on each axis.
pub const MIN_STAGE_DIMENSION: f64 = 50.0;
pub const MAX_STAGE_DIMENSION: f64 = 3000.0;

/// Default stroke for new shapes.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Text label defaults.
pub const TEXT_PLACEHOLDER: &str = "Double-click to edit";
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const MIN_FONT_SIZE: f64 = 8.0;

/// Smallest width/height a transform may bake into a sized shape.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

/// Pasted images are fitted into this fraction of the stage.
pub const PASTE_FIT_RATIO: f64 = 0.8;

/// Hit-test tolerance in stage pixels.
pub const HIT_TOLERANCE: f64 = 3.0;
