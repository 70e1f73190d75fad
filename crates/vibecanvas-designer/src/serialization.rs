//! Serialization and deserialization for canvas files.
//!
//! A canvas file is a JSON document
//! `{ version, stageSize: {width, height}, shapes: [...], timestamp }`.
//! Shapes are tagged with `kind` and use camelCase fields. Images embed their
//! pixels as a `data:` URL in `sourceRef`, so files are self-contained.
//!
//! Files written by older releases tag shapes with `tool`, store polyline
//! points as a flat `[x0, y0, x1, y1, ...]` array and keep image data in
//! `src`. Those shapes are converted while loading.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vibecanvas_core::constants::FILE_FORMAT_VERSION;
use vibecanvas_core::FileError;

use crate::model::{DrawingObject, StageSize};
use crate::resize::validate_stage_size;

/// Complete canvas file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasFile {
    pub version: String,
    /// Absent in some older files; the current stage is kept then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_size: Option<StageSize>,
    pub shapes: Vec<DrawingObject>,
    pub timestamp: DateTime<Utc>,
}

impl CanvasFile {
    /// Create a canvas file stamped with the current time.
    pub fn new(stage_size: StageSize, shapes: Vec<DrawingObject>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            stage_size: Some(stage_size),
            shapes,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a canvas document.
    ///
    /// The `shapes` array must be present. Each entry is decoded on its own
    /// so a bad shape is reported with its index. Loaded shapes are
    /// normalized (stroke width floor, finite rotation).
    pub fn from_json(json: &str) -> Result<Self, FileError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(root) = root else {
            return Err(invalid_format("document is not a JSON object"));
        };

        let Some(Value::Array(entries)) = root.get("shapes") else {
            return Err(invalid_format("missing or malformed 'shapes' array"));
        };

        let version = match root.get("version") {
            Some(Value::String(v)) => v.clone(),
            _ => FILE_FORMAT_VERSION.to_string(),
        };
        if version != FILE_FORMAT_VERSION {
            tracing::warn!("Canvas file version {} (expected {})", version, FILE_FORMAT_VERSION);
        }

        let stage_size = match root.get("stageSize") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let size: StageSize = serde_json::from_value(value.clone())
                    .map_err(|e| invalid_format(format!("malformed 'stageSize': {}", e)))?;
                validate_stage_size(size).map_err(|e| invalid_format(e.to_string()))?;
                Some(size)
            }
        };

        let timestamp = root
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        let mut shapes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let mut shape = parse_shape(entry).map_err(|reason| FileError::InvalidShape { index, reason })?;
            shape.normalize();
            shapes.push(shape);
        }

        Ok(Self {
            version,
            stage_size,
            shapes,
            timestamp,
        })
    }

    /// Save canvas to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize canvas")?;

        std::fs::write(path.as_ref(), json).context("Failed to write canvas file")?;

        Ok(())
    }

    /// Load canvas from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read canvas file")?;

        let file = Self::from_json(&content).context("Failed to parse canvas file")?;

        Ok(file)
    }
}

fn invalid_format(reason: impl Into<String>) -> FileError {
    FileError::InvalidFormat {
        reason: reason.into(),
    }
}

/// Decodes one shape, converting the legacy `tool` form first.
fn parse_shape(value: &Value) -> Result<DrawingObject, String> {
    let Value::Object(map) = value else {
        return Err("shape is not a JSON object".to_string());
    };
    let value = if map.contains_key("kind") {
        value.clone()
    } else if map.contains_key("tool") {
        Value::Object(convert_legacy(map)?)
    } else {
        return Err("shape has neither 'kind' nor 'tool'".to_string());
    };
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Rewrites a legacy `tool`-tagged shape into the current field layout.
fn convert_legacy(legacy: &Map<String, Value>) -> Result<Map<String, Value>, String> {
    let mut map = legacy.clone();
    let tool = match map.remove("tool") {
        Some(Value::String(tool)) => tool,
        _ => return Err("'tool' is not a string".to_string()),
    };

    // Older ids were numeric.
    match map.get("id") {
        Some(Value::String(_)) => {}
        Some(Value::Number(n)) => {
            let id = n.to_string();
            map.insert("id".into(), Value::String(id));
        }
        _ => {
            map.insert("id".into(), Value::String(crate::model::ShapeId::new().to_string()));
        }
    }

    let kind = match tool.as_str() {
        "rectangle" => "rectangle",
        "ellipse" => "ellipse",
        "line" | "pencil" => {
            let points = flat_points(map.get("points"))?;
            map.insert("points".into(), points);
            map.insert("smoothed".into(), Value::Bool(tool == "pencil"));
            for key in ["tension", "lineCap", "lineJoin"] {
                map.remove(key);
            }
            "polyline"
        }
        "text" => "textLabel",
        "image" => {
            let src = map.remove("src").unwrap_or(Value::String(String::new()));
            map.insert("sourceRef".into(), src);
            map.remove("image");
            "image"
        }
        "group" => {
            let children = match map.get("children") {
                Some(Value::Array(children)) => children
                    .iter()
                    .map(|child| match child {
                        Value::Object(child) if child.contains_key("tool") => {
                            convert_legacy(child).map(Value::Object)
                        }
                        other => Ok(other.clone()),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                _ => Vec::new(),
            };
            map.insert("children".into(), Value::Array(children));
            "group"
        }
        other => return Err(format!("unknown legacy tool '{}'", other)),
    };
    map.insert("kind".into(), Value::String(kind.to_string()));
    Ok(map)
}

/// `[x0, y0, x1, y1, ...]` to `[{x, y}, ...]`.
fn flat_points(points: Option<&Value>) -> Result<Value, String> {
    let Some(Value::Array(coords)) = points else {
        return Err("missing 'points' array".to_string());
    };
    if coords.len() % 2 != 0 {
        return Err(format!("odd number of point coordinates ({})", coords.len()));
    }
    let mut out = Vec::with_capacity(coords.len() / 2);
    for pair in coords.chunks(2) {
        let (Some(x), Some(y)) = (pair[0].as_f64(), pair[1].as_f64()) else {
            return Err("non-numeric point coordinate".to_string());
        };
        let mut point = Map::new();
        point.insert("x".into(), Value::from(x));
        point.insert("y".into(), Value::from(y));
        out.push(Value::Object(point));
    }
    Ok(Value::Array(out))
}
