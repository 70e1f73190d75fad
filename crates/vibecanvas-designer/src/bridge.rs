//! Asynchronous boundary to file dialogs and the system clipboard.
//!
//! The canvas never talks to the platform directly. A [`CanvasBridge`]
//! implementation supplies file contents and clipboard images; `Ok(None)`
//! means the user dismissed the dialog, which is not an error.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use image::RgbaImage;
use vibecanvas_core::{ClipboardError, Result};

use crate::model::{DrawingObject, Shape};

/// A canvas file chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: Option<PathBuf>,
    pub contents: String,
}

/// Platform services consumed by the canvas.
#[async_trait]
pub trait CanvasBridge: Send + Sync {
    /// Asks the user for a canvas file and reads it.
    async fn load_canvas_file(&self) -> Result<Option<LoadedFile>>;

    /// Asks the user where to save and writes `json` there.
    async fn save_canvas_file(&self, json: String, suggested_name: &str) -> Result<Option<PathBuf>>;

    /// Places a PNG image on the clipboard.
    async fn write_image_to_clipboard(&self, png: Vec<u8>) -> Result<()>;

    /// Returns the clipboard image as PNG bytes, or `None` when the
    /// clipboard holds no image.
    async fn read_image_from_clipboard(&self) -> Result<Option<Vec<u8>>>;
}

/// Encodes PNG bytes as a `data:image/png;base64,...` URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Decodes encoded image bytes (PNG, JPEG, ...) into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> std::result::Result<RgbaImage, ClipboardError> {
    let img = image::load_from_memory(bytes).map_err(|e| ClipboardError::Decode {
        reason: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Decodes a `data:` URL or plain base64 string into RGBA pixels.
pub fn decode_data_url(data: &str) -> std::result::Result<RgbaImage, ClipboardError> {
    let encoded = if data.starts_with("data:") {
        data.find(";base64,")
            .map(|pos| &data[pos + 8..])
            .ok_or_else(|| ClipboardError::Decode {
                reason: "Invalid data URL format".to_string(),
            })?
    } else {
        data
    };
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ClipboardError::Decode {
            reason: e.to_string(),
        })?;
    decode_image(&bytes)
}

/// Decodes every image's `sourceRef`, including images nested in groups.
///
/// All images decode concurrently on the blocking pool and results are
/// assigned back in document order. An image that fails to decode keeps no
/// bitmap and renders as a placeholder.
pub async fn hydrate_images(mut shapes: Vec<DrawingObject>) -> Vec<DrawingObject> {
    let mut sources = Vec::new();
    collect_sources(&shapes, &mut sources);
    if sources.is_empty() {
        return shapes;
    }

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| tokio::task::spawn_blocking(move || decode_data_url(&source)))
        .collect();

    let mut bitmaps = Vec::with_capacity(handles.len());
    for handle in handles {
        let bitmap = match handle.await {
            Ok(Ok(image)) => Some(Arc::new(image)),
            Ok(Err(e)) => {
                tracing::warn!("Image failed to decode, loading as placeholder: {}", e);
                None
            }
            Err(e) => {
                tracing::warn!("Image decode task failed: {}", e);
                None
            }
        };
        bitmaps.push(bitmap);
    }

    let mut bitmaps = bitmaps.into_iter();
    assign_bitmaps(&mut shapes, &mut bitmaps);
    tracing::debug!("Hydrated images");
    shapes
}

fn collect_sources(shapes: &[DrawingObject], out: &mut Vec<String>) {
    for obj in shapes {
        match &obj.shape {
            Shape::Image(img) => out.push(img.source_ref.clone()),
            Shape::Group(group) => collect_sources(&group.children, out),
            _ => {}
        }
    }
}

fn assign_bitmaps(
    shapes: &mut [DrawingObject],
    bitmaps: &mut impl Iterator<Item = Option<Arc<RgbaImage>>>,
) {
    for obj in shapes {
        match &mut obj.shape {
            Shape::Image(img) => img.bitmap = bitmaps.next().flatten(),
            Shape::Group(group) => assign_bitmaps(&mut group.children, bitmaps),
            _ => {}
        }
    }
}
