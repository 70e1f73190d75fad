//! File I/O operations (save, load, new) and clipboard flows for designer state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use vibecanvas_core::{ClipboardError, OperationOutcome};

use super::DesignerState;
use crate::bridge::{decode_image, hydrate_images, png_data_url, CanvasBridge};
use crate::serialization::CanvasFile;

impl DesignerState {
    /// Snapshot of the document in file form.
    pub fn to_canvas_file(&self) -> CanvasFile {
        CanvasFile::new(self.canvas.stage(), self.canvas.shapes().to_vec())
    }

    /// Save canvas to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.to_canvas_file().save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved canvas to {}", path.as_ref().display());

        Ok(())
    }

    /// Load canvas from file.
    ///
    /// Image bitmaps are not decoded here; see [`DesignerState::load_with`].
    /// On error the current document is left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = CanvasFile::load_from_file(&path)?;
        self.install_file(file, Some(path.as_ref().to_path_buf()));
        tracing::info!("Loaded canvas from {}", path.as_ref().display());
        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        let stage = self.canvas.stage();
        self.canvas.load_document(stage, Vec::new());
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = "Untitled".to_string();
        self.clear_history();
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.design_name)
        } else {
            &self.design_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    fn install_file(&mut self, file: CanvasFile, path: Option<PathBuf>) {
        let stage = file.stage_size.unwrap_or_else(|| self.canvas.stage());
        self.canvas.load_document(stage, file.shapes);
        self.clear_history();
        if let Some(name) = path
            .as_deref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
        {
            self.design_name = name.to_string();
        }
        self.current_file_path = path;
        self.is_modified = false;
    }

    /// Saves through the bridge's file dialog.
    pub async fn save_with(&mut self, bridge: &dyn CanvasBridge) -> OperationOutcome {
        let json = match self.to_canvas_file().to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize canvas: {}", e);
                return OperationOutcome::error(e.to_string());
            }
        };
        let suggested = format!("{}.json", self.design_name);

        match bridge.save_canvas_file(json, &suggested).await {
            Ok(Some(path)) => {
                tracing::info!("Saved canvas to {}", path.display());
                let message = format!("Canvas saved to {}", path.display());
                self.current_file_path = Some(path);
                self.is_modified = false;
                OperationOutcome::success(message)
            }
            Ok(None) => OperationOutcome::cancelled(),
            Err(e) => {
                tracing::error!("Failed to save canvas: {}", e);
                OperationOutcome::error(e.to_string())
            }
        }
    }

    /// Loads through the bridge's file dialog.
    ///
    /// The file is validated and its images decoded before anything is
    /// installed, so a bad file leaves the document and history untouched.
    pub async fn load_with(&mut self, bridge: &dyn CanvasBridge) -> OperationOutcome {
        let loaded = match bridge.load_canvas_file().await {
            Ok(Some(loaded)) => loaded,
            Ok(None) => return OperationOutcome::cancelled(),
            Err(e) => {
                tracing::error!("Failed to load canvas: {}", e);
                return OperationOutcome::error(e.to_string());
            }
        };

        let mut file = match CanvasFile::from_json(&loaded.contents) {
            Ok(file) => file,
            Err(e) => {
                tracing::error!("Rejected canvas file: {}", e);
                return OperationOutcome::error(e.to_string());
            }
        };
        file.shapes = hydrate_images(std::mem::take(&mut file.shapes)).await;

        let count = file.shapes.len();
        self.install_file(file, loaded.path);
        tracing::info!("Loaded canvas with {} shapes", count);
        OperationOutcome::success("Canvas loaded successfully")
    }

    /// Pastes the clipboard image onto the canvas (Ctrl+V).
    pub async fn paste_from_clipboard(&mut self, bridge: &dyn CanvasBridge) -> OperationOutcome {
        let png = match bridge.read_image_from_clipboard().await {
            Ok(Some(png)) => png,
            Ok(None) => return OperationOutcome::info(ClipboardError::NoImage.to_string()),
            Err(e) => {
                tracing::error!("Failed to read clipboard: {}", e);
                return OperationOutcome::error(e.to_string());
            }
        };

        let source_ref = png_data_url(&png);
        let decoded = match tokio::task::spawn_blocking(move || decode_image(&png)).await {
            Ok(Ok(image)) => image,
            Ok(Err(e)) => {
                tracing::error!("Failed to decode clipboard image: {}", e);
                return OperationOutcome::error(e.to_string());
            }
            Err(e) => {
                tracing::error!("Clipboard decode task failed: {}", e);
                return OperationOutcome::error(e.to_string());
            }
        };

        let (width, height) = decoded.dimensions();
        let edit = self.canvas.insert_image(
            f64::from(width),
            f64::from(height),
            source_ref,
            Some(Arc::new(decoded)),
        );
        if self.commit_if(edit) {
            OperationOutcome::success("Image pasted from clipboard!")
        } else {
            OperationOutcome::error("Clipboard image is empty")
        }
    }

    /// Copies a rendered PNG of the canvas to the clipboard.
    pub async fn copy_to_clipboard(
        &self,
        bridge: &dyn CanvasBridge,
        png: Vec<u8>,
    ) -> OperationOutcome {
        match bridge.write_image_to_clipboard(png).await {
            Ok(()) => OperationOutcome::success("Canvas copied to clipboard!"),
            Err(e) => {
                tracing::error!("Failed to copy canvas to clipboard: {}", e);
                OperationOutcome::error(e.to_string())
            }
        }
    }
}
