//! Desktop implementation of [`CanvasBridge`].
//!
//! File dialogs come from `rfd`, the clipboard from `arboard`. `arboard`
//! exchanges raw RGBA pixels, so images are converted to and from PNG with
//! `image` on the blocking pool.

use std::borrow::Cow;
use std::io::Cursor;
use std::path::PathBuf;

use async_trait::async_trait;
use vibecanvas_core::{ClipboardError, FileError, Result};
use vibecanvas_designer::bridge::{decode_image, CanvasBridge, LoadedFile};

/// Native file dialogs and system clipboard.
#[derive(Debug, Clone, Default)]
pub struct DesktopBridge;

impl DesktopBridge {
    pub fn new() -> Self {
        Self
    }
}

fn backend(e: impl std::fmt::Display) -> ClipboardError {
    ClipboardError::Backend {
        reason: e.to_string(),
    }
}

fn read_clipboard_png() -> std::result::Result<Option<Vec<u8>>, ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(backend)?;
    let data = match clipboard.get_image() {
        Ok(data) => data,
        Err(arboard::Error::ContentNotAvailable) => return Ok(None),
        Err(e) => return Err(backend(e)),
    };

    let rgba = image::RgbaImage::from_raw(
        data.width as u32,
        data.height as u32,
        data.bytes.into_owned(),
    )
    .ok_or_else(|| ClipboardError::Decode {
        reason: "clipboard image has an unexpected buffer size".to_string(),
    })?;

    let mut png = Cursor::new(Vec::new());
    rgba.write_to(&mut png, image::ImageFormat::Png)
        .map_err(|e| ClipboardError::Decode {
            reason: e.to_string(),
        })?;
    Ok(Some(png.into_inner()))
}

fn write_clipboard_png(png: &[u8]) -> std::result::Result<(), ClipboardError> {
    let rgba = decode_image(png)?;
    let (width, height) = rgba.dimensions();
    let data = arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Owned(rgba.into_raw()),
    };
    let mut clipboard = arboard::Clipboard::new().map_err(backend)?;
    clipboard.set_image(data).map_err(backend)
}

#[async_trait]
impl CanvasBridge for DesktopBridge {
    async fn load_canvas_file(&self) -> Result<Option<LoadedFile>> {
        let Some(handle) = rfd::AsyncFileDialog::new()
            .set_title("Open Canvas")
            .add_filter("Canvas", &["json"])
            .pick_file()
            .await
        else {
            return Ok(None);
        };

        let bytes = handle.read().await;
        let contents = String::from_utf8(bytes).map_err(|e| FileError::InvalidFormat {
            reason: e.to_string(),
        })?;
        Ok(Some(LoadedFile {
            path: Some(handle.path().to_path_buf()),
            contents,
        }))
    }

    async fn save_canvas_file(&self, json: String, suggested_name: &str) -> Result<Option<PathBuf>> {
        let Some(handle) = rfd::AsyncFileDialog::new()
            .set_title("Save Canvas")
            .set_file_name(suggested_name)
            .add_filter("Canvas", &["json"])
            .save_file()
            .await
        else {
            return Ok(None);
        };

        handle.write(json.as_bytes()).await?;
        Ok(Some(handle.path().to_path_buf()))
    }

    async fn write_image_to_clipboard(&self, png: Vec<u8>) -> Result<()> {
        tokio::task::spawn_blocking(move || write_clipboard_png(&png))
            .await
            .map_err(backend)??;
        Ok(())
    }

    async fn read_image_from_clipboard(&self) -> Result<Option<Vec<u8>>> {
        let png = tokio::task::spawn_blocking(read_clipboard_png)
            .await
            .map_err(backend)??;
        Ok(png)
    }
}
