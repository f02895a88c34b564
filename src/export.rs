use std::fs;
use std::path::{Path, PathBuf};

use crate::clipboard::SharedClipboard;
use crate::editor::CanvasEditor;
use crate::error::EditorResult;
use crate::tasks::Pending;

pub const DOWNLOAD_FILE_NAME: &str = "edited_image.png";

/// Writes the canvas as PNG to `dir/edited_image.png`, replacing any previous export
pub fn download(editor: &CanvasEditor, dir: &Path) -> EditorResult<PathBuf> {
    let bytes = editor.export_png()?;
    fs::create_dir_all(dir)?;
    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, &bytes)?;
    log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Copies the canvas to the system clipboard on a worker thread
pub fn copy_to_clipboard(
    editor: &CanvasEditor,
    clipboard: SharedClipboard,
    repaint: Option<egui::Context>,
) -> Pending<()> {
    let pixels = editor.raster().pixels().clone();
    Pending::spawn("clipboard-copy", repaint, move || clipboard.write_image(&pixels))
}
