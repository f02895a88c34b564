use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::editor::CanvasEditor;

/// GPU copy of the editor raster, re-uploaded only when the raster version changes
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    version: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the texture up to date and returns its id, `None` before the editor is ready
    pub fn sync(&mut self, ctx: &Context, editor: &CanvasEditor) -> Option<TextureId> {
        if !editor.is_ready() {
            return None;
        }
        if self.version != Some(editor.version()) {
            let image = editor.raster().to_color_image();
            match &mut self.handle {
                Some(handle) => handle.set(image, TextureOptions::NEAREST),
                None => {
                    self.handle = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
            self.version = Some(editor.version());
        }
        self.handle.as_ref().map(TextureHandle::id)
    }

    pub fn uploaded_version(&self) -> Option<u64> {
        self.version
    }
}
