use std::path::PathBuf;

use image::RgbaImage;

use crate::clipboard::{ClipboardItem, SharedClipboard};
use crate::config::Config;
use crate::editor::CanvasEditor;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, toolbar_panel};
use crate::tasks::{self, Pending, PendingPaste};
use crate::texture::CanvasTexture;

pub struct AnnotateApp {
    editor: CanvasEditor,
    input: InputHandler,
    texture: CanvasTexture,
    clipboard: Option<SharedClipboard>,
    output_dir: PathBuf,
    /// Used to wake the UI when a worker finishes
    repaint: Option<egui::Context>,
    background_task: Option<Pending<RgbaImage>>,
    paste_tasks: Vec<PendingPaste>,
    copy_task: Option<Pending<()>>,
    show_copy_notice: bool,
    status: Option<String>,
}

impl AnnotateApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config, clipboard: Option<SharedClipboard>) -> Self {
        Self::with_repaint(Some(cc.egui_ctx.clone()), config, clipboard)
    }

    pub fn with_repaint(
        repaint: Option<egui::Context>,
        config: &Config,
        clipboard: Option<SharedClipboard>,
    ) -> Self {
        let background_task = tasks::load_background(config.image.clone(), repaint.clone());
        Self {
            editor: CanvasEditor::new(),
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
            clipboard,
            output_dir: config.output_dir.clone(),
            repaint,
            background_task: Some(background_task),
            paste_tasks: Vec::new(),
            copy_task: None,
            show_copy_notice: false,
            status: None,
        }
    }

    pub fn editor(&self) -> &CanvasEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CanvasEditor {
        &mut self.editor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.background_task.is_some()
    }

    pub fn has_pending_work(&self) -> bool {
        self.background_task.is_some() || !self.paste_tasks.is_empty() || self.copy_task.is_some()
    }

    pub fn copy_notice_visible(&self) -> bool {
        self.show_copy_notice
    }

    pub fn dismiss_copy_notice(&mut self) {
        self.show_copy_notice = false;
    }

    pub fn toggle_mode(&mut self) {
        self.editor.toggle_mode();
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    pub fn download(&mut self) {
        if !self.editor.is_ready() {
            return;
        }
        match export::download(&self.editor, &self.output_dir) {
            Ok(path) => self.status = Some(format!("Saved {}", path.display())),
            Err(err) => {
                log::error!("Failed to save image: {}", err);
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    pub fn copy_to_clipboard(&mut self) {
        if !self.editor.is_ready() {
            return;
        }
        if self.copy_task.is_some() {
            log::debug!("Copy already in progress, ignoring");
            return;
        }
        let Some(clipboard) = self.clipboard.clone() else {
            log::error!("Error copying image to clipboard: no system clipboard available");
            return;
        };
        self.copy_task = Some(export::copy_to_clipboard(
            &self.editor,
            clipboard,
            self.repaint.clone(),
        ));
    }

    /// Starts reading the system clipboard for an image to use as the overlay
    pub fn paste(&mut self) {
        let Some(clipboard) = self.clipboard.clone() else {
            log::warn!("Paste ignored: no system clipboard available");
            return;
        };
        let token = self.editor.begin_paste();
        self.paste_tasks
            .push(tasks::paste_from_clipboard(token, clipboard, self.repaint.clone()));
    }

    /// Starts decoding clipboard items that were obtained elsewhere
    pub fn paste_items(&mut self, items: Vec<ClipboardItem>) {
        let token = self.editor.begin_paste();
        self.paste_tasks
            .push(tasks::decode_paste(token, items, self.repaint.clone()));
    }

    /// Applies the results of any workers that have finished
    pub fn poll_tasks(&mut self) {
        if let Some(task) = &mut self.background_task {
            if let Some(result) = task.poll() {
                self.background_task = None;
                match result {
                    Ok(background) => self.editor.load_background(background),
                    Err(err) => {
                        log::error!("Failed to load background image: {}", err);
                        self.status = Some(format!("Could not load background: {err}"));
                    }
                }
            }
        }

        let mut still_pending = Vec::with_capacity(self.paste_tasks.len());
        for mut paste in self.paste_tasks.drain(..) {
            match paste.task.poll() {
                None => still_pending.push(paste),
                Some(Ok(Some(overlay))) => {
                    self.editor.apply_paste(paste.token, overlay);
                }
                Some(Ok(None)) => log::debug!("Paste #{} had no image content", paste.token),
                Some(Err(err)) => log::warn!("Paste #{} failed: {}", paste.token, err),
            }
        }
        self.paste_tasks = still_pending;

        if let Some(task) = &mut self.copy_task {
            if let Some(result) = task.poll() {
                self.copy_task = None;
                match result {
                    Ok(()) => {
                        log::info!("Image copied to clipboard");
                        self.show_copy_notice = true;
                    }
                    Err(err) => log::error!("Error copying image to clipboard: {}", err),
                }
            }
        }
    }

    pub(crate) fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
        pointer_over: bool,
    ) {
        for event in self.input.process_input(ctx, canvas_rect, pointer_over) {
            event.apply(&mut self.editor);
        }
    }

    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        self.texture.sync(ctx, &self.editor)
    }

    /// Ctrl/Cmd+V. egui-winit only reports it while the clipboard holds text,
    /// so the toolbar's Paste button is the way in for image-only clipboards.
    fn paste_requested(events: &[egui::Event]) -> bool {
        events.iter().any(|event| match event {
            egui::Event::Paste(_) => true,
            egui::Event::Key {
                key: egui::Key::V,
                pressed: true,
                modifiers,
                ..
            } => modifiers.command,
            _ => false,
        })
    }

    /// Runs one frame of the editor UI
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.poll_tasks();

        if ctx.input(|input| Self::paste_requested(&input.events)) {
            self.paste();
        }

        toolbar_panel(self, ctx);
        central_panel(self, ctx);
        self.copy_notice(ctx);
    }

    fn copy_notice(&mut self, ctx: &egui::Context) {
        if !self.show_copy_notice {
            return;
        }
        egui::Window::new("Copied")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Image copied to clipboard");
                if ui.button("OK").clicked() {
                    self.dismiss_copy_notice();
                }
            });
    }
}

impl eframe::App for AnnotateApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
