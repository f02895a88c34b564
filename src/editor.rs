//! The canvas editor: background/overlay compositing and the pointer state machine.
//!
//! ```text
//!            pointer_down            pointer_up / pointer_leave
//!   ┌──────┐ ─────────────► ┌─────────┐ ─────────────────────► ┌──────┐
//!   │ Idle │                │ Drawing │                         │ Idle │
//!   └──────┘ ◄── (not ready: every pointer event ignored)       └──────┘
//!                           │    ▲
//!                           └────┘ pointer_move
//! ```
//!
//! Line mode commits every segment the moment it is drawn. Rectangle mode
//! repaints background+overlay before each outline so only the latest one
//! survives, and the outline drawn on release is the one that stays.

use egui::{Color32, Pos2};
use image::RgbaImage;

use crate::error::EditorResult;
use crate::mode::DrawingMode;
use crate::raster::Raster;

pub const LINE_WIDTH: f32 = 5.0;
pub const RECT_LINE_WIDTH: f32 = 2.0;
pub const STROKE_COLOR: Color32 = Color32::RED;

/// Identifies a paste request so a slow decode cannot replace a newer overlay
pub type PasteToken = u64;

#[derive(Debug)]
pub struct CanvasEditor {
    background: Option<RgbaImage>,
    overlay: Option<RgbaImage>,
    raster: Raster,
    mode: DrawingMode,
    drawing: bool,
    start: Pos2,
    /// Current point of the line-mode path, `None` between gestures
    pen: Option<Pos2>,
    next_paste_token: PasteToken,
    applied_paste_token: Option<PasteToken>,
    /// Bumped on every raster mutation
    version: u64,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasEditor {
    pub fn new() -> Self {
        Self {
            background: None,
            overlay: None,
            raster: Raster::new(0, 0),
            mode: DrawingMode::default(),
            drawing: false,
            start: Pos2::ZERO,
            pen: None,
            next_paste_token: 0,
            applied_paste_token: None,
            version: 0,
        }
    }

    /// Installs the background, sizes the canvas to it and paints it at the origin
    pub fn load_background(&mut self, background: RgbaImage) {
        log::info!(
            "Background loaded: {}x{}",
            background.width(),
            background.height()
        );
        self.raster = Raster::new(background.width(), background.height());
        self.raster.draw_image(&background);
        self.background = Some(background);
        self.drawing = false;
        self.pen = None;
        self.touch();
    }

    /// Pointer input is ignored until the background has been loaded
    pub fn is_ready(&self) -> bool {
        self.background.is_some()
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn mode_label(&self) -> String {
        self.mode.label()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::debug!("Drawing mode: {}", self.mode);
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn start_point(&self) -> Pos2 {
        self.start
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn overlay(&self) -> Option<&RgbaImage> {
        self.overlay.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Canvas size in pixels, `None` before the background is loaded
    pub fn size(&self) -> Option<[u32; 2]> {
        self.background
            .as_ref()
            .map(|_| [self.raster.width(), self.raster.height()])
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if !self.is_ready() {
            return;
        }
        self.drawing = true;
        self.start = pos;
        if self.mode == DrawingMode::Line {
            self.draw_step(pos);
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if !self.is_ready() || !self.drawing {
            return;
        }
        match self.mode {
            DrawingMode::Line => self.draw_step(pos),
            DrawingMode::Rectangle => self.draw_rectangle(self.start, pos),
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        self.finish_gesture(pos);
    }

    pub fn pointer_leave(&mut self, pos: Pos2) {
        self.finish_gesture(pos);
    }

    /// Discards every stroke and rectangle, keeping background and overlay
    pub fn clear(&mut self) {
        self.raster.clear();
        self.redraw();
    }

    /// Paints the background and then the overlay over the current raster
    pub fn redraw(&mut self) {
        if let Some(background) = &self.background {
            self.raster.draw_image(background);
        }
        if let Some(overlay) = &self.overlay {
            self.raster.draw_image(overlay);
        }
        self.touch();
    }

    /// Reserves the token for a new paste request
    pub fn begin_paste(&mut self) -> PasteToken {
        self.next_paste_token += 1;
        self.next_paste_token
    }

    /// Installs a decoded paste as the overlay and repaints.
    ///
    /// Returns `false` when a paste issued later has already been applied,
    /// in which case the image is dropped.
    pub fn apply_paste(&mut self, token: PasteToken, overlay: RgbaImage) -> bool {
        if self.applied_paste_token.is_some_and(|applied| applied > token) {
            log::debug!("Discarding stale paste #{}", token);
            return false;
        }
        log::info!(
            "Pasted overlay #{}: {}x{}",
            token,
            overlay.width(),
            overlay.height()
        );
        self.applied_paste_token = Some(token);
        self.overlay = Some(overlay);
        self.redraw();
        true
    }

    /// Encodes the current raster as PNG
    pub fn export_png(&self) -> EditorResult<Vec<u8>> {
        self.raster.encode_png()
    }

    fn finish_gesture(&mut self, pos: Pos2) {
        if !self.is_ready() {
            return;
        }
        if self.drawing && self.mode == DrawingMode::Rectangle {
            self.draw_rectangle(self.start, pos);
        }
        self.drawing = false;
        self.pen = None;
    }

    fn draw_step(&mut self, pos: Pos2) {
        let from = self.pen.unwrap_or(pos);
        self.raster
            .stroke_segment(from, pos, LINE_WIDTH, STROKE_COLOR);
        self.pen = Some(pos);
        self.touch();
    }

    fn draw_rectangle(&mut self, start: Pos2, end: Pos2) {
        self.redraw();
        self.raster
            .stroke_rect(start, end, RECT_LINE_WIDTH, STROKE_COLOR);
        self.touch();
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
