use egui::{Context, Pos2, Rect};

use crate::editor::CanvasEditor;

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while over the canvas
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
    /// Pointer left the canvas (or the window)
    PointerLeave { last_known_position: Pos2 },
}

impl InputEvent {
    /// Forwards the event to the matching editor handler
    pub fn apply(self, editor: &mut CanvasEditor) {
        match self {
            Self::PointerDown { position } => editor.pointer_down(position),
            Self::PointerMove { position } => editor.pointer_move(position),
            Self::PointerUp { position } => editor.pointer_up(position),
            Self::PointerLeave {
                last_known_position,
            } => editor.pointer_leave(last_known_position),
        }
    }
}

/// Maps a screen position into the canvas whose top-left currently sits at `canvas_rect.min`
pub fn to_canvas(screen: Pos2, canvas_rect: Rect) -> Pos2 {
    (screen - canvas_rect.min).to_pos2()
}

/// Raw pointer state sampled from egui for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    pub hover: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn read(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover: input.pointer.hover_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer state into canvas [`InputEvent`]s.
///
/// The canvas rectangle is passed in every frame because the canvas lives in
/// a scroll area and its screen position changes.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last pointer position seen inside the canvas, in canvas coordinates
    last_inside: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples egui's pointer. `pointer_over` is the canvas response's
    /// `contains_pointer()`: false when the pointer is scrolled out of view or
    /// sits on a window above the canvas, which counts as outside.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect, pointer_over: bool) -> Vec<InputEvent> {
        let mut sample = PointerSample::read(ctx);
        if !pointer_over {
            sample.hover = None;
        }
        self.process_sample(sample, canvas_rect)
    }

    pub fn process_sample(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = sample
            .hover
            .filter(|pos| canvas_rect.contains(*pos))
            .map(|pos| to_canvas(pos, canvas_rect));

        match (self.last_inside, inside) {
            (Some(last), None) => {
                events.push(InputEvent::PointerLeave {
                    last_known_position: sample
                        .hover
                        .map_or(last, |pos| to_canvas(pos, canvas_rect)),
                });
            }
            (last, Some(position)) if last != Some(position) => {
                events.push(InputEvent::PointerMove { position });
            }
            _ => {}
        }

        if let Some(position) = inside {
            if sample.pressed {
                events.push(InputEvent::PointerDown { position });
            }
            if sample.released {
                events.push(InputEvent::PointerUp { position });
            }
        }

        self.last_inside = inside;
        events
    }
}
