use egui::Pos2;
use image::{Rgba, RgbaImage};
use snap_annotate::{CanvasEditor, DrawingMode};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const SKY: Rgba<u8> = Rgba([40, 120, 200, 255]);

fn editor_with_background(width: u32, height: u32) -> CanvasEditor {
    let mut editor = CanvasEditor::new();
    editor.load_background(RgbaImage::from_pixel(width, height, SKY));
    editor
}

fn red_pixels(editor: &CanvasEditor) -> Vec<(u32, u32)> {
    editor
        .raster()
        .pixels()
        .enumerate_pixels()
        .filter(|(_, _, p)| **p == RED)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn test_rectangle_gesture_on_100x80_background() {
    let mut editor = editor_with_background(100, 80);
    editor.toggle_mode();
    assert_eq!(editor.mode(), DrawingMode::Rectangle);

    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(50.0, 40.0));
    editor.pointer_up(Pos2::new(50.0, 40.0));

    let raster = editor.raster();
    assert_eq!((raster.width(), raster.height()), (100, 80));
    // Outline on all four sides
    assert_eq!(raster.pixel(10, 25), Some(RED));
    assert_eq!(raster.pixel(50, 25), Some(RED));
    assert_eq!(raster.pixel(30, 10), Some(RED));
    assert_eq!(raster.pixel(30, 40), Some(RED));
    // Background inside and outside
    assert_eq!(raster.pixel(30, 25), Some(SKY));
    assert_eq!(raster.pixel(80, 70), Some(SKY));
    assert_eq!(raster.pixel(2, 2), Some(SKY));
}

#[test]
fn test_rectangle_previews_leave_no_trace() {
    let mut direct = editor_with_background(100, 80);
    direct.toggle_mode();
    direct.pointer_down(Pos2::new(10.0, 10.0));
    direct.pointer_up(Pos2::new(50.0, 40.0));

    let mut dragged = editor_with_background(100, 80);
    dragged.toggle_mode();
    dragged.pointer_down(Pos2::new(10.0, 10.0));
    for (x, y) in [(90.0, 70.0), (20.0, 60.0), (5.0, 5.0), (50.0, 40.0)] {
        dragged.pointer_move(Pos2::new(x, y));
    }
    dragged.pointer_up(Pos2::new(50.0, 40.0));

    assert_eq!(direct.raster().pixels(), dragged.raster().pixels());
}

#[test]
fn test_rectangle_may_extend_up_and_left() {
    let mut editor = editor_with_background(60, 60);
    editor.toggle_mode();
    editor.pointer_down(Pos2::new(40.0, 40.0));
    editor.pointer_up(Pos2::new(10.0, 20.0));

    assert_eq!(editor.raster().pixel(10, 30), Some(RED));
    assert_eq!(editor.raster().pixel(25, 20), Some(RED));
    assert_eq!(editor.raster().pixel(25, 30), Some(SKY));
}

#[test]
fn test_click_without_drag_leaves_single_dot() {
    let mut editor = editor_with_background(20, 20);
    assert_eq!(editor.mode(), DrawingMode::Line);

    editor.pointer_down(Pos2::new(5.0, 5.0));
    editor.pointer_move(Pos2::new(5.0, 5.0));
    editor.pointer_up(Pos2::new(5.0, 5.0));

    let red = red_pixels(&editor);
    assert!(red.contains(&(5, 5)));
    // A round dot of diameter 5: everything stays within a small radius.
    for (x, y) in &red {
        let dx = *x as f32 + 0.5 - 5.0;
        let dy = *y as f32 + 0.5 - 5.0;
        assert!((dx * dx + dy * dy).sqrt() <= 2.5);
    }
    assert!(red.len() < 25);
}

#[test]
fn test_line_segments_are_committed_as_they_are_drawn() {
    let mut editor = editor_with_background(100, 40);
    editor.pointer_down(Pos2::new(10.0, 20.0));
    editor.pointer_move(Pos2::new(40.0, 20.0));
    let after_first = red_pixels(&editor);
    editor.pointer_move(Pos2::new(80.0, 20.0));
    editor.pointer_up(Pos2::new(80.0, 20.0));

    let after_all = red_pixels(&editor);
    assert!(after_first.iter().all(|p| after_all.contains(p)));
    for x in 10..80 {
        assert_eq!(editor.raster().pixel(x, 20), Some(RED), "gap at x={x}");
    }
}

#[test]
fn test_clear_removes_strokes_but_not_later_ones() {
    let mut editor = editor_with_background(50, 50);
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(20.0, 10.0));
    editor.pointer_up(Pos2::new(20.0, 10.0));

    editor.clear();
    assert!(red_pixels(&editor).is_empty());

    editor.pointer_down(Pos2::new(30.0, 30.0));
    editor.pointer_up(Pos2::new(30.0, 30.0));
    assert_eq!(editor.raster().pixel(30, 30), Some(RED));
    assert_eq!(editor.raster().pixel(15, 10), Some(SKY));
}

#[test]
fn test_clear_without_drawing_is_visual_noop() {
    let mut editor = editor_with_background(30, 30);
    let before = editor.raster().pixels().clone();
    editor.clear();
    assert_eq!(editor.raster().pixels(), &before);
}

#[test]
fn test_mode_toggle_is_involution() {
    let mut editor = editor_with_background(10, 10);
    let before = editor.raster().pixels().clone();
    let mode = editor.mode();

    editor.toggle_mode();
    editor.toggle_mode();

    assert_eq!(editor.mode(), mode);
    assert_eq!(editor.raster().pixels(), &before);
}

#[test]
fn test_pointer_events_before_load_are_ignored() {
    let mut editor = CanvasEditor::new();
    editor.pointer_down(Pos2::new(5.0, 5.0));
    editor.pointer_move(Pos2::new(8.0, 8.0));
    editor.pointer_up(Pos2::new(8.0, 8.0));
    assert!(!editor.is_drawing());
    assert_eq!(editor.raster().width(), 0);

    editor.load_background(RgbaImage::from_pixel(10, 10, SKY));
    assert!(red_pixels(&editor).is_empty());
}
