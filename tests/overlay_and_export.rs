use std::io::Cursor;

use egui::Pos2;
use image::{ImageFormat, Rgba, RgbaImage};
use snap_annotate::{CanvasEditor, ClipboardItem, clipboard, tasks};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OVERLAY: Rgba<u8> = Rgba([0, 200, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn editor() -> CanvasEditor {
    let mut editor = CanvasEditor::new();
    editor.load_background(RgbaImage::from_pixel(40, 30, BACKGROUND));
    editor
}

fn png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn paste(editor: &mut CanvasEditor, items: Vec<ClipboardItem>) {
    let token = editor.begin_paste();
    let pending = tasks::decode_paste(token, items, None);
    if let Some(overlay) = pending.task.wait().unwrap() {
        editor.apply_paste(pending.token, overlay);
    }
}

#[test]
fn test_pasted_image_is_composited_at_origin() {
    let mut editor = editor();
    paste(
        &mut editor,
        vec![ClipboardItem::Encoded {
            mime: "image/png".to_owned(),
            bytes: png(&RgbaImage::from_pixel(10, 10, OVERLAY)),
        }],
    );

    assert_eq!(editor.raster().pixel(0, 0), Some(OVERLAY));
    assert_eq!(editor.raster().pixel(9, 9), Some(OVERLAY));
    assert_eq!(editor.raster().pixel(10, 10), Some(BACKGROUND));
}

#[test]
fn test_non_image_paste_changes_nothing() {
    let mut editor = editor();
    editor.pointer_down(Pos2::new(20.0, 20.0));
    editor.pointer_up(Pos2::new(20.0, 20.0));
    let before = editor.raster().pixels().clone();

    paste(
        &mut editor,
        vec![
            ClipboardItem::Text("just words".to_owned()),
            ClipboardItem::Encoded {
                mime: "text/html".to_owned(),
                bytes: b"<p>hi</p>".to_vec(),
            },
        ],
    );

    assert!(editor.overlay().is_none());
    assert_eq!(editor.raster().pixels(), &before);
}

#[test]
fn test_only_first_image_is_used() {
    let mut editor = editor();
    let second = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 255, 255]));
    paste(
        &mut editor,
        vec![
            ClipboardItem::Encoded {
                mime: "image/png".to_owned(),
                bytes: png(&RgbaImage::from_pixel(5, 5, OVERLAY)),
            },
            ClipboardItem::Encoded {
                mime: "image/png".to_owned(),
                bytes: png(&second),
            },
        ],
    );
    assert_eq!(editor.raster().pixel(2, 2), Some(OVERLAY));
}

#[test]
fn test_new_paste_replaces_overlay() {
    let mut editor = editor();
    paste(
        &mut editor,
        vec![ClipboardItem::Bitmap {
            width: 2,
            height: 2,
            rgba: [0u8, 200, 0, 255].repeat(4),
        }],
    );
    paste(
        &mut editor,
        vec![ClipboardItem::Bitmap {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 255, 255],
        }],
    );
    assert_eq!(editor.overlay().unwrap().dimensions(), (1, 1));
}

#[test]
fn test_clear_restores_background_and_overlay() {
    let mut editor = editor();
    paste(
        &mut editor,
        vec![ClipboardItem::Encoded {
            mime: "image/png".to_owned(),
            bytes: png(&RgbaImage::from_pixel(10, 10, OVERLAY)),
        }],
    );
    let composed = editor.raster().pixels().clone();

    editor.toggle_mode();
    editor.pointer_down(Pos2::new(2.0, 2.0));
    editor.pointer_up(Pos2::new(30.0, 25.0));
    assert_eq!(editor.raster().pixel(30, 15), Some(RED));

    editor.clear();
    assert_eq!(editor.raster().pixels(), &composed);
}

#[test]
fn test_export_png_matches_raster() {
    let mut editor = editor();
    editor.pointer_down(Pos2::new(5.0, 5.0));
    editor.pointer_move(Pos2::new(30.0, 20.0));
    editor.pointer_up(Pos2::new(30.0, 20.0));

    let bytes = editor.export_png().unwrap();
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(&decoded, editor.raster().pixels());
}

#[test]
fn test_first_image_helper_ignores_leading_text() {
    let picked = clipboard::first_image(vec![
        ClipboardItem::Text("x".to_owned()),
        ClipboardItem::Bitmap {
            width: 1,
            height: 1,
            rgba: vec![1, 2, 3, 4],
        },
    ]);
    assert_eq!(picked.map(|item| item.media_type().to_owned()), Some("image/png".to_owned()));
}
