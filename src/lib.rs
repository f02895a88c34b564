#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod capture;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod input;
pub mod mode;
pub mod panels;
pub mod raster;
pub mod tasks;
pub mod texture;

pub use app::AnnotateApp;
pub use clipboard::{ClipboardBackend, ClipboardItem, SharedClipboard, SystemClipboard};
pub use config::Config;
pub use editor::CanvasEditor;
pub use error::{EditorError, EditorResult};
pub use input::{InputEvent, InputHandler};
pub use mode::DrawingMode;
pub use raster::Raster;
