use std::borrow::Cow;
use std::sync::Arc;

use image::RgbaImage;
use parking_lot::Mutex;

use crate::error::{EditorError, EditorResult};

/// One typed entry read from the system clipboard
#[derive(Debug, Clone)]
pub enum ClipboardItem {
    Text(String),
    /// Encoded image bytes tagged with their media type (e.g. `image/png`)
    Encoded { mime: String, bytes: Vec<u8> },
    /// Already decoded RGBA pixels, as the OS clipboard hands them out
    Bitmap {
        width: usize,
        height: usize,
        rgba: Vec<u8>,
    },
}

impl ClipboardItem {
    pub fn media_type(&self) -> &str {
        match self {
            Self::Text(_) => "text/plain",
            Self::Encoded { mime, .. } => mime,
            Self::Bitmap { .. } => "image/png",
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type().starts_with("image/")
    }

    /// Decodes the item into an RGBA raster. Non-image items are rejected.
    pub fn decode(self) -> EditorResult<RgbaImage> {
        match self {
            Self::Encoded { bytes, .. } => Ok(image::load_from_memory(&bytes)?.to_rgba8()),
            Self::Bitmap { width, height, rgba } => {
                let len = rgba.len();
                RgbaImage::from_raw(width as u32, height as u32, rgba)
                    .ok_or(EditorError::InvalidBitmap { width, height, len })
            }
            Self::Text(_) => Err(EditorError::NotAnImage("text/plain".to_owned())),
        }
    }
}

/// Picks the first image entry. Later entries are ignored even if they are images too.
pub fn first_image(items: Vec<ClipboardItem>) -> Option<ClipboardItem> {
    items.into_iter().find(ClipboardItem::is_image)
}

/// Where pastes are read from and copies are written to
pub trait ClipboardBackend: Send + Sync {
    /// Every entry currently on the clipboard; empty when there is nothing
    fn read_items(&self) -> Vec<ClipboardItem>;

    fn write_image(&self, image: &RgbaImage) -> EditorResult<()>;
}

pub type SharedClipboard = Arc<dyn ClipboardBackend>;

/// Shared handle to the OS clipboard.
///
/// On X11 and Wayland the clipboard contents are served by the process that
/// set them, so the handle is kept alive for the whole session and shared
/// with worker threads.
#[derive(Clone)]
pub struct SystemClipboard {
    inner: Arc<Mutex<arboard::Clipboard>>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl SystemClipboard {
    pub fn new() -> EditorResult<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(arboard::Clipboard::new()?)),
        })
    }

    /// Reads whatever the clipboard currently offers, image entries first.
    ///
    /// Missing content is not an error: an empty clipboard yields no items.
    pub fn read_items(&self) -> Vec<ClipboardItem> {
        let mut clipboard = self.inner.lock();
        let mut items = Vec::new();

        match clipboard.get_image() {
            Ok(data) => items.push(ClipboardItem::Bitmap {
                width: data.width,
                height: data.height,
                rgba: data.bytes.into_owned(),
            }),
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(err) => log::debug!("Clipboard has no readable image: {}", err),
        }

        match clipboard.get_text() {
            Ok(text) => items.push(ClipboardItem::Text(text)),
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(err) => log::debug!("Clipboard has no readable text: {}", err),
        }

        items
    }

    /// Places an RGBA image on the clipboard
    pub fn write_image(&self, image: &RgbaImage) -> EditorResult<()> {
        let data = arboard::ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: Cow::Borrowed(image.as_raw()),
        };
        self.inner.lock().set_image(data)?;
        Ok(())
    }
}

impl ClipboardBackend for SystemClipboard {
    fn read_items(&self) -> Vec<ClipboardItem> {
        SystemClipboard::read_items(self)
    }

    fn write_image(&self, image: &RgbaImage) -> EditorResult<()> {
        SystemClipboard::write_image(self, image)
    }
}
