use std::path::PathBuf;

use futures::channel::oneshot;
use image::RgbaImage;

use crate::clipboard::{self, ClipboardItem, SharedClipboard};
use crate::editor::PasteToken;
use crate::error::{EditorError, EditorResult};

/// Work running on a worker thread whose result is picked up by the UI thread.
///
/// The UI polls once per frame; the worker asks egui for a repaint when it
/// finishes so the result is noticed without waiting for input.
#[derive(Debug)]
pub struct Pending<T> {
    label: &'static str,
    receiver: oneshot::Receiver<EditorResult<T>>,
}

impl<T: Send + 'static> Pending<T> {
    pub fn spawn<F>(label: &'static str, repaint: Option<egui::Context>, job: F) -> Self
    where
        F: FnOnce() -> EditorResult<T> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let spawned = std::thread::Builder::new()
            .name(label.to_owned())
            .spawn(move || {
                let result = job();
                if sender.send(result).is_err() {
                    log::debug!("{} finished after its receiver was dropped", label);
                }
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });
        if let Err(err) = spawned {
            log::error!("Failed to spawn {} worker: {}", label, err);
        }
        Self { label, receiver }
    }
}

impl<T> Pending<T> {
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Non-blocking check; `None` while the worker is still running
    pub fn poll(&mut self) -> Option<EditorResult<T>> {
        match self.receiver.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(EditorError::Cancelled)),
        }
    }

    /// Blocks the calling thread until the worker is done
    pub fn wait(self) -> EditorResult<T> {
        futures::executor::block_on(self.receiver).unwrap_or(Err(EditorError::Cancelled))
    }
}

/// Reads and decodes the background image from `path`
pub fn load_background(path: PathBuf, repaint: Option<egui::Context>) -> Pending<RgbaImage> {
    Pending::spawn("background-load", repaint, move || {
        log::debug!("Loading background from {}", path.display());
        Ok(image::open(&path)?.to_rgba8())
    })
}

/// An in-flight paste, tagged with the token the editor issued for it
#[derive(Debug)]
pub struct PendingPaste {
    pub token: PasteToken,
    pub task: Pending<Option<RgbaImage>>,
}

/// Decodes the first image among `items`. Resolves to `None` when there is no image.
pub fn decode_paste(
    token: PasteToken,
    items: Vec<ClipboardItem>,
    repaint: Option<egui::Context>,
) -> PendingPaste {
    let task = Pending::spawn("paste-decode", repaint, move || {
        clipboard::first_image(items).map(ClipboardItem::decode).transpose()
    });
    PendingPaste { token, task }
}

/// Reads the system clipboard and decodes its first image entry
pub fn paste_from_clipboard(
    token: PasteToken,
    clipboard: SharedClipboard,
    repaint: Option<egui::Context>,
) -> PendingPaste {
    let task = Pending::spawn("paste-decode", repaint, move || {
        let items = clipboard.read_items();
        clipboard::first_image(items).map(ClipboardItem::decode).transpose()
    });
    PendingPaste { token, task }
}
