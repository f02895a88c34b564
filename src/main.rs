#![warn(clippy::all, rust_2018_idioms)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use snap_annotate::{AnnotateApp, Config, SharedClipboard, SystemClipboard, capture};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    let clipboard = match SystemClipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(err) => {
            log::warn!("System clipboard unavailable: {}", err);
            None
        }
    };

    if config.capture {
        capture::countdown(config.timer);
        if let Err(err) = capture::capture_screen(&config.image) {
            log::error!("Error taking screenshot: {}", err);
            return ExitCode::FAILURE;
        }
        if let Some(clipboard) = &clipboard {
            if let Err(err) = capture::copy_file_to_clipboard(&config.image, clipboard) {
                log::error!("Error copying screenshot to clipboard: {}", err);
            }
        }
    }

    if config.no_editor {
        return ExitCode::SUCCESS;
    }

    let clipboard = clipboard.map(|clipboard| Arc::new(clipboard) as SharedClipboard);

    log::info!("Opening editor for {}", config.image.display());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Snap Annotate")
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Snap Annotate",
        options,
        Box::new(move |cc| Ok(Box::new(AnnotateApp::new(cc, &config, clipboard)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Editor failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
