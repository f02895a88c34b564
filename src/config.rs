use std::path::PathBuf;

use clap::Parser;

/// Capture the screen and annotate it with lines and rectangles.
#[derive(Parser, Debug, Clone)]
#[command(name = "snap-annotate", version, about)]
pub struct Config {
    /// Background image to annotate. With --capture the screenshot is written here.
    #[arg(short, long, value_name = "PATH", default_value = "screenshot.png")]
    pub image: PathBuf,

    /// Take a screenshot before opening the editor
    #[arg(short, long)]
    pub capture: bool,

    /// Countdown in seconds before the screenshot is taken
    #[arg(short, long, default_value_t = 0, value_name = "SECS")]
    pub timer: u64,

    /// Only capture and copy to the clipboard; do not open the editor
    #[arg(long)]
    pub no_editor: bool,

    /// Directory where "Download" writes edited_image.png
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image: PathBuf::from("screenshot.png"),
            capture: false,
            timer: 0,
            no_editor: false,
            output_dir: PathBuf::from("."),
        }
    }
}
