use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::clipboard::SystemClipboard;
use crate::error::{EditorError, EditorResult};

/// Logs the remaining seconds, sleeping one second between lines
pub fn countdown(seconds: u64) {
    countdown_with(seconds, Duration::from_secs(1), |remaining| {
        log::info!("Time remaining: {} seconds", remaining);
    });
}

fn countdown_with(seconds: u64, tick: Duration, mut on_tick: impl FnMut(u64)) {
    if seconds == 0 {
        return;
    }
    for remaining in (1..=seconds).rev() {
        on_tick(remaining);
        std::thread::sleep(tick);
    }
    log::info!("Countdown finished");
}

/// Builds the platform screenshot command writing to `output`
pub fn capture_command(output: &Path) -> EditorResult<Command> {
    capture_command_for(std::env::consts::OS, output)
}

fn capture_command_for(os: &str, output: &Path) -> EditorResult<Command> {
    let command = match os {
        "macos" => {
            let mut cmd = Command::new("screencapture");
            cmd.arg("-x").arg(output);
            cmd
        }
        // Requires scrot to be installed
        "linux" => {
            let mut cmd = Command::new("scrot");
            cmd.arg("--overwrite").arg(output);
            cmd
        }
        "windows" => {
            let script = format!(
                "Add-Type -AssemblyName System.Windows.Forms; \
                 Add-Type -AssemblyName System.Drawing; \
                 $b = [System.Windows.Forms.Screen]::PrimaryScreen.Bounds; \
                 $bitmap = New-Object System.Drawing.Bitmap($b.Width, $b.Height); \
                 $g = [System.Drawing.Graphics]::FromImage($bitmap); \
                 $g.CopyFromScreen(0, 0, 0, 0, $bitmap.Size); \
                 $bitmap.Save('{}');",
                output.display()
            );
            let mut cmd = Command::new("powershell");
            cmd.arg("-command").arg(script);
            cmd
        }
        other => {
            return Err(EditorError::Capture(format!(
                "unsupported operating system: {other}"
            )));
        }
    };
    Ok(command)
}

/// Takes a screenshot of the primary screen and saves it to `output`
pub fn capture_screen(output: &Path) -> EditorResult<()> {
    let mut command = capture_command(output)?;
    let status = command
        .status()
        .map_err(|err| EditorError::Capture(format!("{:?}: {}", command.get_program(), err)))?;
    if !status.success() {
        return Err(EditorError::Capture(format!(
            "{:?} exited with {}",
            command.get_program(),
            status
        )));
    }
    log::info!("Image captured as {}", output.display());
    Ok(())
}

/// Loads the image at `path` and places it on the system clipboard
pub fn copy_file_to_clipboard(path: &Path, clipboard: &SystemClipboard) -> EditorResult<()> {
    let image = image::open(path)?.to_rgba8();
    clipboard.write_image(&image)?;
    log::info!("Screenshot copied to clipboard");
    Ok(())
}
