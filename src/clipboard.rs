//! System clipboard access
//!
//! On Linux the clipboard only holds text while its owner is alive. Copied
//! text is therefore handed to a detached keeper process (another `pnassist`
//! started with `PNASSIST_CLIPBOARD_KEEPER` set), which owns the selection until
//! some other program replaces it.

use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

use arboard::Clipboard;
use log::debug;
#[cfg(target_os = "linux")]
use log::warn;

use crate::constants::CLIPBOARD_KEEPER_ENV;
use crate::errors::{Result, clipboard_error, no_locations_on_clipboard_error};
use crate::intake::parse_locations;
use crate::location::Location;

/// Source and sink of clipboard text
///
/// The session talks to the clipboard through this trait so that commands can
/// run without a display server.
pub trait TextClipboard {
    fn read_text(&mut self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The clipboard of the desktop session
pub struct SystemClipboard {
    inner: Clipboard,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    keeper: Option<PathBuf>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(SystemClipboard {
            inner: Clipboard::new()?,
            keeper: None,
        })
    }

    /// Starts `program` as keeper of every text written to the clipboard
    pub fn with_keeper(mut self, program: PathBuf) -> Self {
        self.keeper = Some(program);
        self
    }
}

impl TextClipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        self.inner
            .get_text()
            .map_err(|e| clipboard_error(e, "read"))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| clipboard_error(e, "write"))?;
        debug!("Copied {} bytes to the clipboard", text.len());

        #[cfg(target_os = "linux")]
        {
            let kept = match self.keeper.as_deref() {
                Some(program) => linux::spawn_keeper(program, text)
                    .map_err(|e| warn!("Cannot start clipboard keeper: {e}"))
                    .is_ok(),
                None => false,
            };
            if !kept {
                warn!("The copied text is lost on exit unless a clipboard manager is running");
            }
        }

        Ok(())
    }
}

/// Whether this process was started to keep text on the clipboard
pub fn is_clipboard_keeper() -> bool {
    env::var_os(CLIPBOARD_KEEPER_ENV).is_some()
}

/// Puts the text read from stdin on the clipboard
///
/// On Linux this blocks until another program takes over the clipboard.
///
/// # Errors
/// Returns `Clipboard` if stdin cannot be read or the clipboard is unavailable
pub fn keep_clipboard_text() -> Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| clipboard_error(e, "receive"))?;

    let mut clipboard = Clipboard::new()?;
    hold_text(&mut clipboard, text)
}

#[cfg(target_os = "linux")]
fn hold_text(clipboard: &mut Clipboard, text: String) -> Result<()> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(|e| clipboard_error(e, "keep"))
}

#[cfg(not(target_os = "linux"))]
fn hold_text(clipboard: &mut Clipboard, text: String) -> Result<()> {
    clipboard
        .set_text(text)
        .map_err(|e| clipboard_error(e, "write"))
}

#[cfg(target_os = "linux")]
mod linux {
    use std::io::Write;
    use std::os::unix::process::CommandExt;
    use std::path::Path;
    use std::process::{Command, Stdio};

    use log::debug;

    use crate::constants::CLIPBOARD_KEEPER_ENV;
    use crate::errors::{Result, clipboard_error, file_operation_error};

    /// Starts `program` in its own process group and pipes `text` to it
    pub(super) fn spawn_keeper(program: &Path, text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .env(CLIPBOARD_KEEPER_ENV, "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .map_err(|e| file_operation_error(e, program.to_path_buf(), "start"))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| clipboard_error(e, "hand over"))?;
        }

        debug!("Clipboard keeper running as process {}", child.id());
        Ok(())
    }
}

/// Clipboard held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        MemoryClipboard {
            text: Some(text.to_string()),
        }
    }
}

impl TextClipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String> {
        self.text
            .clone()
            .ok_or_else(|| clipboard_error("no text available", "read"))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Reads the file-system locations that are on the clipboard
///
/// # Errors
/// Returns `NoLocationsOnClipboard` if the clipboard holds no text or none of
/// its lines is a location.
pub fn clipboard_locations(clipboard: &mut dyn TextClipboard) -> Result<Vec<Location>> {
    let text = match clipboard.read_text() {
        Ok(text) => text,
        Err(e) => {
            debug!("Clipboard has no text: {e}");
            return Err(no_locations_on_clipboard_error());
        }
    };

    let locations = parse_locations(&text);
    if locations.is_empty() {
        return Err(no_locations_on_clipboard_error());
    }
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::default();
        assert!(clipboard.read_text().is_err());

        clipboard.write_text("hello").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "hello");
    }

    #[test]
    fn test_clipboard_locations_empty_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        let result = clipboard_locations(&mut clipboard);
        assert!(matches!(result, Err(Error::NoLocationsOnClipboard)));
    }

    #[test]
    fn test_clipboard_locations_blank_text() {
        let mut clipboard = MemoryClipboard::with_text("\n  \n");
        let result = clipboard_locations(&mut clipboard);
        assert!(matches!(result, Err(Error::NoLocationsOnClipboard)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_keeper_receives_text_on_stdin() {
        // `cat` drains its stdin and exits, like a keeper that was replaced
        let result = linux::spawn_keeper(std::path::Path::new("cat"), "/tmp/a\n/tmp/b");
        assert!(result.is_ok(), "Keeper should start: {result:?}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_missing_keeper_program_is_reported() {
        let result = linux::spawn_keeper(
            std::path::Path::new("/nonexistent/pnassist-keeper"),
            "text",
        );
        assert!(matches!(result, Err(Error::FileOperation { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_locations_found() {
        let mut clipboard = MemoryClipboard::with_text("/tmp/a\nfile:///tmp/b\n");
        let locations = clipboard_locations(&mut clipboard).unwrap();

        assert_eq!(
            locations,
            vec![Location::new("/tmp/a"), Location::new("/tmp/b")]
        );
    }
}
