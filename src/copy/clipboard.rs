//! Clipboard writer with a terminal fallback
//!
//! Primary path: the system clipboard through `arboard`, run on a blocking
//! task so the event loop never waits on it. When that fails (no display
//! server, permission denied, ...) the text is staged on an off-screen
//! surface and copied with the terminal's OSC 52 sequence instead.
//!
//! Both paths count as success for the caller. A failing fallback is logged
//! and nothing else.

use anyhow::{Context, Result};
use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use std::ops::Range;
use std::sync::{Arc, Mutex};

/// System clipboard backend
pub trait SystemClipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// Legacy copy command: copies whatever is selected on a staged surface
pub trait LegacyClipboard: Send + Sync {
    fn exec_copy(&self, surface: &CopySurface) -> Result<()>;
}

/// `arboard`-backed system clipboard
///
/// The clipboard is created fresh each time to avoid holding resources.
pub struct ArboardClipboard;

impl SystemClipboard for ArboardClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

/// Off-screen staging surface for the legacy copy path
///
/// Holds the text and a selection over it. Dropping the surface removes it,
/// so it is released whether or not the copy command succeeded.
pub struct CopySurface {
    text: String,
    selection: Range<usize>,
}

impl CopySurface {
    /// Stage `text` with nothing selected
    pub fn stage(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: 0..0,
        }
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    pub fn selected_text(&self) -> &str {
        self.text.get(self.selection.clone()).unwrap_or("")
    }
}

impl Drop for CopySurface {
    fn drop(&mut self) {
        tracing::trace!(bytes = self.text.len(), "Released copy surface");
    }
}

/// Copies through the terminal with an OSC 52 escape sequence
pub struct Osc52Clipboard<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Build the OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

impl<W: Write + Send> LegacyClipboard for Osc52Clipboard<W> {
    fn exec_copy(&self, surface: &CopySurface) -> Result<()> {
        let selected = surface.selected_text();
        if selected.is_empty() {
            anyhow::bail!("Nothing selected on copy surface");
        }
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow::anyhow!("Terminal writer lock poisoned"))?;
        out.write_all(osc52_sequence(selected).as_bytes())
            .context("Failed to write OSC 52 sequence")?;
        out.flush().context("Failed to flush terminal")?;
        Ok(())
    }
}

/// Which path a copy attempt took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    /// Legacy path ran; `copied` is false if it failed too (logged only)
    Fallback { copied: bool },
}

/// Best-effort clipboard writer
pub struct ClipboardWriter {
    primary: Arc<dyn SystemClipboard>,
    legacy: Option<Arc<dyn LegacyClipboard>>,
}

impl ClipboardWriter {
    pub fn new(
        primary: Arc<dyn SystemClipboard>,
        legacy: Option<Arc<dyn LegacyClipboard>>,
    ) -> Self {
        Self { primary, legacy }
    }

    /// System clipboard with the OSC 52 fallback on stdout
    pub fn system(legacy_fallback: bool) -> Self {
        let legacy: Option<Arc<dyn LegacyClipboard>> = if legacy_fallback {
            Some(Arc::new(Osc52Clipboard::new(std::io::stdout())))
        } else {
            None
        };
        Self::new(Arc::new(ArboardClipboard), legacy)
    }

    /// Write `text` to the clipboard
    ///
    /// The primary path writes the trimmed text; the fallback stages the text
    /// as given.
    pub async fn write(&self, text: &str) -> CopyPath {
        let primary = Arc::clone(&self.primary);
        let trimmed = text.trim().to_string();

        let error = match tokio::task::spawn_blocking(move || primary.set_text(&trimmed)).await {
            Ok(Ok(())) => {
                tracing::debug!("Copied text to system clipboard");
                return CopyPath::Primary;
            }
            Ok(Err(e)) => e,
            Err(e) => anyhow::Error::new(e).context("Clipboard task failed"),
        };

        tracing::warn!("Failed to copy text: {:#}", error);
        CopyPath::Fallback {
            copied: self.legacy_copy(text),
        }
    }

    fn legacy_copy(&self, text: &str) -> bool {
        let Some(legacy) = &self.legacy else {
            tracing::error!("Fallback copy failed: legacy clipboard disabled");
            return false;
        };

        let mut surface = CopySurface::stage(text);
        surface.select_all();
        let copied = match legacy.exec_copy(&surface) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Fallback copy failed: {:#}", e);
                false
            }
        };
        drop(surface);
        copied
    }
}
