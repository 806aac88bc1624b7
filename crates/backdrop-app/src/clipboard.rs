use backdrop_common::PlatformError;
use tracing::{info, warn};

/// System clipboard handle backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// Copy `text`, logging instead of failing when no clipboard is available.
pub fn copy_or_warn(text: &str) {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => info!("copied {} bytes of CSS to the clipboard", text.len()),
        Err(e) => warn!("clipboard unavailable, CSS not copied: {e}"),
    }
}
