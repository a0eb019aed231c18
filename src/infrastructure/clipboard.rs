use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
    #[error("Clipboard disabled in config")]
    Disabled,
}

/// Destination for text copied out of the form.
pub trait Clipboard: std::fmt::Debug {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened lazily on first use so the application
/// still starts on headless terminals.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                tracing::warn!(error = %e, "Failed to open system clipboard");
                ClipboardError::Unavailable(e.to_string())
            })?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialised".to_string())),
        }
    }
}

/// Stand-in used when copying is turned off in the config.
#[derive(Debug, Default)]
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn set_text(&mut self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}

/// In-memory clipboard that records everything written to it.
///
/// Clones share the same buffer, so a handle kept outside the application
/// sees what the application copied.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<String> {
        self.contents.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.contents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.borrow().is_empty()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.contents.borrow_mut().push(text);
        Ok(())
    }
}
