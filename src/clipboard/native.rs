use std::cell::RefCell;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dioxus::logger::tracing::warn;

use super::{Clipboard, CopyOutcome, Unavailable};

thread_local! {
    // Kept open for the life of the UI thread: on X11 and Wayland the copied
    // text is only served while the handle is alive.
    static SYSTEM: RefCell<Option<arboard::Clipboard>> = const { RefCell::new(None) };
}

/// The desktop clipboard, through arboard.
pub struct SystemClipboard;

pub fn detect() -> Box<dyn Clipboard> {
    SYSTEM.with_borrow_mut(|slot| {
        if slot.is_none() {
            match arboard::Clipboard::new() {
                Ok(cb) => *slot = Some(cb),
                Err(e) => {
                    warn!("system clipboard unavailable: {e}");
                    return Box::new(Unavailable(e.to_string())) as Box<dyn Clipboard>;
                }
            }
        }
        Box::new(SystemClipboard)
    })
}

#[async_trait(?Send)]
impl Clipboard for SystemClipboard {
    async fn copy_text(&self, text: &str) -> Result<CopyOutcome> {
        SYSTEM.with_borrow_mut(|slot| {
            let cb = slot.as_mut().context("system clipboard is not open")?;
            cb.set_text(text.to_owned())
                .context("writing to the system clipboard")?;
            Ok(CopyOutcome::Copied)
        })
    }
}
