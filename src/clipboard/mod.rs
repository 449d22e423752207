//! Copy-on-click support.
//!
//! A [`Clipboard`] is picked at call time: the platform's clipboard API when
//! it exists, otherwise the scratch-element route ([`ScratchCopy`]) that
//! selects text in a throwaway element and runs the legacy copy command.

use anyhow::Result;
use async_trait::async_trait;
use dioxus::{logger::tracing::error, prelude::document};

use crate::config::{COPY_FAILED, COPY_SUCCEEDED};

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
mod native;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The copy command ran but reported that nothing was copied.
    Refused,
}

#[async_trait(?Send)]
pub trait Clipboard {
    async fn copy_text(&self, text: &str) -> Result<CopyOutcome>;
}

/// Host for the temporary element used by the legacy copy route.
pub trait ScratchSurface {
    type Node;

    /// Creates an invisible element holding `text`, attaches it and selects
    /// its contents. On error nothing may be left attached.
    fn mount(&self, text: &str) -> Result<Self::Node>;

    /// Runs the copy command against the current selection.
    fn copy_selection(&self, node: &Self::Node) -> Result<bool>;

    fn unmount(&self, node: &Self::Node);
}

/// Legacy copy route. Runs to completion without yielding and always
/// detaches its element, whatever the copy command does.
pub struct ScratchCopy<S> {
    surface: S,
}

struct Mounted<'a, S: ScratchSurface> {
    surface: &'a S,
    node: S::Node,
}

impl<S: ScratchSurface> Drop for Mounted<'_, S> {
    fn drop(&mut self) {
        self.surface.unmount(&self.node);
    }
}

impl<S: ScratchSurface> ScratchCopy<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn copy_now(&self, text: &str) -> Result<CopyOutcome> {
        let mounted = Mounted {
            surface: &self.surface,
            node: self.surface.mount(text)?,
        };
        let copied = self.surface.copy_selection(&mounted.node)?;
        Ok(if copied {
            CopyOutcome::Copied
        } else {
            CopyOutcome::Refused
        })
    }
}

#[async_trait(?Send)]
impl<S: ScratchSurface> Clipboard for ScratchCopy<S> {
    async fn copy_text(&self, text: &str) -> Result<CopyOutcome> {
        self.copy_now(text)
    }
}

/// Stand-in when the platform has no clipboard we can reach.
#[cfg(not(target_arch = "wasm32"))]
pub struct Unavailable(pub String);

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Clipboard for Unavailable {
    async fn copy_text(&self, _text: &str) -> Result<CopyOutcome> {
        anyhow::bail!("clipboard unavailable: {}", self.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn detect() -> Box<dyn Clipboard> {
    browser::detect()
}

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
pub fn detect() -> Box<dyn Clipboard> {
    native::detect()
}

#[cfg(any(target_os = "android", target_os = "ios"))]
pub fn detect() -> Box<dyn Clipboard> {
    Box::new(Unavailable("no clipboard backend on this platform".into()))
}

/// Logs failures and picks the alert text, if any, for a copy result.
/// Errors are never alerted.
pub fn report(result: Result<CopyOutcome>) -> Option<&'static str> {
    match result {
        Ok(CopyOutcome::Copied) => Some(COPY_SUCCEEDED),
        Ok(CopyOutcome::Refused) => Some(COPY_FAILED),
        Err(e) => {
            error!("Failed to copy message: {e:?}");
            None
        }
    }
}

/// Copies a message body and tells the user how it went.
pub async fn copy_message(text: &str) {
    let clipboard = detect();
    if let Some(notice) = report(clipboard.copy_text(text).await) {
        alert(notice);
    }
}

fn alert(text: &str) {
    let text = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("alert({text});"));
}
