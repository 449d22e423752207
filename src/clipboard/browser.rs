use anyhow::{Result, anyhow};
use async_trait::async_trait;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use super::{Clipboard, CopyOutcome, ScratchCopy, ScratchSurface};

const SCRATCH_STYLE: &str = "position: fixed; top: 0; left: -9999px; opacity: 0;";

/// Uses `navigator.clipboard.writeText` when the page exposes it, the
/// textarea + `execCommand("copy")` route otherwise.
pub fn detect() -> Box<dyn Clipboard> {
    match async_clipboard() {
        Some(cb) => Box::new(AsyncClipboard(cb)),
        None => Box::new(ScratchCopy::new(DomScratch)),
    }
}

/// The async clipboard API is missing on plain-http origins other than
/// localhost, which is the usual case on a LAN.
fn async_clipboard() -> Option<web_sys::Clipboard> {
    let navigator = web_sys::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
    if !write_text.is_function() {
        return None;
    }
    Some(clipboard.unchecked_into())
}

struct AsyncClipboard(web_sys::Clipboard);

#[async_trait(?Send)]
impl Clipboard for AsyncClipboard {
    async fn copy_text(&self, text: &str) -> Result<CopyOutcome> {
        JsFuture::from(self.0.write_text(text))
            .await
            .map_err(|e| anyhow!("writeText rejected: {e:?}"))?;
        Ok(CopyOutcome::Copied)
    }
}

struct DomScratch;

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

impl ScratchSurface for DomScratch {
    type Node = HtmlTextAreaElement;

    fn mount(&self, text: &str) -> Result<HtmlTextAreaElement> {
        let document = document()?;
        let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| anyhow!("created element is not a textarea"))?;
        area.set_value(text);
        area.set_attribute("readonly", "").map_err(js_err)?;
        area.set_attribute("aria-hidden", "true").map_err(js_err)?;
        area.set_attribute("style", SCRATCH_STYLE).map_err(js_err)?;
        body.append_child(&area).map_err(js_err)?;
        // attached from here on; focus can only fail on detached nodes
        let _ = area.focus();
        area.select();
        Ok(area)
    }

    fn copy_selection(&self, _node: &HtmlTextAreaElement) -> Result<bool> {
        let document: HtmlDocument = document()?
            .dyn_into()
            .map_err(|_| anyhow!("not an HTML document"))?;
        document.exec_command("copy").map_err(js_err)
    }

    fn unmount(&self, node: &HtmlTextAreaElement) {
        node.remove();
    }
}
