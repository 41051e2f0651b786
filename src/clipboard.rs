// src/clipboard.rs
use gloo::console::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement, Navigator, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("no window")]
    NoWindow,
    #[error("no document body")]
    NoDocument,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy command not supported (clipboard permission?)")]
    Unsupported,
    #[error("dom error: {0}")]
    Dom(String),
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// `navigator.clipboard` is missing outside secure contexts, even though
// web-sys types the getter as always present.
pub fn has_async_clipboard() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let nav: Navigator = win.navigator();
    js_sys::Reflect::get(&nav, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// How a copy gets to the clipboard, decided synchronously inside the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyRoute {
    /// Hidden textarea + `execCommand`, run before the handler returns.
    Textarea,
    /// `navigator.clipboard.writeText`, awaited in a spawned future.
    AsyncApi,
}

impl CopyRoute {
    pub fn pick(has_async_api: bool) -> Self {
        if has_async_api {
            CopyRoute::AsyncApi
        } else {
            CopyRoute::Textarea
        }
    }
}

/// Writes `text` through the async Clipboard API.
///
/// If the browser refuses, retries with `execCommand("copy")`. That retry runs
/// after the rejected promise settles, so it is best-effort: Firefox and Safari
/// may already consider the click's user activation spent.
pub async fn write_text(text: &str) -> Result<(), CopyError> {
    let win = web_sys::window().ok_or(CopyError::NoWindow)?;
    match JsFuture::from(win.navigator().clipboard().write_text(text)).await {
        Ok(_) => Ok(()),
        Err(e) => {
            warn!(format!(
                "clipboard: writeText refused ({}), falling back to execCommand",
                describe(&e)
            ));
            copy_with_textarea(text)
        }
    }
}

/// Synchronous copy through a hidden `<textarea>`. Call it straight from the
/// click handler so the user activation is still live.
pub fn copy_with_textarea(text: &str) -> Result<(), CopyError> {
    let win: Window = web_sys::window().ok_or(CopyError::NoWindow)?;
    let doc = win.document().ok_or(CopyError::NoDocument)?;
    let body = doc.body().ok_or(CopyError::NoDocument)?;

    let area = doc
        .create_element("textarea")
        .map_err(|e| CopyError::Dom(describe(&e)))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| CopyError::Dom("created element is not a textarea".into()))?;
    area.set_value(text);
    let _ = area.set_attribute("readonly", "");
    let style = area.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("opacity", "0");

    body.append_child(&area)
        .map_err(|e| CopyError::Dom(describe(&e)))?;
    area.select();

    let result = match doc.dyn_ref::<HtmlDocument>() {
        Some(html_doc) => match html_doc.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(CopyError::Unsupported),
            Err(e) => Err(CopyError::Rejected(describe(&e))),
        },
        None => Err(CopyError::Unsupported),
    };

    let _ = body.remove_child(&area);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_as_log_lines() {
        assert_eq!(CopyError::NoWindow.to_string(), "no window");
        assert_eq!(
            CopyError::Rejected("NotAllowedError".into()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
        assert!(CopyError::Unsupported.to_string().contains("not supported"));
    }

    #[test]
    fn missing_async_api_copies_inside_the_click() {
        assert_eq!(CopyRoute::pick(false), CopyRoute::Textarea);
        assert_eq!(CopyRoute::pick(true), CopyRoute::AsyncApi);
    }
}
